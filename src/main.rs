// tabls — tab-separated directory listing
// Lists one directory on a single line, optionally colored via $LSCOLORS

use std::io;
use std::process;

use tabls::ehm::AppError;
use tabls::logging::init_logging;
use tabls::usage::write_usage;

fn main() {
    init_logging();

    if let Err(e) = tabls::run() {
        eprintln!("{}", e);

        if let AppError::InvalidArg(_) = e {
            let _ = write_usage(&mut io::stderr());
        }

        process::exit(1);
    }
}
