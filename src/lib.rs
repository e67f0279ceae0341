// tabls — tab-separated directory listing
// Lists one directory on a single line, optionally colored via $LSCOLORS

pub mod ehm;
pub mod ansi_codes;
pub mod color;
pub mod color_table;
pub mod environment_provider;
pub mod logging;
pub mod command_line;
pub mod usage;
pub mod file_info;
pub mod directory_lister;
pub mod file_comparator;
pub mod output_buffer;
pub mod results_displayer;

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use color_table::{ColorTable, LSCOLORS_ENV_VAR_NAME};
use command_line::{CommandLine, ProgramOptions};
use directory_lister::{collect_entries, CollectOptions};
use ehm::AppError;
use environment_provider::{DefaultEnvironmentProvider, EnvironmentProvider};
use file_comparator::{sort_entries, SortDirection};
use results_displayer::assemble_listing;





////////////////////////////////////////////////////////////////////////////////
//
//  run
//
//  Main entry point for the library.  Called by main.rs with the real
//  process arguments, environment, and stdout.
//
////////////////////////////////////////////////////////////////////////////////

pub fn run() -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_with(std::env::args_os(), &DefaultEnvironmentProvider, std::env::current_dir, &mut out)
}





////////////////////////////////////////////////////////////////////////////////
//
//  run_with
//
//  One full listing pass: parse, resolve, scan, sort, color, assemble,
//  print.  Nothing reaches `out` unless every earlier step succeeded.
//
////////////////////////////////////////////////////////////////////////////////

pub fn run_with<I, T, F, W>(
    args: I,
    env: &dyn EnvironmentProvider,
    current_dir: F,
    out: &mut W,
) -> Result<(), AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce() -> io::Result<PathBuf>,
    W: Write,
{
    let cmd = CommandLine::parse_from_args(args)?;

    if cmd.show_help {
        usage::write_usage(out)?;
        return Ok(());
    }

    let colorize = env.get_env_var(LSCOLORS_ENV_VAR_NAME).is_some();
    let options = ProgramOptions::resolve(&cmd, colorize, current_dir)?;

    let mut entries = collect_entries(&options.target_directory, &CollectOptions::default())?;
    sort_entries(&mut entries, SortDirection::from_reverse(options.reverse_order));

    let colors = ColorTable::from_environment(env)?;

    let listing = assemble_listing(&entries, &options, &colors);
    listing.print_line(out)?;

    Ok(())
}
