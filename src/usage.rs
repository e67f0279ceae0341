// usage.rs — Help screen
//
// Printed to stdout for -h and to stderr after an argument error.

use std::io::{self, Write};





pub const USAGE_TEXT: &str = "\
usage: tabls [OPTIONS] or tabls <directory>
\t-a\tShow all files (including 'hidden' ones)
\t-h\tPrints this help
\t-r\tReverse the sorting of the list
";





////////////////////////////////////////////////////////////////////////////////
//
//  write_usage
//
//  Write the help screen to `out`.
//
////////////////////////////////////////////////////////////////////////////////

pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(USAGE_TEXT.as_bytes())?;
    out.flush()
}
