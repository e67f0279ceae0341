// ehm.rs — Error handling module
//
// Every failure in tabls is terminal.  Each variant carries enough context for
// main() to print one human-readable line to stderr before exiting non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;





/// Unified error type for tabls.
#[derive(Debug, Error)]
pub enum AppError {
    /// Target path missing, inaccessible, or not a directory
    #[error("ERROR: Failed to open directory: {} ({source})", .path.display())]
    DirectoryOpen {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// The directory opened but enumeration failed part way through
    #[error("ERROR: Failed to read directory: {} ({source})", .path.display())]
    DirectoryRead {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    /// Current working directory could not be resolved
    #[error("ERROR: Failed to get current working directory!")]
    WorkingDirectory(#[source] io::Error),

    /// LSCOLORS present but malformed
    #[error("ERROR: Failed trying to parse $LSCOLORS (expected at least {expected} characters, found {found})")]
    ConfigFormat { expected: usize, found: usize },

    /// Unknown switch or surplus argument (triggers usage display + exit 1)
    #[error("ERROR: unrecognized argument {0}")]
    InvalidArg(String),

    /// Resolved target path would exceed PATH_MAX
    #[error("ERROR: Path too long: {}", .0.display())]
    PathTooLong(PathBuf),

    /// Writing the listing to stdout failed
    #[error("ERROR: {0}")]
    Io(#[from] io::Error),
}
