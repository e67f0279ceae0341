// command_line.rs — CLI argument parsing and target resolution
//
// Short switches only: -a, -r, -h (combinable, e.g. -ar), plus an optional
// directory.  clap's own help/version handling is disabled so -h prints our
// usage text and unknown switches are reported by name.

use std::ffi::OsString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use tracing::debug;

use crate::ehm::AppError;

/// Linux PATH_MAX, including the terminating NUL
pub const PATH_MAX: usize = 4096;





// ── CommandLine struct ────────────────────────────────────────────────────────

/// Raw switches as given on the command line.
#[derive(Debug, Default, Parser)]
#[command(
    name = "tabls",
    disable_help_flag = true,
    disable_version_flag = true,
)]
pub struct CommandLine {
    /// Show all files (including 'hidden' ones)
    #[arg(short = 'a')]
    pub show_hidden: bool,

    /// Reverse the sorting of the list
    #[arg(short = 'r')]
    pub reverse: bool,

    /// Prints this help
    #[arg(short = 'h')]
    pub show_help: bool,

    /// Directory to list
    pub directory: Option<PathBuf>,
}

impl CommandLine {
    /// Parse command-line arguments into a CommandLine struct.
    /// Args SHOULD include argv[0] (program name).
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        CommandLine::try_parse_from(args).map_err(|e| AppError::InvalidArg(offending_argument(&e)))
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  offending_argument
//
//  Pull the argument clap choked on out of its error context.  Falls back
//  to clap's own message for error kinds that carry no argument.
//
////////////////////////////////////////////////////////////////////////////////

fn offending_argument(err: &clap::Error) -> String {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.clone(),
        Some(ContextValue::Strings(args)) if !args.is_empty() => args.join(" "),
        _ => match err.kind() {
            ErrorKind::UnknownArgument => String::from("(unknown)"),
            _ => err.render().to_string().trim().to_string(),
        },
    }
}





// ── ProgramOptions struct ─────────────────────────────────────────────────────

/// Fully resolved run settings.  Built once before scanning and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramOptions {
    pub target_directory: PathBuf,
    pub reverse_order:    bool,
    pub show_hidden:      bool,
    pub colorize:         bool,
}

impl ProgramOptions {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  resolve
    //
    //  Turn the parsed command line into ProgramOptions.  `current_dir` is
    //  only called when the target is missing or relative.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn resolve<F>(cmd: &CommandLine, colorize: bool, current_dir: F) -> Result<Self, AppError>
    where
        F: FnOnce() -> io::Result<PathBuf>,
    {
        let target_directory = resolve_target(cmd.directory.as_deref(), current_dir)?;

        debug!(target = %target_directory.display(), "target resolved");

        Ok(ProgramOptions {
            target_directory,
            reverse_order: cmd.reverse,
            show_hidden:   cmd.show_hidden,
            colorize,
        })
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  resolve_target
//
//  Absolute paths are used verbatim; relative ones are joined onto the
//  working directory.  A result that would not fit in PATH_MAX is rejected
//  rather than truncated.
//
////////////////////////////////////////////////////////////////////////////////

fn resolve_target<F>(arg: Option<&Path>, current_dir: F) -> Result<PathBuf, AppError>
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    let path = match arg {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => current_dir().map_err(AppError::WorkingDirectory)?.join(p),
        None    => current_dir().map_err(AppError::WorkingDirectory)?,
    };

    if path.as_os_str().as_bytes().len() >= PATH_MAX {
        return Err(AppError::PathTooLong(path));
    }

    Ok(path)
}





#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CommandLine, AppError> {
        CommandLine::parse_from_args(std::iter::once("tabls").chain(args.iter().copied()))
    }

    fn cwd() -> io::Result<PathBuf> {
        Ok(PathBuf::from("/home/user"))
    }

    fn no_cwd() -> io::Result<PathBuf> {
        Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
    }

    #[test]
    fn no_arguments() {
        let cmd = parse(&[]).unwrap();
        assert!(!cmd.show_hidden);
        assert!(!cmd.reverse);
        assert!(!cmd.show_help);
        assert_eq!(cmd.directory, None);
    }

    #[test]
    fn separate_and_combined_switches() {
        let cmd = parse(&["-a", "-r"]).unwrap();
        assert!(cmd.show_hidden && cmd.reverse);

        let cmd = parse(&["-ra"]).unwrap();
        assert!(cmd.show_hidden && cmd.reverse);
    }

    #[test]
    fn help_switch_is_ours() {
        let cmd = parse(&["-h"]).unwrap();
        assert!(cmd.show_help);
    }

    #[test]
    fn positional_directory() {
        let cmd = parse(&["-a", "some/dir"]).unwrap();
        assert_eq!(cmd.directory, Some(PathBuf::from("some/dir")));
    }

    #[test]
    fn unknown_switch_is_named() {
        match parse(&["-x"]) {
            Err(AppError::InvalidArg(arg)) => assert_eq!(arg, "-x"),
            other => panic!("expected InvalidArg, got {:?}", other),
        }

        match parse(&["--long"]) {
            Err(AppError::InvalidArg(arg)) => assert_eq!(arg, "--long"),
            other => panic!("expected InvalidArg, got {:?}", other),
        }
    }

    #[test]
    fn second_positional_is_rejected() {
        assert!(matches!(parse(&["one", "two"]), Err(AppError::InvalidArg(_))));
    }

    #[test]
    fn resolve_defaults_to_cwd() {
        let opts = ProgramOptions::resolve(&CommandLine::default(), false, cwd).unwrap();
        assert_eq!(opts.target_directory, PathBuf::from("/home/user"));
        assert!(!opts.colorize);
    }

    #[test]
    fn resolve_absolute_skips_cwd() {
        let cmd = parse(&["-r", "/etc"]).unwrap();
        let opts = ProgramOptions::resolve(&cmd, true, no_cwd).unwrap();
        assert_eq!(opts.target_directory, PathBuf::from("/etc"));
        assert!(opts.reverse_order);
        assert!(opts.colorize);
    }

    #[test]
    fn resolve_relative_joins_cwd() {
        let cmd = parse(&["src"]).unwrap();
        let opts = ProgramOptions::resolve(&cmd, false, cwd).unwrap();
        assert_eq!(opts.target_directory, PathBuf::from("/home/user/src"));
    }

    #[test]
    fn resolve_without_cwd_fails() {
        let err = ProgramOptions::resolve(&CommandLine::default(), false, no_cwd).unwrap_err();
        assert!(matches!(err, AppError::WorkingDirectory(_)));

        let cmd = parse(&["relative"]).unwrap();
        let err = ProgramOptions::resolve(&cmd, false, no_cwd).unwrap_err();
        assert!(matches!(err, AppError::WorkingDirectory(_)));
    }

    #[test]
    fn overlong_path_is_an_error() {
        let long = "d".repeat(PATH_MAX);
        let cmd = parse(&[long.as_str()]).unwrap();
        let err = ProgramOptions::resolve(&cmd, false, cwd).unwrap_err();
        assert!(matches!(err, AppError::PathTooLong(_)));

        let fits = "d".repeat(PATH_MAX - "/home/user/".len() - 1);
        let cmd = parse(&[fits.as_str()]).unwrap();
        assert!(ProgramOptions::resolve(&cmd, false, cwd).is_ok());
    }
}
