// tests/cli_listing.rs — Integration test: run the built tabls binary
//
// Runs the executable against temporary directories and checks stdout,
// stderr, and exit status byte-for-byte, escape sequences included.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;





////////////////////////////////////////////////////////////////////////////////
//
//  run_tabls
//
//  Run tabls in `cwd` with `args`.  LSCOLORS is cleared unless given.
//
////////////////////////////////////////////////////////////////////////////////

fn run_tabls(cwd: &Path, args: &[&str], lscolors: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tabls"));
    cmd.current_dir(cwd).args(args).env_remove("LSCOLORS").env_remove("RUST_LOG");

    if let Some(value) = lscolors {
        cmd.env("LSCOLORS", value);
    }

    cmd.output().expect("Failed to run tabls")
}





////////////////////////////////////////////////////////////////////////////////
//
//  fixture
//
//  Directory holding b.txt, a.txt, and .hidden.
//
////////////////////////////////////////////////////////////////////////////////

fn fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.txt"), b"b").unwrap();
    fs::write(dir.path().join("a.txt"), b"a").unwrap();
    fs::write(dir.path().join(".hidden"), b"h").unwrap();
    dir
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}





#[test]
fn lists_current_directory() {
    let dir = fixture();
    let output = run_tabls(dir.path(), &[], None);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "a.txt\tb.txt\t\n");
}

#[test]
fn show_all_includes_dot_entries() {
    let dir = fixture();
    let output = run_tabls(dir.path(), &["-a"], None);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), ".\t..\t.hidden\ta.txt\tb.txt\t\n");
}

#[test]
fn reverse_is_mirror_of_forward() {
    let dir = fixture();
    fs::create_dir(dir.path().join("Zdir")).unwrap();
    fs::write(dir.path().join("_under"), b"").unwrap();

    let forward = stdout_of(&run_tabls(dir.path(), &["-a"], None));
    let reverse = stdout_of(&run_tabls(dir.path(), &["-a", "-r"], None));

    let mut forward: Vec<&str> = forward.trim_end_matches('\n').split_terminator('\t').collect();
    let reverse: Vec<&str> = reverse.trim_end_matches('\n').split_terminator('\t').collect();
    forward.reverse();
    assert_eq!(forward, reverse);
}

#[test]
fn relative_and_absolute_targets() {
    let parent = tempfile::tempdir().unwrap();
    let child = parent.path().join("child");
    fs::create_dir(&child).unwrap();
    fs::write(child.join("inside"), b"").unwrap();

    let relative = run_tabls(parent.path(), &["child"], None);
    assert_eq!(stdout_of(&relative), "inside\t\n");

    let absolute = run_tabls(Path::new("/"), &[child.to_str().unwrap()], None);
    assert_eq!(stdout_of(&absolute), "inside\t\n");
}

#[test]
fn repeated_runs_are_identical() {
    let dir = fixture();
    let first = run_tabls(dir.path(), &["-a"], Some("ExGxFxdxCxDxDxBx"));
    let second = run_tabls(dir.path(), &["-a"], Some("ExGxFxdxCxDxDxBx"));
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn lscolors_styles_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("plain"), b"").unwrap();

    let output = run_tabls(dir.path(), &[], Some("ExGxFxdxCxDxDxBx"));

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "plain\t\x1b[1;34msub\t\x1b[0m\n");
}

#[test]
fn short_lscolors_is_fatal() {
    let dir = fixture();
    let output = run_tabls(dir.path(), &[], Some("Exfx"));

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("LSCOLORS"));
}

#[test]
fn missing_directory_is_fatal() {
    let dir = fixture();
    let output = run_tabls(dir.path(), &["does-not-exist"], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("Failed to open directory"));
}

#[test]
fn unknown_switch_prints_usage_to_stderr() {
    let dir = fixture();
    let output = run_tabls(dir.path(), &["-z"], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = stderr_of(&output);
    assert!(stderr.contains("unrecognized argument -z"));
    assert!(stderr.contains("usage: tabls"));
}

#[test]
fn help_prints_usage_to_stdout() {
    let dir = fixture();
    let output = run_tabls(dir.path(), &["-h"], None);

    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("usage: tabls"));
    assert!(output.stderr.is_empty());
}
