use assert_cmd::cargo::CommandCargoExt;
use std::ffi::OsString;
use std::process::{Command, Output};

fn print_args_path() -> OsString {
    Command::cargo_bin("print-args")
        .unwrap()
        .get_program()
        .to_owned()
}

fn relaunch(target: impl Into<OsString>, args: &[&str]) -> Output {
    Command::cargo_bin("relaunch")
        .unwrap()
        .env("RELAUNCH_TARGET", target.into())
        .args(args)
        .output()
        .unwrap()
}

fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[cfg(unix)]
#[test]
fn forwards_arguments_after_argument_zero() {
    let target = print_args_path();

    let output = relaunch(target.clone(), &["-c", "echo  \"hi\""]);

    assert!(output.status.success());
    let stdout = lines(&output.stdout);
    assert_eq!(
        vec![target.to_string_lossy().to_string(), "-c".to_string(), "echo  \"hi\"".to_string()],
        stdout[1..]
    );
}

#[cfg(unix)]
#[test]
fn no_arguments_forwards_only_target() {
    let target = print_args_path();

    let output = relaunch(target.clone(), &[]);

    assert!(output.status.success());
    let stdout = lines(&output.stdout);
    assert_eq!(vec![target.to_string_lossy().to_string()], stdout[1..]);
}

#[cfg(unix)]
#[test]
fn target_keeps_launcher_pid() {
    let output = relaunch(print_args_path(), &["x"]);

    let launcher_pid = lines(&output.stderr).into_iter().next().unwrap();
    let target_pid = lines(&output.stdout).into_iter().next().unwrap();
    assert_eq!(launcher_pid, target_pid);
}

#[test]
fn missing_target_exits_non_zero() {
    let output = relaunch("/nonexistent/cqsh-test/qsh", &["-c", "echo hi"]);

    assert_eq!(Some(127), output.status.code());
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn non_executable_target_exits_non_zero() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qsh");
    std::fs::write(&path, "#!/bin/sh\necho hi\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    let output = relaunch(path, &[]);

    assert_eq!(Some(126), output.status.code());
    assert!(output.stdout.is_empty());
}

#[cfg(all(unix, not(target_os = "aix")))]
#[test]
fn cqsh_without_qsh_fails_silently() {
    let output = Command::cargo_bin("cqsh")
        .unwrap()
        .env_remove("CQSH_LOG")
        .args(["-c", "echo hi"])
        .output()
        .unwrap();

    assert_eq!(Some(127), output.status.code());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[cfg(all(unix, not(target_os = "aix")))]
#[test]
fn cqsh_reports_failure_when_logging_enabled() {
    let output = Command::cargo_bin("cqsh")
        .unwrap()
        .env("CQSH_LOG", "error")
        .output()
        .unwrap();

    assert_eq!(Some(127), output.status.code());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unable to replace process"));
}
