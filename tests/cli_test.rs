use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn test_no_arguments_is_a_usage_error() {
    let mut cmd = Command::cargo_bin("pingwatch").unwrap();
    cmd.assert()
        .failure()
        .code(2)
        .stderr(contains("Usage"));
}

#[test]
fn test_invalid_timeout_is_rejected_before_probing() {
    let mut cmd = Command::cargo_bin("pingwatch").unwrap();
    cmd.args(["-t", "abc", "example.com"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("invalid value"));
}

#[test]
fn test_negative_interval_is_rejected() {
    let mut cmd = Command::cargo_bin("pingwatch").unwrap();
    cmd.args(["-i", "-5", "example.com"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_empty_target_is_rejected() {
    let mut cmd = Command::cargo_bin("pingwatch").unwrap();
    cmd.args(["--no-color", ""])
        .assert()
        .failure()
        .code(2)
        .stdout(contains("Error:"));
}

#[test]
fn test_help_lists_the_probe_flags() {
    let mut cmd = Command::cargo_bin("pingwatch").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("--hook"))
        .stdout(contains("--timeout"))
        .stdout(contains("--interval"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("pingwatch").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}
