//! CLIの統合テスト

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn heimdall() -> Command {
    let mut cmd = Command::cargo_bin("heimdall").unwrap();
    cmd.env_remove("HEIMDALL_WORK_DIR")
        .env_remove("HEIMDALL_LOG_DIR")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn test_help_lists_git_clone() {
    heimdall()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("git-clone"));
}

#[test]
fn test_git_clone_help_lists_flags() {
    heimdall()
        .args(["gc", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--include-hostname"))
        .stdout(predicate::str::contains("--keep-hostname-suffix"))
        .stdout(predicate::str::contains("--clone-group"));
}

#[test]
fn test_version_is_printed() {
    heimdall()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_url_is_rejected_before_cloning() {
    let temp_dir = TempDir::new().unwrap();

    heimdall()
        .args(["git-clone", "not-a-url"])
        .arg("--work-dir")
        .arg(temp_dir.path().join("work"))
        .arg("--log-dir")
        .arg(temp_dir.path().join("logs"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));

    assert!(!temp_dir.path().join("work").exists());
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    heimdall()
        .arg("--no-color")
        .arg("--config")
        .arg(temp_dir.path().join("absent.yml"))
        .args(["gc", "https://github.com/acme/api"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_unsupported_group_writes_log_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");

    heimdall()
        .arg("--no-color")
        .arg("--work-dir")
        .arg(temp_dir.path().join("work"))
        .arg("--log-dir")
        .arg(&log_dir)
        .args(["gc", "-g", "https://bitbucket.org/acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Log file written in"))
        .stdout(predicate::str::contains("Platform type not supported yet"))
        .stdout(predicate::str::contains("0 cloned, 0 failed"));

    let log = std::fs::read_to_string(log_dir.join("heimdall.log")).unwrap();
    assert!(log.contains("Log file written in"));
    assert!(log.contains("Platform type not supported yet"));
}

#[test]
fn test_no_color_env_disables_ansi_codes() {
    let temp_dir = TempDir::new().unwrap();

    heimdall()
        .env("NO_COLOR", "1")
        .arg("--work-dir")
        .arg(temp_dir.path().join("work"))
        .arg("--log-dir")
        .arg(temp_dir.path().join("logs"))
        .args(["gc", "-g", "https://bitbucket.org/acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Platform type not supported yet"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

/// Clones from a closed port: the clone fails but the target directory is created
fn clone_unreachable(cmd: &mut Command, temp_dir: &TempDir) {
    cmd.arg("--log-dir")
        .arg(temp_dir.path().join("logs"))
        .args(["gc", "http://127.0.0.1:1/acme/api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Git clone failed"));
}

fn write_config(temp_dir: &TempDir) -> std::path::PathBuf {
    let config = temp_dir.path().join("heimdall.yml");
    std::fs::write(
        &config,
        format!("work_dir: {}\n", temp_dir.path().join("from-config").display()),
    )
    .unwrap();
    config
}

#[test]
fn test_work_dir_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir);

    let mut cmd = heimdall();
    cmd.arg("--config").arg(&config);
    clone_unreachable(&mut cmd, &temp_dir);

    assert!(temp_dir.path().join("from-config").join("acme").is_dir());
}

#[test]
fn test_work_dir_env_wins_over_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir);

    let mut cmd = heimdall();
    cmd.env("HEIMDALL_WORK_DIR", temp_dir.path().join("from-env"))
        .arg("--config")
        .arg(&config);
    clone_unreachable(&mut cmd, &temp_dir);

    assert!(temp_dir.path().join("from-env").join("acme").is_dir());
    assert!(!temp_dir.path().join("from-config").exists());
}

#[test]
fn test_work_dir_flag_wins_over_env() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = heimdall();
    cmd.env("HEIMDALL_WORK_DIR", temp_dir.path().join("from-env"))
        .arg("--work-dir")
        .arg(temp_dir.path().join("from-flag"));
    clone_unreachable(&mut cmd, &temp_dir);

    assert!(temp_dir.path().join("from-flag").join("acme").is_dir());
    assert!(!temp_dir.path().join("from-env").exists());
}
