use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".zakat-dashboard").join("config.json")
}

const BINARY_NAME: &str = "zakat-dashboard";

// Nothing listens on the discard port, so connections are refused right away.
const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"))
        .stdout(contains("set-endpoint"));
}

#[test]
/// set-endpoint should persist the URL and refresh interval.
fn set_endpoint_writes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["set-endpoint", "--api-url", "http://10.0.0.2:5000", "--refresh-secs", "15"])
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Endpoint saved"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("http://10.0.0.2:5000"));
    assert!(contents.contains("15"));
}

#[test]
/// set-endpoint should refuse anything that is not an http(s) URL.
fn set_endpoint_rejects_invalid_url() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["set-endpoint", "--api-url", "ftp://example.com"])
        .env("HOME", tmp.path())
        .assert()
        .failure();

    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// clear-config should delete an existing config file.
fn clear_config_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("clear-config")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Clearing"));

    assert!(!config_path.exists());
}

#[test]
/// fetch should exit non-zero when the server cannot be reached.
fn fetch_fails_when_server_unreachable() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["fetch", "--api-url", UNREACHABLE_URL])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Error loading dashboard"));
}

#[test]
/// A zero refresh interval is rejected at argument parsing.
fn start_rejects_zero_refresh_interval() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless", "--refresh-secs", "0"])
        .assert()
        .failure();
}

#[test]
/// set-endpoint without --refresh-secs should keep the saved interval.
fn set_endpoint_keeps_saved_refresh_interval() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(
        &config_path,
        r#"{"api_url": "http://127.0.0.1:5000", "refresh_interval_secs": 45}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["set-endpoint", "--api-url", "http://10.0.0.3:5000"])
        .env("HOME", tmp.path())
        .assert()
        .success();

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("http://10.0.0.3:5000"));
    assert!(contents.contains("45"));
}
