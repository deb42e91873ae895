use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".billionaires").join("config.json")
}

const BINARY_NAME: &str = "billionaires";

/// The binary with `$HOME` pointed at `home` and no API URL in the environment.
fn billionaires(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()).env_remove("BILLIONAIRES_API_URL");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Terminal dashboard for the billionaires dataset service"))
        .stdout(contains("age-groups"));
}

#[test]
fn config_show_defaults_to_local_service() {
    let tmp = temp_config_dir();
    billionaires(&tmp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("http://localhost:5000/api"));
}

#[test]
/// A stored URL is picked up, and the environment variable overrides it.
fn config_set_api_url_persists_and_env_var_wins() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    billionaires(&tmp)
        .args(["config", "set-api-url", "https://example.org/api/"])
        .assert()
        .success();
    assert!(config_path.exists());
    let stored = fs::read_to_string(&config_path).unwrap();
    assert!(stored.contains("https://example.org/api"));

    billionaires(&tmp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("https://example.org/api"));

    billionaires(&tmp)
        .args(["config", "show"])
        .env("BILLIONAIRES_API_URL", "http://10.0.0.1:5000/api")
        .assert()
        .success()
        .stdout(contains("http://10.0.0.1:5000/api"));
}

#[test]
fn config_set_api_url_rejects_non_http_values() {
    let tmp = temp_config_dir();
    billionaires(&tmp)
        .args(["config", "set-api-url", "example.org"])
        .assert()
        .failure()
        .stderr(contains("Invalid API URL"));
    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Reset command should delete an existing config file.
fn config_reset_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{"api_url":"http://x/api"}"#).unwrap();

    billionaires(&tmp)
        .args(["config", "reset"])
        .assert()
        .success();

    assert!(!config_path.exists());
}

#[test]
/// Nothing listens on port 1, so the report shows the panel's error placeholder.
fn report_against_unreachable_service_shows_error_placeholder() {
    let tmp = temp_config_dir();
    billionaires(&tmp)
        .args(["--api-url", "http://127.0.0.1:1/api", "stats"])
        .assert()
        .failure()
        .stdout(contains("Error loading statistics"));
}

#[test]
fn html_report_uses_error_markup() {
    let tmp = temp_config_dir();
    billionaires(&tmp)
        .args([
            "--api-url",
            "http://127.0.0.1:1/api",
            "--format",
            "html",
            "countries",
        ])
        .assert()
        .failure()
        .stdout(contains("<p class=\"error\">Error loading countries</p>"));
}

#[test]
fn list_rejects_unknown_self_made_value() {
    let tmp = temp_config_dir();
    billionaires(&tmp)
        .args(["list", "--self-made", "maybe"])
        .assert()
        .failure();
}

#[test]
fn list_offset_requires_limit() {
    let tmp = temp_config_dir();
    billionaires(&tmp)
        .args(["list", "--offset", "20"])
        .assert()
        .failure()
        .stderr(contains("--limit"));
}
