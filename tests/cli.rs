use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vr(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vr").unwrap();
    cmd.env("HOME", home.path())
        .env("VR_CONFIG_DIR", home.path())
        .env_remove("VAULT_ADDR")
        .env_remove("VAULT_TOKEN")
        .env_remove("VAULT_NAMESPACE")
        .env_remove("VAULT_SKIP_VERIFY")
        .env_remove("VAULT_CLIENT_TIMEOUT");
    cmd
}

#[test]
fn read_without_path_is_usage_error() {
    let home = TempDir::new().unwrap();
    vr(&home)
        .arg("read")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("read expects one argument"))
        .stderr(predicate::str::contains("vr read [options] <path>"));
}

#[test]
fn read_with_two_paths_is_usage_error() {
    let home = TempDir::new().unwrap();
    vr(&home)
        .args(["read", "secret/a", "secret/b"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read expects one argument"));
}

#[test]
fn read_with_unknown_flag_fails() {
    let home = TempDir::new().unwrap();
    vr(&home)
        .args(["read", "-bogus=1", "secret/foo"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn read_with_invalid_address_is_init_error() {
    let home = TempDir::new().unwrap();
    vr(&home)
        .env("VAULT_ADDR", "not a url")
        .args(["read", "-field=bar", "/secret/foo"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error initializing client:"));
}

#[test]
fn read_with_malformed_config_is_init_error() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.toml"), "address = [").unwrap();
    vr(&home)
        .args(["read", "secret/foo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn read_from_unreachable_server_is_read_error() {
    let home = TempDir::new().unwrap();
    vr(&home)
        .env("VAULT_ADDR", "http://127.0.0.1:1")
        .env("VAULT_TOKEN", "s.test")
        .env("VAULT_CLIENT_TIMEOUT", "5")
        .args(["read", "/secret/foo"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error reading secret/foo:"));
}

#[test]
fn config_masks_token() {
    let home = TempDir::new().unwrap();
    vr(&home)
        .env("VAULT_ADDR", "http://vault.example:8200")
        .env("VAULT_TOKEN", "s.supersecret")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address: http://vault.example:8200"))
        .stdout(predicate::str::contains("Token: s.su****"))
        .stdout(predicate::str::contains("supersecret").not());
}

#[test]
fn completion_for_bash() {
    let home = TempDir::new().unwrap();
    vr(&home)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vr"));
}

#[test]
fn read_help_goes_to_stderr() {
    let home = TempDir::new().unwrap();
    vr(&home)
        .args(["read", "-h"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("vr read [options] <path>"));
}

#[test]
fn read_after_separator_takes_dash_path() {
    let home = TempDir::new().unwrap();
    vr(&home)
        .env("VAULT_ADDR", "http://127.0.0.1:1")
        .env("VAULT_TOKEN", "s.test")
        .env("VAULT_CLIENT_TIMEOUT", "5")
        .args(["read", "--", "-x"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error reading -x:"));
}
