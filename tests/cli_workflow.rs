use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn tscat(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tscat").unwrap();
    cmd.env("TSCAT_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("TSCAT_LOG")
        .current_dir(home);
    cmd
}

fn auth_catalog(home: &Path) {
    tscat(home).args(["add", "auth"]).assert().success();
    tscat(home)
        .args(["scope", "auth", "app.auth"])
        .assert()
        .success();
    tscat(home)
        .args(["entry", "auth", "login", "Log", "in"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"Added "app.auth.login" : "Log in""#));
}

#[test]
fn test_naked_run_lists_nothing() {
    let temp = TempDir::new().unwrap();
    tscat(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No scopes found."));
}

#[test]
fn test_add_entry_and_show_resource_json() {
    let temp = TempDir::new().unwrap();
    auth_catalog(temp.path());

    tscat(temp.path())
        .args(["show", "auth"])
        .assert()
        .success()
        .stdout("{\n  \"app.auth.login\" : \"Log in\",\n}\n");
}

#[test]
fn test_show_message_module() {
    let temp = TempDir::new().unwrap();
    auth_catalog(temp.path());

    tscat(temp.path())
        .args(["show", "auth", "--format", "messages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export const scope = 'app.auth'"))
        .stdout(predicate::str::contains(
            "  login: {\n    id: `${scope}.login`,\n    defaultMessage: 'Log in',\n  },\n",
        ));
}

#[test]
fn test_catalog_persists_between_runs() {
    let temp = TempDir::new().unwrap();
    auth_catalog(temp.path());

    assert!(temp.path().join("TranslationStrings.json").exists());
    tscat(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. auth"))
        .stdout(predicate::str::contains("1 string"));

    tscat(temp.path())
        .args(["view", "auth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"app.auth.login\" : \"Log in\""));
}

#[test]
fn test_duplicate_scope_is_rejected() {
    let temp = TempDir::new().unwrap();
    tscat(temp.path()).args(["add", "x"]).assert().success();
    tscat(temp.path())
        .args(["add", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scope name should be unique"));

    let saved = fs::read_to_string(temp.path().join("TranslationStrings.json")).unwrap();
    assert_eq!(saved.matches("\"scopeName\"").count(), 1);
}

#[test]
fn test_duplicate_entry_id_is_rejected() {
    let temp = TempDir::new().unwrap();
    auth_catalog(temp.path());

    tscat(temp.path())
        .args(["entry", "auth", "login", "Sign in"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Entered Id already exists. Id should be unique for each entry.",
        ));
}

#[test]
fn test_delete_missing_scope_is_noop() {
    let temp = TempDir::new().unwrap();
    tscat(temp.path())
        .args(["delete", "ghost", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No scope named 'ghost'."));
}

#[test]
fn test_delete_asks_for_confirmation() {
    let temp = TempDir::new().unwrap();
    auth_catalog(temp.path());

    tscat(temp.path())
        .args(["delete", "auth"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    tscat(temp.path())
        .args(["delete", "auth"])
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 'auth' scope successfully."));

    tscat(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No scopes found."));
}

#[test]
fn test_remove_entry() {
    let temp = TempDir::new().unwrap();
    auth_catalog(temp.path());

    tscat(temp.path())
        .args(["remove", "auth", "app.auth.login"])
        .assert()
        .success();
    tscat(temp.path())
        .args(["show", "auth"])
        .assert()
        .success()
        .stdout("{\n}\n");
}

#[test]
fn test_download_writes_into_dir() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();
    auth_catalog(temp.path());

    tscat(temp.path())
        .args(["download", "auth", "--dir"])
        .arg(&out)
        .assert()
        .success();
    let written = fs::read_to_string(out.join("en.json")).unwrap();
    assert!(written.contains(r#""app.auth.login" : "Log in","#));

    tscat(temp.path())
        .args(["download", "auth", "--format", "messages"])
        .assert()
        .success();
    assert!(temp.path().join("messages.js").exists());
}

#[test]
fn test_download_to_missing_dir_fails() {
    let temp = TempDir::new().unwrap();
    auth_catalog(temp.path());

    tscat(temp.path())
        .args(["download", "auth", "--dir"])
        .arg(temp.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_backup_and_restore() {
    let temp = TempDir::new().unwrap();
    auth_catalog(temp.path());
    let backup = temp.path().join("backup.json");

    tscat(temp.path())
        .arg("backup")
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("Backed up 1 scopes"));

    tscat(temp.path())
        .args(["delete", "auth", "--yes"])
        .assert()
        .success();
    tscat(temp.path())
        .arg("restore")
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 1 scopes"));

    tscat(temp.path())
        .args(["show", "auth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app.auth.login"));
}

#[test]
fn test_corrupt_slot_recovers_to_empty_catalog() {
    let temp = TempDir::new().unwrap();
    let slot = temp.path().join("TranslationStrings.json");
    fs::write(&slot, "{ not json").unwrap();

    tscat(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No scopes found."));
    assert!(!slot.exists());

    tscat(temp.path()).args(["add", "fresh"]).assert().success();
    assert!(fs::read_to_string(&slot).unwrap().contains("fresh"));
}

#[test]
fn test_config_slot_key_moves_catalog() {
    let temp = TempDir::new().unwrap();
    auth_catalog(temp.path());

    tscat(temp.path())
        .args(["config", "slot-key", "Catalog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slot-key set to Catalog"));
    assert!(!temp.path().join("TranslationStrings.json").exists());
    assert!(temp.path().join("Catalog.json").exists());

    tscat(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("slot-key = Catalog"));
    tscat(temp.path())
        .args(["show", "auth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app.auth.login"));
}

#[test]
fn test_slot_cut_inside_multibyte_char_recovers() {
    let temp = TempDir::new().unwrap();
    tscat(temp.path()).args(["add", "café"]).assert().success();

    let slot = temp.path().join("TranslationStrings.json");
    let bytes = fs::read(&slot).unwrap();
    let lead = bytes.iter().position(|&b| b == 0xC3).unwrap();
    fs::write(&slot, &bytes[..=lead]).unwrap();

    tscat(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No scopes found."));
    assert!(!slot.exists());
}

#[test]
fn test_config_slot_key_cannot_be_config() {
    let temp = TempDir::new().unwrap();
    auth_catalog(temp.path());

    tscat(temp.path())
        .args(["config", "slot-key", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slot key config is reserved"));
    assert!(temp.path().join("TranslationStrings.json").exists());

    tscat(temp.path())
        .args(["show", "auth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app.auth.login"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_copy_without_display_is_environment_error() {
    let temp = TempDir::new().unwrap();
    auth_catalog(temp.path());

    tscat(temp.path())
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .args(["copy", "auth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Environment error"));
}
