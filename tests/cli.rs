//! End-to-end tests for the `expenses` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSES_CONFIG_DIR", config_dir.path())
        .env_remove("EXPENSES_LOG");
    cmd
}

#[test]
fn list_shows_seed_records_and_total() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grocery Shopping"))
        .stdout(predicate::str::contains("Electric Bill"))
        .stdout(predicate::str::contains("$196.25"));
}

#[test]
fn list_filters_by_category() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["list", "--category", "bills"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Electric Bill"))
        .stdout(predicate::str::contains("Gas Station").not())
        .stdout(predicate::str::contains("$80.00"));
}

#[test]
fn list_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["list", "--category", "groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn totals_per_category() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("totals")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transportation"))
        .stdout(predicate::str::contains("$25.50"))
        .stdout(predicate::str::contains("Total: $196.25"));
}

#[test]
fn add_valid_expense() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["add", "Coffee", "4.5", "--category", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("$200.75"));
}

#[test]
fn add_invalid_expense_fails_with_field_errors() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["add", "", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title is required"))
        .stderr(predicate::str::contains("Please enter a valid amount"));
}

#[test]
fn add_rejects_extra_decimals_and_oversized_amounts() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["add", "Coffee", "1.999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use at most two decimal places"));

    expenses(&dir)
        .args(["add", "Big", "90000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount cannot exceed 1000000000.00"));
}

#[test]
fn add_does_not_persist() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .args(["add", "Coffee", "4.5"])
        .assert()
        .success();
    expenses(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee").not());
}

#[test]
fn palette_light_and_dark() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("palette")
        .assert()
        .success()
        .stdout(predicate::str::contains("Light palette"))
        .stdout(predicate::str::contains("swipeDelete"));
    expenses(&dir)
        .args(["palette", "--dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark palette"));
}

#[test]
fn config_init_writes_settings() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:   $"));
    assert!(!dir.path().join("config.json").exists());

    expenses(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote settings"));
    assert!(dir.path().join("config.json").exists());
}
