use assert_cmd::Command;
use predicates::str::contains;
use std::{fs, path::Path};
use tempfile::tempdir;

fn contact_book(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("STORAGE_CHOICE", "json").env("CONTACTS_FILE", file);
    cmd
}

#[test]
fn export_import() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    contact_book(&file)
        .args(["add", "--name", "Alice", "--phone", "08031234567", "--email", "alice@example.com"])
        .assert()
        .success();

    // Export to a temporary CSV file
    let out_path = dir.path().join("out.csv");

    contact_book(&file)
        .args(["export", "--des"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout(contains("Successfully exported 1 contacts"));

    let exported = fs::read_to_string(&out_path)?;
    assert!(exported.contains("Alice,08031234567,alice@example.com"));

    contact_book(&file)
        .args(["delete", "--name", "Alice"])
        .assert()
        .success();

    // Import from the exported CSV (importing back should succeed)
    contact_book(&file)
        .args(["import", "--src"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout(contains("Successfully imported 1 contacts (0 skipped)"));

    contact_book(&file)
        .args(["view", "--name", "Alice"])
        .assert()
        .success()
        .stdout(contains("Email: alice@example.com"));

    Ok(())
}

#[test]
fn import_skips_rows_without_phone() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");
    let src = dir.path().join("in.csv");
    fs::write(&src, "name,phone,email\nCarol,555-0199,\nDan,,dan@x.com\n")?;

    contact_book(&file)
        .args(["import", "--src"])
        .arg(&src)
        .assert()
        .success()
        .stdout(contains("Successfully imported 1 contacts (1 skipped)"));

    contact_book(&file)
        .args(["view", "--name", "Dan"])
        .assert()
        .failure();

    Ok(())
}

#[test]
fn export_to_directory_and_reject_non_csv() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    contact_book(&file)
        .args(["export", "--des"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("Successfully exported 0 contacts"));

    assert!(dir.path().join("exported.csv").exists());

    contact_book(&file)
        .args(["import", "--src"])
        .arg(dir.path().join("contacts.txt"))
        .assert()
        .failure()
        .stderr(contains("File must be a .csv file"));

    contact_book(&file)
        .args(["import", "--src"])
        .arg(dir.path().join("missing.csv"))
        .assert()
        .failure()
        .stderr(contains("CSV file Not found"));

    Ok(())
}

#[test]
fn import_accepts_rows_missing_the_email_field() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");
    let src = dir.path().join("in.csv");
    fs::write(&src, "name,phone,email\nCarol,555-0199,c@x.com\nDan,555-0100\n")?;

    contact_book(&file)
        .args(["import", "--src"])
        .arg(&src)
        .assert()
        .success()
        .stdout(contains("Successfully imported 2 contacts (0 skipped)"));

    contact_book(&file)
        .args(["view", "--name", "Dan"])
        .assert()
        .success()
        .stdout(contains("Email: —"));

    Ok(())
}
