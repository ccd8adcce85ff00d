use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli(dir: &std::path::Path) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
    cmd.env("STORAGE_CHOICE", "file").env("STORAGE_DIR", dir);
    Ok(cmd)
}

#[test]
fn add_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    cli(dir.path())?
        .args(["add", "--name", "Ana", "--last-name", "Diaz", "--phone", "111"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully"));

    // Same person, different case and phone
    cli(dir.path())?
        .args(["add", "--name", "ANA", "--last-name", "diaz", "--phone", "222"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Duplicate(\"a contact with that name and last name already exists\")",
        ));

    let stored = std::fs::read_to_string(dir.path().join("contacts.json"))?;
    assert_eq!(stored, r#"[{"name":"Ana","lastName":"Diaz","phone":"111"}]"#);
    Ok(())
}

#[test]
fn invalid_inputs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    // INVALID COMMAND
    cli(dir.path())?
        .args(["and", "--name", "Ana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand 'and'"));

    // EMPTY FIELD
    cli(dir.path())?
        .args(["add", "--name", "", "--last-name", "Diaz", "--phone", "111"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Validation(\"all contact fields are required\")",
        ));

    // UNKNOWN STORAGE
    cli(dir.path())?
        .env("STORAGE_CHOICE", "cloud")
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a recognized storage medium"));

    assert!(!dir.path().join("contacts.json").exists());
    Ok(())
}
