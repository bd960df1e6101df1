use assert_cmd::Command;
use chrono::{Duration, Local};
use predicates::prelude::*;
use rolodex::birthdays::adjust_for_weekend;
use std::fs;
use tempfile::TempDir;

fn rolodex(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rolodex").unwrap();
    cmd.env("ROLODEX_HOME", home.path()).env_remove("ROLODEX_LOG");
    cmd
}

fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

#[test]
fn contacts_survive_a_restart() {
    let home = TempDir::new().unwrap();

    rolodex(&home)
        .write_stdin(script(&[
            "add John 1234567890",
            "add Jane 0987654321 5555555555",
            "add-birthday John 01.01.2001",
            "exit",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact John added with phone 1234567890."))
        .stdout(predicate::str::contains("Birthday added for John."))
        .stdout(predicate::str::ends_with("Good bye!\n"));

    assert!(home.path().join("addressbook.json").exists());

    rolodex(&home)
        .write_stdin("all\nphone Jane\nshow-birthday John\nshow-birthday Jane\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact name: John, phones: 1234567890, birthday: 01.01.2001",
        ))
        .stdout(predicate::str::contains(
            "Contact name: Jane, phones: 0987654321; 5555555555, birthday: no birthday to show",
        ))
        .stdout(predicate::str::contains(
            "Jane's phone numbers: 0987654321, 5555555555",
        ))
        .stdout(predicate::str::contains("Jane has no birthday set."));
}

#[test]
fn missing_data_file_starts_empty() {
    let home = TempDir::new().unwrap();

    rolodex(&home)
        .write_stdin("all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("No contacts in the address book."));
}

#[test]
fn bad_input_does_not_end_the_session() {
    let home = TempDir::new().unwrap();

    rolodex(&home)
        .write_stdin(script(&[
            "add Bob 12345abcde",
            "add-birthday Bob 01.01.2001",
            "add-birthday",
            "fly",
            "hello",
            "exit",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter valid input:"))
        .stdout(predicate::str::contains(
            "We don't have Bob in the address book, try another",
        ))
        .stdout(predicate::str::contains(
            "Please try pattern 'add-birthday Bob 01.01.2001'",
        ))
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("How can I help you?"));
}

#[test]
fn change_and_delete_are_persisted() {
    let home = TempDir::new().unwrap();

    rolodex(&home)
        .write_stdin(script(&[
            "add Ross 1111111111",
            "add Bob 2222222222",
            "change Ross 3333333333",
            "delete Bob",
            "exit",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact Ross updated with new phone 3333333333.",
        ))
        .stdout(predicate::str::contains("Contact Bob deleted."));

    rolodex(&home)
        .write_stdin("all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact name: Ross, phones: 3333333333, birthday: no birthday to show",
        ))
        .stdout(predicate::str::contains("Bob").not());
}

#[test]
fn upcoming_birthday_three_days_out() {
    let home = TempDir::new().unwrap();
    let target = Local::now().date_naive() + Duration::days(3);
    let expected = adjust_for_weekend(target).format("%d.%m.%Y").to_string();

    rolodex(&home)
        .write_stdin(format!(
            "add Ann 1234567890\nadd-birthday Ann {}\nbirthdays\nexit\n",
            target.format("%d.%m.%Y")
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Ann: {}", expected)));
}

#[test]
fn file_flag_overrides_data_location() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("elsewhere").join("friends.json");

    rolodex(&home)
        .arg("--file")
        .arg(&custom)
        .write_stdin("add John 1234567890\nexit\n")
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!home.path().join("addressbook.json").exists());
}

#[test]
fn config_sets_data_file_name() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.json"),
        r#"{"data_file": "people.json"}"#,
    )
    .unwrap();

    rolodex(&home)
        .write_stdin("add John 1234567890\nexit\n")
        .assert()
        .success();

    assert!(home.path().join("people.json").exists());
}

#[test]
fn corrupt_data_file_is_reported() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("addressbook.json"), "{ not json").unwrap();

    rolodex(&home)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Serialization error"));
}
