mod common;

use common::{completed_steps_script, customer_commands, TestHome};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn script_mode_submits_full_inquiry() {
    let home = TestHome::new();
    let script = format!("{}summary\nsubmit\nexit\n", completed_steps_script());

    home.run_script(&script)
        .success()
        .stdout(contains("Moved to Step 2 / 3 - Reservation Details."))
        .stdout(contains("Moved to Step 3 / 3 - Other Options."))
        .stdout(contains("Sharing Boat Charter"))
        .stdout(contains("Life jacket & Safety equipment, Boat tour around Pulau Kapas"))
        .stdout(contains("submitted."));

    let outbox = home.outbox_files();
    assert_eq!(outbox.len(), 1, "one submission expected: {outbox:?}");
    let json = std::fs::read_to_string(&outbox[0]).unwrap();
    assert!(json.contains("\"status\": \"PENDING\""));
    assert!(json.contains("\"firstName\": \"Aminah\""));
    assert!(json.contains("\"specialRemarks\": \"Vegetarian lunch\""));
    assert!(!home.draft_file().exists(), "draft should be cleared after submit");
}

#[test]
fn empty_customer_step_reports_eight_errors() {
    let home = TestHome::new();
    home.run_script("next\nexit\n")
        .success()
        .stdout(contains("8 field(s) on Customer Information need attention."))
        .stdout(contains("First Name: First name is required"))
        .stdout(contains("Postal Code: Postal code is required"))
        .stdout(contains("Address Line 2").not());
}

#[test]
fn draft_and_step_survive_restart() {
    let home = TestHome::new();
    let first_run = format!("{}next\nexit\n", customer_commands());
    home.run_script(&first_run).success();
    assert!(home.draft_file().exists());

    home.run_script("show\nexit\n")
        .success()
        .stdout(contains("Step 2 / 3 - Reservation Details"));

    home.run_script("back\nexit\n")
        .success()
        .stdout(contains("Aminah"))
        .stdout(contains("22 Jalan Kapas"));
}

#[test]
fn clear_all_removes_stored_draft() {
    let home = TestHome::new();
    home.run_script("set first Aminah\nexit\n").success();
    assert!(home.draft_file().exists());

    home.run_script("clear all\nexit\n")
        .success()
        .stdout(contains("Draft cleared."));
    assert!(!home.draft_file().exists());
}

#[test]
fn partial_clear_keeps_other_sections() {
    let home = TestHome::new();
    home.run_script("set first Aminah\nset remarks \"Window seats\"\nclear customer\nexit\n")
        .success()
        .stdout(contains("Selected sections cleared."));

    let stored = std::fs::read_to_string(home.draft_file()).unwrap();
    assert!(stored.contains("Window seats"));
    assert!(!stored.contains("Aminah"));
}

#[test]
fn submit_before_last_step_is_refused() {
    let home = TestHome::new();
    home.run_script("submit\nexit\n")
        .success()
        .stdout(contains("Finish every step before submitting"));
    assert!(home.outbox_files().is_empty());
}

#[test]
fn submit_after_clearing_customer_returns_to_first_step() {
    let home = TestHome::new();
    let script = format!("{}clear customer\nsubmit\nexit\n", completed_steps_script());

    home.run_script(&script)
        .success()
        .stdout(contains("8 field(s) need attention before submitting."))
        .stdout(contains("Step 1 / 3 - Customer Information"));
    assert!(home.outbox_files().is_empty());

    home.run_script("show\nexit\n")
        .success()
        .stdout(contains("Step 1 / 3 - Customer Information"));
}

#[test]
fn next_on_last_step_reports_cleared_reservation() {
    let home = TestHome::new();
    let script = format!("{}clear reservation\nnext\nexit\n", completed_steps_script());

    home.run_script(&script)
        .success()
        .stdout(contains("Back to Step 2 / 3 - Reservation Details"))
        .stdout(contains("1 field(s) on Reservation Details need attention."));
}

#[test]
fn out_of_range_passengers_are_rejected() {
    let home = TestHome::new();
    home.run_script("set passengers 25\nset passengers 6\nexit\n")
        .success()
        .stdout(contains("Passengers unchanged: Passengers must be between 1 and 20"))
        .stdout(contains("Passengers updated."));

    let stored = std::fs::read_to_string(home.draft_file()).unwrap();
    assert!(stored.contains("\"passengerCount\": 6"));
}

#[test]
fn unknown_command_gets_suggestion() {
    let home = TestHome::new();
    home.run_script("nxet\nexit\n")
        .success()
        .stdout(contains("Unknown command `nxet`"))
        .stdout(contains("Did you mean `next`?"));
}

#[test]
fn unknown_package_is_kept_and_flagged() {
    let home = TestHome::new();
    home.run_script("set package 9\nsummary\nexit\n")
        .success()
        .stdout(contains("package `9` is not in the catalog."))
        .stdout(contains("9 (unknown)"));
}

#[test]
fn custom_catalog_file_is_used() {
    let home = TestHome::new();
    std::fs::write(
        home.path().join("catalog.json"),
        r#"{"jettyPoints":[{"id":"7","name":"Dungun Jetty"}],"packages":[],"addOns":[]}"#,
    )
    .unwrap();

    home.run_script("set jetty 7\ncatalog\nsummary\nexit\n")
        .success()
        .stdout(contains("[7] Dungun Jetty"))
        .stdout(contains("Dungun Jetty"))
        .stdout(contains("(none)"));
}

#[test]
fn config_changes_persist() {
    let home = TestHome::new();
    home.run_script("config set quiet on\nexit\n").success();

    let config = std::fs::read_to_string(home.path().join("config").join("config.json")).unwrap();
    assert!(config.contains("\"quiet_mode\": true"));

    home.run_script("config show\nexit\n")
        .success()
        .stdout(contains("quiet: on"));
}

#[test]
fn unsafe_storage_key_is_refused() {
    let home = TestHome::new();
    home.run_script("config set storage-key \"kiosk form\"\nconfig show\nexit\n")
        .success()
        .stdout(contains("may only contain letters, digits"))
        .stdout(contains("storage-key: rhumuda_inquiry_form"));
}

#[test]
fn version_prints_build_metadata() {
    let home = TestHome::new();
    home.run_script("version\nexit\n")
        .success()
        .stdout(contains("Version:"))
        .stdout(contains("Commit:"));
}
