use assert_cmd::Command;
use predicates::str::contains;
use tempfile::NamedTempFile;

const ROSTER: &str = r#"{
    "payer": "Joel",
    "members": [
        { "name": "Joel", "joined": "2022-09-13" },
        { "name": "Humla", "joined": "2022-09-13" },
        { "name": "Sophie", "joined": "2023-02-15" },
        { "name": "Olle", "joined": "2023-04-23" }
    ]
}"#;

fn roster_file(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), contents).unwrap();
    file
}

#[test]
fn report_prints_a_statement_for_every_member() {
    let roster = roster_file(ROSTER);

    let mut cmd = Command::cargo_bin("membership_core_cli").unwrap();
    cmd.arg("report")
        .arg(roster.path())
        .assert()
        .success()
        .stdout(contains("Joel owes"))
        .stdout(contains("Humla is owed"))
        .stdout(contains("Sophie"))
        .stdout(contains("Olle"))
        .stdout(contains("Paid Nintendo for 365 days of membership"));
}

#[test]
fn periods_prints_the_overview_table() {
    let roster = roster_file(ROSTER);

    let mut cmd = Command::cargo_bin("membership_core_cli").unwrap();
    cmd.arg("periods")
        .arg(roster.path())
        .assert()
        .success()
        .stdout(contains("2022-09-13 - 2023-02-14"))
        .stdout(contains("2023-04-23 - 2023-09-12"))
        .stdout(contains("Cost/member"));
}

#[test]
fn json_emits_the_full_report() {
    let roster = roster_file(ROSTER);

    let mut cmd = Command::cargo_bin("membership_core_cli").unwrap();
    cmd.arg("json")
        .arg(roster.path())
        .assert()
        .success()
        .stdout(contains("\"periods\""))
        .stdout(contains("\"cost_per_member\""))
        .stdout(contains("\"statements\""));
}

#[test]
fn invalid_roster_fails_with_an_error() {
    let roster = roster_file(
        r#"{ "payer": "Joel", "members": [ { "name": "Humla", "joined": "2022-09-13" } ] }"#,
    );

    let mut cmd = Command::cargo_bin("membership_core_cli").unwrap();
    cmd.arg("report")
        .arg(roster.path())
        .assert()
        .failure()
        .stderr(contains("Error:"))
        .stderr(contains("not enrolled"));
}

#[test]
fn join_past_term_end_fails_with_an_error() {
    let roster = roster_file(
        r#"{
            "payer": "Joel",
            "members": [
                { "name": "Joel", "joined": "2022-09-13" },
                { "name": "Late", "joined": "2023-09-13" }
            ]
        }"#,
    );

    let mut cmd = Command::cargo_bin("membership_core_cli").unwrap();
    cmd.arg("report")
        .arg(roster.path())
        .assert()
        .failure()
        .stderr(contains("on or after the membership end"));
}

#[test]
fn unknown_command_fails_with_usage() {
    let mut cmd = Command::cargo_bin("membership_core_cli").unwrap();
    cmd.arg("frobnicate")
        .assert()
        .failure()
        .stderr(contains("Usage: membership_core_cli"));
}

#[test]
fn missing_roster_file_fails_cleanly() {
    let mut cmd = Command::cargo_bin("membership_core_cli").unwrap();
    cmd.arg("report")
        .arg("/nonexistent/roster.json")
        .assert()
        .failure()
        .stderr(contains("Error:"));
}
