use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn rickshaw_cmd(base_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rickshaw"));
    cmd.env("RICKSHAW_LEDGER_DATA_DIR", base_dir);
    cmd
}

fn write_entries(base_dir: &Path, entries_json: &str) {
    let data_dir = base_dir.join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("entries.json"), entries_json).unwrap();
}

/// One entry for 2025-03-14: gross 1450, CNG 380, one online payment of
/// 250, no pass. Net 1070, base split 535 each, owner 285, driver 785.
const MARCH_14: &str = r#"{
  "entries": [
    {
      "id": "550e8400-e29b-41d4-a716-446655440000",
      "date": "2025-03-14",
      "grossEarnings": 1450.0,
      "cng": 380.0,
      "onlineAmendments": [
        {
          "id": "661f9511-aaaa-41d4-a716-446655440111",
          "amount": 250.0,
          "description": "Online payment"
        }
      ],
      "driverPassUsed": false,
      "driverPassAmount": 0.0,
      "trips": 22,
      "hoursWorked": 9.5,
      "kmStart": 12100.0,
      "kmEnd": 12180.0,
      "notes": "",
      "createdAt": "2025-03-14T18:30:00Z"
    }
  ]
}"#;

/// Two entries in March 2025, the second with a driver pass day.
const MARCH_WEEK: &str = r#"{
  "entries": [
    {
      "id": "550e8400-e29b-41d4-a716-446655440000",
      "date": "2025-03-14",
      "grossEarnings": 1450.0,
      "cng": 380.0,
      "onlineAmendments": [
        {
          "id": "661f9511-aaaa-41d4-a716-446655440111",
          "amount": 250.0,
          "description": "Online payment"
        }
      ],
      "driverPassUsed": false,
      "driverPassAmount": 0.0,
      "trips": 22,
      "hoursWorked": 9.5,
      "kmStart": 12100.0,
      "kmEnd": 12180.0,
      "notes": "",
      "createdAt": "2025-03-14T18:30:00Z"
    },
    {
      "id": "770a1622-bbbb-41d4-a716-446655440222",
      "date": "2025-03-10",
      "grossEarnings": 900.0,
      "cng": 300.0,
      "onlineAmendments": [],
      "driverPassUsed": true,
      "driverPassAmount": 100.0,
      "trips": 15,
      "hoursWorked": 8.0,
      "kmStart": 0.0,
      "kmEnd": 0.0,
      "notes": "",
      "createdAt": "2025-03-10T18:30:00Z"
    }
  ]
}"#;

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();

    rickshaw_cmd(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Daily earnings settlement for a shared auto-rickshaw",
        ));
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();

    rickshaw_cmd(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rickshaw"));
}

#[test]
fn test_no_command_prints_banner() {
    let temp_dir = TempDir::new().unwrap();

    rickshaw_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Run 'rickshaw --help'"));
}

#[test]
fn test_entry_add_and_list() {
    let temp_dir = TempDir::new().unwrap();

    rickshaw_cmd(temp_dir.path())
        .args([
            "entry",
            "add",
            "1450",
            "380",
            "--date",
            "2025-03-14",
            "--online",
            "250",
            "--trips",
            "22",
            "--hours",
            "9.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded entry:"))
        .stdout(predicate::str::contains("₹285.00"))
        .stdout(predicate::str::contains("₹785.00"));

    rickshaw_cmd(temp_dir.path())
        .args(["entry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-14"))
        .stdout(predicate::str::contains("Showing 1 entries"));
}

#[test]
fn test_entry_add_rejects_unpadded_date() {
    let temp_dir = TempDir::new().unwrap();

    rickshaw_cmd(temp_dir.path())
        .args(["entry", "add", "100", "50", "--date", "2025-3-4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_entry_show_by_short_id() {
    let temp_dir = TempDir::new().unwrap();
    write_entries(temp_dir.path(), MARCH_14);

    rickshaw_cmd(temp_dir.path())
        .args(["entry", "show", "ent-550e8400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mar 14, 2025"))
        .stdout(predicate::str::contains("Base Split (50/50)"))
        .stdout(predicate::str::contains("Online Settlement"))
        .stdout(predicate::str::contains("₹785.00"));
}

#[test]
fn test_entry_show_unknown_id_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_entries(temp_dir.path(), MARCH_14);

    rickshaw_cmd(temp_dir.path())
        .args(["entry", "show", "ent-deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found"));
}

#[test]
fn test_entry_edit_updates_settlement() {
    let temp_dir = TempDir::new().unwrap();
    write_entries(temp_dir.path(), MARCH_14);

    // gross 1500 - cng 380 = 1120, base 560, owner 560 - 250 = 310
    rickshaw_cmd(temp_dir.path())
        .args(["entry", "edit", "ent-550e8400", "--gross", "1500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry:"))
        .stdout(predicate::str::contains("₹310.00"));
}

#[test]
fn test_entry_delete_requires_force() {
    let temp_dir = TempDir::new().unwrap();
    write_entries(temp_dir.path(), MARCH_14);

    rickshaw_cmd(temp_dir.path())
        .args(["entry", "delete", "ent-550e8400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm deletion"));

    // Still there
    rickshaw_cmd(temp_dir.path())
        .args(["entry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-14"));

    rickshaw_cmd(temp_dir.path())
        .args(["entry", "delete", "ent-550e8400", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry:"));

    rickshaw_cmd(temp_dir.path())
        .args(["entry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn test_amend_add_and_remove() {
    let temp_dir = TempDir::new().unwrap();
    write_entries(temp_dir.path(), MARCH_14);

    // 250 + (-120) leaves an online total of 130
    rickshaw_cmd(temp_dir.path())
        .args([
            "amend",
            "add",
            "ent-550e8400",
            "-120",
            "--description",
            "Cancelled ride refund",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded amendment"))
        .stdout(predicate::str::contains("₹130.00"));

    // Removing the original 250 leaves only the -120
    rickshaw_cmd(temp_dir.path())
        .args(["amend", "remove", "ent-550e8400", "adj-661f9511"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed amendment"))
        .stdout(predicate::str::contains("-₹120.00"));
}

#[test]
fn test_amend_missing_entry_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_entries(temp_dir.path(), MARCH_14);

    rickshaw_cmd(temp_dir.path())
        .args(["amend", "add", "ent-00000000", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found"));
}

#[test]
fn test_dashboard_with_injected_date() {
    let temp_dir = TempDir::new().unwrap();
    write_entries(temp_dir.path(), MARCH_WEEK);

    rickshaw_cmd(temp_dir.path())
        .args(["dashboard", "--date", "2025-03-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard: 2025-03-14"))
        .stdout(predicate::str::contains("Last 7 Days"))
        .stdout(predicate::str::contains("2025-03-10"))
        .stdout(predicate::str::contains("All time: 2 entries recorded"));
}

#[test]
fn test_report_month_terminal_and_csv() {
    let temp_dir = TempDir::new().unwrap();
    write_entries(temp_dir.path(), MARCH_WEEK);

    rickshaw_cmd(temp_dir.path())
        .args(["report", "month", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Period Report: 2025-03"))
        .stdout(predicate::str::contains("TOTAL"));

    let csv_path = temp_dir.path().join("march.csv");
    rickshaw_cmd(temp_dir.path())
        .args(["report", "month", "2025-03", "--output"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Period report exported to:"));

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.contains("Date,Entries,Gross,CNG,Net"));
    assert!(csv.contains("2025-03-10"));
    assert!(csv.contains("AVERAGE DAILY GROSS"));
}

#[test]
fn test_report_rejects_backwards_range() {
    let temp_dir = TempDir::new().unwrap();
    write_entries(temp_dir.path(), MARCH_WEEK);

    rickshaw_cmd(temp_dir.path())
        .args(["report", "range", "2025-03-14", "2025-03-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("before start date"));
}

#[test]
fn test_export_all_json_and_info() {
    let temp_dir = TempDir::new().unwrap();
    write_entries(temp_dir.path(), MARCH_14);

    let json_path = temp_dir.path().join("backup.json");
    rickshaw_cmd(temp_dir.path())
        .args(["export", "all"])
        .arg(&json_path)
        .args(["--format", "json", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Full ledger exported to:"));

    let json = fs::read_to_string(&json_path).unwrap();
    assert!(json.contains("schema_version"));
    assert!(json.contains("grossEarnings"));

    rickshaw_cmd(temp_dir.path())
        .args(["export", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema Version: 1.0.0"))
        .stdout(predicate::str::contains("Amendments:  1"));
}

#[test]
fn test_export_entries_csv_has_settlement_columns() {
    let temp_dir = TempDir::new().unwrap();
    write_entries(temp_dir.path(), MARCH_WEEK);

    let csv_path = temp_dir.path().join("entries.csv");
    rickshaw_cmd(temp_dir.path())
        .args(["export", "entries"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 entries to:"));

    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.contains("Owner Earnings,Driver Earnings"));
    // owner 285 / driver 785 on the amendment day
    assert!(csv.contains("285.00"));
    assert!(csv.contains("785.00"));
    // pass day: net 600, online -100 net of pass, owner 350 / driver 150
    assert!(csv.contains("350.00"));
    assert!(csv.contains("150.00"));
}

#[test]
fn test_config_command_shows_paths() {
    let temp_dir = TempDir::new().unwrap();

    rickshaw_cmd(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("rickshaw-ledger Configuration"))
        .stdout(predicate::str::contains("entries.json"))
        .stdout(predicate::str::contains("Recent days:     7"));
}
