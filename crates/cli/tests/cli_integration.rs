//! CLI integration tests for all implemented subcommands.
//!
//! Uses `assert_cmd` to spawn the `intimetrics` binary and verify exit
//! codes, stdout content, and stderr content. Every test runs against
//! its own data file inside a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper: create a Command for the `intimetrics` binary rooted in a
/// temp directory, with `--data` pointing inside it.
fn intimetrics(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("intimetrics").expect("binary built");
    cmd.current_dir(dir.path());
    cmd.args(["--data", dir.path().join("data.json").to_str().unwrap()]);
    cmd
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    Command::cargo_bin("intimetrics")
        .expect("binary built")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Intimetrics activity tracker"));
}

#[test]
fn version_exits_0() {
    Command::cargo_bin("intimetrics")
        .expect("binary built")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("intimetrics"));
}

// ──────────────────────────────────────────────
// 2. Logging and listing
// ──────────────────────────────────────────────

#[test]
fn log_then_list_round_trips() {
    let dir = TempDir::new().unwrap();
    intimetrics(&dir)
        .args([
            "log",
            "--kind",
            "cuddle",
            "--date",
            "2024-03-05",
            "--partner",
            "Robin",
            "--note",
            "movie night",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("logged cuddle on 2024-03-05"));

    intimetrics(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-05"))
        .stdout(predicate::str::contains("with Robin"))
        .stdout(predicate::str::contains("movie night"));
}

#[test]
fn log_announces_new_achievements() {
    let dir = TempDir::new().unwrap();
    intimetrics(&dir)
        .args(["log", "--kind", "sex", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("achievement unlocked: 🎉 First Steps"))
        .stdout(predicate::str::contains("Best Start of the Year"));
}

#[test]
fn log_rejects_invalid_dates() {
    let dir = TempDir::new().unwrap();
    intimetrics(&dir)
        .args(["log", "--kind", "sex", "--date", "2024-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn remove_unknown_activity_fails() {
    let dir = TempDir::new().unwrap();
    intimetrics(&dir)
        .args(["remove", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("activity not found"));
}

#[test]
fn list_filters_by_kind() {
    let dir = TempDir::new().unwrap();
    intimetrics(&dir)
        .args(["log", "--kind", "sex", "--date", "2024-03-01"])
        .assert()
        .success();
    intimetrics(&dir)
        .args(["log", "--kind", "cuddle", "--date", "2024-03-02"])
        .assert()
        .success();

    intimetrics(&dir)
        .args(["list", "--kind", "cuddle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cuddle"))
        .stdout(predicate::str::contains("2024-03-01").not());
}

// ──────────────────────────────────────────────
// 3. Partners
// ──────────────────────────────────────────────

#[test]
fn partner_lifecycle() {
    let dir = TempDir::new().unwrap();
    intimetrics(&dir)
        .args(["partner", "add", "Alex", "--relationship", "long-term"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added partner Alex"));

    // Duplicate names are rejected.
    intimetrics(&dir)
        .args(["partner", "add", "Alex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("partner already exists"));

    intimetrics(&dir)
        .args(["log", "--kind", "sex", "--date", "2024-03-01", "--partner", "Alex"])
        .assert()
        .success();

    intimetrics(&dir)
        .args(["partner", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alex"))
        .stdout(predicate::str::contains("long-term"))
        .stdout(predicate::str::contains("1 activities"));
}

// ──────────────────────────────────────────────
// 4. Achievements
// ──────────────────────────────────────────────

#[test]
fn secrets_stay_masked_until_unlocked() {
    let dir = TempDir::new().unwrap();
    intimetrics(&dir)
        .arg("achievements")
        .assert()
        .success()
        .stdout(predicate::str::contains("???"))
        .stdout(predicate::str::contains("Best Start of the Year").not())
        .stdout(predicate::str::contains("Valentines Day").not());

    intimetrics(&dir)
        .args(["log", "--kind", "sex", "--date", "2024-01-01"])
        .assert()
        .success();

    intimetrics(&dir)
        .arg("achievements")
        .assert()
        .success()
        .stdout(predicate::str::contains("Best Start of the Year"))
        .stdout(predicate::str::contains("Valentines Day").not());
}

#[test]
fn achievements_json_reports_progress() {
    let dir = TempDir::new().unwrap();
    for day in 1..=4 {
        intimetrics(&dir)
            .args([
                "log",
                "--kind",
                "masturbation",
                "--date",
                &format!("2024-06-{:02}", day),
            ])
            .assert()
            .success();
    }

    let output = intimetrics(&dir)
        .args(["achievements", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let self_love = rows
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == "self_love")
        .unwrap();
    assert_eq!(self_love["unlocked"], false);
    assert_eq!(self_love["progress"], 0.8);

    let masked = rows
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == "valentines_day")
        .unwrap();
    assert_eq!(masked["title"], "???");
}

#[test]
fn achievements_filter_by_category() {
    let dir = TempDir::new().unwrap();
    intimetrics(&dir)
        .args(["achievements", "--category", "variety"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Explorer"))
        .stdout(predicate::str::contains("Cuddle Master").not());
}

#[test]
fn check_is_idempotent() {
    let dir = TempDir::new().unwrap();
    intimetrics(&dir)
        .args(["log", "--kind", "oral", "--date", "2024-02-02"])
        .assert()
        .success();

    // The unlock pass already ran inside `log`; a fresh pass over the
    // same history finds nothing new.
    intimetrics(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("no new achievements"));
}

// ──────────────────────────────────────────────
// 5. Stats
// ──────────────────────────────────────────────

#[test]
fn stats_summarize_the_history() {
    let dir = TempDir::new().unwrap();
    for day in 1..=3 {
        intimetrics(&dir)
            .args(["log", "--kind", "sex", "--date", &format!("2024-07-{:02}", day)])
            .assert()
            .success();
    }

    intimetrics(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("total activities: 3"))
        .stdout(predicate::str::contains("longest streak: 3 day(s)"));

    let output = intimetrics(&dir)
        .args(["stats", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["total"], 3);
    assert_eq!(doc["byType"]["sex"], 3);
    assert_eq!(doc["longestStreak"], 3);
    assert_eq!(doc["countsByDate"]["2024-07-01"], 1);
}

// ──────────────────────────────────────────────
// 6. Export, import, wipe
// ──────────────────────────────────────────────

#[test]
fn wipe_and_import_require_confirmation() {
    let dir = TempDir::new().unwrap();
    intimetrics(&dir)
        .arg("wipe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    intimetrics(&dir).arg("export").assert().success();
    let backup = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .find(|e| e.file_name().to_string_lossy().starts_with("intimetrics-backup-"))
        .expect("backup file written");
    intimetrics(&dir)
        .args(["import", backup.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn export_wipe_import_round_trips() {
    let dir = TempDir::new().unwrap();
    intimetrics(&dir)
        .args(["log", "--kind", "vaginal", "--date", "2024-04-04"])
        .assert()
        .success();

    let backup = dir.path().join("backup.json");
    intimetrics(&dir)
        .args(["export", "--out", backup.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("exported 1 activities"));

    intimetrics(&dir).args(["wipe", "--yes"]).assert().success();
    intimetrics(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("no activities"));

    intimetrics(&dir)
        .args(["import", backup.to_str().unwrap(), "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("imported 1 activities"));
    intimetrics(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-04-04"));

    // Unlock records came back with the archive.
    intimetrics(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("no new achievements"));
}
