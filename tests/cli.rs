use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn poupar(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("poupar").unwrap();
    cmd.env("POUPAR_DATA_DIR", data_dir.path())
        .env_remove("POUPAR_API_URL")
        .env_remove("POUPAR_LOG");
    cmd
}

#[test]
fn routes_lists_every_page() {
    let dir = TempDir::new().unwrap();
    poupar(&dir)
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/dreams"))
        .stdout(predicate::str::contains("/bill-reader"))
        .stdout(predicate::str::contains("Carteira"));
}

#[test]
fn voice_commands_for_wallet_are_global_only() {
    let dir = TempDir::new().unwrap();
    poupar(&dir)
        .args(["voice-commands", "--route", "/wallet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Como economizar"))
        .stdout(predicate::str::contains("Ativar música"))
        .stdout(predicate::str::contains("Abrir faturas").not());
}

#[test]
fn voice_commands_rejects_unknown_route() {
    let dir = TempDir::new().unwrap();
    poupar(&dir)
        .args(["voice-commands", "--route", "/nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown page"));
}

#[test]
fn tutorial_shows_steps_and_total() {
    let dir = TempDir::new().unwrap();
    poupar(&dir)
        .arg("tutorial")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bem-vindo ao POUPAR+!"))
        .stdout(predicate::str::contains("Total:"));
}

#[test]
fn plan_goal_derives_monthly_amount() {
    let dir = TempDir::new().unwrap();
    poupar(&dir)
        .args([
            "plan-goal",
            "--amount",
            "1200",
            "--start-date",
            "2025-01-01",
            "--target-date",
            "2026-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("€100.00"))
        .stdout(predicate::str::contains("12"));
}

#[test]
fn plan_goal_rejects_target_within_a_month() {
    let dir = TempDir::new().unwrap();
    poupar(&dir)
        .args([
            "plan-goal",
            "--amount",
            "500",
            "--start-date",
            "2025-03-10",
            "--target-date",
            "2025-03-20",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Target date"));
}

#[test]
fn plan_goal_rejects_bad_amount() {
    let dir = TempDir::new().unwrap();
    poupar(&dir)
        .args(["plan-goal", "--amount", "abc", "--target-date", "2030-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));
}

#[test]
fn config_honours_api_url_override() {
    let dir = TempDir::new().unwrap();
    poupar(&dir)
        .args(["--api-url", "http://backend.test:9000/", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://backend.test:9000"))
        .stdout(predicate::str::contains("Theme:           dark"));
}

#[test]
fn cookies_status_and_reset() {
    let dir = TempDir::new().unwrap();
    poupar(&dir)
        .args(["cookies", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not set"));

    std::fs::write(
        dir.path().join("client_storage.json"),
        r#"{"cookiesDeclined":"true"}"#,
    )
    .unwrap();

    poupar(&dir)
        .args(["cookies", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("declined"));

    poupar(&dir)
        .args(["cookies", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared"));

    poupar(&dir)
        .args(["cookies", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not set"));
}

#[test]
fn plan_goal_rejects_amount_beyond_cents_range() {
    let dir = TempDir::new().unwrap();
    poupar(&dir)
        .args([
            "plan-goal",
            "--amount",
            "999999999999999999",
            "--target-date",
            "2030-01-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));
}
