use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CREDENTIAL_VARS: [&str; 4] = [
    "TELEGRAM_BOT_TOKEN",
    "TELEGRAM_CHAT_ID",
    "KOREAEXIM_API_KEY",
    "OPINET_API_KEY",
];

fn notifier(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("market-notifier").expect("binary built");
    cmd.current_dir(dir.path());
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    notifier(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    notifier(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn run_without_telegram_credentials_fails() {
    let dir = TempDir::new().unwrap();
    notifier(&dir)
        .args(["run", "--no-banner"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TELEGRAM_BOT_TOKEN is not set"));
}

#[test]
fn run_with_placeholder_token_fails() {
    let dir = TempDir::new().unwrap();
    notifier(&dir)
        .env("TELEGRAM_BOT_TOKEN", "YOUR_BOT_TOKEN")
        .env("TELEGRAM_CHAT_ID", "12345")
        .args(["run", "--no-banner"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TELEGRAM_BOT_TOKEN"));
}

#[test]
fn invalid_config_file_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.toml"), "[schedule]\nopen = \"25:00\"\n").unwrap();
    notifier(&dir)
        .args(["check", "config", "-c", "bad.toml"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    notifier(&dir)
        .args(["check", "config", "-c", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn check_config_json_reports_credentials() {
    let dir = TempDir::new().unwrap();
    notifier(&dir)
        .env("TELEGRAM_BOT_TOKEN", "123:abc")
        .args(["check", "config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"command\":\"check.config\""))
        .stdout(predicate::str::contains("\"TELEGRAM_BOT_TOKEN\":true"))
        .stdout(predicate::str::contains("\"telegram_ready\":false"));
}

#[test]
fn quiet_check_config_keeps_only_warnings() {
    let dir = TempDir::new().unwrap();
    notifier(&dir)
        .args(["check", "config", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Telegram credentials missing"))
        .stdout(predicate::str::contains("Configuration is valid").not())
        .stdout(predicate::str::contains("Credentials").not());
}

#[test]
fn config_init_writes_template_once() {
    let dir = TempDir::new().unwrap();
    notifier(&dir).args(["config", "init"]).assert().success();

    let written = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(written.contains("[schedule]"));

    notifier(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    notifier(&dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn unknown_report_kind_is_rejected() {
    let dir = TempDir::new().unwrap();
    notifier(&dir)
        .args(["report", "midday"])
        .assert()
        .failure();
}
