use assert_cmd::Command;
use predicates::prelude::*;

fn dforge() -> Command {
    Command::cargo_bin("dforge").expect("binary should build")
}

#[test]
fn seeded_run_prints_a_sample_report() {
    dforge()
        .args(["--seed", "7", "--sample", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample Synced Deals (first 2):"))
        .stdout(predicate::str::contains("Deal ID: DEAL_001"))
        .stdout(predicate::str::contains("Deal ID: DEAL_002"))
        .stdout(predicate::str::contains("Amount: $"))
        .stdout(predicate::str::contains("Stage: "));
}

#[test]
fn default_run_prints_five_records() {
    let output = dforge().assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    assert!(stdout.starts_with("Sample Synced Deals (first 5):"));
    assert_eq!(stdout.matches("Deal ID: ").count(), 5);
}

#[test]
fn same_seed_yields_identical_reports() {
    let run = || {
        let output = dforge().args(["--seed", "11"]).assert().success();
        String::from_utf8(output.get_output().stdout.clone()).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn missing_config_file_fails_fast() {
    dforge()
        .args(["--config", "/nonexistent/dforge.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}
