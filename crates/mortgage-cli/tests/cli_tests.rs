use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn mortgage() -> Command {
    let mut cmd = Command::cargo_bin("mortgage").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_schedule_from_flags() {
    let value = json_stdout(mortgage().args([
        "schedule",
        "--principal",
        "496000",
        "--rate",
        "6.0",
        "--years",
        "30",
    ]));

    assert_eq!(value["methodology"], "Fixed-Rate Mortgage Amortization");
    assert_eq!(value["result"]["summary"]["monthly_payment"], "2973.77");
    assert_eq!(value["result"]["schedule"].as_array().unwrap().len(), 360);
    assert_eq!(value["result"]["schedule"][0]["month"], 1);
}

#[test]
fn test_schedule_from_stdin() {
    let value = json_stdout(
        mortgage()
            .arg("schedule")
            .write_stdin(r#"{"principal": "120000", "annual_rate_percent": "0", "term_years": 10}"#),
    );
    assert_eq!(value["result"]["schedule"].as_array().unwrap().len(), 120);
    assert_eq!(value["warnings"].as_array().unwrap().len(), 1);
}

#[test]
fn test_minimal_prints_monthly_payment() {
    mortgage()
        .args(["schedule", "--reference", "--output", "minimal"])
        .assert()
        .success()
        .stdout("2973.77\n");
}

#[test]
fn test_chart_csv_has_one_row_per_month() {
    let output = mortgage()
        .args([
            "chart",
            "--principal",
            "12000",
            "--rate",
            "0",
            "--years",
            "1",
            "--output",
            "csv",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "Period,Interest Payment,Principal Payment");
    assert_eq!(lines[1], "Month 1 (1mo),0.00,1000.00");
    assert_eq!(lines[12], "Month 12 (1y 0mo),0.00,1000.00");
}

#[test]
fn test_table_output_shows_year_groups() {
    mortgage()
        .args(["table", "--reference", "--output", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Principal"))
        .stdout(predicate::str::contains("Year 30"));
}

#[test]
fn test_label_command() {
    mortgage()
        .args(["label", "--month", "30", "--output", "minimal"])
        .assert()
        .success()
        .stdout("2y 6mo\n");
}

#[test]
fn test_invalid_principal_fails() {
    mortgage()
        .args(["schedule", "--principal", "abc", "--rate", "6", "--years", "30"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("principal"))
        .stderr(predicate::str::contains("not a number"));
}

#[test]
fn test_negative_rate_fails() {
    mortgage()
        .args(["schedule", "--principal", "1000", "--rate", "-1", "--years", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("annual_rate_percent"));
}

#[test]
fn test_excessive_term_fails_fast() {
    mortgage()
        .args(["schedule", "--principal", "1000", "--rate", "0", "--years", "357913941"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("term_years"))
        .stderr(predicate::str::contains("cannot exceed 100 years"));
}

#[test]
fn test_high_rate_is_scheduled() {
    let value = json_stdout(mortgage().args([
        "schedule",
        "--principal",
        "100000",
        "--rate",
        "300",
        "--years",
        "30",
    ]));
    let payment = value["result"]["summary"]["monthly_payment"].as_str().unwrap();
    assert_eq!(payment.parse::<f64>().unwrap(), 25000.0);
}

#[test]
fn test_missing_flag_is_reported() {
    mortgage()
        .args(["table", "--principal", "1000", "--rate", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--years is required"));
}
