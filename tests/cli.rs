use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const MONTHLY_JAN: &str = "item_name,is_expense,quantity,unit_price\n\
                           Beans,true,4,300\n\
                           Coffee,false,100,20\n\
                           Cake,false,20,50\n";

const MONTHLY_FEB: &str = "item_name,is_expense,quantity,unit_price\n\
                           Rent,true,1,900\n\
                           Coffee,false,125,20\n";

const YEARLY: &str = "month,amount,is_expense\n\
                      1,1200,true\n\
                      1,3000,false\n\
                      2,900,true\n\
                      2,2500,false\n";

fn recon(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("recon").unwrap();
    cmd.env("HOME", home).env("NO_COLOR", "1");
    cmd
}

fn reports(dir: &Path, yearly: &str) {
    std::fs::write(dir.join("m.202101.csv"), MONTHLY_JAN).unwrap();
    std::fs::write(dir.join("m.202102.csv"), MONTHLY_FEB).unwrap();
    std::fs::write(dir.join("y.2021.csv"), yearly).unwrap();
}

fn args(dir: &Path, command: &str) -> Vec<String> {
    vec![
        command.to_string(),
        "--dir".to_string(),
        dir.to_string_lossy().to_string(),
        "--year".to_string(),
        "2021".to_string(),
        "--lang".to_string(),
        "en".to_string(),
    ]
}

#[test]
fn test_verify_matching_reports() {
    let home = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    reports(dir.path(), YEARLY);

    recon(home.path())
        .args(args(dir.path(), "verify"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Verification passed."))
        .stdout(predicate::str::contains("differ").not());
}

#[test]
fn test_verify_mismatch_exits_with_two() {
    let home = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    reports(dir.path(), "month,amount,is_expense\n1,1000,true\n1,3000,false\n2,900,true\n2,2500,false\n");

    recon(home.path())
        .args(args(dir.path(), "verify"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Expenses in the monthly report: 1200"))
        .stdout(predicate::str::contains("Expenses in the yearly report for January: 1000"))
        .stdout(predicate::str::contains("Verification passed.").not());
}

#[test]
fn test_verify_without_reports() {
    let home = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();

    recon(home.path())
        .args(args(dir.path(), "verify"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Cannot read the report file"))
        .stdout(predicate::str::contains("No monthly reports have been loaded."));
}

#[test]
fn test_monthly_information() {
    let home = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    reports(dir.path(), YEARLY);

    recon(home.path())
        .args(args(dir.path(), "monthly"))
        .assert()
        .success()
        .stdout(predicate::str::contains("January"))
        .stdout(predicate::str::contains("Most profitable product: Coffee"))
        .stdout(predicate::str::contains("Biggest expense: 1200 for \"Beans\""))
        .stdout(predicate::str::contains("Biggest expense: 900 for \"Rent\""));
}

#[test]
fn test_yearly_information_russian_with_comma() {
    let home = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    reports(dir.path(), YEARLY);

    recon(home.path())
        .args(["yearly", "--dir"])
        .arg(dir.path())
        .args(["--year", "2021", "--lang", "ru", "--decimal", ","])
        .assert()
        .success()
        .stdout(predicate::str::contains("Год: 2021"))
        .stdout(predicate::str::contains("Прибыль за Январь: 1800"))
        .stdout(predicate::str::contains("Прибыль за Февраль: 1600"))
        .stdout(predicate::str::contains("Средний расход за все месяцы в году: 1050,00"))
        .stdout(predicate::str::contains("Средний доход за все месяцы в году: 2750,00"));
}

#[test]
fn test_malformed_yearly_report_is_skipped() {
    let home = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    reports(dir.path(), "month,amount,is_expense\n1,lots,true\n1,3000,false\n");

    recon(home.path())
        .args(args(dir.path(), "yearly"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not load report"))
        .stdout(predicate::str::contains("No yearly report has been loaded."));
}

#[test]
fn test_summary_table() {
    let home = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    reports(dir.path(), YEARLY);

    recon(home.path())
        .args(args(dir.path(), "summary"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses (monthly)"))
        .stdout(predicate::str::contains("February"));
}

#[test]
fn test_menu_session() {
    let home = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    reports(dir.path(), YEARLY);

    recon(home.path())
        .args(args(dir.path(), "menu"))
        .write_stdin("3\n1\n2\n3\n7\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No monthly reports have been loaded."))
        .stdout(predicate::str::contains("Loaded monthly report for February: 2 rows"))
        .stdout(predicate::str::contains("Verification passed."))
        .stdout(predicate::str::contains("There is no such command."))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn test_config_persists_settings() {
    let home = tempfile::tempdir().unwrap();

    recon(home.path())
        .args(["config", "--set-year", "2021", "--set-lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Year:       2021"))
        .stdout(predicate::str::contains("Language:   en"));

    assert!(home.path().join(".config/recon/settings.json").exists());

    recon(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Year:       2021"));
}

#[test]
fn test_invalid_decimal_separator_fails() {
    let home = tempfile::tempdir().unwrap();
    let dir = tempfile::tempdir().unwrap();

    recon(home.path())
        .args(args(dir.path(), "yearly"))
        .args(["--decimal", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}
