use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::Sandbox;

const SHEET: &str = "\
1 8 0 16 30
2 9 15 17 45

5 -1 -1 12 0
6 22 0 6 0
7 -1 -1 -1 -1
";

#[test]
fn test_report_prints_header_days_and_footer() {
    let sb = Sandbox::new("report_full");
    sb.write_sheet("2025-06-E17", SHEET);

    let out = sb
        .cmd()
        .args(["--dir", &sb.sheets_str(), "report", "2025-06-E17"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // header (5) + 30 days + footer (7)
    assert_eq!(lines.len(), 42);
    assert_eq!(lines[0], "=".repeat(70));
    assert_eq!(lines[1], "YEAR: 2025 / MONTH: 06 / ID: E17");
    assert_eq!(lines[4], "-".repeat(70));

    assert!(lines[5].starts_with("01.06.2025 | 08:00 | 16:30 | 08h 30m  | fully present"));
    assert!(lines[6].starts_with("02.06.2025 | 09:15 | 17:45 | 08h 30m  | fully present"));
    assert!(lines[7].starts_with("03.06.2025 | n/a   | n/a   | n/a      | absent"));
    assert!(lines[9].starts_with("05.06.2025 | n/a   | 12:00 | n/a      | clarification needed"));
    assert!(lines[10].starts_with("06.06.2025 | 22:00 | 06:00 | 08h 00m  | fully present"));
    assert!(lines[11].starts_with("07.06.2025 | n/a   | n/a   | n/a      | absent"));

    assert_eq!(lines[35], "=".repeat(70));
    assert_eq!(lines[36], "TOTAL RECORDS   | 5");
    assert_eq!(lines[37], "INCOMPLETE DAYS | 1");
    assert_eq!(lines[38], "ABSENT DAYS     | 26");
    assert_eq!(lines[39], "PRESENT DAYS    | 3");
    assert_eq!(lines[40], "WORKING TIME    | 25h 00m");
    assert_eq!(lines[41], "=".repeat(70));
}

#[test]
fn test_report_accepts_name_with_extension() {
    let sb = Sandbox::new("report_ext");
    sb.write_sheet("2024-02-E1", "");

    sb.cmd()
        .args(["--dir", &sb.sheets_str(), "report", "2024-02-E1.txt"])
        .assert()
        .success()
        .stdout(contains("29.02.2024"))
        .stdout(contains("ABSENT DAYS     | 29"));
}

#[test]
fn test_missing_file_fails_with_message() {
    let sb = Sandbox::new("report_missing");

    sb.cmd()
        .args(["--dir", &sb.sheets_str(), "report", "2025-01-NOPE"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("Error opening time sheet file"));
}

#[test]
fn test_invalid_file_name() {
    let sb = Sandbox::new("report_bad_name");

    sb.cmd()
        .args(["--dir", &sb.sheets_str(), "report", "january"])
        .assert()
        .failure()
        .stderr(contains("Invalid file name format"));
}

#[test]
fn test_malformed_record_prints_no_report() {
    let sb = Sandbox::new("report_malformed");
    sb.write_sheet("2025-03-E2", "1 8 0 16 0\n2 8 zero 16 0\n");

    sb.cmd()
        .args(["--dir", &sb.sheets_str(), "report", "2025-03-E2"])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("Malformed record at line 2"));
}

#[test]
fn test_out_of_order_days_are_rejected() {
    let sb = Sandbox::new("report_order");
    sb.write_sheet("2025-03-E2", "4 8 0 16 0\n2 8 0 16 0\n");

    sb.cmd()
        .args(["--dir", &sb.sheets_str(), "report", "2025-03-E2"])
        .assert()
        .failure()
        .stderr(contains("out of order"));
}

#[test]
fn test_invalid_month_gives_empty_report() {
    let sb = Sandbox::new("report_month13");
    sb.write_sheet("2025-13-E2", "");

    sb.cmd()
        .args(["--dir", &sb.sheets_str(), "report", "2025-13-E2"])
        .assert()
        .success()
        .stdout(contains("MONTH: 13"))
        .stdout(contains("TOTAL RECORDS   | 0"))
        .stdout(contains(".13.2025").not());
}

#[test]
fn test_color_flag_adds_ansi_codes() {
    let sb = Sandbox::new("report_color");
    sb.write_sheet("2025-06-E17", SHEET);

    sb.cmd()
        .args(["--dir", &sb.sheets_str(), "report", "2025-06-E17", "--color"])
        .assert()
        .success()
        .stdout(contains("\x1b["));

    sb.cmd()
        .args(["--dir", &sb.sheets_str(), "report", "2025-06-E17"])
        .assert()
        .success()
        .stdout(contains("\x1b[").not());
}

#[test]
fn test_check_summarises_sheet() {
    let sb = Sandbox::new("check_ok");
    sb.write_sheet("2025-06-E17", SHEET);

    sb.cmd()
        .args(["--dir", &sb.sheets_str(), "check", "2025-06-E17"])
        .assert()
        .success()
        .stdout("")
        .stderr(contains("5 records OK"))
        .stderr(contains("25h 00m"));
}

#[test]
fn test_check_reports_malformed_sheet() {
    let sb = Sandbox::new("check_bad");
    sb.write_sheet("2023-02-E17", "29 8 0 16 0\n");

    sb.cmd()
        .args(["--dir", &sb.sheets_str(), "check", "2023-02-E17"])
        .assert()
        .failure()
        .stderr(contains("outside the month"));
}

#[test]
fn test_no_arguments_prints_usage() {
    let sb = Sandbox::new("usage");

    sb.cmd().assert().failure().stderr(contains("Usage"));
}
