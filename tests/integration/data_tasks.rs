//! Verifiers whose expected record is derived from fixture data

use super::helpers::{assert_fail, assert_pass, Workspace};
use taskgrade::error::FailureKind;
use taskgrade::tasks::TaskId;

const SERVER_LOG: &str = "\
[INFO] server started
[WARN] disk at 80%
[INFO] request ok
[ERROR] request failed

[ERROR] timeout
DEBUG ignored
[INFO] shutting down
";

const SALES_CSV: &str = "\
product,quantity,price
Widget,2,10.00
Gadget,1,5.50
Widget,3,10.00
";

#[test]
fn test_temperatures_pass() {
    let ws = Workspace::new();
    ws.write("results/temperatures.txt", "32.0\n212.0\n-40.0\n98.6\n71.6\n");
    let verdict = ws.run(TaskId::Temperatures);
    assert_pass(&verdict);
    assert_eq!(
        verdict.line(),
        "PASS: All 5 Celsius to Fahrenheit conversions are correct"
    );
}

#[test]
fn test_temperatures_within_rounding() {
    let ws = Workspace::new();
    ws.write("results/temperatures.txt", "32\n212\n-40\n98.64\n71.6\n");
    assert_pass(&ws.run(TaskId::Temperatures));
}

#[test]
fn test_temperatures_wrong_line_count() {
    let ws = Workspace::new();
    ws.write("results/temperatures.txt", "32.0\n212.0\n-40.0\n98.6\n");
    let line = assert_fail(&ws.run(TaskId::Temperatures), FailureKind::CountMismatch);
    assert_eq!(line, "FAIL: Expected 5 lines, found 4");
}

#[test]
fn test_temperatures_wrong_value() {
    let ws = Workspace::new();
    ws.write("results/temperatures.txt", "32.0\n212.0\n-40.0\n98.7\n71.6\n");
    let line = assert_fail(&ws.run(TaskId::Temperatures), FailureKind::ValueMismatch);
    assert_eq!(line, "FAIL: Line 4 (37 C): expected 98.6, got 98.7");
}

#[test]
fn test_temperatures_empty_output() {
    let ws = Workspace::new();
    ws.write("results/temperatures.txt", "\n   \n");
    let line = assert_fail(&ws.run(TaskId::Temperatures), FailureKind::EmptyOutput);
    assert_eq!(line, "FAIL: 'results/temperatures.txt' is empty");
}

#[test]
fn test_log_summary_pass() {
    let ws = Workspace::new();
    ws.write("data/server.log", SERVER_LOG)
        .write("results/log_summary.txt", "INFO: 3\nWARN: 1\nERROR: 2\n");
    assert_eq!(
        ws.run(TaskId::LogSummary).line(),
        "PASS: Log summary correct - INFO:3 WARN:1 ERROR:2 (total 6 lines)"
    );
}

#[test]
fn test_log_summary_missing_fixture() {
    let ws = Workspace::new();
    ws.write("results/log_summary.txt", "INFO: 3\nWARN: 1\nERROR: 2\n");
    let line = assert_fail(&ws.run(TaskId::LogSummary), FailureKind::MissingFixture);
    assert_eq!(line, "FAIL: Source log 'data/server.log' does not exist");
}

#[test]
fn test_log_summary_wrong_order() {
    let ws = Workspace::new();
    ws.write("data/server.log", SERVER_LOG)
        .write("results/log_summary.txt", "WARN: 1\nINFO: 3\nERROR: 2\n");
    let line = assert_fail(&ws.run(TaskId::LogSummary), FailureKind::OrderMismatch);
    assert_eq!(
        line,
        "FAIL: Lines must be in INFO, WARN, ERROR order, got ['WARN', 'INFO', 'ERROR']"
    );
}

#[test]
fn test_log_summary_wrong_count() {
    let ws = Workspace::new();
    ws.write("data/server.log", SERVER_LOG)
        .write("results/log_summary.txt", "INFO: 3\nWARN: 2\nERROR: 2\n");
    let line = assert_fail(&ws.run(TaskId::LogSummary), FailureKind::ValueMismatch);
    assert_eq!(line, "FAIL: WARN count: expected 1, got 2");
}

#[test]
fn test_log_summary_malformed_line() {
    let ws = Workspace::new();
    ws.write("data/server.log", SERVER_LOG)
        .write("results/log_summary.txt", "INFO: 3\nWARN = 1\nERROR: 2\n");
    let line = assert_fail(&ws.run(TaskId::LogSummary), FailureKind::FormatMismatch);
    assert_eq!(
        line,
        "FAIL: Line 2 does not match 'INFO|WARN|ERROR: <n>': 'WARN = 1'"
    );
}

#[test]
fn test_sales_summary_pass() {
    let ws = Workspace::new();
    ws.write("data/sales.csv", SALES_CSV).write(
        "results/sales_summary.json",
        r#"{
  "Gadget": {"total_quantity": 1, "total_revenue": 5.5},
  "Widget": {"total_quantity": 5, "total_revenue": 50.0}
}"#,
    );
    assert_eq!(
        ws.run(TaskId::SalesSummary).line(),
        "PASS: results/sales_summary.json is correct for 2 products"
    );
}

#[test]
fn test_sales_summary_unsorted_keys() {
    let ws = Workspace::new();
    ws.write("data/sales.csv", SALES_CSV).write(
        "results/sales_summary.json",
        r#"{
  "Widget": {"total_quantity": 5, "total_revenue": 50.0},
  "Gadget": {"total_quantity": 1, "total_revenue": 5.5}
}"#,
    );
    let line = assert_fail(&ws.run(TaskId::SalesSummary), FailureKind::OrderMismatch);
    assert_eq!(
        line,
        "FAIL: Product keys must be in alphabetical order, got ['Widget', 'Gadget']"
    );
}

#[test]
fn test_sales_summary_missing_product() {
    let ws = Workspace::new();
    ws.write("data/sales.csv", SALES_CSV).write(
        "results/sales_summary.json",
        r#"{"Widget": {"total_quantity": 5, "total_revenue": 50.0}}"#,
    );
    let line = assert_fail(&ws.run(TaskId::SalesSummary), FailureKind::KeySetMismatch);
    assert_eq!(
        line,
        "FAIL: Product keys mismatch - missing: ['Gadget'], extra: []"
    );
}

#[test]
fn test_sales_summary_wrong_revenue() {
    let ws = Workspace::new();
    ws.write("data/sales.csv", SALES_CSV).write(
        "results/sales_summary.json",
        r#"{
  "Gadget": {"total_quantity": 1, "total_revenue": "5.50"},
  "Widget": {"total_quantity": 5.0, "total_revenue": 50.5}
}"#,
    );
    let line = assert_fail(&ws.run(TaskId::SalesSummary), FailureKind::ValueMismatch);
    assert_eq!(line, "FAIL: Widget total_revenue: expected 50.0, got 50.5");
}

#[test]
fn test_sales_summary_array_root() {
    let ws = Workspace::new();
    ws.write("data/sales.csv", SALES_CSV)
        .write("results/sales_summary.json", "[1, 2, 3]");
    let line = assert_fail(&ws.run(TaskId::SalesSummary), FailureKind::FormatMismatch);
    assert_eq!(line, "FAIL: Document does not match a JSON object root: got array");
}

#[test]
fn test_sales_summary_malformed_fixture() {
    let ws = Workspace::new();
    ws.write("data/sales.csv", "product,quantity,price\nWidget,two,10.00\n")
        .write("results/sales_summary.json", "{}");
    let line = assert_fail(&ws.run(TaskId::SalesSummary), FailureKind::InvalidFixture);
    assert_eq!(
        line,
        "FAIL: Source CSV 'data/sales.csv' row 2 has a non-integer quantity"
    );
}

fn python_tree(ws: &Workspace) {
    ws.write("main.py", "print('hi')\n")
        .write("pkg/util.py", "x = 1\n")
        .write("pkg/notes.md", "not python")
        .write("TOOLS/001/verify.py", "excluded")
        .write("results/stale.py", "excluded");
}

#[test]
fn test_py_files_pass() {
    let ws = Workspace::new();
    python_tree(&ws);
    ws.write("results/py_files.txt", "main.py: 12 bytes\npkg/util.py: 6 bytes\n");
    assert_eq!(
        ws.run(TaskId::PyFiles).line(),
        "PASS: All 2 files matching '*.py' listed with correct sizes"
    );
}

#[test]
fn test_py_files_backslash_paths() {
    let ws = Workspace::new();
    python_tree(&ws);
    ws.write("results/py_files.txt", "main.py: 12 bytes\npkg\\util.py: 6 bytes\n");
    assert_pass(&ws.run(TaskId::PyFiles));
}

#[test]
fn test_py_files_wrong_size() {
    let ws = Workspace::new();
    python_tree(&ws);
    ws.write("results/py_files.txt", "main.py: 13 bytes\npkg/util.py: 6 bytes\n");
    let line = assert_fail(&ws.run(TaskId::PyFiles), FailureKind::ValueMismatch);
    assert_eq!(line, "FAIL: 'main.py' size: expected 12, got 13");
}

#[test]
fn test_py_files_missing_entry() {
    let ws = Workspace::new();
    python_tree(&ws);
    ws.write("results/py_files.txt", "main.py: 12 bytes\n");
    let line = assert_fail(&ws.run(TaskId::PyFiles), FailureKind::CountMismatch);
    assert_eq!(line, "FAIL: Expected 2 files matching '*.py', found 1");
}

#[test]
fn test_page_title_case_insensitive() {
    let ws = Workspace::new();
    ws.write("results/page_title.txt", "example DOMAIN\n");
    assert_eq!(
        ws.run(TaskId::PageTitle).line(),
        "PASS: Page title matches: 'example DOMAIN'"
    );
}

#[test]
fn test_page_title_extra_line() {
    let ws = Workspace::new();
    ws.write("results/page_title.txt", "Example Domain\nMore text\n");
    let line = assert_fail(&ws.run(TaskId::PageTitle), FailureKind::CountMismatch);
    assert_eq!(line, "FAIL: Expected 1 title line, found 2");
}

#[test]
fn test_page_title_wrong_title() {
    let ws = Workspace::new();
    ws.write("results/page_title.txt", "Example\n");
    let line = assert_fail(&ws.run(TaskId::PageTitle), FailureKind::ValueMismatch);
    assert_eq!(line, "FAIL: Page title: expected 'Example Domain', got 'Example'");
}

fn report_fixture(ws: &Workspace) {
    ws.write("TOOLS/003/data/settings.json", r#"{"target_dir": "data/input"}"#)
        .write("data/input/a.txt", "one\n\ntwo\n")
        .write("data/input/b.txt", "x\n")
        .write("data/input/sub/c.txt", "nested files are not reported\n");
}

#[test]
fn test_dir_report_pass() {
    let ws = Workspace::new();
    report_fixture(&ws);
    ws.write(
        "results/report.txt",
        "target_dir: data/input\nfiles:\na.txt: 2 lines\nb.txt: 1 lines\n",
    );
    assert_eq!(
        ws.run(TaskId::DirReport).line(),
        "PASS: Report correct - target_dir='data/input', 2 files reported"
    );
}

#[test]
fn test_dir_report_settings_without_target() {
    let ws = Workspace::new();
    ws.write("TOOLS/003/data/settings.json", "{}")
        .write("results/report.txt", "target_dir: x\nfiles:\n");
    let line = assert_fail(&ws.run(TaskId::DirReport), FailureKind::InvalidFixture);
    assert_eq!(
        line,
        "FAIL: Config file 'TOOLS/003/data/settings.json' has no non-empty 'target_dir' string"
    );
}

#[test]
fn test_dir_report_missing_target() {
    let ws = Workspace::new();
    ws.write("TOOLS/003/data/settings.json", r#"{"target_dir": "data/input"}"#);
    let line = assert_fail(&ws.run(TaskId::DirReport), FailureKind::MissingFixture);
    assert_eq!(line, "FAIL: Target directory 'data/input' does not exist");
}

#[test]
fn test_dir_report_wrong_target() {
    let ws = Workspace::new();
    report_fixture(&ws);
    ws.write(
        "results/report.txt",
        "target_dir: other\nfiles:\na.txt: 2 lines\nb.txt: 1 lines\n",
    );
    let line = assert_fail(&ws.run(TaskId::DirReport), FailureKind::ValueMismatch);
    assert_eq!(line, "FAIL: target_dir: expected data/input, got other");
}

#[test]
fn test_dir_report_unsorted() {
    let ws = Workspace::new();
    report_fixture(&ws);
    ws.write(
        "results/report.txt",
        "target_dir: data/input\nfiles:\nb.txt: 1 lines\na.txt: 2 lines\n",
    );
    let line = assert_fail(&ws.run(TaskId::DirReport), FailureKind::OrderMismatch);
    assert_eq!(
        line,
        "FAIL: Files must be in alphabetical order, got ['b.txt', 'a.txt']"
    );
}

#[test]
fn test_dir_report_wrong_line_count() {
    let ws = Workspace::new();
    report_fixture(&ws);
    ws.write(
        "results/report.txt",
        "target_dir: data/input\nfiles:\na.txt: 3 lines\nb.txt: 1 lines\n",
    );
    let line = assert_fail(&ws.run(TaskId::DirReport), FailureKind::ValueMismatch);
    assert_eq!(line, "FAIL: 'a.txt' line count: expected 2, got 3");
}

#[test]
fn test_dir_report_target_dir_is_trimmed() {
    let ws = Workspace::new();
    ws.write("TOOLS/003/data/settings.json", r#"{"target_dir": " data/input "}"#)
        .write("data/input/a.txt", "one\n")
        .write("results/report.txt", "target_dir: data/input\nfiles:\na.txt: 1 lines\n");
    assert_eq!(
        ws.run(TaskId::DirReport).line(),
        "PASS: Report correct - target_dir='data/input', 1 files reported"
    );
}

#[test]
fn test_dir_report_header_must_be_exact() {
    let ws = Workspace::new();
    report_fixture(&ws);
    ws.write(
        "results/report.txt",
        "target_dir: data/input\nFILES :\na.txt: 2 lines\nb.txt: 1 lines\n",
    );
    let line = assert_fail(&ws.run(TaskId::DirReport), FailureKind::FormatMismatch);
    assert_eq!(line, "FAIL: Line 2 does not match 'files:': 'FILES :'");
}

#[test]
fn test_dir_report_count_checked_before_entry_format() {
    let ws = Workspace::new();
    report_fixture(&ws);
    ws.write(
        "results/report.txt",
        "target_dir: data/input\nfiles:\na.txt: 2 lines\nb.txt = 1\nc.txt: 0 lines\n",
    );
    let line = assert_fail(&ws.run(TaskId::DirReport), FailureKind::CountMismatch);
    assert_eq!(line, "FAIL: Expected 2 file entries, found 3");
}

#[test]
fn test_dir_report_malformed_entry() {
    let ws = Workspace::new();
    report_fixture(&ws);
    ws.write(
        "results/report.txt",
        "target_dir: data/input\nfiles:\na.txt: 2 lines\nb.txt = 1\n",
    );
    let line = assert_fail(&ws.run(TaskId::DirReport), FailureKind::FormatMismatch);
    assert_eq!(line, "FAIL: Line 4 does not match '<name>: <n> lines': 'b.txt = 1'");
}

#[cfg(unix)]
#[test]
fn test_py_files_lists_symlinked_files() {
    let ws = Workspace::new();
    ws.write("real/a.py", "print(1)\n");
    std::os::unix::fs::symlink(ws.path().join("real/a.py"), ws.path().join("link.py"))
        .expect("Failed to create symlink");
    ws.write("results/py_files.txt", "link.py: 9 bytes\nreal/a.py: 9 bytes\n");
    assert_pass(&ws.run(TaskId::PyFiles));
}
