use std::io::Write;
use std::process::{Command, Output};

const PHONES: &str = "tests/fixtures/phones.csv";

fn csv_query(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csv-query"))
        .args(args)
        .output()
        .expect("failed to run csv-query")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn prints_whole_file_without_options() {
    let out = csv_query(&["--file", PHONES]);
    assert!(out.status.success());
    let table = stdout(&out);
    assert!(table.starts_with("+------------------+"));
    assert!(table.contains("| name             | brand   | price | rating |"));
    assert!(table.contains("| galaxy s23 ultra | samsung |  1199 |    4.8 |"));
    assert!(stderr(&out).is_empty());
}

#[test]
fn aggregate_prints_single_cell_table() {
    let out = csv_query(&["--file", PHONES, "--aggregate", "price=avg"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "+-----+\n| avg |\n+=====+\n| 674 |\n+-----+\n");
}

#[test]
fn where_order_and_aggregate_compose() {
    let out = csv_query(&[
        "--file",
        PHONES,
        "--where",
        "brand=xiaomi",
        "--order-by",
        "price=desc",
        "--aggregate",
        "rating=max",
    ]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("| 4.6 |"));
}

#[test]
fn order_by_desc_lists_rows_in_order() {
    let out = csv_query(&["--file", PHONES, "--order-by", "rating=desc"]);
    let table = stdout(&out);
    let pos = |needle: &str| table.find(needle).unwrap();
    assert!(pos("iphone") < pos("galaxy"));
    assert!(pos("galaxy") < pos("redmi"));
    assert!(pos("redmi") < pos("poco"));
}

#[test]
fn invalid_condition_is_reported_and_ignored() {
    let out = csv_query(&["--file", PHONES, "--where", "rating!4.5"]);
    assert!(out.status.success());
    assert_eq!(stderr(&out).trim_end(), "Invalid filter condition: rating!4.5");
    // All four rows plus the header.
    assert_eq!(stdout(&out).matches("\n| ").count(), 5);
}

#[test]
fn ordering_failure_is_reported_and_ignored() {
    let out = csv_query(&["--file", PHONES, "--order-by", "color=asc"]);
    assert!(out.status.success());
    assert!(stderr(&out).contains("Ordering failed: unknown column 'color'"));
    assert!(stdout(&out).contains("iphone 15 pro"));
}

#[test]
fn unsupported_aggregate_prints_no_table() {
    let out = csv_query(&["--file", PHONES, "--aggregate", "price=sum"]);
    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("Unsupported aggregation operator: sum"));
}

#[test]
fn aggregate_of_text_column_prints_no_table() {
    let out = csv_query(&["--file", PHONES, "--aggregate", "brand=min"]);
    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("Aggregation failed: could not convert 'apple' to a number"));
}

#[test]
fn missing_file_fails() {
    let out = csv_query(&["--file", "tests/fixtures/does_not_exist.csv"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Failed to read"));
}

#[test]
fn file_flag_is_required() {
    let out = csv_query(&["--where", "a=b"]);
    assert!(!out.status.success());
}

#[test]
fn version_flag_is_not_accepted() {
    let out = csv_query(&["--file", PHONES, "--version"]);
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
}

#[test]
fn repeating_average_is_printed_with_six_significant_digits() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x").unwrap();
    for v in ["1", "2", "2"] {
        writeln!(file, "{v}").unwrap();
    }
    file.flush().unwrap();

    let path = file.path().to_str().unwrap();
    let out = csv_query(&["--file", path, "--aggregate", "x=avg"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "+---------+\n|     avg |\n+=========+\n| 1.66667 |\n+---------+\n");
}

#[test]
fn nan_cells_fail_aggregation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x\nnan\n1").unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap();
    let out = csv_query(&["--file", path, "--aggregate", "x=min"]);
    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("Aggregation failed: could not convert 'nan' to a number"));
}
