//! CSV loading and saving round-trips

use std::fs;
use std::path::Path;

use dsakit::csv;
use dsakit::errors::CsvError;
use dsakit::util::testing;
use tempfile::tempdir;

fn write_fixture(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("fixture written");
    path
}

#[test]
fn given_a_csv_file_when_reading_rows_then_empty_lines_are_dropped() {
    testing::init_test_setup();
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "values.csv", "1,2,3\n\n4,5,6\r\n\n");

    let rows = csv::read_rows(&path).unwrap();
    assert_eq!(rows, vec!["1,2,3".to_string(), "4,5,6".to_string()]);
}

#[test]
fn given_numeric_fields_when_parsing_then_rows_and_columns_are_preserved() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "values.csv", "1,2.5,-3\n0,1e2,7\n");

    let parsed = csv::read_numeric(&path).unwrap();
    assert_eq!(parsed, vec![vec![1.0, 2.5, -3.0], vec![0.0, 100.0, 7.0]]);
}

#[test]
fn given_a_non_numeric_field_when_parsing_then_the_fault_names_the_position() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "values.csv", "1,2\n3,oops\n");

    let err = csv::read_numeric(&path).unwrap_err();
    match err {
        CsvError::ParseNumber { value, row, col } => {
            assert_eq!(value, "oops");
            assert_eq!(row, 1);
            assert_eq!(col, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn given_a_wrong_extension_when_reading_then_the_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "values.txt", "1,2,3\n");

    assert!(matches!(
        csv::read_rows(&path),
        Err(CsvError::NotCsv(_))
    ));
}

#[test]
fn given_a_missing_file_when_reading_then_not_found_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    assert!(matches!(
        csv::read_rows(&path),
        Err(CsvError::FileNotFound(_))
    ));
}

#[test]
fn given_rows_when_writing_then_reading_them_back_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let rows = vec!["1,2,3".to_string(), "4,5,6".to_string()];

    let written = csv::write_rows(&path, &rows, false).unwrap();
    assert_eq!(written, path);
    assert_eq!(csv::read_rows(&written).unwrap(), rows);
}

#[test]
fn given_an_existing_file_when_writing_without_overwrite_then_a_copy_is_created() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "out.csv", "old\n");
    let rows = vec!["new".to_string()];

    let written = csv::write_rows(&path, &rows, false).unwrap();
    assert_ne!(written, path);
    assert!(written.to_string_lossy().contains("out - Copy"));
    // the original is untouched
    assert_eq!(csv::read_rows(&path).unwrap(), vec!["old".to_string()]);
    assert_eq!(csv::read_rows(&written).unwrap(), rows);
}

#[test]
fn given_an_existing_file_when_writing_with_overwrite_then_it_is_replaced() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "out.csv", "old\n");
    let rows = vec!["new".to_string()];

    let written = csv::write_rows(&path, &rows, true).unwrap();
    assert_eq!(written, path);
    assert_eq!(csv::read_rows(&path).unwrap(), rows);
}

#[test]
fn given_a_nested_target_when_writing_then_parent_directories_are_created() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deep").join("nested").join("out.csv");
    let rows = vec!["1".to_string()];

    let written = csv::write_rows(&path, &rows, false).unwrap();
    assert_eq!(csv::read_rows(&written).unwrap(), rows);
}
