// File: crates/coolplot-core/tests/table.rs
// Purpose: Whitespace table parsing, sentinel-row skip, and error variants.

use coolplot_core::{DataTable, TableError};

fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
    let dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_whitespace_table() {
    let path = write_temp("basic.dat", "0 0 0 0\n1 1e4 0 5e-22\n2 2e4 0 4e-22\n");
    let table = DataTable::load(&path).expect("load");
    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.n_cols(), 4);
    assert_eq!(table.column(1).unwrap(), vec![0.0, 1e4, 2e4]);
}

#[test]
fn xy_skips_sentinel_row() {
    // N rows in, N-1 points out: row 0 never plots.
    let path = write_temp(
        "skip.dat",
        "0 0 0 0\n1 1e4 0 5e-22\n2 2e4 0 4e-22\n3 3e4 0 3e-22\n",
    );
    let table = DataTable::load(&path).unwrap();
    let points = table.xy(1, 3).unwrap();
    assert_eq!(points.len(), table.n_rows() - 1);
    assert_eq!(points[0], (1e4, 5e-22));
    assert_eq!(points[2], (3e4, 3e-22));
}

#[test]
fn skips_blank_and_comment_lines() {
    let table = DataTable::parse("# generated by analysis dump\n\n0 0\n1 2\n\n2 4\n").unwrap();
    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.n_cols(), 2);
}

#[test]
fn handles_mixed_whitespace_and_exponents() {
    let table = DataTable::parse("0\t0\t0\n1   1.5e4\t-2.5E-22\n").unwrap();
    assert_eq!(table.rows()[1], vec![1.0, 1.5e4, -2.5e-22]);
}

#[test]
fn ragged_row_is_fatal() {
    let err = DataTable::parse("1 2 3\n4 5\n").unwrap_err();
    match err {
        TableError::Ragged { line, expected, found } => {
            assert_eq!(line, 2);
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        other => panic!("expected Ragged, got {other:?}"),
    }
}

#[test]
fn bad_token_is_fatal() {
    let err = DataTable::parse("1 2\n3 x\n").unwrap_err();
    match err {
        TableError::Parse { line, token } => {
            assert_eq!(line, 2);
            assert_eq!(token, "x");
        }
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn column_out_of_range() {
    let table = DataTable::parse("1 2\n3 4\n").unwrap();
    let err = table.xy(1, 3).unwrap_err();
    match err {
        TableError::ColumnOutOfRange { col, width } => {
            assert_eq!(col, 3);
            assert_eq!(width, 2);
        }
        other => panic!("expected ColumnOutOfRange, got {other:?}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = DataTable::load("target/test_out/definitely-missing.dat").unwrap_err();
    assert!(matches!(err, TableError::Io(_)));
}

#[test]
fn empty_input_is_an_error() {
    assert!(matches!(DataTable::parse("").unwrap_err(), TableError::Empty));
    assert!(matches!(DataTable::parse("# only a comment\n").unwrap_err(), TableError::Empty));
}
