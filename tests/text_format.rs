//! Reading and writing matrix files

use std::fs;
use std::path::Path;

use spmatrix::{from_file, Error, SparseMatrix};

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_read_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "a.txt", "rows=3\ncols=3\n(0,0,1)\n\n(2, 1, -9)\n");

    let m = SparseMatrix::<i64>::from_file(&path).unwrap();

    assert_eq!(m.shape(), (3, 3));
    assert_eq!(m.get_element(0, 0), 1);
    assert_eq!(m.get_element(2, 1), -9);
    assert_eq!(m.nnz(), 2);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");

    match from_file::<i64>(&path) {
        Err(Error::FileNotFound { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected FileNotFound, got {:?}", other),
    }

    let message = from_file::<i64>(&path).unwrap_err().to_string();
    assert!(message.contains("nope.txt"));
}

#[test]
fn test_wrong_separator_in_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "bad.txt", "rows:3\ncols=3\n");

    assert!(matches!(
        from_file::<i64>(&path),
        Err(Error::Format { line: 1, .. })
    ));
}

#[test]
fn test_two_field_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "bad.txt", "rows=3\ncols=3\n(0,0,1)\n(1,2)\n");

    assert!(matches!(
        from_file::<i64>(&path),
        Err(Error::Format { line: 4, .. })
    ));
}

#[test]
fn test_invalid_utf8_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.txt");
    fs::write(&path, b"rows=1\ncols=1\n(0,0,\xff)").unwrap();

    assert!(matches!(
        from_file::<i64>(&path),
        Err(Error::Format { line: 3, .. })
    ));
}

#[test]
fn test_write_then_read_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut m = SparseMatrix::<i64>::new(5, 7);
    m.set_element(4, 6, 42).unwrap();
    m.set_element(0, 3, -1).unwrap();
    m.to_file(&path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "rows=5\ncols=7\n(0, 3, -1)\n(4, 6, 42)"
    );
    assert_eq!(SparseMatrix::<i64>::from_file(&path).unwrap(), m);
}

#[test]
fn test_serialized_order_is_independent_of_input_order() {
    let shuffled = "rows=3\ncols=3\n(2,2,9)\n(0,1,1)\n(1,0,4)\n(0,0,7)";
    let m = SparseMatrix::<i64>::from_text(shuffled).unwrap();

    assert_eq!(
        m.to_text(),
        "rows=3\ncols=3\n(0, 0, 7)\n(0, 1, 1)\n(1, 0, 4)\n(2, 2, 9)"
    );
}

#[test]
fn test_display_matches_to_text() {
    let m = SparseMatrix::<i64>::identity(3);
    assert_eq!(format!("{}", m), m.to_text());
}
