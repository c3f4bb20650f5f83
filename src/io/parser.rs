//! Reader for the line-oriented matrix text format
//!
//! ```text
//! rows=<int>
//! cols=<int>
//! (<row>, <col>, <value>)
//! ```
//!
//! Blank lines after the header are ignored. Any structural problem is a
//! [`Error::Format`]; a triple that is well formed but lies outside the
//! declared shape is an [`Error::IndexOutOfBounds`].

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::matrix::{Element, SparseMatrix};

/// Parses a matrix from its text form
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn from_text<T: Element>(text: &str) -> Result<SparseMatrix<T>> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = text.lines();

    let num_rows = parse_dimension(lines.next(), "rows=", 1)?;
    let num_cols = parse_dimension(lines.next(), "cols=", 2)?;

    let mut matrix = SparseMatrix::new(num_rows, num_cols);

    for (idx, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (row, col, value) = parse_triple::<T>(line, idx + 3)?;
        matrix.set_element(row, col, value)?;
    }

    debug!(num_rows, num_cols, nnz = matrix.nnz(), "parsed matrix");

    Ok(matrix)
}

/// Reads and parses a matrix file
///
/// A path that cannot be read yields [`Error::FileNotFound`]; content that is
/// not valid UTF-8 is treated as a format error.
pub fn from_file<T: Element>(path: impl AsRef<Path>) -> Result<SparseMatrix<T>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        let breaks = valid
            .iter()
            .enumerate()
            .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && valid.get(i + 1) != Some(&b'\n')))
            .count();
        let line = breaks + 1;
        Error::format(line, "content is not valid UTF-8")
    })?;

    debug!(path = %path.display(), bytes = text.len(), "read matrix file");

    from_text(&text)
}

/// Parses `<prefix><int>`; anything after a second `=` is ignored
fn parse_dimension(line: Option<&str>, prefix: &str, line_no: usize) -> Result<usize> {
    let line = line
        .ok_or_else(|| Error::format(line_no, format!("missing '{}' line", prefix)))?
        .trim();

    let rest = line
        .strip_prefix(prefix)
        .ok_or_else(|| Error::format(line_no, format!("expected line starting with '{}'", prefix)))?;

    let value = rest.split('=').next().unwrap_or_default().trim();
    value
        .parse()
        .map_err(|_| Error::format(line_no, format!("invalid dimension '{}'", value)))
}

/// Parses `(<row>, <col>, <value>)` from an already trimmed line
fn parse_triple<T: Element>(line: &str, line_no: usize) -> Result<(usize, usize, T)> {
    let inner = line
        .strip_prefix('(')
        .and_then(|l| l.strip_suffix(')'))
        .ok_or_else(|| Error::format(line_no, "entry must be enclosed in parentheses"))?;

    let fields: Vec<&str> = inner.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(Error::format(
            line_no,
            format!("expected 3 fields, found {}", fields.len()),
        ));
    }

    let row = parse_field::<usize>(fields[0], "row", line_no)?;
    let col = parse_field::<usize>(fields[1], "column", line_no)?;
    let value = parse_field::<T>(fields[2], "value", line_no)?;

    Ok((row, col, value))
}

fn parse_field<F: FromStr>(field: &str, what: &str, line_no: usize) -> Result<F> {
    field
        .parse()
        .map_err(|_| Error::format(line_no, format!("invalid {} '{}'", what, field)))
}

impl<T: Element> FromStr for SparseMatrix<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        from_text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<SparseMatrix<i64>> {
        from_text(text)
    }

    #[test]
    fn test_parse_basic() {
        let m = parse("rows=2\ncols=3\n(0, 0, 1)\n(1,2,-4)\n").unwrap();

        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get_element(0, 0), 1);
        assert_eq!(m.get_element(1, 2), -4);
    }

    #[test]
    fn test_blank_lines_and_whitespace() {
        let m = parse("  rows=2  \r\ncols= 2\r\n\r\n   \n  ( 1 , 0 , 7 )  \n\n").unwrap();

        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.get_element(1, 0), 7);
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let m = parse("rows=2\rcols=2\r(0,0,1)\r\r(1, 1, 4)").unwrap();

        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.get_element(0, 0), 1);
        assert_eq!(m.get_element(1, 1), 4);

        let err = parse("rows=2\rcols=2\r\r(1,2)").unwrap_err();
        assert!(matches!(err, Error::Format { line: 4, .. }));
    }

    #[test]
    fn test_later_duplicate_overwrites() {
        let m = parse("rows=1\ncols=1\n(0,0,3)\n(0,0,5)").unwrap();
        assert_eq!(m.get_element(0, 0), 5);

        let cleared = parse("rows=1\ncols=1\n(0,0,3)\n(0,0,0)").unwrap();
        assert_eq!(cleared.nnz(), 0);
    }

    #[test]
    fn test_header_only() {
        let m = parse("rows=4\ncols=5").unwrap();
        assert_eq!(m.shape(), (4, 5));
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    fn test_text_after_second_equals_ignored() {
        let m = parse("rows=3=9\ncols=2").unwrap();
        assert_eq!(m.shape(), (3, 2));
    }

    #[test]
    fn test_bad_headers() {
        for text in [
            "",
            "rows=2",
            "rows:3\ncols=3",
            "cols=3\nrows=3",
            "rows=x\ncols=3",
            "rows=\ncols=3",
            "rows=-1\ncols=3",
            "rows=2\ncols=2.5",
        ] {
            assert!(
                matches!(parse(text), Err(Error::Format { .. })),
                "expected format error for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_bad_entries() {
        for body in [
            "(1,2)",
            "(1,2,3,4)",
            "1,2,3",
            "(1,2,3",
            "1,2,3)",
            "()",
            "(a,0,1)",
            "(0,0,1.5)",
            "(-1,0,1)",
            "(0,0,)",
        ] {
            let text = format!("rows=3\ncols=3\n{}", body);
            assert!(
                matches!(parse(&text), Err(Error::Format { line: 3, .. })),
                "expected format error for {:?}",
                body
            );
        }
    }

    #[test]
    fn test_entry_outside_shape() {
        let err = parse("rows=2\ncols=2\n(2,0,1)").unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds { row: 2, col: 0, .. }));
    }

    #[test]
    fn test_value_out_of_element_range() {
        let result = from_text::<i8>("rows=1\ncols=1\n(0,0,300)");
        assert!(matches!(result, Err(Error::Format { .. })));
    }

    #[test]
    fn test_from_str() {
        let m: SparseMatrix = "rows=1\ncols=2\n(0,1,9)".parse().unwrap();
        assert_eq!(m.get_element(0, 1), 9);
    }
}
