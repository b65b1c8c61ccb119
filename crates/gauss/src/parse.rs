//! Reading augmented matrices from whitespace-delimited text.
//!
//! One row per line, values separated by any run of spaces or tabs. Blank lines are ignored.
//!
//! ```text
//! 2 1 -1 8
//! -3 -1 2 -11
//! -2 1 2 -3
//! ```
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::{AugmentedMatrix, Error};

/// Parses the values of one line; `row` is only used for error reporting.
pub fn parse_row(line: &str, row: usize) -> Result<Vec<f64>, Error> {
    line.split_whitespace()
        .enumerate()
        .map(|(col, token)| {
            let value: f64 = token.parse().map_err(|source| Error::InvalidNumber {
                row,
                col,
                token: token.to_owned(),
                source,
            })?;
            if !value.is_finite() {
                return Err(Error::NonFinite { row, col });
            }
            Ok(value)
        })
        .collect()
}

pub fn parse_matrix(text: &str) -> Result<AugmentedMatrix<f64>, Error> {
    let rows = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(row, line)| parse_row(line, row))
        .collect::<Result<Vec<_>, _>>()?;
    AugmentedMatrix::from_rows(&rows)
}

/// Like [`parse_matrix`], reading lines until end of input.
pub fn read_matrix<R: BufRead>(reader: R) -> Result<AugmentedMatrix<f64>, Error> {
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_row(&line, rows.len())?);
    }
    AugmentedMatrix::from_rows(&rows)
}

/// Loads a matrix file. I/O failures are reported as [`Error::Read`], malformed content keeps
/// its parse error.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<AugmentedMatrix<f64>, Error> {
    let path = path.as_ref();
    let read_err = |source| Error::Read {
        path: path.to_owned(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    debug!("load_file: reading {}", path.display());

    read_matrix(BufReader::new(file)).map_err(|e| match e {
        Error::Io(source) => read_err(source),
        other => other,
    })
}
