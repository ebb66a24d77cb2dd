use std::{collections::VecDeque, io::BufRead, str::FromStr};

use anyhow::{ensure, Context, Result};
use thiserror::Error;

use crate::augmented_matrix::AugmentedMatrix;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("input ended while reading {expected}")]
    UnexpectedEnd { expected: String },

    #[error("token {position} ({token:?}) is not a valid {expected}")]
    BadToken {
        position: usize,
        token: String,
        expected: String,
    },
}

/// Whitespace separated tokens pulled lazily from a reader, one line at a
/// time, so tokens may be spread over lines in any way.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    tokens_read: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            tokens_read: 0,
        }
    }

    fn next_raw_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("reading a line of input")?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    pub fn next_token<T: FromStr>(&mut self, expected: &str) -> Result<T> {
        let token = self
            .next_raw_token()?
            .ok_or_else(|| InputError::UnexpectedEnd {
                expected: expected.to_owned(),
            })?;
        self.tokens_read += 1;
        let parsed = token.parse::<T>().map_err(|_| InputError::BadToken {
            position: self.tokens_read,
            token,
            expected: expected.to_owned(),
        })?;
        Ok(parsed)
    }
}

// dimensions are typed by the user; only this much is reserved up front
const MAX_PREALLOCATED: usize = 1024;

/// Points at which an interactive reader asks the user for more input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Dimensions,
    Entries,
}

/// Number of equations and of unknowns, as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub unknowns: usize,
}

impl Dimensions {
    pub fn augmented_columns(&self) -> usize {
        self.unknowns + 1
    }
}

pub fn read_dimensions<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Dimensions> {
    // parsed as signed so "-2" gets a dimension error instead of a parse error
    let rows: i64 = tokens.next_token("row count")?;
    let unknowns: i64 = tokens.next_token("column count")?;
    ensure!(rows > 0, "row count must be positive, got {rows}");
    ensure!(unknowns > 0, "column count must be positive, got {unknowns}");
    Ok(Dimensions {
        rows: rows as usize,
        unknowns: unknowns as usize,
    })
}

/// Reads `rows * (unknowns + 1)` numbers in row-major order.
pub fn read_entries<R: BufRead>(
    tokens: &mut TokenReader<R>,
    dimensions: Dimensions,
) -> Result<AugmentedMatrix> {
    let columns = dimensions.augmented_columns();
    let mut rows = Vec::with_capacity(dimensions.rows.min(MAX_PREALLOCATED));
    for r in 0..dimensions.rows {
        let mut row = Vec::with_capacity(columns.min(MAX_PREALLOCATED));
        for c in 0..columns {
            let value: f64 = tokens
                .next_token("number")
                .with_context(|| format!("reading entry ({}, {})", r + 1, c + 1))?;
            row.push(value);
        }
        rows.push(row);
    }
    let matrix = AugmentedMatrix::from_rows(rows).context("building the augmented matrix")?;
    Ok(matrix)
}

pub fn read_augmented_system<R: BufRead>(reader: R) -> Result<AugmentedMatrix> {
    read_augmented_system_with_prompts(reader, |_| {})
}

/// Like [`read_augmented_system`], calling `prompt` right before each group
/// of tokens is read.
pub fn read_augmented_system_with_prompts<R: BufRead>(
    reader: R,
    mut prompt: impl FnMut(Prompt),
) -> Result<AugmentedMatrix> {
    let mut tokens = TokenReader::new(reader);
    prompt(Prompt::Dimensions);
    let dimensions = read_dimensions(&mut tokens).context("reading dimensions")?;
    prompt(Prompt::Entries);
    read_entries(&mut tokens, dimensions).context("reading matrix entries")
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;
    use crate::augmented_matrix::MatrixError;

    #[test]
    fn layout_of_tokens_does_not_matter() {
        let one_line = read_augmented_system(Cursor::new("2 2 2 1 5 1 -1 1")).unwrap();
        let many_lines =
            read_augmented_system(Cursor::new("2 2\n2 1\n5\n\n  1 -1   1\n")).unwrap();
        assert_eq!(one_line, many_lines);
        assert_eq!(one_line.row(0), &[2.0, 1.0, 5.0]);
        assert_eq!(one_line.row(1), &[1.0, -1.0, 1.0]);
    }

    #[test]
    fn accepts_decimal_and_exponent_notation() {
        let m = read_augmented_system(Cursor::new("1 1\n0.5 1e-3")).unwrap();
        assert_eq!(m.row(0), &[0.5, 0.001]);
    }

    #[test]
    fn names_the_bad_token() {
        let err = read_augmented_system(Cursor::new("1 1\n2 x")).unwrap_err();
        let input_error = err.downcast_ref::<InputError>().unwrap();
        assert_eq!(
            input_error,
            &InputError::BadToken {
                position: 4,
                token: "x".to_owned(),
                expected: "number".to_owned()
            }
        );
        assert!(format!("{err:#}").contains("reading entry (1, 2)"));
    }

    #[test]
    fn truncated_input_is_an_error() {
        let err = read_augmented_system(Cursor::new("2 1\n1 2\n3")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(read_augmented_system(Cursor::new("0 2")).is_err());
        assert!(read_augmented_system(Cursor::new("2 -1")).is_err());
        assert!(read_augmented_system(Cursor::new("two 1")).is_err());
    }

    #[test]
    fn huge_dimensions_fail_on_missing_entries() {
        let err = read_augmented_system(Cursor::new("4000000000000000000 1\n1 2")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::UnexpectedEnd { .. })
        ));
        assert!(read_augmented_system(Cursor::new("2 4000000000000000000\n1 2")).is_err());
    }

    #[test]
    fn prompts_come_before_their_tokens() {
        let mut prompts = vec![];
        read_augmented_system_with_prompts(Cursor::new("1 1\n3 4"), |p| prompts.push(p)).unwrap();
        assert_eq!(prompts, vec![Prompt::Dimensions, Prompt::Entries]);

        let mut prompts = vec![];
        assert!(read_augmented_system_with_prompts(Cursor::new("0 1"), |p| prompts.push(p)).is_err());
        assert_eq!(prompts, vec![Prompt::Dimensions]);
    }

    #[test]
    fn rejects_non_finite_entries() {
        let err = read_augmented_system(Cursor::new("1 1\ninf 2")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MatrixError>(),
            Some(MatrixError::NonFiniteEntry { row: 0, column: 0, .. })
        ));
    }
}
