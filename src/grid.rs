//! Validated DNA grid
//!
//! `DnaGrid` can only be built through [`DnaGrid::parse`], which enforces the
//! full validation contract: non-empty, square, alphabet-only. The scanner
//! takes `&DnaGrid`, so "scan an unvalidated grid" is unrepresentable rather
//! than undefined behavior.

use crate::config::DetectorConfig;
use crate::validation::ValidationError;

/// A square N×N grid of DNA bases that has passed validation.
///
/// The grid is immutable; one detection call neither mutates nor retains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnaGrid {
    cells: Vec<Vec<u8>>,
    size: usize,
}

impl DnaGrid {
    /// Validate raw caller-supplied rows and build a grid.
    ///
    /// Rules are checked in order, first failure wins:
    /// 1. zero rows → [`ValidationError::EmptyInput`]
    /// 2. any row's length ≠ row count → [`ValidationError::NotSquare`]
    /// 3. any symbol outside the configured alphabet →
    ///    [`ValidationError::InvalidAlphabet`], enumerating every offender
    pub fn parse<S: AsRef<str>>(
        rows: &[S],
        config: &DetectorConfig,
    ) -> Result<Self, ValidationError> {
        if rows.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let size = rows.len();
        for (row, line) in rows.iter().enumerate() {
            let actual = line.as_ref().chars().count();
            if actual != size {
                return Err(ValidationError::NotSquare {
                    row,
                    expected: size,
                    actual,
                });
            }
        }

        let mut invalid: Vec<char> = rows
            .iter()
            .flat_map(|line| line.as_ref().chars())
            .filter(|&c| !c.is_ascii() || !config.is_valid_symbol(c as u8))
            .collect();
        if !invalid.is_empty() {
            invalid.sort_unstable();
            invalid.dedup();
            return Err(ValidationError::InvalidAlphabet { symbols: invalid });
        }

        // All cells are ASCII alphabet symbols at this point.
        let cells = rows
            .iter()
            .map(|line| line.as_ref().as_bytes().to_vec())
            .collect();

        tracing::debug!(size, "validated DNA grid");
        Ok(Self { cells, size })
    }

    /// Side length N of the square grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Symbol at (row, col). Both indices must be < `size()`.
    pub fn at(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// The grid's rows, top to bottom.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.cells
    }
}
