//! Sequence scanner: counts aligned runs of identical bases
//!
//! A grid is mutant when strictly more than `mutant_threshold` runs of
//! `run_length` identical bases are found across four direction classes,
//! scanned in a fixed order: rows, columns, main diagonals (top-left to
//! bottom-right), anti-diagonals (top-right to bottom-left). Scanning stops
//! the moment the verdict is decided.
//!
//! Counting is intentionally asymmetric, matching the reference behavior:
//! rows and columns are a per-line boolean test (a row of six identical bases
//! contributes exactly 1), while each diagonal 4-window counts independently
//! (one long diagonal can contribute several). See DESIGN.md.

use crate::config::DetectorConfig;
use crate::grid::DnaGrid;

/// Detect whether a validated grid is mutant.
///
/// Pure function: no side effects, deterministic, never fails. All error
/// paths belong to [`DnaGrid::parse`].
pub fn is_mutant(grid: &DnaGrid, config: &DetectorConfig) -> bool {
    let needed = config.mutant_threshold + 1;
    let found = count_sequences(grid, config, needed);
    tracing::debug!(found, needed, "scan complete");
    found >= needed
}

/// Count qualifying runs, stopping as soon as `limit` is reached.
///
/// Exposed for tests and callers that want the (capped) count rather than
/// the boolean verdict.
pub fn count_sequences(grid: &DnaGrid, config: &DetectorConfig, limit: usize) -> usize {
    let n = grid.size();
    let len = config.run_length;
    let mut found = 0;

    // 1. Horizontal: one contribution per qualifying row.
    for row in grid.rows() {
        if line_has_run(row.iter().copied(), len) {
            found += 1;
            if found >= limit {
                return found;
            }
        }
    }

    // 2. Vertical: one contribution per qualifying column.
    for col in 0..n {
        if line_has_run((0..n).map(|row| grid.at(row, col)), len) {
            found += 1;
            if found >= limit {
                return found;
            }
        }
    }

    if n < len || len == 0 {
        return found;
    }

    // 3. Main diagonals: every 4-window stepping (+1,+1) counts on its own.
    for i in 0..=n - len {
        for j in 0..=n - len {
            let first = grid.at(i, j);
            if (1..len).all(|k| grid.at(i + k, j + k) == first) {
                found += 1;
                if found >= limit {
                    return found;
                }
            }
        }
    }

    // 4. Anti-diagonals: windows stepping (+1,-1).
    for i in 0..=n - len {
        for j in len - 1..n {
            let first = grid.at(i, j);
            if (1..len).all(|k| grid.at(i + k, j - k) == first) {
                found += 1;
                if found >= limit {
                    return found;
                }
            }
        }
    }

    found
}

/// Single-pass run detection over one line of symbols.
///
/// Keeps a running length of the current identical stretch; true as soon as
/// it reaches `run_length`.
fn line_has_run(symbols: impl Iterator<Item = u8>, run_length: usize) -> bool {
    let mut current = None;
    let mut run = 0;
    for symbol in symbols {
        if current == Some(symbol) {
            run += 1;
        } else {
            current = Some(symbol);
            run = 1;
        }
        if run >= run_length {
            return true;
        }
    }
    false
}
