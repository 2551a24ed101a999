//! JSON output format for detection verdicts

use serde::{Deserialize, Serialize};

use crate::grid::DnaGrid;

/// Format tag so consumers can detect schema changes.
pub const JSON_FORMAT: &str = "mutantscan-json-v1";

/// Machine-readable verdict for one analyzed grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonVerdict {
    /// Output schema identifier
    pub format: String,
    /// Side length N of the analyzed grid
    pub size: usize,
    /// Whether the grid was classified as mutant
    pub mutant: bool,
}

impl JsonVerdict {
    pub fn new(grid: &DnaGrid, mutant: bool) -> Self {
        Self {
            format: JSON_FORMAT.to_string(),
            size: grid.size(),
            mutant,
        }
    }
}
