//! Detector configuration: alphabet and run thresholds
//!
//! The reference behavior hard-codes three constants: the four valid bases,
//! the run length (4 identical symbols), and the mutant threshold (more than
//! one run). They live here as named configuration so the detector can be
//! exercised against alternate alphabets or thresholds without code changes.

/// The canonical DNA alphabet in uppercase.
pub const DNA_BASES: &[u8] = b"ATCG";

/// Default length of an aligned run of identical bases.
pub const DEFAULT_RUN_LENGTH: usize = 4;

/// Default threshold: a grid is mutant when strictly more runs than this are found.
pub const DEFAULT_MUTANT_THRESHOLD: usize = 1;

/// Tunable parameters for validation and scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Valid uppercase symbols. Anything outside this set fails validation.
    pub alphabet: Vec<u8>,
    /// How many consecutive identical symbols make one run.
    pub run_length: usize,
    /// Verdict is mutant iff the run count exceeds this value.
    pub mutant_threshold: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            alphabet: DNA_BASES.to_vec(),
            run_length: DEFAULT_RUN_LENGTH,
            mutant_threshold: DEFAULT_MUTANT_THRESHOLD,
        }
    }
}

impl DetectorConfig {
    /// Standard DNA configuration: {A,T,C,G}, runs of 4, "more than one" threshold.
    pub fn dna() -> Self {
        Self::default()
    }

    /// Check whether a symbol belongs to the configured alphabet.
    pub fn is_valid_symbol(&self, symbol: u8) -> bool {
        self.alphabet.contains(&symbol)
    }
}
