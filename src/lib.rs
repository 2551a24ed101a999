//! Mutantscan - DNA mutant detection for square base grids
//!
//! This library validates a caller-supplied grid of DNA bases and classifies
//! it as mutant when more than one aligned run of four identical bases is
//! found horizontally, vertically, or diagonally. Validation and scanning
//! are separable stages: [`grid::DnaGrid::parse`] is the sole gate, and
//! [`scanner::is_mutant`] only accepts grids that passed it.

pub mod cli;
pub mod config;
pub mod grid;
pub mod json_output;
pub mod scanner;
pub mod validation;
