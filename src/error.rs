//! Error type shared by the classification tables, symmetry analysis and config.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymmetryError {
    /// Space group number outside 1..=230
    #[error("Space group number {0} is out of range (expected 1..=230)")]
    OutOfRange(i32),

    #[error("Invalid lattice (determinant is zero)")]
    InvalidLattice,

    /// moyo could not determine the symmetry of the cell
    #[error("Symmetry search failed: {0}")]
    Search(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SymmetryError>;
