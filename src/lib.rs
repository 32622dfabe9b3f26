// src/lib.rs

pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod utils;

pub use analysis::symmetry::{analyze, SymmetryInfo};
pub use config::{CellSetting, SymmetryConfig};
pub use error::SymmetryError;
pub use model::{
    build_classification, classify, tables, Atom, ClassificationTable, CrystalSystem, NameTable,
    SpaceGroupNumber, Structure,
};
