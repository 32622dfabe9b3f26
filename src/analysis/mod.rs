//src/analysis/mod.rs
pub mod symmetry;
