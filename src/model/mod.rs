//src/model/mod.rs
pub mod structure;
pub mod crystal_system;
pub mod space_group;
pub mod classification;

// Re-exports for cleaner imports
pub use structure::{Atom, Structure};
pub use crystal_system::CrystalSystem;
pub use space_group::SpaceGroupNumber;
pub use classification::{build_classification, classify, tables, ClassificationTable, NameTable};
