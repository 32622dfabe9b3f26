// src/model/classification.rs

use crate::error::{Result, SymmetryError};
use crate::model::crystal_system::CrystalSystem;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Index;
use std::sync::OnceLock;

/// Highest space group number.
pub const MAX_SPACE_GROUP: u8 = 230;

/// Number of slots in the classification table (slot 0 is unused).
pub const TABLE_LEN: usize = MAX_SPACE_GROUP as usize + 1;

// Upper bound (inclusive) of each crystal system, sorted ascending.
const BOUNDS: [(u8, CrystalSystem); 7] = [
    (2, CrystalSystem::Triclinic),
    (15, CrystalSystem::Monoclinic),
    (74, CrystalSystem::Orthorhombic),
    (142, CrystalSystem::Tetragonal),
    (167, CrystalSystem::Trigonal),
    (194, CrystalSystem::Hexagonal),
    (230, CrystalSystem::Cubic),
];

static TABLES: OnceLock<(ClassificationTable, NameTable)> = OnceLock::new();

// --- Tables ---

/// Crystal system id for every space group, addressed by space group number.
/// Slot 0 holds a `0` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationTable {
    ids: Vec<u8>,
}

impl ClassificationTable {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Raw id at `number`, including the placeholder at 0.
    pub fn get(&self, number: usize) -> Option<u8> {
        self.ids.get(number).copied()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.ids
    }

    /// Crystal system of a space group, rejecting numbers outside 1..=230.
    pub fn system_of(&self, number: i32) -> Result<CrystalSystem> {
        if !(1..=MAX_SPACE_GROUP as i32).contains(&number) {
            return Err(SymmetryError::OutOfRange(number));
        }
        CrystalSystem::from_id(self.ids[number as usize]).ok_or(SymmetryError::OutOfRange(number))
    }

    /// `(space group number, system)` pairs for 1..=230, skipping the placeholder.
    pub fn iter(&self) -> impl Iterator<Item = (u8, CrystalSystem)> + '_ {
        self.ids
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(n, &id)| CrystalSystem::from_id(id).map(|sys| (n as u8, sys)))
    }

    /// Number of space groups assigned to `system`.
    pub fn count(&self, system: CrystalSystem) -> usize {
        self.ids.iter().skip(1).filter(|&&id| id == system.id()).count()
    }
}

impl Index<usize> for ClassificationTable {
    type Output = u8;

    fn index(&self, number: usize) -> &u8 {
        &self.ids[number]
    }
}

/// Display name for each crystal system id (1..=7).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameTable {
    names: BTreeMap<u8, &'static str>,
}

impl NameTable {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, id: u8) -> Option<&'static str> {
        self.names.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &'static str)> + '_ {
        self.names.iter().map(|(&id, &name)| (id, name))
    }
}

// --- Construction ---

/// Classifies a space group number into its crystal system.
pub fn classify(number: i32) -> Result<CrystalSystem> {
    if !(1..=MAX_SPACE_GROUP as i32).contains(&number) {
        return Err(SymmetryError::OutOfRange(number));
    }
    Ok(lookup(number as u8))
}

// Binary search over BOUNDS; callers have checked 1..=230.
pub(crate) fn lookup(number: u8) -> CrystalSystem {
    let idx = BOUNDS.partition_point(|&(upper, _)| upper < number);
    BOUNDS[idx.min(BOUNDS.len() - 1)].1
}

/// Builds the 231-slot classification table and the id -> name table.
pub fn build_classification() -> (ClassificationTable, NameTable) {
    let mut ids = Vec::with_capacity(TABLE_LEN);
    ids.push(0);

    // BOUNDS partitions 1..=230, so walking it fills every slot exactly once
    let mut lower = 1u8;
    for (upper, system) in BOUNDS {
        ids.extend((lower..=upper).map(|_| system.id()));
        lower = upper + 1;
    }

    let names = CrystalSystem::ALL
        .iter()
        .map(|sys| (sys.id(), sys.name()))
        .collect();

    log::debug!("Built crystal system table for {} space groups", ids.len() - 1);

    (ClassificationTable { ids }, NameTable { names })
}

/// Process-wide tables, built on first use.
pub fn tables() -> &'static (ClassificationTable, NameTable) {
    TABLES.get_or_init(build_classification)
}

// ============================================================================
// TESTS
// ============================================================================
