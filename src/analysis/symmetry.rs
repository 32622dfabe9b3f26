use crate::config::SymmetryConfig;
use crate::error::{Result, SymmetryError};
use crate::model::{CrystalSystem, SpaceGroupNumber, Structure};
use moyo::base::{Cell, Lattice};
use moyo::MoyoDataset;
use serde::Serialize;

// --- Structs for Analysis Results ---
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymmetryInfo {
    pub number: SpaceGroupNumber,
    pub symbol: &'static str,
    pub system: CrystalSystem,
}

impl From<SpaceGroupNumber> for SymmetryInfo {
    fn from(number: SpaceGroupNumber) -> Self {
        Self {
            number,
            symbol: number.symbol(),
            system: number.crystal_system(),
        }
    }
}

// =========================================================================
// ANALYSIS: Read-only check of the Space Group
// =========================================================================
pub fn analyze(structure: &Structure, config: &SymmetryConfig) -> Result<SymmetryInfo> {
    let positions = structure.fractional_positions()?;
    let numbers = structure.species_ids();

    let cell = Cell::new(Lattice::new(structure.lattice_matrix()), positions, numbers);
    let dataset = MoyoDataset::new(
        &cell,
        config.symprec,
        config.angle_tolerance(),
        config.setting.to_moyo(),
        true,
    )
    .map_err(|e| {
        log::warn!("Symmetry search failed: {:?}", e);
        SymmetryError::Search(format!("{:?}", e))
    })?;

    let info = SymmetryInfo::from(SpaceGroupNumber::new(dataset.number)?);
    log::info!(
        "Space group {} ({}), {} system",
        info.number,
        info.symbol,
        info.system
    );
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Atom;

    fn one_atom(lattice: [[f64; 3]; 3]) -> Structure {
        Structure::new(lattice, vec![Atom::new("Po", [0.0, 0.0, 0.0])])
    }

    #[test]
    fn test_simple_cubic() {
        let s = one_atom([[3.35, 0.0, 0.0], [0.0, 3.35, 0.0], [0.0, 0.0, 3.35]]);
        let info = analyze(&s, &SymmetryConfig::default()).unwrap();
        assert_eq!(info.number.get(), 221);
        assert_eq!(info.symbol, "Pm-3m");
        assert_eq!(info.system, CrystalSystem::Cubic);
    }

    #[test]
    fn test_simple_tetragonal() {
        let s = one_atom([[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 5.0]]);
        let info = analyze(&s, &SymmetryConfig::default()).unwrap();
        assert_eq!(info.number.get(), 123);
        assert_eq!(info.symbol, "P4/mmm");
        assert_eq!(info.system, CrystalSystem::Tetragonal);
    }

    #[test]
    fn test_rock_salt() {
        let a = 5.64;
        let h = a / 2.0;
        let mut atoms = Vec::new();
        for p in [[0.0, 0.0, 0.0], [0.0, h, h], [h, 0.0, h], [h, h, 0.0]] {
            atoms.push(Atom::new("Na", p));
            atoms.push(Atom::new("Cl", [(p[0] + h) % a, p[1], p[2]]));
        }
        let s = Structure::new([[a, 0.0, 0.0], [0.0, a, 0.0], [0.0, 0.0, a]], atoms);
        let info = analyze(&s, &SymmetryConfig::default()).unwrap();
        assert_eq!(info.number.get(), 225);
        assert_eq!(info.number.bravais_lattice(), "cF");
    }

    #[test]
    fn test_singular_lattice_is_rejected() {
        let s = one_atom([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]);
        assert!(matches!(
            analyze(&s, &SymmetryConfig::default()),
            Err(SymmetryError::InvalidLattice)
        ));
    }
}
