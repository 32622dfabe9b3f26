use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// One of the seven crystal systems. The discriminant is the 1-based id used
/// by the classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CrystalSystem {
    Triclinic = 1,
    Monoclinic = 2,
    Orthorhombic = 3,
    Tetragonal = 4,
    Trigonal = 5,
    Hexagonal = 6,
    Cubic = 7,
}

impl CrystalSystem {
    /// All systems in id order.
    pub const ALL: [CrystalSystem; 7] = [
        CrystalSystem::Triclinic,
        CrystalSystem::Monoclinic,
        CrystalSystem::Orthorhombic,
        CrystalSystem::Tetragonal,
        CrystalSystem::Trigonal,
        CrystalSystem::Hexagonal,
        CrystalSystem::Cubic,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Triclinic => "Triclinic",
            Self::Monoclinic => "Monoclinic",
            Self::Orthorhombic => "Orthorhombic",
            Self::Tetragonal => "Tetragonal",
            Self::Trigonal => "Trigonal",
            Self::Hexagonal => "Hexagonal",
            Self::Cubic => "Cubic",
        }
    }

    /// Crystal family: Trigonal folds into Hexagonal, the rest map to themselves.
    pub fn family(self) -> Self {
        match self {
            Self::Trigonal => Self::Hexagonal,
            other => other,
        }
    }

    /// Inclusive range of space group numbers belonging to this system
    /// (International Tables for Crystallography, Vol. A).
    pub fn space_group_range(self) -> RangeInclusive<u8> {
        match self {
            Self::Triclinic => 1..=2,
            Self::Monoclinic => 3..=15,
            Self::Orthorhombic => 16..=74,
            Self::Tetragonal => 75..=142,
            Self::Trigonal => 143..=167,
            Self::Hexagonal => 168..=194,
            Self::Cubic => 195..=230,
        }
    }
}

impl fmt::Display for CrystalSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for sys in CrystalSystem::ALL {
            assert_eq!(CrystalSystem::from_id(sys.id()), Some(sys));
        }
        assert_eq!(CrystalSystem::from_id(0), None);
        assert_eq!(CrystalSystem::from_id(8), None);
    }

    #[test]
    fn test_ranges_are_contiguous() {
        let mut next = 1u8;
        for sys in CrystalSystem::ALL {
            let range = sys.space_group_range();
            assert_eq!(*range.start(), next, "{} starts at the wrong number", sys);
            next = range.end() + 1;
        }
        assert_eq!(next, 231);
    }

    #[test]
    fn test_family() {
        assert_eq!(CrystalSystem::Trigonal.family(), CrystalSystem::Hexagonal);
        assert_eq!(CrystalSystem::Hexagonal.family(), CrystalSystem::Hexagonal);
        assert_eq!(CrystalSystem::Cubic.family(), CrystalSystem::Cubic);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(CrystalSystem::Orthorhombic.to_string(), "Orthorhombic");
    }
}
