use crate::error::{Result, SymmetryError};
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub element: String,
    /// Cartesian position in Angstrom
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(element: &str, position: [f64; 3]) -> Self {
        Self {
            element: element.to_string(),
            position,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    // Lattice vectors: [a_vec, b_vec, c_vec]
    pub lattice: [[f64; 3]; 3],
    pub atoms: Vec<Atom>,
}

impl Structure {
    pub fn new(lattice: [[f64; 3]; 3], atoms: Vec<Atom>) -> Self {
        Self { lattice, atoms }
    }

    /// Lattice as a matrix whose rows are the basis vectors.
    pub fn lattice_matrix(&self) -> Matrix3<f64> {
        let l = self.lattice;
        Matrix3::new(
            l[0][0], l[0][1], l[0][2],
            l[1][0], l[1][1], l[1][2],
            l[2][0], l[2][1], l[2][2],
        )
    }

    /// Cartesian -> fractional: frac = (L^-1)^T * cart
    pub fn fractional_positions(&self) -> Result<Vec<Vector3<f64>>> {
        let inv_mat = self
            .lattice_matrix()
            .try_inverse()
            .ok_or(SymmetryError::InvalidLattice)?;

        Ok(self
            .atoms
            .iter()
            .map(|atom| {
                let v_cart = Vector3::new(atom.position[0], atom.position[1], atom.position[2]);
                inv_mat.transpose() * v_cart
            })
            .collect())
    }

    /// 1-based species ids, assigned in order of first appearance.
    pub fn species_ids(&self) -> Vec<i32> {
        let mut unique_elements: Vec<&str> = Vec::new();
        self.atoms
            .iter()
            .map(|atom| {
                let idx = match unique_elements.iter().position(|e| *e == atom.element) {
                    Some(idx) => idx,
                    None => {
                        unique_elements.push(&atom.element);
                        unique_elements.len() - 1
                    }
                };
                idx as i32 + 1
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_positions() {
        let s = Structure::new(
            [[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 5.0]],
            vec![Atom::new("Na", [1.0, 1.0, 2.5])],
        );
        let frac = s.fractional_positions().unwrap();
        assert!((frac[0] - Vector3::new(0.5, 0.25, 0.5)).norm() < 1e-12);
    }

    #[test]
    fn test_singular_lattice() {
        let s = Structure::new(
            [[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
            vec![Atom::new("Si", [0.0, 0.0, 0.0])],
        );
        assert!(matches!(s.fractional_positions(), Err(SymmetryError::InvalidLattice)));
    }

    #[test]
    fn test_species_ids() {
        let s = Structure::new(
            [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            vec![
                Atom::new("Cl", [0.0, 0.0, 0.0]),
                Atom::new("Na", [0.5, 0.5, 0.5]),
                Atom::new("Cl", [0.5, 0.0, 0.0]),
            ],
        );
        assert_eq!(s.species_ids(), vec![1, 2, 1]);
    }
}
