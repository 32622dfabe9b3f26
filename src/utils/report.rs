// src/utils/report.rs

use crate::analysis::symmetry::SymmetryInfo;
use crate::model::{ClassificationTable, CrystalSystem, NameTable};

/// Text table of the seven crystal systems with their space group ranges
pub fn classification_summary(table: &ClassificationTable, names: &NameTable) -> String {
    let mut out = String::new();
    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!(
        "{:<4} {:<14} {:<12} {:<8}\n",
        "Id", "System", "Groups", "Count"
    ));
    out.push_str("--------------------------------------------------\n");

    let mut total = 0;
    for (id, name) in names.iter() {
        let Some(system) = CrystalSystem::from_id(id) else {
            continue;
        };
        let range = system.space_group_range();
        let count = table.count(system);
        total += count;
        out.push_str(&format!(
            "{:<4} {:<14} {:<12} {:<8}\n",
            id,
            name,
            format!("{}-{}", range.start(), range.end()),
            count
        ));
    }

    out.push_str("--------------------------------------------------\n");
    out.push_str(&format!("Total: {} space groups\n", total));
    out
}

pub fn symmetry_summary(info: &SymmetryInfo) -> String {
    format!(
        "Space Group: {} ({})\nCrystal System: {}\nBravais Lattice: {}\n",
        info.symbol,
        info.number,
        info.system,
        info.number.bravais_lattice()
    )
}
