// src/config.rs

use crate::error::Result;
use directories::ProjectDirs;
use moyo::base::AngleTolerance;
use moyo::data::Setting;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

// --- Enums ---

/// Choice of origin / axis setting reported by the symmetry search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellSetting {
  Spglib,
  Standard,
}

impl CellSetting {
  pub fn to_moyo(self) -> Setting {
    match self {
      CellSetting::Spglib => Setting::Spglib,
      CellSetting::Standard => Setting::Standard,
    }
  }
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SymmetryConfig {
  /// Distance tolerance in Angstrom
  #[serde(default = "default_symprec")]
  pub symprec: f64,

  /// Angle tolerance in degrees; `None` lets moyo choose
  #[serde(default)]
  pub angle_tolerance_deg: Option<f64>,

  #[serde(default = "default_setting")]
  pub setting: CellSetting,
}

fn default_symprec() -> f64 {
  1e-4
}

fn default_setting() -> CellSetting {
  CellSetting::Spglib
}

impl Default for SymmetryConfig {
  fn default() -> Self {
    Self {
      symprec: default_symprec(),
      angle_tolerance_deg: None,
      setting: default_setting(),
    }
  }
}

impl SymmetryConfig {
  pub fn angle_tolerance(&self) -> AngleTolerance {
    match self.angle_tolerance_deg {
      Some(deg) => AngleTolerance::Radian(deg.to_radians()),
      None => AngleTolerance::Default,
    }
  }

  /// Loads config from standard OS location (e.g., ~/.config/crysys/settings.json).
  /// Falls back to defaults when the file is missing or unreadable.
  pub fn load() -> Self {
    let path = Self::get_path();
    if !path.exists() {
      log::info!("No config found. Using defaults.");
      return Self::default();
    }

    match Self::load_from(&path) {
      Ok(cfg) => {
        log::info!("Config loaded from {:?}", path);
        cfg
      }
      Err(e) => {
        log::warn!("Error reading config {:?}: {}", path, e);
        Self::default()
      }
    }
  }

  pub fn load_from(path: &Path) -> Result<Self> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> Result<PathBuf> {
    let path = Self::get_path();
    self.save_to(&path)?;
    log::info!("Config saved to {:?}", path);
    Ok(path)
  }

  pub fn save_to(&self, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, self)?;
    Ok(())
  }

  fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "mavensgroup", "crysys") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir()
      .join(format!("crysys-test-{}", std::process::id()))
      .join(name)
  }

  #[test]
  fn test_save_and_load() {
    let path = temp_path("roundtrip.json");
    let cfg = SymmetryConfig {
      symprec: 1e-3,
      angle_tolerance_deg: Some(5.0),
      setting: CellSetting::Standard,
    };
    cfg.save_to(&path).unwrap();
    let loaded = SymmetryConfig::load_from(&path).unwrap();
    assert_eq!(loaded, cfg);
    let _ = fs::remove_file(&path);
  }

  #[test]
  fn test_missing_fields_use_defaults() {
    let cfg: SymmetryConfig = serde_json::from_str(r#"{ "symprec": 0.01 }"#).unwrap();
    assert_eq!(cfg.symprec, 0.01);
    assert_eq!(cfg.angle_tolerance_deg, None);
    assert_eq!(cfg.setting, CellSetting::Spglib);
  }

  #[test]
  fn test_load_errors() {
    assert!(SymmetryConfig::load_from(&temp_path("does-not-exist.json")).is_err());

    let path = temp_path("broken.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
      SymmetryConfig::load_from(&path),
      Err(crate::error::SymmetryError::Json(_))
    ));
    let _ = fs::remove_file(&path);
  }

  #[test]
  fn test_angle_tolerance() {
    let mut cfg = SymmetryConfig::default();
    assert!(matches!(cfg.angle_tolerance(), AngleTolerance::Default));
    cfg.angle_tolerance_deg = Some(180.0);
    match cfg.angle_tolerance() {
      AngleTolerance::Radian(r) => assert!((r - std::f64::consts::PI).abs() < 1e-12),
      _ => panic!("expected radian tolerance"),
    }
  }
}
