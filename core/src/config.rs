//! Lookup configuration
//!
//! [`LookupConfig`] selects the units results are reported in and, optionally, an external
//! table snapshot to use in place of the compiled-in WMM-2020 grids. Configurations can be
//! stored as JSON, YAML, or TOML; the generic [`LookupConfig::from_file`] and
//! [`LookupConfig::to_file`] pick the format from the file extension.
//!
//! ```toml
//! angle_unit = "degrees"
//! strength_unit = "nanotesla"
//!
//! [tables]
//! declination = "tables/declination.csv"
//! inclination = "tables/inclination.csv"
//! strength = "tables/strength.csv"
//! model = "WMM-2025"
//! version = "1.0"
//! epoch = 2025.0
//! ```
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GeomagError;
use crate::field::{AngleUnit, StrengthUnit};
use crate::lookup::{GridMetadata, MagneticFieldTable};

/// External table snapshot: one CSV file per grid plus the model it was sampled from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableFiles {
    pub declination: PathBuf,
    pub inclination: PathBuf,
    pub strength: PathBuf,
    pub model: String,
    pub version: String,
    /// Model epoch as a decimal year
    pub epoch: f64,
}
impl TableFiles {
    pub fn metadata(&self) -> GridMetadata {
        GridMetadata {
            model: Cow::Owned(self.model.clone()),
            version: Cow::Owned(self.version.clone()),
            epoch: self.epoch,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Unit for declination and inclination in reported results
    #[serde(default)]
    pub angle_unit: AngleUnit,

    /// Unit for field strength in reported results
    #[serde(default)]
    pub strength_unit: StrengthUnit,

    /// External table snapshot. The compiled-in WMM-2020 tables are used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<TableFiles>,
}

impl LookupConfig {
    /// Build the table this configuration describes.
    ///
    /// # Errors
    /// Any loading error from [`MagneticFieldTable::from_csv_files`].
    pub fn build_table(&self) -> Result<MagneticFieldTable, GeomagError> {
        match &self.tables {
            Some(files) => MagneticFieldTable::from_csv_files(
                &files.declination,
                &files.inclination,
                &files.strength,
                files.metadata(),
            ),
            None => Ok(MagneticFieldTable::wmm2020()),
        }
    }
    /// Write the configuration to a JSON file (pretty-printed).
    pub fn to_json<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self).map_err(io::Error::other)
    }

    /// Read the configuration from a JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        serde_json::from_reader(file).map_err(io::Error::other)
    }
    /// Write the configuration as YAML.
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = File::create(path)?;
        let s = serde_yaml::to_string(self).map_err(io::Error::other)?;
        file.write_all(s.as_bytes())
    }

    /// Read the configuration from YAML.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        serde_yaml::from_reader(file).map_err(io::Error::other)
    }
    /// Write the configuration as TOML.
    pub fn to_toml<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = File::create(path)?;
        let s = toml::to_string(self).map_err(io::Error::other)?;
        file.write_all(s.as_bytes())
    }
    /// Read the configuration from TOML.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let mut s = String::new();
        let mut file = File::open(path)?;
        file.read_to_string(&mut s)?;
        toml::from_str(&s).map_err(io::Error::other)
    }
    /// Generic write: choose format by file extension (.json/.yaml/.yml/.toml)
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let p = path.as_ref();
        match extension(p).as_deref() {
            Some("json") => self.to_json(p),
            Some("yaml") | Some("yml") => self.to_yaml(p),
            Some("toml") => self.to_toml(p),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "unsupported file extension",
            )),
        }
    }
    /// Generic read: choose format by file extension (.json/.yaml/.yml/.toml)
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let p = path.as_ref();
        match extension(p).as_deref() {
            Some("json") => Self::from_json(p),
            Some("yaml") | Some("yml") => Self::from_yaml(p),
            Some("toml") => Self::from_toml(p),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "unsupported file extension",
            )),
        }
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    fn sample_cfg() -> LookupConfig {
        LookupConfig {
            angle_unit: AngleUnit::Degrees,
            strength_unit: StrengthUnit::Nanotesla,
            tables: Some(TableFiles {
                declination: PathBuf::from("tables/declination.csv"),
                inclination: PathBuf::from("tables/inclination.csv"),
                strength: PathBuf::from("tables/strength.csv"),
                model: "WMM-2025".to_string(),
                version: "1.0".to_string(),
                epoch: 2025.0,
            }),
        }
    }

    #[test]
    fn json_roundtrip() {
        let cfg = sample_cfg();
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("json");
        cfg.to_json(&path).unwrap();
        let loaded = LookupConfig::from_json(&path).unwrap();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn yaml_roundtrip() {
        let cfg = sample_cfg();
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("yaml");
        cfg.to_yaml(&path).unwrap();
        let loaded = LookupConfig::from_yaml(&path).unwrap();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = sample_cfg();
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("toml");
        cfg.to_toml(&path).unwrap();
        let loaded = LookupConfig::from_toml(&path).unwrap();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn default_config_roundtrip() {
        let cfg = LookupConfig::default();
        assert_eq!(cfg.angle_unit, AngleUnit::Radians);
        assert_eq!(cfg.strength_unit, StrengthUnit::Gauss);
        assert!(cfg.tables.is_none());

        for ext in ["json", "yaml", "yml", "toml"] {
            let f = NamedTempFile::new().unwrap();
            let path = f.path().with_extension(ext);
            cfg.to_file(&path).unwrap();
            let loaded = LookupConfig::from_file(&path).unwrap();
            assert_eq!(cfg, loaded);
        }
    }

    #[test]
    fn missing_fields_use_defaults() {
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("toml");
        std::fs::write(&path, "angle_unit = \"degrees\"\n").unwrap();
        let loaded = LookupConfig::from_file(&path).unwrap();
        assert_eq!(loaded.angle_unit, AngleUnit::Degrees);
        assert_eq!(loaded.strength_unit, StrengthUnit::Gauss);
        assert!(loaded.tables.is_none());
    }

    #[test]
    fn unsupported_extension_error() {
        let cfg = sample_cfg();
        let f = NamedTempFile::new().unwrap();
        let path = f.path().with_extension("txt");

        let result = cfg.to_file(&path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::InvalidInput);

        let result = LookupConfig::from_file(&path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::InvalidInput);
    }

    #[test]
    fn build_default_table() {
        let table = LookupConfig::default().build_table().unwrap();
        assert_eq!(table.metadata().model, "WMM-2020");
    }

    #[test]
    fn build_table_from_exported_files() {
        let dir = TempDir::new().unwrap();
        let paths = MagneticFieldTable::wmm2020().export_csv(dir.path()).unwrap();
        let cfg = LookupConfig {
            tables: Some(TableFiles {
                declination: paths[0].clone(),
                inclination: paths[1].clone(),
                strength: paths[2].clone(),
                model: "WMM-2020 (reloaded)".to_string(),
                version: "0.5.1.11".to_string(),
                epoch: 2020.6503,
            }),
            ..LookupConfig::default()
        };
        let table = cfg.build_table().unwrap();
        assert_eq!(table.metadata().model, "WMM-2020 (reloaded)");
        assert_eq!(
            table.lookup(37.0, -122.0).unwrap(),
            MagneticFieldTable::wmm2020().lookup(37.0, -122.0).unwrap()
        );
    }

    #[test]
    fn build_table_missing_files() {
        let cfg = sample_cfg();
        assert!(cfg.build_table().is_err());
    }
}
