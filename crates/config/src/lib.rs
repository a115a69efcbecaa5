//! Body catalogs: the built-in planet set plus YAML/TOML loaders with validation.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use hohmann_orbits::{BodyError, OrbitalBody};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Body entry as written in catalog files.
#[derive(Debug, Deserialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub semi_major_axis_au: f64,
    pub perihelion_au: f64,
    pub eccentricity: f64,
    #[serde(default)]
    pub inclination: f64,
    #[serde(default)]
    pub longitude_of_ascending_node_deg: f64,
    #[serde(default)]
    pub argument_of_perihelion_deg: f64,
    #[serde(default = "default_color")]
    pub display_color: String,
}

fn default_color() -> String {
    "white".to_string()
}

impl From<BodyConfig> for OrbitalBody {
    fn from(cfg: BodyConfig) -> Self {
        OrbitalBody::new(
            cfg.name,
            cfg.semi_major_axis_au,
            cfg.perihelion_au,
            cfg.eccentricity,
            cfg.inclination,
            cfg.longitude_of_ascending_node_deg,
            cfg.argument_of_perihelion_deg,
            cfg.display_color,
        )
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("body '{name}' is invalid: {source}")]
    InvalidBody {
        name: String,
        #[source]
        source: BodyError,
    },
    #[error("body '{0}' appears more than once in the catalog")]
    DuplicateBody(String),
}

/// Load and validate bodies from a YAML list, a TOML file, or a directory of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<OrbitalBody>, ConfigError> {
    let records: Vec<BodyConfig> = load_records(path)?;
    records
        .into_iter()
        .map(|cfg| {
            let body = OrbitalBody::from(cfg);
            body.validate().map_err(|source| ConfigError::InvalidBody {
                name: body.name.clone(),
                source,
            })?;
            debug!(
                body = %body.name,
                a_au = body.semi_major_axis_au,
                e = body.eccentricity,
                "loaded catalog body"
            );
            Ok(body)
        })
        .collect()
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.retain(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false));
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

/// Immutable name → body mapping. Lookups ignore case.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    bodies: BTreeMap<String, OrbitalBody>,
}

impl Catalog {
    /// Build a catalog from validated bodies, rejecting names that collide case-insensitively.
    pub fn from_bodies<I>(bodies: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = OrbitalBody>,
    {
        let mut map = BTreeMap::new();
        for body in bodies {
            body.validate().map_err(|source| ConfigError::InvalidBody {
                name: body.name.clone(),
                source,
            })?;
            let key = body.name.to_uppercase();
            if map.contains_key(&key) {
                return Err(ConfigError::DuplicateBody(body.name));
            }
            map.insert(key, body);
        }
        Ok(Self { bodies: map })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_bodies(load_bodies(path)?)
    }

    /// Earth and Mars with the heliocentric elements the calculator has always shipped with.
    pub fn builtin() -> Self {
        let bodies = [
            OrbitalBody::new(
                "Earth",
                1.000001018063,
                0.983292404575649,
                0.0167086,
                1.57869,
                348.73936,
                114.20783,
                "blue",
            ),
            OrbitalBody::new(
                "Mars",
                1.523680550622,
                1.381369928817,
                0.0934,
                1.63,
                49.57854,
                286.5,
                "orange",
            ),
        ];
        Self {
            bodies: bodies
                .into_iter()
                .map(|b| (b.name.to_uppercase(), b))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&OrbitalBody> {
        self.bodies.get(&name.to_uppercase())
    }

    /// Body names as written in the catalog, in case-insensitive alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.values().map(|b| b.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitalBody> {
        self.bodies.values()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
