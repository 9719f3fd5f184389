//! Configuration for xrprops.
//!
//! Loaded from the file given with `--config`, or from `xrprops.toml` in
//! the working directory when that file exists. Every key is optional;
//! with no file at all the tool reads `xr.xml` and writes
//! `xrsystemproperties.cpp`.
//!
//! Example xrprops.toml:
//! ```toml
//! [paths]
//! registry = "registry/xr.xml"
//! output = "src/xrsystemproperties.cpp"
//!
//! [emitter]
//! push_property_fn = "pushSystemProperty"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use xrprops_codegen::EmitterOptions;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "xrprops.toml";

/// Input and output locations.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    /// Registry document to read.
    pub registry: PathBuf,
    /// Generated C++ file, overwritten on every run.
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            registry: PathBuf::from("xr.xml"),
            output: PathBuf::from("xrsystemproperties.cpp"),
        }
    }
}

/// Names used in the generated code.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmitterConfig {
    pub anchor: String,
    pub anchor_stype: String,
    pub structure_tag: String,
    pub supported_fn: String,
    pub get_properties_fn: String,
    pub push_property_fn: String,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        let EmitterOptions {
            anchor,
            anchor_stype,
            structure_tag,
            supported_fn,
            get_properties_fn,
            push_property_fn,
        } = EmitterOptions::default();
        Self {
            anchor,
            anchor_stype,
            structure_tag,
            supported_fn,
            get_properties_fn,
            push_property_fn,
        }
    }
}

impl From<EmitterConfig> for EmitterOptions {
    fn from(config: EmitterConfig) -> Self {
        Self {
            anchor: config.anchor,
            anchor_stype: config.anchor_stype,
            structure_tag: config.structure_tag,
            supported_fn: config.supported_fn,
            get_properties_fn: config.get_properties_fn,
            push_property_fn: config.push_property_fn,
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct XrPropsConfig {
    pub paths: PathsConfig,
    pub emitter: EmitterConfig,
}

impl XrPropsConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `xrprops.toml` in the
    /// working directory is used if present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load config from a file path.
    fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
