//! Generator configuration, read from `querygen.toml`.
//!
//! Every key is optional; a missing file or an empty table yields the
//! defaults below.

use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};
use thiserror::Error as ThisError;

pub const DEFAULT_FILE_NAME: &str = "querygen.toml";
pub const DEFAULT_OUTPUT_PATH: &str = "./gql-ts";
pub const DEFAULT_TYPE_SUFFIX: &str = "Type";
pub const DEFAULT_INPUT_SUFFIX: &str = "__InputType";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub naming: NamingConfig,
    pub output: OutputConfig,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    /// Load `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

///
/// NamingConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    /// Prefix wire type names with the package name.
    pub package_prefix: bool,
    pub type_suffix: String,
    pub input_suffix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            package_prefix: true,
            type_suffix: DEFAULT_TYPE_SUFFIX.to_string(),
            input_suffix: DEFAULT_INPUT_SUFFIX.to_string(),
        }
    }
}

///
/// OutputConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub path: String,
    pub use_namespace: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
            use_namespace: false,
        }
    }
}

///
/// TESTS
///
