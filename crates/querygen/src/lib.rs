//! ## Crate layout
//! - `schema`: package model, directive sets and the layered directive reader.
//! - `build`: attribute store, resolver, selection synthesis and operation
//!   building.
//! - `config`: generator configuration loaded from `querygen.toml`.
//!
//! The `prelude` module covers what a caller needs to load a schema, run a
//! generation and read its results.

pub use querygen_build as build;
pub use querygen_config_build as config;
pub use querygen_schema as schema;

use std::path::Path;
use thiserror::Error as ThisError;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::build::{
        Generation, Generator,
        operation::{Argument, OperationDefinition, OperationSource, RequestKind, Returns},
        pass::{ForceLoadPass, Pass},
        prelude::*,
    };
    pub use crate::config::Config;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] querygen_build::Error),

    #[error(transparent)]
    ConfigError(#[from] querygen_config_build::ConfigError),

    #[error(transparent)]
    SchemaError(#[from] querygen_schema::error::SchemaError),

    #[error("cannot read schema '{path}': {source}")]
    SchemaIo {
        path: String,
        source: std::io::Error,
    },
}

/// Generate from a JSON schema document with the default pipeline.
pub fn generate_json(schema: &str, config: &config::Config) -> Result<build::Generation, Error> {
    let pkg = schema::node::Package::from_json(schema)?;

    Ok(build::generate(&pkg, config)?)
}

/// Load a JSON schema file into a package.
pub fn load_schema(path: &Path) -> Result<schema::node::Package, Error> {
    let json = std::fs::read_to_string(path).map_err(|source| Error::SchemaIo {
        path: path.display().to_string(),
        source,
    })?;

    Ok(schema::node::Package::from_json(&json)?)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use prelude::*;

    const SCHEMA: &str = r#"{
        "name": "shop",
        "files": [{
            "name": "shop.viv",
            "entities": [{
                "name": "Color",
                "modifiers": ["dictionary"],
                "fields": [
                    { "name": "id", "type": "int", "modifiers": ["id"] },
                    { "name": "name", "type": "string" }
                ]
            }]
        }]
    }"#;

    #[test]
    fn json_schema_to_documents() {
        let generation = generate_json(SCHEMA, &Config::default()).unwrap();
        let list = generation
            .operations
            .iter()
            .find(|op| op.kind() == Some(OperationKind::List))
            .unwrap();

        assert_eq!(list.name, "listShopColor");
        assert_eq!(list.fields, ["id", "name"]);
        assert!(!generation.has_errors());
    }

    #[test]
    fn malformed_schema_is_a_schema_error() {
        let err = generate_json("{", &Config::default()).unwrap_err();
        assert!(matches!(err, Error::SchemaError(_)));
    }

    #[test]
    fn missing_schema_file_names_the_path() {
        let err = load_schema(Path::new("no/such/schema.json")).unwrap_err();
        assert!(err.to_string().contains("no/such/schema.json"));
    }
}
