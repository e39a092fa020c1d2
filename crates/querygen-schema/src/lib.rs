//! Schema model consumed by the querygen core: packages of entities, enums,
//! fields and methods, each decorated with namespaced directive sets.
//!
//! Everything in here is constructed once by the loader and read-only
//! afterwards; derived attributes live in `querygen-build`'s attribute store.

pub mod directive;
pub mod error;
pub mod layer;
pub mod node;
pub mod types;

use thiserror::Error as ThisError;

/// Package separator used by qualified type names (`pkg.Name`).
pub const PACKAGE_SEPARATOR: char = '.';

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        directive::{DirectiveSet, DirectiveValue, Directives},
        error::SchemaError,
        layer::{DirectiveLayers, LayerSpec},
        node::*,
        types::{Scalar, TypeKind, TypeRef},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    SchemaError(#[from] error::SchemaError),

    #[error(transparent)]
    TypeRefError(#[from] types::TypeRefError),
}
