//! Metadata resolution, selection synthesis and operation building.
//!
//! A run is strictly two-phase: every declaration is resolved into the
//! [`AttrStore`](store::AttrStore) (plus any registered [`Pass`](pass::Pass)),
//! then operations are built against the frozen store. See [`generate`].

#[macro_use]
mod macros;

pub mod diagnostics;
pub mod error;
pub mod generate;
pub mod kind;
pub mod namer;
pub mod operation;
pub mod pass;
pub mod resolve;
pub mod store;
pub mod synthesize;
pub mod tags;

#[cfg(test)]
mod fixture;

pub use generate::{Generation, Generator, generate};

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        diagnostics::{Diagnostic, Diagnostics, Severity},
        error::{AttrError, OperationError, SynthesisError, TypeError},
        kind::OperationKind,
        namer::TypeNamer,
        store::{AttrKey, AttrStore, AttrValue, Namespace},
        tags,
    };
    pub use querygen_config_build::NamingConfig;
    pub use querygen_schema::prelude::*;
    pub use serde::Serialize;
}

///
/// Error
///
/// Aborts a whole run. Everything scoped to a field, entity or single
/// operation is reported through diagnostics instead.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    AttrError(#[from] error::AttrError),
}
