use crate::prelude::*;
use thiserror::Error as ThisError;

///
/// AttrError
///

#[derive(Debug, ThisError)]
pub enum AttrError {
    #[error("attribute {namespace}:{key} on {decl} already set to {existing:?}, refusing {attempted:?}")]
    Conflict {
        decl: DeclId,
        namespace: Namespace,
        key: AttrKey,
        existing: AttrValue,
        attempted: AttrValue,
    },
}

///
/// TypeError
///
/// A type reference that cannot be named on the wire or exported layer.
///

#[derive(Debug, ThisError)]
pub enum TypeError {
    #[error("map values must be string or int, found '{0}'")]
    MapValue(String),

    #[error("type '{0}' not found")]
    NotFound(String),
}

///
/// SynthesisError
///

#[derive(Debug, ThisError)]
pub enum SynthesisError {
    #[error("'{type_name}' is already being expanded above '{field}'; branch omitted")]
    Cycle { field: String, type_name: String },

    #[error("type '{type_name}' not found for '{field}'")]
    TypeNotFound { field: String, type_name: String },
}

impl SynthesisError {
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Cycle { .. } => Severity::Warning,
            Self::TypeNotFound { .. } => Severity::Error,
        }
    }
}

///
/// OperationError
///
/// Fatal for the single operation being built; the run continues.
///

#[derive(Debug, ThisError)]
pub enum OperationError {
    #[error("{operation} on '{entity}' needs an identifier field, none found")]
    MissingIdField { entity: String, operation: String },

    #[error("identifier field '{field}' of '{entity}' has no resolved wire type")]
    MissingIdType { entity: String, field: String },

    #[error("'{entity}' has no resolved {attr} for {operation}")]
    MissingName {
        entity: String,
        operation: String,
        attr: String,
    },

    #[error("return type '{type_name}' of method '{method}' not found")]
    ReturnTypeNotFound { method: String, type_name: String },
}
