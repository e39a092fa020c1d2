use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Structural problems found while loading a package. These abort the load;
/// everything the generator can degrade gracefully on is reported through
/// diagnostics instead.
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("entity '{entity}' extends itself through its base chain")]
    BaseCycle { entity: String },

    #[error("config entity '{entity}' cannot declare an identifier field ('{field}')")]
    ConfigIdField { entity: String, field: String },

    #[error("type '{name}' is declared more than once")]
    DuplicateType { name: String },

    #[error("failed to decode schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entity '{entity}' declares more than one identifier field: '{first}' and '{second}'")]
    MultipleIdFields {
        entity: String,
        first: String,
        second: String,
    },

    #[error("entity '{entity}' extends unknown type '{base}'")]
    UnknownBaseType { entity: String, base: String },
}
