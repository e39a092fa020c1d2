//! Operation definitions and their request documents.

mod builder;

#[cfg(test)]
mod tests;

pub use builder::OperationBuilder;

use crate::prelude::*;
use derive_more::Display;

///
/// RequestKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    #[display("mutation")]
    Mutation,
    #[display("query")]
    Query,
}

impl RequestKind {
    #[must_use]
    pub const fn for_kind(kind: OperationKind) -> Self {
        if kind.is_mutating() {
            Self::Mutation
        } else {
            Self::Query
        }
    }
}

///
/// Argument
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Argument {
    pub name: String,
    pub wire_type: String,
    pub js_type: String,
    pub non_null: bool,
    pub optional: bool,
}

impl Argument {
    /// Non-null argument; the wire type gains a trailing `!` if it lacks one.
    #[must_use]
    pub fn required(name: &str, wire_type: &str, js_type: &str) -> Self {
        let wire_type = if wire_type.ends_with('!') {
            wire_type.to_string()
        } else {
            format!("{wire_type}!")
        };

        Self {
            name: name.to_string(),
            wire_type,
            js_type: js_type.to_string(),
            non_null: true,
            optional: false,
        }
    }

    #[must_use]
    pub fn optional(name: &str, wire_type: &str, js_type: &str) -> Self {
        Self {
            name: name.to_string(),
            wire_type: wire_type.to_string(),
            js_type: js_type.to_string(),
            non_null: false,
            optional: true,
        }
    }
}

///
/// Returns
///
/// What the operation yields, named on the exported layer.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
#[serde(tag = "kind", content = "type", rename_all = "lowercase")]
pub enum Returns {
    Boolean,
    Many(String),
    Nothing,
    One(String),
}

///
/// OperationSource
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationSource {
    Standard(OperationKind),
    Method(String),
}

///
/// OperationDefinition
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct OperationDefinition {
    pub entity: String,
    pub source: OperationSource,
    pub request: RequestKind,
    pub name: String,
    pub function_name: String,
    pub var_name: String,
    pub arguments: Vec<Argument>,
    pub returns: Returns,
    pub fields: Vec<String>,
    pub input_fill: Option<String>,
}

impl OperationDefinition {
    #[must_use]
    pub const fn kind(&self) -> Option<OperationKind> {
        match self.source {
            OperationSource::Standard(kind) => Some(kind),
            OperationSource::Method(_) => None,
        }
    }

    /// GraphQL request text for this operation.
    #[must_use]
    pub fn document(&self) -> String {
        let mut out = format!("{} {}", self.request, self.name);

        if !self.arguments.is_empty() {
            let vars: Vec<_> = self
                .arguments
                .iter()
                .map(|a| format!("${}:{}", a.name, a.wire_type))
                .collect();
            out.push_str(&format!("({})", vars.join(", ")));
        }
        out.push_str(&format!(" {{\n  {}", self.name));

        if !self.arguments.is_empty() {
            let args: Vec<_> = self
                .arguments
                .iter()
                .map(|a| format!("{}:${}", a.name, a.name))
                .collect();
            out.push_str(&format!("({})", args.join(", ")));
        }

        if self.fields.is_empty() {
            out.push_str("\n}");
        } else {
            out.push_str(" {\n");
            for field in &self.fields {
                out.push_str(&format!("    {field}\n"));
            }
            out.push_str("  }\n}");
        }

        out
    }
}
