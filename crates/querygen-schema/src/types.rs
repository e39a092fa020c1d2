use crate::prelude::*;
use derive_more::Display;
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// TypeRefError
///

#[derive(Debug, ThisError)]
pub enum TypeRefError {
    #[error("empty type reference")]
    Empty,

    #[error("invalid type name '{0}'")]
    InvalidName(String),

    #[error("map keys must be 'string', found '{0}'")]
    MapKey(String),

    #[error("unbalanced brackets in type reference '{0}'")]
    Unbalanced(String),
}

///
/// Scalar
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum Scalar {
    #[display("any")]
    Any,
    #[display("bool")]
    Bool,
    #[display("date")]
    Date,
    #[display("float")]
    Float,
    #[display("int")]
    Int,
    #[display("string")]
    String,
}

impl Scalar {
    pub const ALL: [Self; 6] = [
        Self::Any,
        Self::Bool,
        Self::Date,
        Self::Float,
        Self::Int,
        Self::String,
    ];

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "any" => Some(Self::Any),
            "bool" | "boolean" => Some(Self::Bool),
            "date" => Some(Self::Date),
            "float" => Some(Self::Float),
            "int" => Some(Self::Int),
            "string" => Some(Self::String),
            _ => None,
        }
    }
}

///
/// TypeKind
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeKind {
    Array(Box<TypeRef>),
    /// String-keyed map; the box holds the value type.
    Map(Box<TypeRef>),
    Named(String),
    Scalar(Scalar),
}

///
/// TypeRef
///
/// A field, parameter or return type. The compact string form is
/// `string`, `int!`, `[Address]`, `[int!]!`, `map[string]float` or a
/// (possibly package-qualified) type name.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeRef {
    pub kind: TypeKind,
    pub non_null: bool,
}

impl TypeRef {
    #[must_use]
    pub const fn scalar(scalar: Scalar) -> Self {
        Self {
            kind: TypeKind::Scalar(scalar),
            non_null: false,
        }
    }

    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Named(name.into()),
            non_null: false,
        }
    }

    #[must_use]
    pub fn array(item: Self) -> Self {
        Self {
            kind: TypeKind::Array(Box::new(item)),
            non_null: false,
        }
    }

    #[must_use]
    pub fn map(value: Self) -> Self {
        Self {
            kind: TypeKind::Map(Box::new(value)),
            non_null: false,
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.non_null = true;
        self
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self.kind, TypeKind::Array(_))
    }

    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self.kind, TypeKind::Map(_))
    }

    /// Innermost non-array type.
    #[must_use]
    pub fn element(&self) -> &Self {
        match &self.kind {
            TypeKind::Array(item) => item.element(),
            _ => self,
        }
    }

    /// Name of the referenced declaration, looking through arrays.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match &self.element().kind {
            TypeKind::Named(name) => Some(name),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self.element().kind {
            TypeKind::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Array(item) => write!(f, "[{item}]")?,
            TypeKind::Map(value) => write!(f, "map[string]{value}")?,
            TypeKind::Named(name) => f.write_str(name)?,
            TypeKind::Scalar(scalar) => write!(f, "{scalar}")?,
        }

        if self.non_null {
            f.write_str("!")?;
        }

        Ok(())
    }
}

impl FromStr for TypeRef {
    type Err = TypeRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TypeRefError::Empty);
        }

        let (body, non_null) = match s.strip_suffix('!') {
            Some(body) => (body.trim_end(), true),
            None => (s, false),
        };

        let kind = if let Some(inner) = body.strip_prefix('[') {
            let inner = inner
                .strip_suffix(']')
                .ok_or_else(|| TypeRefError::Unbalanced(s.to_string()))?;

            TypeKind::Array(Box::new(inner.parse()?))
        } else if let Some(rest) = body.strip_prefix("map[") {
            let (key, value) = rest
                .split_once(']')
                .ok_or_else(|| TypeRefError::Unbalanced(s.to_string()))?;
            if key.trim() != "string" {
                return Err(TypeRefError::MapKey(key.trim().to_string()));
            }

            TypeKind::Map(Box::new(value.parse()?))
        } else if let Some(scalar) = Scalar::from_name(body) {
            TypeKind::Scalar(scalar)
        } else if is_type_name(body) {
            TypeKind::Named(body.to_string())
        } else {
            return Err(TypeRefError::InvalidName(body.to_string()));
        };

        Ok(Self { kind, non_null })
    }
}

impl TryFrom<String> for TypeRef {
    type Error = TypeRefError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

// identifiers separated by single dots, first char not a digit
fn is_type_name(s: &str) -> bool {
    !s.is_empty()
        && s.split(crate::PACKAGE_SEPARATOR).all(|part| {
            part.chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

///
/// TESTS
///
