use crate::prelude::*;

///
/// EnumValue
///
/// Explicit value of an enum member. Members without one are ordinal.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnumValue {
    Int(i64),
    Float(f64),
    Str(String),
}

///
/// EnumMember
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EnumMember {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<EnumValue>,
}

impl EnumMember {
    #[must_use]
    pub const fn is_ordinal(&self) -> bool {
        self.value.is_none()
    }
}

///
/// Enum
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Enum {
    #[serde(skip)]
    pub id: EnumId,

    #[serde(skip)]
    pub file: FileId,

    pub name: String,

    /// Wire representation of the enum's values.
    #[serde(default = "Enum::default_alias")]
    pub alias: Scalar,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<EnumMember>,

    #[serde(default, skip_serializing_if = "Directives::is_empty")]
    pub directives: Directives,
}

impl Enum {
    const fn default_alias() -> Scalar {
        Scalar::Int
    }

    #[must_use]
    pub fn new(name: &str, alias: Scalar) -> Self {
        Self {
            id: EnumId::default(),
            file: FileId::default(),
            name: name.to_string(),
            alias,
            members: Vec::new(),
            directives: Directives::new(),
        }
    }

    #[must_use]
    pub fn with_member(mut self, name: &str, value: Option<EnumValue>) -> Self {
        self.members.push(EnumMember {
            name: name.to_string(),
            value,
        });
        self
    }

    #[must_use]
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }
}
