mod entity;
mod r#enum;
mod field;
mod method;
mod package;

pub use entity::*;
pub use r#enum::*;
pub use field::*;
pub use method::*;
pub use package::*;

use crate::prelude::*;
use derive_more::Display;

///
/// EntityId
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[display("entity#{_0}")]
pub struct EntityId(pub u32);

///
/// EnumId
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[display("enum#{_0}")]
pub struct EnumId(pub u32);

///
/// FieldId
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[display("{entity}.field#{index}")]
pub struct FieldId {
    pub entity: EntityId,
    pub index: u32,
}

///
/// MethodId
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[display("{entity}.method#{index}")]
pub struct MethodId {
    pub entity: EntityId,
    pub index: u32,
}

///
/// FileId
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[display("file#{_0}")]
pub struct FileId(pub u32);

///
/// TypeId
///
/// What a type name resolves to inside a package.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TypeId {
    Entity(EntityId),
    Enum(EnumId),
}

///
/// DeclId
///
/// Any declaration that can carry directives and derived attributes.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum DeclId {
    Entity(EntityId),
    Enum(EnumId),
    Field(FieldId),
    Method(MethodId),
}

impl From<EntityId> for DeclId {
    fn from(id: EntityId) -> Self {
        Self::Entity(id)
    }
}

impl From<EnumId> for DeclId {
    fn from(id: EnumId) -> Self {
        Self::Enum(id)
    }
}

impl From<FieldId> for DeclId {
    fn from(id: FieldId) -> Self {
        Self::Field(id)
    }
}

impl From<MethodId> for DeclId {
    fn from(id: MethodId) -> Self {
        Self::Method(id)
    }
}

impl From<TypeId> for DeclId {
    fn from(id: TypeId) -> Self {
        match id {
            TypeId::Entity(id) => Self::Entity(id),
            TypeId::Enum(id) => Self::Enum(id),
        }
    }
}

/// Local part of a possibly package-qualified name.
#[must_use]
pub fn local_name(name: &str) -> &str {
    name.rsplit_once(crate::PACKAGE_SEPARATOR)
        .map_or(name, |(_, local)| local)
}

/// Package part of a qualified name, if any.
#[must_use]
pub fn package_of(name: &str) -> Option<&str> {
    name.rsplit_once(crate::PACKAGE_SEPARATOR)
        .map(|(pkg, _)| pkg)
}

// Arena indices are u32; a package can never hold more declarations than that.
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn index(i: usize) -> u32 {
    i as u32
}
