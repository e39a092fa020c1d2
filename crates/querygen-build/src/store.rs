use crate::prelude::*;
use derive_more::Display;
use serde::Serializer;
use std::{collections::BTreeMap, fmt};

///
/// Namespace
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    #[display("api")]
    Api,
    #[display("gql")]
    Gql,
    #[display("js")]
    Js,
}

///
/// AttrKey
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum AttrKey {
    /// Field is loaded whenever its owner is selected as a reference.
    FieldForceLoad,
    /// Filter-parameter entity registered for `find`.
    FindParamType,
    /// Field projects to the referenced entity's identifier.
    IdOnly,
    IdType,
    InputName,
    InputType,
    InstanceGenerator,
    MethodName,
    MethodRequest,
    Name,
    Operation(OperationKind),
    QualifierType,
    SetNullField,
    Title,
    TitleField,
    Type,
}

impl fmt::Display for AttrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::FieldForceLoad => "field-force-load",
            Self::FindParamType => "find-param-type",
            Self::IdOnly => "id-only",
            Self::IdType => "id-type",
            Self::InputName => "input-name",
            Self::InputType => "input-type",
            Self::InstanceGenerator => "instance-generator",
            Self::MethodName => "method-name",
            Self::MethodRequest => "method-request",
            Self::Name => "name",
            Self::Operation(kind) => return write!(f, "operation:{kind}"),
            Self::QualifierType => "qualifier-type",
            Self::SetNullField => "set-null-field",
            Self::Title => "title",
            Self::TitleField => "title-field",
            Self::Type => "type",
        };

        f.write_str(s)
    }
}

///
/// AttrValue
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrValue {
    Bool(bool),
    Entity(EntityId),
    Field(FieldId),
    Str(String),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<EntityId> for AttrValue {
    fn from(value: EntityId) -> Self {
        Self::Entity(value)
    }
}

impl From<FieldId> for AttrValue {
    fn from(value: FieldId) -> Self {
        Self::Field(value)
    }
}

///
/// AttrStore
///
/// Side table of derived attributes keyed by declaration, namespace and key.
/// Each key is written at most once per run; rewriting the same value is a
/// no-op, a different value is an [`AttrError::Conflict`].
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AttrStore {
    attrs: BTreeMap<(DeclId, Namespace, AttrKey), AttrValue>,
}

impl AttrStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(
        &mut self,
        decl: impl Into<DeclId>,
        namespace: Namespace,
        key: AttrKey,
        value: impl Into<AttrValue>,
    ) -> Result<(), AttrError> {
        let decl = decl.into();
        let value = value.into();

        match self.attrs.get(&(decl, namespace, key)) {
            Some(existing) if *existing == value => Ok(()),
            Some(existing) => Err(AttrError::Conflict {
                decl,
                namespace,
                key,
                existing: existing.clone(),
                attempted: value,
            }),
            None => {
                self.attrs.insert((decl, namespace, key), value);
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn get(&self, decl: impl Into<DeclId>, namespace: Namespace, key: AttrKey) -> Option<&AttrValue> {
        self.attrs.get(&(decl.into(), namespace, key))
    }

    #[must_use]
    pub fn str(&self, decl: impl Into<DeclId>, namespace: Namespace, key: AttrKey) -> Option<&str> {
        match self.get(decl, namespace, key)? {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// True only for a stored `true`.
    #[must_use]
    pub fn flag(&self, decl: impl Into<DeclId>, namespace: Namespace, key: AttrKey) -> bool {
        matches!(self.get(decl, namespace, key), Some(AttrValue::Bool(true)))
    }

    #[must_use]
    pub fn entity(&self, decl: impl Into<DeclId>, namespace: Namespace, key: AttrKey) -> Option<EntityId> {
        match self.get(decl, namespace, key)? {
            AttrValue::Entity(id) => Some(*id),
            _ => None,
        }
    }

    #[must_use]
    pub fn field(&self, decl: impl Into<DeclId>, namespace: Namespace, key: AttrKey) -> Option<FieldId> {
        match self.get(decl, namespace, key)? {
            AttrValue::Field(id) => Some(*id),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Every attribute of one declaration, in key order.
    pub fn of(&self, decl: impl Into<DeclId>) -> impl Iterator<Item = (Namespace, AttrKey, &AttrValue)> {
        let decl = decl.into();

        self.attrs
            .iter()
            .filter(move |((d, _, _), _)| *d == decl)
            .map(|((_, ns, key), value)| (*ns, *key, value))
    }
}

// Tuple keys have no JSON map form, so the store serializes as a flat list.
impl Serialize for AttrStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            decl: DeclId,
            namespace: Namespace,
            key: String,
            value: &'a AttrValue,
        }

        serializer.collect_seq(self.attrs.iter().map(|((decl, namespace, key), value)| Entry {
            decl: *decl,
            namespace: *namespace,
            key: key.to_string(),
            value,
        }))
    }
}

///
/// TESTS
///
