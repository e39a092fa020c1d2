use crate::prelude::*;
use std::collections::BTreeSet;

///
/// FieldModifier
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
#[serde(rename_all = "kebab-case")]
pub enum FieldModifier {
    Auxiliary,
    Calculated,
    Embedded,
    EmbeddedRef,
    Id,
    IdAuto,
}

///
/// Field
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Field {
    #[serde(skip)]
    pub id: FieldId,

    pub name: String,

    #[serde(rename = "type")]
    pub ty: TypeRef,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub modifiers: BTreeSet<FieldModifier>,

    #[serde(default, skip_serializing_if = "Directives::is_empty")]
    pub directives: Directives,
}

impl Field {
    #[must_use]
    pub fn new(name: &str, ty: TypeRef) -> Self {
        Self {
            id: FieldId::default(),
            name: name.to_string(),
            ty,
            modifiers: BTreeSet::new(),
            directives: Directives::new(),
        }
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: FieldModifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    #[must_use]
    pub fn with_directives(mut self, directives: Directives) -> Self {
        self.directives = directives;
        self
    }

    #[must_use]
    pub fn has(&self, modifier: FieldModifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    #[must_use]
    pub fn is_id(&self) -> bool {
        self.has(FieldModifier::Id)
    }

    #[must_use]
    pub fn is_calculated(&self) -> bool {
        self.has(FieldModifier::Calculated)
    }

    /// Embedded fields are always expanded inline.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.has(FieldModifier::Embedded)
    }

    #[must_use]
    pub fn is_embedded_ref(&self) -> bool {
        self.has(FieldModifier::EmbeddedRef)
    }

    #[must_use]
    pub fn is_id_auto(&self) -> bool {
        self.has(FieldModifier::IdAuto)
    }
}
