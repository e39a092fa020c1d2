use crate::prelude::*;
use std::collections::BTreeSet;

///
/// EntityModifier
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
#[serde(rename_all = "kebab-case")]
pub enum EntityModifier {
    Config,
    Dictionary,
    Embeddable,
    External,
    Readonly,
    Singleton,
    Transient,
}

///
/// Entity
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Entity {
    #[serde(skip)]
    pub id: EntityId,

    #[serde(skip)]
    pub file: FileId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Qualifier entity for qualified dictionaries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub modifiers: BTreeSet<EntityModifier>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Method>,

    #[serde(default, skip_serializing_if = "Directives::is_empty")]
    pub directives: Directives,
}

impl Entity {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            id: EntityId::default(),
            file: FileId::default(),
            name: name.to_string(),
            extends: None,
            qualifier: None,
            modifiers: BTreeSet::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            directives: Directives::new(),
        }
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: EntityModifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    #[must_use]
    pub fn with_directives(mut self, directives: Directives) -> Self {
        self.directives = directives;
        self
    }

    #[must_use]
    pub fn extending(mut self, base: &str) -> Self {
        self.extends = Some(base.to_string());
        self
    }

    #[must_use]
    pub fn qualified_by(mut self, qualifier: &str) -> Self {
        self.qualifier = Some(qualifier.to_string());
        self
    }

    #[must_use]
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    #[must_use]
    pub fn has(&self, modifier: EntityModifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    #[must_use]
    pub fn is_config(&self) -> bool {
        self.has(EntityModifier::Config)
    }

    #[must_use]
    pub fn is_dictionary(&self) -> bool {
        self.has(EntityModifier::Dictionary)
    }

    #[must_use]
    pub fn is_readonly(&self) -> bool {
        self.has(EntityModifier::Readonly)
    }

    #[must_use]
    pub fn is_embeddable(&self) -> bool {
        self.has(EntityModifier::Embeddable)
    }

    /// Entities that never get standard operations generated.
    #[must_use]
    pub fn is_operationless(&self) -> bool {
        self.is_embeddable()
            || [
                EntityModifier::External,
                EntityModifier::Singleton,
                EntityModifier::Transient,
            ]
            .iter()
            .any(|m| self.has(*m))
    }

    #[must_use]
    pub fn own_id_field(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_id())
    }

    #[must_use]
    pub fn field_named(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
