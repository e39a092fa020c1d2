use crate::prelude::*;
use derive_more::{Deref, DerefMut, IntoIterator};
use std::{collections::BTreeMap, fmt};

/// Separates a namespace from its qualifier in a directive set key (`js:get`).
pub const QUALIFIER_SEPARATOR: char = ':';

///
/// DirectiveValue
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DirectiveValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl DirectiveValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for DirectiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for DirectiveValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for DirectiveValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for DirectiveValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

///
/// DirectiveSet
///
/// One namespaced bag of key/value pairs, e.g. everything under `gql` or
/// under `js:get` on a single declaration.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Deserialize, IntoIterator, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DirectiveSet(BTreeMap<String, DirectiveValue>);

impl DirectiveSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<DirectiveValue>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn string(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(DirectiveValue::as_str)
    }

    #[must_use]
    pub fn bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(DirectiveValue::as_bool)
    }

    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(DirectiveValue::as_int)
    }
}

///
/// Directives
///
/// All directive sets attached to a declaration, keyed by `namespace` or
/// `namespace:qualifier`.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Directives(BTreeMap<String, DirectiveSet>);

impl Directives {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn key(namespace: &str, qualifier: Option<&str>) -> String {
        match qualifier {
            Some(q) => format!("{namespace}{QUALIFIER_SEPARATOR}{q}"),
            None => namespace.to_string(),
        }
    }

    #[must_use]
    pub fn set(&self, namespace: &str, qualifier: Option<&str>) -> Option<&DirectiveSet> {
        self.0.get(&Self::key(namespace, qualifier))
    }

    /// Insert a single value, creating the set on first use.
    #[must_use]
    pub fn with(mut self, set: &str, key: &str, value: impl Into<DirectiveValue>) -> Self {
        self.0
            .entry(set.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
        self
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_deserialize_by_shape() {
        let set: DirectiveSet =
            serde_json::from_str(r#"{"a": true, "b": 3, "c": 1.5, "d": "x"}"#).unwrap();

        assert_eq!(set.bool("a"), Some(true));
        assert_eq!(set.int("b"), Some(3));
        assert_eq!(set.get("c").and_then(DirectiveValue::as_float), Some(1.5));
        assert_eq!(set.string("d"), Some("x"));
    }

    #[test]
    fn typed_accessors_do_not_coerce() {
        let set = DirectiveSet::new().with("skip", "true");

        assert_eq!(set.bool("skip"), None);
        assert_eq!(set.string("skip"), Some("true"));
    }

    #[test]
    fn qualified_sets_are_keyed_with_separator() {
        let dirs = Directives::new()
            .with("js", "force", true)
            .with("js:get", "force", false);

        assert_eq!(dirs.set("js", None).and_then(|s| s.bool("force")), Some(true));
        assert_eq!(
            dirs.set("js", Some("get")).and_then(|s| s.bool("force")),
            Some(false)
        );
        assert!(dirs.set("js", Some("list")).is_none());
    }
}
