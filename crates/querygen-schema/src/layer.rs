//! Layered directive lookup.
//!
//! A [`LayerSpec`] names which directive sets to consult and in what order:
//! the qualified set (`js:get`), then the plain namespace (`js`), then an
//! optional fallback namespace (`gql`). Reading it against a declaration's
//! [`Directives`] yields a [`DirectiveLayers`] whose typed accessors return
//! the first layer that carries the key with the requested type.

use crate::prelude::*;

///
/// LayerSpec
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LayerSpec<'s> {
    pub namespace: &'s str,
    pub qualifier: Option<&'s str>,
    pub fallback: Option<&'s str>,
}

impl<'s> LayerSpec<'s> {
    #[must_use]
    pub const fn new(namespace: &'s str) -> Self {
        Self {
            namespace,
            qualifier: None,
            fallback: None,
        }
    }

    #[must_use]
    pub const fn qualified(mut self, qualifier: Option<&'s str>) -> Self {
        self.qualifier = qualifier;
        self
    }

    #[must_use]
    pub const fn with_fallback(mut self, fallback: &'s str) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Collect the sets that exist, most specific first.
    #[must_use]
    pub fn read<'a>(&self, directives: &'a Directives) -> DirectiveLayers<'a> {
        let mut layers = Vec::with_capacity(3);

        if let Some(q) = self.qualifier
            && let Some(set) = directives.set(self.namespace, Some(q))
        {
            layers.push(set);
        }
        if let Some(set) = directives.set(self.namespace, None) {
            layers.push(set);
        }
        if let Some(fb) = self.fallback
            && fb != self.namespace
            && let Some(set) = directives.set(fb, None)
        {
            layers.push(set);
        }

        DirectiveLayers { layers }
    }
}

///
/// DirectiveLayers
///

#[derive(Clone, Debug, Default)]
pub struct DirectiveLayers<'a> {
    layers: Vec<&'a DirectiveSet>,
}

impl<'a> DirectiveLayers<'a> {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// True if any layer carries the key, whatever its type.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.layers.iter().any(|set| set.contains_key(key))
    }

    #[must_use]
    pub fn string(&self, key: &str) -> Option<&'a str> {
        self.layers.iter().find_map(|set| set.string(key))
    }

    #[must_use]
    pub fn bool(&self, key: &str) -> Option<bool> {
        self.layers.iter().find_map(|set| set.bool(key))
    }

    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        self.layers.iter().find_map(|set| set.int(key))
    }

    #[must_use]
    pub fn string_or(&self, key: &str, default: &'a str) -> &'a str {
        self.string(key).unwrap_or(default)
    }

    #[must_use]
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.bool(key).unwrap_or(default)
    }

    #[must_use]
    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.int(key).unwrap_or(default)
    }
}

///
/// TESTS
///
