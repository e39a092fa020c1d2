//! Selection-set synthesis.
//!
//! Decides how much of a referenced entity a generated request selects.
//! Scalars, enums, maps, by-reference fields and identifier-only fields are
//! leaves. Any other reference selects the identifier plus title fields of
//! the target, or every field when it is embedded or forced.


use crate::prelude::*;
use std::collections::BTreeSet;
use tracing::trace;

/// Selection name used for an identifier field that has no resolved name.
pub const DEFAULT_ID_NAME: &str = "id";

///
/// SelectionContext
///
/// The entity whose operation is being built and, when per-operation
/// directives apply, the operation kind.
///

#[derive(Clone, Copy, Debug)]
pub struct SelectionContext<'a> {
    pub owner: &'a Entity,
    pub kind: Option<OperationKind>,
}

impl<'a> SelectionContext<'a> {
    #[must_use]
    pub const fn new(owner: &'a Entity) -> Self {
        Self { owner, kind: None }
    }

    #[must_use]
    pub const fn for_kind(mut self, kind: OperationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Field directives as seen by this operation: `js:<kind>`, `js`, `gql`.
    #[must_use]
    pub fn layers<'d>(&self, directives: &'d Directives) -> DirectiveLayers<'d> {
        LayerSpec::new(tags::JS)
            .qualified(self.kind.map(OperationKind::tag))
            .with_fallback(tags::GQL)
            .read(directives)
    }

    #[must_use]
    pub fn is_skipped(&self, field: &Field) -> bool {
        self.layers(&field.directives).bool_or(tags::SKIP, false)
    }

    #[must_use]
    pub fn is_forced(&self, field: &Field) -> bool {
        let layers = self.layers(&field.directives);

        layers.bool_or(tags::FORCE, false)
            || (self.kind == Some(OperationKind::Find) && layers.bool_or(tags::FIND_FORCE, false))
    }
}

///
/// Synthesizer
///
/// Reads the package and the frozen attribute store; never writes either.
///

#[derive(Clone, Copy, Debug)]
pub struct Synthesizer<'a> {
    pkg: &'a Package,
    store: &'a AttrStore,
}

impl<'a> Synthesizer<'a> {
    #[must_use]
    pub const fn new(pkg: &'a Package, store: &'a AttrStore) -> Self {
        Self { pkg, store }
    }

    /// Selection text for `field`, requested as `name`. An empty string means
    /// nothing is selected. Problems inside nested branches are appended to
    /// `diags` and the branch is dropped; only a failure of `field` itself is
    /// returned.
    pub fn synthesize(
        &self,
        name: &str,
        field: &Field,
        ctx: &SelectionContext<'_>,
        diags: &mut Diagnostics,
    ) -> Result<String, SynthesisError> {
        let mut expanding = BTreeSet::new();

        self.select(name, field, ctx, &mut expanding, diags)
    }

    fn select(
        &self,
        name: &str,
        field: &Field,
        ctx: &SelectionContext<'_>,
        expanding: &mut BTreeSet<EntityId>,
        diags: &mut Diagnostics,
    ) -> Result<String, SynthesisError> {
        // Phase 1: leaves
        let type_name = match &field.ty.element().kind {
            TypeKind::Named(type_name) => type_name,
            TypeKind::Map(_) => return Ok(format!("{name} {{ key val }}")),
            TypeKind::Array(_) | TypeKind::Scalar(_) => return Ok(name.to_string()),
        };
        let target = match self.pkg.find_type(type_name) {
            Some(TypeId::Enum(_)) => return Ok(name.to_string()),
            Some(TypeId::Entity(id)) => self.pkg.entity(id),
            None => None,
        };
        let Some(target) = target else {
            return Err(SynthesisError::TypeNotFound {
                field: field.name.clone(),
                type_name: type_name.clone(),
            });
        };

        if ctx.owner.is_config() && target.is_dictionary() {
            return Ok(String::new());
        }
        if field.is_embedded_ref() || self.store.flag(field.id, Namespace::Gql, AttrKey::IdOnly) {
            return Ok(name.to_string());
        }

        // Phase 2: expand the target, guarded against re-entry
        if !expanding.insert(target.id) {
            return Err(SynthesisError::Cycle {
                field: field.name.clone(),
                type_name: target.name.clone(),
            });
        }
        let full = field.is_embedded() || ctx.is_forced(field);
        trace!(field = name, target = %target.name, full, "expand");

        let parts = self.expand(target, full, ctx, expanding, diags);
        expanding.remove(&target.id);

        // Phase 3: compose
        let text = if !parts.is_empty() {
            format!("{name} {{ {} }}", parts.join(" "))
        } else if ctx.owner.is_config() {
            String::new()
        } else {
            name.to_string()
        };

        Ok(text)
    }

    // Selected parts of `target`: identifier and included fields in field
    // order, then the title fragment.
    fn expand(
        &self,
        target: &Entity,
        full: bool,
        ctx: &SelectionContext<'_>,
        expanding: &mut BTreeSet<EntityId>,
        diags: &mut Diagnostics,
    ) -> Vec<String> {
        let id_field = self.pkg.id_field(target).map(|f| f.id);
        let mut selected = Vec::new();
        let mut titles = Vec::new();

        for nested in self.pkg.fields(target, true, true) {
            if ctx.is_skipped(nested) {
                continue;
            }
            let is_id = id_field == Some(nested.id);
            let name = match self.store.str(nested.id, Namespace::Gql, AttrKey::Name) {
                Some(name) => name,
                None if is_id => DEFAULT_ID_NAME,
                // skipped or unresolvable; the resolver already reported the latter
                None => continue,
            };

            if self.is_structured(nested) {
                match self.select(name, nested, ctx, expanding, diags) {
                    Ok(text) if text.is_empty() => {}
                    Ok(text) => selected.push(text),
                    Err(e) => {
                        diags.push(
                            e.severity(),
                            format!("{}.{}", target.name, nested.name),
                            e.to_string(),
                        );
                    }
                }
            } else if full
                || is_id
                || ctx.is_forced(nested)
                || self.store.flag(nested.id, Namespace::Js, AttrKey::FieldForceLoad)
            {
                selected.push(name.to_string());
            } else if self.is_title(nested, ctx) {
                titles.push(name.to_string());
            }
        }

        selected.extend(titles);
        selected
    }

    // Maps and entity references recurse; so do unknown names, which then
    // surface as a diagnostic.
    fn is_structured(&self, field: &Field) -> bool {
        match &field.ty.element().kind {
            TypeKind::Map(_) => true,
            TypeKind::Named(name) => !matches!(self.pkg.find_type(name), Some(TypeId::Enum(_))),
            TypeKind::Array(_) | TypeKind::Scalar(_) => false,
        }
    }

    fn is_title(&self, field: &Field, ctx: &SelectionContext<'_>) -> bool {
        let layers = ctx.layers(&field.directives);

        self.store.flag(field.id, Namespace::Js, AttrKey::Title)
            || layers.bool_or(tags::TITLE, false)
            || layers.has(tags::ICON)
            || layers.has(tags::COLOR)
    }
}
