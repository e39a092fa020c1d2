//! Metadata resolution.
//!
//! One pass over the package writes every derived name, type and flag into a
//! fresh [`AttrStore`]. Problems scoped to a field or entity are recorded as
//! diagnostics and the offending attributes are left unset.


use crate::{namer::wire_scalar, prelude::*};
use convert_case::{Case, Casing};
use tracing::{debug, info_span};

/// Suffix of the companion input field that nulls a nullable field.
pub const SET_NULL_SUFFIX: &str = "SetNull";

pub const REQUEST_QUERY: &str = "query";
pub const REQUEST_MUTATION: &str = "mutation";

///
/// Resolution
///

#[derive(Debug)]
pub struct Resolution {
    pub store: AttrStore,
    pub diagnostics: Diagnostics,
}

/// Resolve every declaration of `pkg`.
pub fn resolve(pkg: &Package, naming: &NamingConfig) -> Result<Resolution, AttrError> {
    Resolver::new(pkg, naming).run()
}

///
/// FieldTypes
///

struct FieldTypes {
    wire: String,
    wire_input: String,
    js: String,
    js_input: String,
}

///
/// Resolver
///

struct Resolver<'a> {
    pkg: &'a Package,
    namer: TypeNamer<'a>,
    store: AttrStore,
    diags: Diagnostics,
}

impl<'a> Resolver<'a> {
    fn new(pkg: &'a Package, naming: &'a NamingConfig) -> Self {
        Self {
            pkg,
            namer: TypeNamer::new(pkg, naming),
            store: AttrStore::new(),
            diags: Diagnostics::new(),
        }
    }

    fn run(mut self) -> Result<Resolution, AttrError> {
        let pkg = self.pkg;
        let _span = info_span!("resolve", package = pkg.name()).entered();

        // Phase 1: cross-entity registrations, read by operation enablement
        for entity in pkg.entities() {
            self.register(entity)?;
        }

        // Phase 2: declarations in file order
        for file in pkg.files() {
            for id in &file.entities {
                if let Some(entity) = pkg.entity(*id) {
                    self.entity(entity)?;
                }
            }
            for id in &file.enums {
                if let Some(e) = pkg.enum_(*id) {
                    self.enumeration(e)?;
                }
            }
        }

        debug!(attrs = self.store.len(), diagnostics = self.diags.len(), "resolved");

        Ok(Resolution {
            store: self.store,
            diagnostics: self.diags,
        })
    }

    //
    // registrations
    //

    fn register(&mut self, entity: &Entity) -> Result<(), AttrError> {
        let find = LayerSpec::new(tags::FIND).read(&entity.directives);
        if let Some(target_name) = find.string(tags::FOR) {
            match self.pkg.find_entity(target_name) {
                Some(target) => {
                    if let Some(prev) = self.store.entity(target.id, Namespace::Api, AttrKey::FindParamType) {
                        let prev = self.pkg.entity(prev).map_or("?", |e| e.name.as_str());
                        err!(
                            self.diags,
                            &entity.name,
                            "'{}' already has filter type '{prev}'",
                            target.name
                        );
                    } else {
                        self.store
                            .set(target.id, Namespace::Api, AttrKey::FindParamType, entity.id)?;
                    }
                }
                None => err!(self.diags, &entity.name, "find target '{target_name}' not found"),
            }
        }

        if let Some(qualifier) = &entity.qualifier {
            match self.pkg.find_entity(qualifier) {
                Some(q) => {
                    self.store
                        .set(entity.id, Namespace::Api, AttrKey::QualifierType, q.id)?;
                }
                None => err!(self.diags, &entity.name, "qualifier type '{qualifier}' not found"),
            }
        }

        Ok(())
    }

    //
    // entities
    //

    fn entity(&mut self, entity: &Entity) -> Result<(), AttrError> {
        debug!(entity = %entity.name, "resolve entity");

        let gql = LayerSpec::new(tags::GQL).read(&entity.directives);
        let js = LayerSpec::new(tags::JS).read(&entity.directives);
        let id = entity.id;

        // wire layer
        let wire_name = self.namer.wire_name(entity);
        let wire_input = if entity.is_readonly() {
            String::new()
        } else {
            self.namer.wire_input_name(entity)
        };
        self.store.set(id, Namespace::Gql, AttrKey::Name, wire_name.as_str())?;
        self.store.set(id, Namespace::Gql, AttrKey::InputName, wire_input)?;

        // exported layer
        let js_skipped = js.bool_or(tags::SKIP, false);
        if !js_skipped {
            let js_name = self.namer.js_name(&entity.name, &entity.directives);
            let js_input = if entity.is_readonly() {
                String::new()
            } else {
                self.namer.js_input_name(&entity.name, &entity.directives)
            };
            self.store.set(
                id,
                Namespace::Js,
                AttrKey::InstanceGenerator,
                format!("New{js_name}Instance"),
            )?;
            self.store.set(id, Namespace::Js, AttrKey::Name, js_name)?;
            self.store.set(id, Namespace::Js, AttrKey::InputName, js_input)?;
        }

        // identifier
        if let Some(id_field) = self.pkg.id_field(entity) {
            match (
                self.namer.wire(&id_field.ty, false, false),
                self.namer.js(&id_field.ty, false, false),
            ) {
                (Ok(wire), Ok(js_ty)) => {
                    self.store.set(id, Namespace::Gql, AttrKey::IdType, wire)?;
                    self.store.set(id, Namespace::Js, AttrKey::IdType, js_ty)?;
                }
                (Err(e), _) | (_, Err(e)) => {
                    err!(self.diags, format!("{}.{}", entity.name, id_field.name), "{e}");
                }
            }
        }

        // fields, own only; inherited ones are resolved with their base
        for field in &entity.fields {
            self.field(entity, field)?;
        }

        self.title(entity)?;

        // operations and methods
        let skipped = gql.bool_or(tags::SKIP, false) || js_skipped || entity.is_operationless();
        if !skipped {
            for kind in OperationKind::ALL {
                if let Some(name) = self.operation_name(entity, kind, &wire_name) {
                    self.store
                        .set(id, Namespace::Gql, AttrKey::Operation(kind), name)?;
                }
            }
        }
        for method in &entity.methods {
            self.method(entity, method)?;
        }

        Ok(())
    }

    fn operation_name(&self, entity: &Entity, kind: OperationKind, wire_name: &str) -> Option<String> {
        let gql = LayerSpec::new(tags::GQL).read(&entity.directives);
        let tag = kind.tag();

        if let Some(name) = gql.string(tag) {
            return Some(name.to_string());
        }
        let enabled = match gql.bool(tag) {
            Some(flag) => flag,
            None => kind.enabled_by_default(entity),
        };

        enabled.then(|| kind.default_name(wire_name))
    }

    // Last explicit title wins; otherwise the first plain string field.
    fn title(&mut self, entity: &Entity) -> Result<(), AttrError> {
        let pkg = self.pkg;
        let mut chosen: Option<&Field> = None;

        for field in pkg.fields(entity, true, true) {
            if !self.is_exported(field) {
                continue;
            }
            let js = LayerSpec::new(tags::JS).read(&field.directives);
            if js.bool_or(tags::TITLE, false) {
                chosen = Some(field);
            } else if chosen.is_none() && matches!(field.ty.kind, TypeKind::Scalar(Scalar::String)) {
                chosen = Some(field);
            }
        }

        if let Some(field) = chosen {
            self.store.set(field.id, Namespace::Js, AttrKey::Title, true)?;
            self.store
                .set(entity.id, Namespace::Js, AttrKey::TitleField, field.id)?;
        }

        Ok(())
    }

    //
    // fields
    //

    fn is_exported(&self, field: &Field) -> bool {
        let gql = LayerSpec::new(tags::GQL).read(&field.directives);

        !gql.bool_or(tags::SKIP, false) && !field.has(FieldModifier::Auxiliary)
    }

    fn field(&mut self, entity: &Entity, field: &Field) -> Result<(), AttrError> {
        if !self.is_exported(field) {
            return Ok(());
        }

        let at = format!("{}.{}", entity.name, field.name);
        let gql = LayerSpec::new(tags::GQL).read(&field.directives);
        let js = LayerSpec::new(tags::JS).with_fallback(tags::GQL).read(&field.directives);
        let id = field.id;

        let id_only = self.is_self_reference(entity, field);
        let as_ref = field.is_embedded_ref() || id_only;
        let readonly = gql.bool_or(tags::READONLY, false) || entity.is_readonly();
        let has_input = !readonly && !field.is_calculated();

        let FieldTypes {
            wire,
            wire_input,
            js: js_ty,
            js_input,
        } = match self.field_types(&field.ty, as_ref) {
            Ok(types) => types,
            Err(e) => {
                err!(self.diags, at, "{e}");
                return Ok(());
            }
        };

        // wire layer
        let wire_name = gql.string_or(tags::NAME, &field.name);
        self.store.set(id, Namespace::Gql, AttrKey::Name, wire_name)?;
        self.store.set(id, Namespace::Gql, AttrKey::Type, wire)?;
        self.store.set(id, Namespace::Gql, AttrKey::InputType, wire_input)?;
        if id_only {
            self.store.set(id, Namespace::Gql, AttrKey::IdOnly, true)?;
        }
        if has_input {
            self.store.set(id, Namespace::Gql, AttrKey::InputName, wire_name)?;
            if !field.ty.non_null {
                self.store.set(
                    id,
                    Namespace::Gql,
                    AttrKey::SetNullField,
                    format!("{wire_name}{SET_NULL_SUFFIX}"),
                )?;
            }
        }

        // exported layer
        let js_name = js.string_or(tags::NAME, &field.name);
        self.store.set(id, Namespace::Js, AttrKey::Name, js_name)?;
        self.store.set(id, Namespace::Js, AttrKey::Type, js_ty)?;
        self.store.set(id, Namespace::Js, AttrKey::InputType, js_input)?;
        if has_input {
            let js_input_name = LayerSpec::new(tags::JS)
                .read(&field.directives)
                .string_or(tags::INPUT_NAME, js_name);
            self.store
                .set(id, Namespace::Js, AttrKey::InputName, js_input_name)?;
        }

        Ok(())
    }

    fn field_types(&self, ty: &TypeRef, as_ref: bool) -> Result<FieldTypes, TypeError> {
        Ok(FieldTypes {
            wire: self.namer.wire(ty, as_ref, false)?,
            wire_input: self.namer.wire(ty, as_ref, true)?,
            js: self.namer.js(ty, as_ref, false)?,
            js_input: self.namer.js(ty, as_ref, true)?,
        })
    }

    // A direct (non-array) reference back to the owning entity is carried by
    // identifier only, provided the owner has one.
    fn is_self_reference(&self, entity: &Entity, field: &Field) -> bool {
        let TypeKind::Named(name) = &field.ty.kind else {
            return false;
        };

        !field.is_embedded()
            && self.pkg.find_entity(name).is_some_and(|t| t.id == entity.id)
            && self.pkg.id_field(entity).is_some()
    }

    //
    // methods
    //

    fn method(&mut self, entity: &Entity, method: &Method) -> Result<(), AttrError> {
        let gql = LayerSpec::new(tags::GQL).read(&method.directives);

        let name = gql.string(tags::NAME).map_or_else(
            || format!("{}_{}", entity.local_name().to_case(Case::Camel), method.name),
            ToString::to_string,
        );
        let request = if gql.bool_or(tags::QUERY, false) {
            REQUEST_QUERY
        } else {
            REQUEST_MUTATION
        };

        self.store
            .set(method.id, Namespace::Gql, AttrKey::MethodName, name)?;
        self.store
            .set(method.id, Namespace::Gql, AttrKey::MethodRequest, request)?;

        Ok(())
    }

    //
    // enums
    //

    fn enumeration(&mut self, e: &Enum) -> Result<(), AttrError> {
        let wire = wire_scalar(e.alias);

        self.store.set(e.id, Namespace::Gql, AttrKey::Name, wire)?;
        self.store.set(e.id, Namespace::Gql, AttrKey::InputName, wire)?;
        self.store.set(
            e.id,
            Namespace::Js,
            AttrKey::Name,
            self.namer.js_name(&e.name, &e.directives),
        )?;
        self.store.set(
            e.id,
            Namespace::Js,
            AttrKey::InputName,
            self.namer.js_input_name(&e.name, &e.directives),
        )?;

        Ok(())
    }
}
