//! Wire (GraphQL) and exported (TypeScript) naming.
//!
//! Names are pure functions of the package, the directives and the naming
//! config, so any declaration can be named before or after it is resolved.

use crate::{kind::upper_first, prelude::*};

pub const KV_STRING_STRING: &str = "_kv_string_string_";
pub const KV_STRING_STRING_INPUT: &str = "_kv_string_string_input_";
pub const KV_STRING_INT: &str = "_kv_string_int_";
pub const KV_STRING_INT_INPUT: &str = "_kv_string_int_input_";

/// GraphQL scalar for a schema scalar.
#[must_use]
pub const fn wire_scalar(scalar: Scalar) -> &'static str {
    match scalar {
        Scalar::Any => "Any",
        Scalar::Bool => "Boolean",
        Scalar::Date => "DateTime",
        Scalar::Float => "Float",
        Scalar::Int => "Int",
        Scalar::String => "String",
    }
}

/// TypeScript type for a schema scalar.
#[must_use]
pub const fn js_scalar(scalar: Scalar) -> &'static str {
    match scalar {
        Scalar::Any => "any",
        Scalar::Bool => "boolean",
        Scalar::Date | Scalar::String => "string",
        Scalar::Float | Scalar::Int => "number",
    }
}

///
/// TypeNamer
///

#[derive(Clone, Copy, Debug)]
pub struct TypeNamer<'a> {
    pkg: &'a Package,
    naming: &'a NamingConfig,
}

impl<'a> TypeNamer<'a> {
    #[must_use]
    pub const fn new(pkg: &'a Package, naming: &'a NamingConfig) -> Self {
        Self { pkg, naming }
    }

    #[must_use]
    pub const fn package(&self) -> &'a Package {
        self.pkg
    }

    //
    // entity names
    //

    // `<pkg><Name>` with the package taken from a qualified name when present
    fn prefixed(&self, name: &str, suffix: &str) -> String {
        let local = local_name(name);
        if self.naming.package_prefix {
            let pkg = package_of(name).unwrap_or_else(|| self.pkg.name());
            format!("{pkg}{}{suffix}", upper_first(local))
        } else {
            format!("{local}{suffix}")
        }
    }

    #[must_use]
    pub fn wire_name(&self, entity: &Entity) -> String {
        LayerSpec::new(tags::GQL)
            .read(&entity.directives)
            .string(tags::NAME)
            .map_or_else(|| self.prefixed(&entity.name, ""), ToString::to_string)
    }

    #[must_use]
    pub fn wire_input_name(&self, entity: &Entity) -> String {
        self.prefixed(&entity.name, "Input")
    }

    #[must_use]
    pub fn js_name(&self, name: &str, directives: &Directives) -> String {
        LayerSpec::new(tags::JS)
            .read(directives)
            .string(tags::NAME)
            .map_or_else(
                || format!("{}{}", local_name(name), self.naming.type_suffix),
                ToString::to_string,
            )
    }

    #[must_use]
    pub fn js_input_name(&self, name: &str, directives: &Directives) -> String {
        LayerSpec::new(tags::JS)
            .read(directives)
            .string(tags::INPUT_NAME)
            .map_or_else(
                || format!("{}{}", local_name(name), self.naming.input_suffix),
                ToString::to_string,
            )
    }

    //
    // type references
    //

    /// Wire type text for a reference. `as_ref` projects entity references
    /// to the referenced entity's identifier type.
    pub fn wire(&self, ty: &TypeRef, as_ref: bool, input: bool) -> Result<String, TypeError> {
        let mut out = match &ty.kind {
            TypeKind::Array(item) => format!("[{}]", self.wire(item, as_ref, input)?),
            TypeKind::Map(value) => {
                let kv = match (&value.kind, input) {
                    (TypeKind::Scalar(Scalar::String), false) => KV_STRING_STRING,
                    (TypeKind::Scalar(Scalar::String), true) => KV_STRING_STRING_INPUT,
                    (TypeKind::Scalar(Scalar::Int), false) => KV_STRING_INT,
                    (TypeKind::Scalar(Scalar::Int), true) => KV_STRING_INT_INPUT,
                    _ => return Err(TypeError::MapValue(value.to_string())),
                };
                format!("[{kv}]")
            }
            TypeKind::Scalar(scalar) => wire_scalar(*scalar).to_string(),
            TypeKind::Named(name) => match self.find(name)? {
                Target::Enum(e) => wire_scalar(e.alias).to_string(),
                Target::Entity(entity) => {
                    if as_ref && let Some(id) = self.pkg.id_field(entity) {
                        return self.wire(&reprojected(&id.ty, ty.non_null), false, input);
                    }
                    if input {
                        self.wire_input_name(entity)
                    } else {
                        self.wire_name(entity)
                    }
                }
            },
        };

        if ty.non_null {
            out.push('!');
        }

        Ok(out)
    }

    /// Exported type text for a reference; nullability is not expressed.
    pub fn js(&self, ty: &TypeRef, as_ref: bool, input: bool) -> Result<String, TypeError> {
        Ok(match &ty.kind {
            TypeKind::Array(item) => format!("{}[]", self.js(item, as_ref, input)?),
            TypeKind::Map(value) => {
                let val = match &value.kind {
                    TypeKind::Scalar(scalar) => js_scalar(*scalar),
                    _ => return Err(TypeError::MapValue(value.to_string())),
                };
                format!("{{key: string, val: {val}}}[]")
            }
            TypeKind::Scalar(scalar) => js_scalar(*scalar).to_string(),
            TypeKind::Named(name) => match self.find(name)? {
                Target::Enum(e) if input => self.js_input_name(&e.name, &e.directives),
                Target::Enum(e) => self.js_name(&e.name, &e.directives),
                Target::Entity(entity) => {
                    if as_ref && let Some(id) = self.pkg.id_field(entity) {
                        return self.js(&id.ty, false, input);
                    }
                    if input {
                        self.js_input_name(&entity.name, &entity.directives)
                    } else {
                        self.js_name(&entity.name, &entity.directives)
                    }
                }
            },
        })
    }

    fn find(&self, name: &str) -> Result<Target<'a>, TypeError> {
        let target = match self.pkg.find_type(name) {
            Some(TypeId::Entity(id)) => self.pkg.entity(id).map(Target::Entity),
            Some(TypeId::Enum(id)) => self.pkg.enum_(id).map(Target::Enum),
            None => None,
        };

        target.ok_or_else(|| TypeError::NotFound(name.to_string()))
    }
}

enum Target<'a> {
    Entity(&'a Entity),
    Enum(&'a Enum),
}

// identifier type carrying the referencing field's nullability
fn reprojected(id_ty: &TypeRef, non_null: bool) -> TypeRef {
    TypeRef {
        kind: id_ty.kind.clone(),
        non_null,
    }
}

///
/// TESTS
///
