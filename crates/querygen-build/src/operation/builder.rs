use super::{Argument, OperationDefinition, OperationSource, RequestKind, Returns};
use crate::{
    prelude::*,
    resolve::REQUEST_QUERY,
    synthesize::{SelectionContext, Synthesizer},
};
use tracing::debug;

const ARG_VALUE: &str = "val";
const ARG_VALUES: &str = "vals";
const ARG_QUALIFIERS: &str = "quals";
const ARG_QUERY: &str = "query";

///
/// OperationBuilder
///
/// Builds operation definitions against a frozen attribute store.
///

#[derive(Clone, Copy, Debug)]
pub struct OperationBuilder<'a> {
    pkg: &'a Package,
    store: &'a AttrStore,
    namer: TypeNamer<'a>,
    synth: Synthesizer<'a>,
}

impl<'a> OperationBuilder<'a> {
    #[must_use]
    pub const fn new(pkg: &'a Package, store: &'a AttrStore, naming: &'a NamingConfig) -> Self {
        Self {
            pkg,
            store,
            namer: TypeNamer::new(pkg, naming),
            synth: Synthesizer::new(pkg, store),
        }
    }

    /// Every standard and method operation in file order. Failures of single
    /// operations are recorded in `diags` and the operation is left out.
    pub fn build_all(&self, diags: &mut Diagnostics) -> Vec<OperationDefinition> {
        let mut ops = Vec::new();

        for file in self.pkg.files() {
            for entity in file.entities.iter().filter_map(|id| self.pkg.entity(*id)) {
                for kind in OperationKind::ALL {
                    match self.build(entity, kind, diags) {
                        Ok(Some(op)) => ops.push(op),
                        Ok(None) => {}
                        Err(e) => err!(diags, &entity.name, "{e}"),
                    }
                }
                for method in &entity.methods {
                    if self.store.str(method.id, Namespace::Gql, AttrKey::MethodName).is_none() {
                        continue;
                    }
                    match self.build_method(entity, method, diags) {
                        Ok(op) => ops.push(op),
                        Err(e) => err!(diags, format!("{}.{}", entity.name, method.name), "{e}"),
                    }
                }
            }
        }

        ops
    }

    /// One standard operation, or `None` when the entity does not support it.
    pub fn build(
        &self,
        entity: &Entity,
        kind: OperationKind,
        diags: &mut Diagnostics,
    ) -> Result<Option<OperationDefinition>, OperationError> {
        let Some(name) = self.store.str(entity.id, Namespace::Gql, AttrKey::Operation(kind)) else {
            return Ok(None);
        };
        if (entity.is_readonly() && kind.is_mutating())
            || (entity.is_config() && kind.excluded_for_config())
        {
            return Ok(None);
        }
        let filter = self
            .store
            .entity(entity.id, Namespace::Api, AttrKey::FindParamType)
            .and_then(|id| self.pkg.entity(id));
        if kind == OperationKind::Find && filter.is_none() {
            return Ok(None);
        }

        // Phase 1: arguments
        let mut arguments = Vec::new();
        match kind {
            OperationKind::Get if entity.is_config() => {}
            OperationKind::Get | OperationKind::Delete => {
                arguments.push(self.id_argument(entity, kind)?);
            }
            OperationKind::Create | OperationKind::Set => {
                let (wire, js) = self.input_names(entity, kind)?;
                arguments.push(Argument::required(ARG_VALUE, wire, js));
            }
            OperationKind::BulkCreate | OperationKind::BulkSet => {
                let (wire, js) = self.input_names(entity, kind)?;
                arguments.push(Argument::required(
                    ARG_VALUES,
                    &format!("[{wire}]"),
                    &format!("{js}[]"),
                ));
            }
            OperationKind::List => {
                if let Some(arg) = self.qualifier_argument(entity) {
                    arguments.push(arg);
                }
            }
            OperationKind::Lookup => {
                arguments.push(Argument::required(ARG_QUERY, "String", "string"));
            }
            OperationKind::Find => {
                if let Some(filter) = filter {
                    let (wire, js) = (
                        self.name_of(filter, Namespace::Gql, AttrKey::InputName, kind)?,
                        self.name_of(filter, Namespace::Js, AttrKey::Name, kind)?,
                    );
                    arguments.push(Argument::required(ARG_QUERY, wire, js));
                }
            }
        }

        // Phase 2: result shape
        let js_name = self.name_of(entity, Namespace::Js, AttrKey::Name, kind)?;
        let returns = if kind == OperationKind::Delete {
            Returns::Boolean
        } else if kind.returns_many() {
            Returns::Many(js_name.to_string())
        } else {
            Returns::One(js_name.to_string())
        };
        let fields = if kind == OperationKind::Delete {
            Vec::new()
        } else {
            self.selection(entity, &SelectionContext::new(entity).for_kind(kind), diags)
        };

        let input_fill = match kind {
            OperationKind::Create
            | OperationKind::Set
            | OperationKind::BulkCreate
            | OperationKind::BulkSet => {
                let (_, js) = self.input_names(entity, kind)?;
                Some(format!("New{js}Instance"))
            }
            _ => None,
        };

        debug!(entity = %entity.name, operation = name, "built");

        Ok(Some(OperationDefinition {
            entity: entity.name.clone(),
            source: OperationSource::Standard(kind),
            request: RequestKind::for_kind(kind),
            name: name.to_string(),
            function_name: name.to_string(),
            var_name: format!("{name}Request"),
            arguments,
            returns,
            fields,
            input_fill,
        }))
    }

    /// Operation for a custom entity method.
    pub fn build_method(
        &self,
        entity: &Entity,
        method: &Method,
        diags: &mut Diagnostics,
    ) -> Result<OperationDefinition, OperationError> {
        let name = self
            .store
            .str(method.id, Namespace::Gql, AttrKey::MethodName)
            .ok_or_else(|| OperationError::MissingName {
                entity: entity.name.clone(),
                operation: method.name.clone(),
                attr: AttrKey::MethodName.to_string(),
            })?;
        let request = if self.store.str(method.id, Namespace::Gql, AttrKey::MethodRequest) == Some(REQUEST_QUERY) {
            RequestKind::Query
        } else {
            RequestKind::Mutation
        };

        // Phase 1: arguments, identifier first
        let mut arguments = Vec::new();
        if let Some(id_field) = self.pkg.id_field(entity)
            && let Some(arg) = self.resolved_id_argument(id_field)
        {
            arguments.push(arg);
        }
        for param in &method.params {
            let at = format!("{}.{}({})", entity.name, method.name, param.name);
            match (
                self.namer.wire(&param.ty, false, true),
                self.namer.js(&param.ty, false, true),
            ) {
                (Ok(wire), Ok(js)) => arguments.push(if param.ty.non_null {
                    Argument::required(&param.name, &wire, &js)
                } else {
                    Argument::optional(&param.name, &wire, &js)
                }),
                (Err(e), _) | (_, Err(e)) => warning!(diags, at, "parameter skipped: {e}"),
            }
        }

        // Phase 2: result shape
        let (returns, fields) = match &method.returns {
            None => (Returns::Nothing, Vec::new()),
            Some(ty) => self.method_returns(method, ty, diags)?,
        };

        debug!(entity = %entity.name, method = %method.name, operation = name, "built");

        Ok(OperationDefinition {
            entity: entity.name.clone(),
            source: OperationSource::Method(method.name.clone()),
            request,
            name: name.to_string(),
            function_name: name.to_string(),
            var_name: format!("{name}Request"),
            arguments,
            returns,
            fields,
            input_fill: None,
        })
    }

    fn method_returns(
        &self,
        method: &Method,
        ty: &TypeRef,
        diags: &mut Diagnostics,
    ) -> Result<(Returns, Vec<String>), OperationError> {
        let element = ty.element();
        let not_found = || OperationError::ReturnTypeNotFound {
            method: method.name.clone(),
            type_name: element.to_string(),
        };

        let js = self.namer.js(element, false, false).map_err(|_| not_found())?;
        let fields = match &element.kind {
            TypeKind::Named(name) => match self.pkg.find_type(name) {
                Some(TypeId::Entity(id)) => {
                    let target = self.pkg.entity(id).ok_or_else(not_found)?;
                    self.selection(target, &SelectionContext::new(target), diags)
                }
                Some(TypeId::Enum(_)) => Vec::new(),
                None => return Err(not_found()),
            },
            _ => Vec::new(),
        };
        let returns = if ty.is_array() {
            Returns::Many(js)
        } else {
            Returns::One(js)
        };

        Ok((returns, fields))
    }

    //
    // arguments
    //

    fn id_argument(&self, entity: &Entity, kind: OperationKind) -> Result<Argument, OperationError> {
        let id_field = self
            .pkg
            .id_field(entity)
            .ok_or_else(|| OperationError::MissingIdField {
                entity: entity.name.clone(),
                operation: kind.to_string(),
            })?;

        self.resolved_id_argument(id_field)
            .ok_or_else(|| OperationError::MissingIdType {
                entity: entity.name.clone(),
                field: id_field.name.clone(),
            })
    }

    fn resolved_id_argument(&self, id_field: &Field) -> Option<Argument> {
        let wire = self.store.str(id_field.id, Namespace::Gql, AttrKey::Type)?;
        let js = self.store.str(id_field.id, Namespace::Js, AttrKey::Type)?;
        let name = self
            .store
            .str(id_field.id, Namespace::Gql, AttrKey::Name)
            .unwrap_or(id_field.name.as_str());

        Some(Argument::required(name, wire, js))
    }

    // optional list of qualifier identifiers, typed after the qualifier's id
    fn qualifier_argument(&self, entity: &Entity) -> Option<Argument> {
        let qualifier = self
            .store
            .entity(entity.id, Namespace::Api, AttrKey::QualifierType)
            .and_then(|id| self.pkg.entity(id))?;
        let scalar = self
            .pkg
            .id_field(qualifier)
            .and_then(|f| f.ty.as_scalar());

        Some(match scalar {
            Some(Scalar::Int) => Argument::optional(ARG_QUALIFIERS, "[Int]", "number[]"),
            _ => Argument::optional(ARG_QUALIFIERS, "[String]", "string[]"),
        })
    }

    fn input_names(&self, entity: &Entity, kind: OperationKind) -> Result<(&'a str, &'a str), OperationError> {
        Ok((
            self.name_of(entity, Namespace::Gql, AttrKey::InputName, kind)?,
            self.name_of(entity, Namespace::Js, AttrKey::InputName, kind)?,
        ))
    }

    fn name_of(
        &self,
        entity: &Entity,
        namespace: Namespace,
        key: AttrKey,
        kind: OperationKind,
    ) -> Result<&'a str, OperationError> {
        let store: &'a AttrStore = self.store;

        store
            .str(entity.id, namespace, key)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| OperationError::MissingName {
                entity: entity.name.clone(),
                operation: kind.to_string(),
                attr: format!("{namespace}:{key}"),
            })
    }

    //
    // selection
    //

    // one selection per visible field, empties compacted out
    fn selection(
        &self,
        entity: &Entity,
        ctx: &SelectionContext<'_>,
        diags: &mut Diagnostics,
    ) -> Vec<String> {
        let mut fields = Vec::new();

        for field in self.pkg.fields(entity, true, true) {
            if ctx.is_skipped(field) {
                continue;
            }
            let Some(name) = self.store.str(field.id, Namespace::Gql, AttrKey::Name) else {
                continue;
            };

            match self.synth.synthesize(name, field, ctx, diags) {
                Ok(text) if text.is_empty() => {}
                Ok(text) => fields.push(text),
                Err(e) => diags.push(
                    e.severity(),
                    format!("{}.{}", entity.name, field.name),
                    e.to_string(),
                ),
            }
        }

        fields
    }
}
