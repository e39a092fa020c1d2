use crate::{node::index, prelude::*};
use std::collections::{BTreeMap, BTreeSet};

///
/// PackageDef
///
/// Serialized form of a package, as produced by the schema loader.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PackageDef {
    pub name: String,

    #[serde(default)]
    pub files: Vec<FileDef>,
}

///
/// FileDef
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FileDef {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Entity>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enums: Vec<Enum>,
}

impl FileDef {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    #[must_use]
    pub fn with_enum(mut self, e: Enum) -> Self {
        self.enums.push(e);
        self
    }
}

///
/// File
///

#[derive(Clone, Debug)]
pub struct File {
    pub id: FileId,
    pub name: String,
    pub entities: Vec<EntityId>,
    pub enums: Vec<EnumId>,
}

///
/// Package
///
/// Arena of every declaration in a schema. Declarations refer to each other
/// by name; the package owns the name index and hands out typed ids.
///

#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "PackageDef")]
pub struct Package {
    name: String,
    files: Vec<File>,
    entities: Vec<Entity>,
    enums: Vec<Enum>,
    index: BTreeMap<String, TypeId>,
}

impl Package {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let def: PackageDef = serde_json::from_str(json)?;

        Self::new(def)
    }

    pub fn new(def: PackageDef) -> Result<Self, SchemaError> {
        let mut pkg = Self {
            name: def.name,
            files: Vec::with_capacity(def.files.len()),
            entities: Vec::new(),
            enums: Vec::new(),
            index: BTreeMap::new(),
        };

        // Phase 1: assign ids and flatten files into the arena
        for (fi, file_def) in def.files.into_iter().enumerate() {
            let file_id = FileId(index(fi));
            let mut file = File {
                id: file_id,
                name: file_def.name,
                entities: Vec::new(),
                enums: Vec::new(),
            };

            for mut entity in file_def.entities {
                let id = EntityId(index(pkg.entities.len()));
                entity.id = id;
                entity.file = file_id;
                for (i, field) in entity.fields.iter_mut().enumerate() {
                    field.id = FieldId {
                        entity: id,
                        index: index(i),
                    };
                }
                for (i, method) in entity.methods.iter_mut().enumerate() {
                    method.id = MethodId {
                        entity: id,
                        index: index(i),
                    };
                }

                pkg.insert_name(&entity.name, TypeId::Entity(id))?;
                file.entities.push(id);
                pkg.entities.push(entity);
            }

            for mut e in file_def.enums {
                let id = EnumId(index(pkg.enums.len()));
                e.id = id;
                e.file = file_id;

                pkg.insert_name(&e.name, TypeId::Enum(id))?;
                file.enums.push(id);
                pkg.enums.push(e);
            }

            pkg.files.push(file);
        }

        // Phase 2: structural checks that need the full index
        for entity in &pkg.entities {
            pkg.validate_entity(entity)?;
        }

        Ok(pkg)
    }

    fn insert_name(&mut self, name: &str, id: TypeId) -> Result<(), SchemaError> {
        if self.index.insert(name.to_string(), id).is_some() {
            return Err(SchemaError::DuplicateType {
                name: name.to_string(),
            });
        }

        Ok(())
    }

    fn validate_entity(&self, entity: &Entity) -> Result<(), SchemaError> {
        // base chain
        let mut seen = BTreeSet::from([entity.id]);
        let mut current = entity;
        while let Some(base_name) = &current.extends {
            let base = self
                .find_entity(base_name)
                .ok_or_else(|| SchemaError::UnknownBaseType {
                    entity: current.name.clone(),
                    base: base_name.clone(),
                })?;
            if !seen.insert(base.id) {
                return Err(SchemaError::BaseCycle {
                    entity: entity.name.clone(),
                });
            }
            current = base;
        }

        // identifier fields, own and inherited
        let mut ids = self
            .lineage(entity)
            .into_iter()
            .flat_map(|e| e.fields.iter().filter(|f| f.is_id()));
        if let Some(first) = ids.next() {
            if let Some(second) = ids.next() {
                return Err(SchemaError::MultipleIdFields {
                    entity: entity.name.clone(),
                    first: first.name.clone(),
                    second: second.name.clone(),
                });
            }
            if entity.is_config() {
                return Err(SchemaError::ConfigIdField {
                    entity: entity.name.clone(),
                    field: first.name.clone(),
                });
            }
        }

        Ok(())
    }

    //
    // accessors
    //

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn files(&self) -> &[File] {
        &self.files
    }

    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn enums(&self) -> &[Enum] {
        &self.enums
    }

    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0 as usize)
    }

    #[must_use]
    pub fn enum_(&self, id: EnumId) -> Option<&Enum> {
        self.enums.get(id.0 as usize)
    }

    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.entity(id.entity)?.fields.get(id.index as usize)
    }

    #[must_use]
    pub fn method(&self, id: MethodId) -> Option<&Method> {
        self.entity(id.entity)?.methods.get(id.index as usize)
    }

    #[must_use]
    pub fn directives(&self, id: DeclId) -> Option<&Directives> {
        match id {
            DeclId::Entity(id) => self.entity(id).map(|e| &e.directives),
            DeclId::Enum(id) => self.enum_(id).map(|e| &e.directives),
            DeclId::Field(id) => self.field(id).map(|f| &f.directives),
            DeclId::Method(id) => self.method(id).map(|m| &m.directives),
        }
    }

    //
    // lookups
    //

    /// Resolve a type name. Names qualified with this package's own name are
    /// also found by their local part.
    #[must_use]
    pub fn find_type(&self, name: &str) -> Option<TypeId> {
        if let Some(id) = self.index.get(name) {
            return Some(*id);
        }

        match package_of(name) {
            Some(pkg) if pkg == self.name => self.index.get(local_name(name)).copied(),
            _ => None,
        }
    }

    #[must_use]
    pub fn find_entity(&self, name: &str) -> Option<&Entity> {
        match self.find_type(name)? {
            TypeId::Entity(id) => self.entity(id),
            TypeId::Enum(_) => None,
        }
    }

    #[must_use]
    pub fn find_enum(&self, name: &str) -> Option<&Enum> {
        match self.find_type(name)? {
            TypeId::Enum(id) => self.enum_(id),
            TypeId::Entity(_) => None,
        }
    }

    #[must_use]
    pub fn base(&self, entity: &Entity) -> Option<&Entity> {
        entity
            .extends
            .as_deref()
            .and_then(|name| self.find_entity(name))
    }

    /// The entity and its bases, root base first.
    #[must_use]
    pub fn lineage<'a>(&'a self, entity: &'a Entity) -> Vec<&'a Entity> {
        let mut chain = vec![entity];
        let mut current = entity;
        while let Some(base) = self.base(current) {
            if chain.iter().any(|e| e.id == base.id) {
                break;
            }
            chain.push(base);
            current = base;
        }
        chain.reverse();

        chain
    }

    /// Identifier field, looked up through the base chain.
    #[must_use]
    pub fn id_field<'a>(&'a self, entity: &'a Entity) -> Option<&'a Field> {
        self.lineage(entity)
            .into_iter()
            .rev()
            .find_map(Entity::own_id_field)
    }

    /// Fields in declaration order, base fields first when inherited.
    #[must_use]
    pub fn fields<'a>(
        &'a self,
        entity: &'a Entity,
        inherited: bool,
        calculated: bool,
    ) -> Vec<&'a Field> {
        let sources = if inherited {
            self.lineage(entity)
        } else {
            vec![entity]
        };

        sources
            .into_iter()
            .flat_map(|e| e.fields.iter())
            .filter(|f| calculated || !f.is_calculated())
            .collect()
    }
}

impl TryFrom<PackageDef> for Package {
    type Error = SchemaError;

    fn try_from(def: PackageDef) -> Result<Self, Self::Error> {
        Self::new(def)
    }
}

///
/// TESTS
///
