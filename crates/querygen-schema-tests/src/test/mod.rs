mod shop;

use crate::prelude::*;

// shared helpers

pub fn field(name: &str, ty: &str) -> Field {
    Field::new(name, ty.parse().unwrap())
}

pub fn id(name: &str, ty: &str) -> Field {
    field(name, ty).with_modifier(FieldModifier::Id)
}

pub fn titled(name: &str) -> Field {
    field(name, "string").with_directives(Directives::new().with(tags::JS, tags::TITLE, true))
}

pub fn package(entities: Vec<Entity>) -> Package {
    let file = entities
        .into_iter()
        .fold(FileDef::new("test.viv"), FileDef::with_entity);

    Package::new(PackageDef {
        name: "test".to_string(),
        files: vec![file],
    })
    .unwrap()
}

pub fn generate(pkg: &Package) -> Generation {
    querygen::build::generate(pkg, &Config::default()).unwrap()
}

pub fn op<'a>(generation: &'a Generation, entity: &str, kind: OperationKind) -> Option<&'a OperationDefinition> {
    generation
        .operations
        .iter()
        .find(|op| op.entity == entity && op.kind() == Some(kind))
}
