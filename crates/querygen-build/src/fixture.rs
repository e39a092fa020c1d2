//! Small schemas shared by the unit tests.

use crate::prelude::*;

pub const PACKAGE: &str = "shop";

pub fn field(name: &str, ty: &str) -> Field {
    Field::new(name, ty.parse().expect("fixture type"))
}

pub fn id(name: &str, ty: &str) -> Field {
    field(name, ty).with_modifier(FieldModifier::Id)
}

pub fn titled(name: &str) -> Field {
    field(name, "string").with_directives(js(tags::TITLE, true))
}

pub fn js(key: &str, value: impl Into<DirectiveValue>) -> Directives {
    Directives::new().with(tags::JS, key, value)
}

pub fn gql(key: &str, value: impl Into<DirectiveValue>) -> Directives {
    Directives::new().with(tags::GQL, key, value)
}

pub fn package(entities: Vec<Entity>) -> Package {
    package_with(entities, Vec::new())
}

pub fn package_with(entities: Vec<Entity>, enums: Vec<Enum>) -> Package {
    let file = FileDef {
        name: "shop.viv".to_string(),
        entities,
        enums,
    };

    Package::new(PackageDef {
        name: PACKAGE.to_string(),
        files: vec![file],
    })
    .expect("fixture package")
}

/// `User { id, name (title), address: Address }`, `Address { id, city (title) }`
pub fn user_address() -> Package {
    package(vec![
        Entity::new("User")
            .with_field(id("id", "int"))
            .with_field(titled("name"))
            .with_field(field("address", "Address")),
        Entity::new("Address")
            .with_field(id("id", "int"))
            .with_field(titled("city")),
    ])
}

pub fn with_status_enum() -> Package {
    package_with(
        vec![
            Entity::new("Ticket")
                .with_field(id("id", "string"))
                .with_field(field("status", "Status!")),
        ],
        vec![
            Enum::new("Status", Scalar::String)
                .with_member("Open", Some(EnumValue::Str("open".to_string())))
                .with_member("Closed", None),
        ],
    )
}
