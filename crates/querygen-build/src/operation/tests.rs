use super::*;
use crate::{
    fixture::{self, field, gql, id, js, package, titled},
    resolve::resolve,
};

struct Built {
    ops: Vec<OperationDefinition>,
    diags: Diagnostics,
}

impl Built {
    fn op(&self, entity: &str, kind: OperationKind) -> Option<&OperationDefinition> {
        self.ops
            .iter()
            .find(|op| op.entity == entity && op.kind() == Some(kind))
    }

    fn method(&self, name: &str) -> Option<&OperationDefinition> {
        self.ops
            .iter()
            .find(|op| op.source == OperationSource::Method(name.to_string()))
    }
}

fn build_all(pkg: &Package) -> Built {
    let naming = NamingConfig::default();
    let resolution = resolve(pkg, &naming).unwrap();
    let mut diags = Diagnostics::new();
    let ops = OperationBuilder::new(pkg, &resolution.store, &naming).build_all(&mut diags);

    Built { ops, diags }
}

fn build_one(pkg: &Package, entity: &str, kind: OperationKind) -> Result<Option<OperationDefinition>, OperationError> {
    let naming = NamingConfig::default();
    let store = resolve(pkg, &naming).unwrap().store;
    let entity = pkg.find_entity(entity).unwrap();

    OperationBuilder::new(pkg, &store, &naming).build(entity, kind, &mut Diagnostics::new())
}

#[test]
fn get_selects_scalars_and_references() {
    let built = build_all(&fixture::user_address());
    let get = built.op("User", OperationKind::Get).unwrap();

    assert_eq!(get.name, "getShopUser");
    assert_eq!(get.request, RequestKind::Query);
    assert_eq!(get.arguments, vec![Argument::required("id", "Int", "number")]);
    assert_eq!(get.arguments[0].wire_type, "Int!");
    assert_eq!(get.returns, Returns::One("UserType".to_string()));
    assert_eq!(get.fields, ["id", "name", "address { id city }"]);
    assert_eq!(get.var_name, "getShopUserRequest");
    assert_eq!(get.input_fill, None);
    assert!(built.diags.is_empty());
}

#[test]
fn default_operations_for_a_plain_entity() {
    let built = build_all(&fixture::user_address());
    let kinds: Vec<_> = built
        .ops
        .iter()
        .filter(|op| op.entity == "User")
        .filter_map(OperationDefinition::kind)
        .collect();

    assert_eq!(
        kinds,
        [
            OperationKind::Get,
            OperationKind::Set,
            OperationKind::Create,
            OperationKind::Lookup,
            OperationKind::Delete,
        ]
    );
}

#[test]
fn create_and_set_take_the_input_type() {
    let built = build_all(&fixture::user_address());

    for kind in [OperationKind::Create, OperationKind::Set] {
        let op = built.op("User", kind).unwrap();
        assert_eq!(op.request, RequestKind::Mutation);
        assert_eq!(
            op.arguments,
            vec![Argument::required("val", "shopUserInput", "User__InputType")]
        );
        assert_eq!(op.input_fill.as_deref(), Some("NewUser__InputTypeInstance"));
        assert!(!op.fields.is_empty());
    }
}

#[test]
fn delete_returns_boolean_with_empty_selection() {
    let built = build_all(&fixture::user_address());
    let delete = built.op("User", OperationKind::Delete).unwrap();

    assert_eq!(delete.request, RequestKind::Mutation);
    assert_eq!(delete.returns, Returns::Boolean);
    assert!(delete.fields.is_empty());
    assert_eq!(delete.arguments[0].name, "id");
}

#[test]
fn readonly_entity_skips_mutations() {
    let pkg = package(vec![
        Entity::new("Rate")
            .with_modifier(EntityModifier::Readonly)
            .with_field(id("id", "int"))
            .with_field(field("value", "float")),
    ]);

    assert!(build_one(&pkg, "Rate", OperationKind::Create).unwrap().is_none());
    assert!(build_one(&pkg, "Rate", OperationKind::Set).unwrap().is_none());
    assert!(build_one(&pkg, "Rate", OperationKind::Delete).unwrap().is_none());

    let get = build_one(&pkg, "Rate", OperationKind::Get).unwrap().unwrap();
    assert_eq!(get.fields, ["id", "value"]);
}

#[test]
fn missing_identifier_fails_only_that_operation() {
    let pkg = package(vec![Entity::new("Tag").with_field(field("name", "string"))]);

    let err = build_one(&pkg, "Tag", OperationKind::Delete).unwrap_err();
    assert!(matches!(err, OperationError::MissingIdField { ref operation, .. } if operation == "delete"));

    let built = build_all(&pkg);
    assert!(built.op("Tag", OperationKind::Delete).is_none());
    assert!(built.op("Tag", OperationKind::Get).is_none());
    assert!(built.op("Tag", OperationKind::Create).is_some());
    assert_eq!(built.diags.count(Severity::Error), 2);
    assert!(built.diags.iter().all(|d| d.location == "Tag"));
}

#[test]
fn unresolved_identifier_type_fails_the_operation() {
    let pkg = package(vec![
        Entity::new("Ghost")
            .with_field(id("id", "Missing"))
            .with_field(field("name", "string")),
    ]);

    let err = build_one(&pkg, "Ghost", OperationKind::Get).unwrap_err();
    assert!(matches!(err, OperationError::MissingIdType { .. }));
}

#[test]
fn config_entity_restrictions() {
    let pkg = package(vec![
        Entity::new("Settings")
            .with_modifier(EntityModifier::Config)
            .with_directives(gql(tags::LIST, true))
            .with_field(field("theme", "string")),
    ]);
    let built = build_all(&pkg);

    for kind in [
        OperationKind::Create,
        OperationKind::List,
        OperationKind::Lookup,
        OperationKind::Delete,
        OperationKind::Find,
    ] {
        assert!(built.op("Settings", kind).is_none(), "{kind} should be skipped");
    }

    let get = built.op("Settings", OperationKind::Get).unwrap();
    assert!(get.arguments.is_empty());
    assert!(built.op("Settings", OperationKind::Set).is_some());
    assert!(built.diags.is_empty());
}

#[test]
fn qualified_dictionary_list_takes_qualifiers() {
    let pkg = package(vec![
        Entity::new("Region")
            .with_modifier(EntityModifier::Dictionary)
            .with_field(id("id", "string"))
            .with_field(titled("name")),
        Entity::new("City")
            .with_modifier(EntityModifier::Dictionary)
            .qualified_by("Region")
            .with_field(id("id", "int"))
            .with_field(titled("name")),
    ]);
    let built = build_all(&pkg);

    let cities = built.op("City", OperationKind::List).unwrap();
    assert_eq!(
        cities.arguments,
        vec![Argument::optional("quals", "[String]", "string[]")]
    );
    assert_eq!(cities.returns, Returns::Many("CityType".to_string()));
    assert_eq!(cities.request, RequestKind::Query);

    let regions = built.op("Region", OperationKind::List).unwrap();
    assert!(regions.arguments.is_empty());
}

#[test]
fn lookup_takes_a_text_query() {
    let built = build_all(&fixture::user_address());
    let lookup = built.op("User", OperationKind::Lookup).unwrap();

    assert_eq!(lookup.arguments, vec![Argument::required("query", "String", "string")]);
    assert_eq!(lookup.returns, Returns::Many("UserType".to_string()));
}

#[test]
fn find_uses_registered_filter() {
    let pkg = package(vec![
        Entity::new("Order")
            .with_field(id("id", "int"))
            .with_field(field("customer", "string"))
            .with_field(field("internal", "string").with_directives(
                Directives::new().with(&Directives::key(tags::JS, Some(tags::FIND_OP)), tags::SKIP, true),
            )),
        Entity::new("OrderFilter")
            .with_modifier(EntityModifier::Transient)
            .with_directives(Directives::new().with(tags::FIND, tags::FOR, "Order"))
            .with_field(field("customer", "string")),
        Entity::new("Invoice").with_field(id("id", "int")),
    ]);
    let built = build_all(&pkg);

    let find = built.op("Order", OperationKind::Find).unwrap();
    assert_eq!(find.name, "findShopOrder");
    assert_eq!(
        find.arguments,
        vec![Argument::required("query", "shopOrderFilterInput", "OrderFilterType")]
    );
    assert_eq!(find.returns, Returns::Many("OrderType".to_string()));
    assert_eq!(find.fields, ["id", "customer"]);

    // the per-operation skip leaves other operations alone
    let get = built.op("Order", OperationKind::Get).unwrap();
    assert_eq!(get.fields, ["id", "customer", "internal"]);

    assert!(built.op("Invoice", OperationKind::Find).is_none());
    assert!(built.op("OrderFilter", OperationKind::Get).is_none());
}

#[test]
fn bulk_operations_need_the_capability_flag() {
    let pkg = package(vec![
        Entity::new("Order")
            .with_directives(gql(tags::BULK_CREATE, true).with(tags::GQL, tags::BULK_SET, "saveOrders"))
            .with_field(id("id", "int")),
        Entity::new("Invoice").with_field(id("id", "int")),
    ]);
    let built = build_all(&pkg);

    let create = built.op("Order", OperationKind::BulkCreate).unwrap();
    assert_eq!(create.name, "createShopOrders");
    assert_eq!(create.request, RequestKind::Mutation);
    assert_eq!(
        create.arguments,
        vec![Argument::required("vals", "[shopOrderInput]", "Order__InputType[]")]
    );
    assert_eq!(create.returns, Returns::Many("OrderType".to_string()));
    assert_eq!(create.input_fill.as_deref(), Some("NewOrder__InputTypeInstance"));

    assert_eq!(built.op("Order", OperationKind::BulkSet).unwrap().name, "saveOrders");
    assert!(built.op("Invoice", OperationKind::BulkCreate).is_none());
}

#[test]
fn skipped_fields_never_reach_a_selection() {
    let pkg = package(vec![
        Entity::new("Account")
            .with_field(id("id", "int"))
            .with_field(field("secret", "string").with_directives(gql(tags::SKIP, true)))
            .with_field(field("hidden", "string").with_directives(js(tags::SKIP, true)))
            .with_field(field("email", "string")),
    ]);
    let built = build_all(&pkg);

    for op in &built.ops {
        assert!(op.fields.iter().all(|f| !f.contains("secret") && !f.contains("hidden")));
    }
    assert_eq!(built.op("Account", OperationKind::Get).unwrap().fields, ["id", "email"]);
}

#[test]
fn methods_become_operations() {
    let pkg = package(vec![
        Entity::new("Order")
            .with_field(id("id", "int"))
            .with_method(
                Method::new("ship")
                    .with_param(Param::new("carrier", "string!".parse().unwrap()))
                    .with_param(Param::new("note", "string".parse().unwrap()))
                    .with_param(Param::new("box", "Crate".parse().unwrap()))
                    .with_returns("Address".parse().unwrap()),
            )
            .with_method(
                Method::new("count")
                    .with_directives(gql(tags::QUERY, true))
                    .with_returns("[int]".parse().unwrap()),
            )
            .with_method(Method::new("touch")),
        Entity::new("Address")
            .with_field(id("id", "int"))
            .with_field(titled("city")),
    ]);
    let built = build_all(&pkg);

    let ship = built.method("ship").unwrap();
    assert_eq!(ship.name, "order_ship");
    assert_eq!(ship.request, RequestKind::Mutation);
    assert_eq!(
        ship.arguments,
        vec![
            Argument::required("id", "Int", "number"),
            Argument::required("carrier", "String!", "string"),
            Argument::optional("note", "String", "string"),
        ]
    );
    assert_eq!(ship.returns, Returns::One("AddressType".to_string()));
    assert_eq!(ship.fields, ["id", "city"]);
    assert_eq!(built.diags.count(Severity::Warning), 1);
    assert_eq!(built.diags[0].location, "Order.ship(box)");

    let count = built.method("count").unwrap();
    assert_eq!(count.request, RequestKind::Query);
    assert_eq!(count.returns, Returns::Many("number".to_string()));
    assert!(count.fields.is_empty());

    assert_eq!(built.method("touch").unwrap().returns, Returns::Nothing);
}

#[test]
fn unknown_method_return_type_fails_the_method() {
    let pkg = package(vec![
        Entity::new("Order")
            .with_field(id("id", "int"))
            .with_method(Method::new("ghost").with_returns("Missing".parse().unwrap())),
    ]);
    let built = build_all(&pkg);

    assert!(built.method("ghost").is_none());
    assert_eq!(built.diags.count(Severity::Error), 1);
    assert_eq!(built.diags[0].location, "Order.ghost");
}

#[test]
fn document_renders_arguments_and_selection() {
    let built = build_all(&fixture::user_address());

    assert_eq!(
        built.op("User", OperationKind::Get).unwrap().document(),
        "query getShopUser($id:Int!) {\n  getShopUser(id:$id) {\n    id\n    name\n    address { id city }\n  }\n}"
    );
    assert_eq!(
        built.op("User", OperationKind::Delete).unwrap().document(),
        "mutation deleteShopUser($id:Int!) {\n  deleteShopUser(id:$id)\n}"
    );
}

#[test]
fn document_without_arguments() {
    let pkg = package(vec![
        Entity::new("Color")
            .with_modifier(EntityModifier::Dictionary)
            .with_field(id("id", "int"))
            .with_field(titled("name")),
    ]);
    let built = build_all(&pkg);

    assert_eq!(
        built.op("Color", OperationKind::List).unwrap().document(),
        "query listShopColor {\n  listShopColor {\n    id\n    name\n  }\n}"
    );
}
