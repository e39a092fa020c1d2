use super::op;
use crate::{prelude::*, schema};

fn shop() -> Generation {
    let pkg = schema::shop().unwrap();

    querygen::build::generate(&pkg, &Config::default()).unwrap()
}

fn names(generation: &Generation, entity: &str) -> Vec<String> {
    generation
        .operations
        .iter()
        .filter(|op| op.entity == entity)
        .map(|op| op.name.clone())
        .collect()
}

#[test]
fn operations_per_entity() {
    let generation = shop();

    assert_eq!(
        names(&generation, "Order"),
        [
            "getShopOrder",
            "setShopOrder",
            "createShopOrder",
            "lookupShopOrder",
            "deleteShopOrder",
            "findShopOrder",
            "createShopOrders",
            "shipOrder",
            "order_count",
        ]
    );
    assert_eq!(names(&generation, "Rate"), ["getShopRate", "lookupShopRate"]);
    assert_eq!(names(&generation, "Settings"), ["getShopSettings", "setShopSettings"]);
    assert!(names(&generation, "Line").is_empty());
    assert!(names(&generation, "OrderFilter").is_empty());
}

#[test]
fn order_selection() {
    let generation = shop();
    let get = op(&generation, "Order", OperationKind::Get).unwrap();

    assert_eq!(
        get.fields,
        [
            "id",
            "user { id address { id city } manager name }",
            "lines { sku qty }",
            "status",
            "meta { key val }",
            "total",
            "parent",
        ]
    );
}

#[test]
fn skipped_and_auxiliary_fields_stay_out() {
    let generation = shop();
    let get = op(&generation, "User", OperationKind::Get).unwrap();

    assert_eq!(get.fields, ["id", "name", "email", "address { id city }", "manager"]);
    for op in &generation.operations {
        assert!(op.fields.iter().all(|f| !f.contains("password") && !f.contains("session")));
    }
}

#[test]
fn config_node_selection_drops_dictionaries() {
    let generation = shop();
    let get = op(&generation, "Settings", OperationKind::Get).unwrap();

    assert!(get.arguments.is_empty());
    assert_eq!(get.fields, ["locale", "defaults { id }"]);
}

#[test]
fn qualified_dictionary_list() {
    let generation = shop();
    let list = op(&generation, "City", OperationKind::List).unwrap();

    assert_eq!(list.arguments.len(), 1);
    assert_eq!(list.arguments[0].name, "quals");
    assert_eq!(list.arguments[0].wire_type, "[String]");
    assert!(list.arguments[0].optional);
    assert_eq!(list.returns, Returns::Many("CityType".to_string()));
}

#[test]
fn methods_and_find() {
    let generation = shop();

    let ship = generation
        .operations
        .iter()
        .find(|op| op.name == "shipOrder")
        .unwrap();
    assert_eq!(ship.request, RequestKind::Mutation);
    let args: Vec<_> = ship.arguments.iter().map(|a| a.wire_type.as_str()).collect();
    assert_eq!(args, ["Int!", "String!"]);
    assert_eq!(ship.returns, Returns::One("OrderType".to_string()));
    assert!(ship.fields.contains(&"lines { sku qty }".to_string()));

    let find = op(&generation, "Order", OperationKind::Find).unwrap();
    assert_eq!(find.arguments[0].wire_type, "shopOrderFilterInput!");
    assert_eq!(
        find.document().lines().next(),
        Some("query findShopOrder($query:shopOrderFilterInput!) {")
    );
}

#[test]
fn only_identifierless_operations_fail() {
    let generation = shop();

    assert_eq!(generation.diagnostics.count(Severity::Error), 2);
    assert_eq!(generation.diagnostics.count(Severity::Warning), 0);
    assert!(generation.diagnostics.iter().all(|d| d.location == "Tag"));
}

#[test]
fn json_output_is_stable() {
    let pkg = schema::shop().unwrap();
    let config = Config::default();

    let first = querygen::build::generate(&pkg, &config).unwrap();
    let second = querygen::build::generate(&pkg, &config).unwrap();
    let json = serde_json::to_value(&first).unwrap();

    assert_eq!(json, serde_json::to_value(&second).unwrap());
    assert!(json["store"].as_array().is_some_and(|a| !a.is_empty()));
    assert_eq!(json["diagnostics"][0]["severity"], "error");
}
