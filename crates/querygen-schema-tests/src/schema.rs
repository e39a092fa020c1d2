use crate::prelude::*;

/// A small shop: references, embedded lines, dictionaries, a qualified
/// dictionary, a filter type, methods and a config node.
pub const SHOP: &str = include_str!("../schemas/shop.json");

pub fn shop() -> Result<Package, SchemaError> {
    Package::from_json(SHOP)
}
