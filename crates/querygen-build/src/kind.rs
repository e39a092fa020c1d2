use crate::prelude::*;
use derive_more::Display;

///
/// OperationKind
///
/// Standard operations, in generation order.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationKind {
    #[display("get")]
    Get,
    #[display("set")]
    Set,
    #[display("create")]
    Create,
    #[display("list")]
    List,
    #[display("lookup")]
    Lookup,
    #[display("delete")]
    Delete,
    #[display("find")]
    Find,
    #[display("bulkCreate")]
    BulkCreate,
    #[display("bulkSet")]
    BulkSet,
}

impl OperationKind {
    pub const ALL: [Self; 9] = [
        Self::Get,
        Self::Set,
        Self::Create,
        Self::List,
        Self::Lookup,
        Self::Delete,
        Self::Find,
        Self::BulkCreate,
        Self::BulkSet,
    ];

    /// Directive tag that enables, disables or renames the operation, and
    /// the qualifier used for per-operation directive sets (`js:get`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Get => tags::GET,
            Self::Set => tags::SET,
            Self::Create => tags::CREATE,
            Self::List => tags::LIST,
            Self::Lookup => tags::LOOKUP,
            Self::Delete => tags::DELETE,
            Self::Find => tags::FIND_OP,
            Self::BulkCreate => tags::BULK_CREATE,
            Self::BulkSet => tags::BULK_SET,
        }
    }

    /// Default operation name for a wire type name.
    #[must_use]
    pub fn default_name(self, wire_type: &str) -> String {
        let t = upper_first(wire_type);

        match self {
            Self::Get => format!("get{t}"),
            Self::Set => format!("set{t}"),
            Self::Create => format!("create{t}"),
            Self::List => format!("list{t}"),
            Self::Lookup => format!("lookup{t}"),
            Self::Delete => format!("delete{t}"),
            Self::Find => format!("find{t}"),
            Self::BulkCreate => format!("create{t}s"),
            Self::BulkSet => format!("set{t}s"),
        }
    }

    #[must_use]
    pub const fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::Set | Self::Create | Self::Delete | Self::BulkCreate | Self::BulkSet
        )
    }

    #[must_use]
    pub const fn is_bulk(self) -> bool {
        matches!(self, Self::BulkCreate | Self::BulkSet)
    }

    /// Operations that return an array of the entity type.
    #[must_use]
    pub const fn returns_many(self) -> bool {
        matches!(
            self,
            Self::List | Self::Lookup | Self::Find | Self::BulkCreate | Self::BulkSet
        )
    }

    /// Kinds a config-node entity never gets.
    #[must_use]
    pub const fn excluded_for_config(self) -> bool {
        matches!(
            self,
            Self::Create | Self::List | Self::Lookup | Self::Delete | Self::Find
        )
    }

    /// Kinds enabled without an explicit directive.
    #[must_use]
    pub fn enabled_by_default(self, entity: &Entity) -> bool {
        match self {
            Self::List => entity.is_dictionary(),
            _ => !self.is_bulk(),
        }
    }
}

pub(crate) fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |c| {
        c.to_uppercase().chain(chars).collect()
    })
}

///
/// TESTS
///
