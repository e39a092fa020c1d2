//! Directive namespaces and keys understood by the generator.

// namespaces
pub const GQL: &str = "gql";
pub const JS: &str = "js";
pub const FIND: &str = "find";
pub const UI: &str = "ui";

// shared keys
pub const NAME: &str = "name";
pub const INPUT_NAME: &str = "inputName";
pub const SKIP: &str = "skip";

// gql
pub const READONLY: &str = "readonly";
pub const QUERY: &str = "query";

// gql operation tags
pub const GET: &str = "get";
pub const SET: &str = "set";
pub const CREATE: &str = "create";
pub const LIST: &str = "list";
pub const LOOKUP: &str = "lookup";
pub const DELETE: &str = "delete";
pub const FIND_OP: &str = "find";
pub const BULK_CREATE: &str = "bulkCreate";
pub const BULK_SET: &str = "bulkSet";

// js
pub const TITLE: &str = "title";
pub const ICON: &str = "icon";
pub const COLOR: &str = "color";
pub const FORCE: &str = "force";
pub const FIND_FORCE: &str = "findForce";

// find
pub const FOR: &str = "for";

// ui
pub const FORCE_LOAD: &str = "forceLoad";
