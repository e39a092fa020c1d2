use crate::prelude::*;

///
/// Param
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Param {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: TypeRef,

    #[serde(default, skip_serializing_if = "Directives::is_empty")]
    pub directives: Directives,
}

impl Param {
    #[must_use]
    pub fn new(name: &str, ty: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            ty,
            directives: Directives::new(),
        }
    }
}

///
/// Method
///
/// A custom operation declared on an entity. Its request type comes from
/// directives; its selection comes from the returned entity.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Method {
    #[serde(skip)]
    pub id: MethodId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<TypeRef>,

    #[serde(default, skip_serializing_if = "Directives::is_empty")]
    pub directives: Directives,
}

impl Method {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            id: MethodId::default(),
            name: name.to_string(),
            params: Vec::new(),
            returns: None,
            directives: Directives::new(),
        }
    }

    #[must_use]
    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    #[must_use]
    pub fn with_returns(mut self, ty: TypeRef) -> Self {
        self.returns = Some(ty);
        self
    }

    #[must_use]
    pub fn with_directives(mut self, directives: Directives) -> Self {
        self.directives = directives;
        self
    }
}
