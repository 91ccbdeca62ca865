//! Swagger 1.x input shapes

use crate::type_mapper::TypeDescriptor;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Swagger 1.x document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swagger1Spec {
    #[serde(rename = "swaggerVersion", default)]
    pub swagger_version: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// API groups, each a path with its operations
    #[serde(default)]
    pub apis: Vec<ApiGroup>,

    /// Flat model-name → schema table, in declaration order
    #[serde(default)]
    pub models: Map<String, Value>,
}

/// One API group: a path and the operations declared under it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiGroup {
    pub path: String,

    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// One declared operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Explicit method name; v1 never derives names from the path
    pub nickname: String,

    /// HTTP verb token
    pub method: String,

    #[serde(default)]
    pub summary: Option<String>,

    /// Raw parameter entries; absent lists default to empty
    #[serde(default)]
    pub parameters: Vec<Value>,

    /// Return type declared directly on the operation
    #[serde(flatten)]
    pub type_descriptor: TypeDescriptor,
}

/// Model schema from the model table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSchema {
    #[serde(default)]
    pub description: Option<String>,

    /// Property-name → property schema, in declaration order
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// One model property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(flatten)]
    pub type_descriptor: TypeDescriptor,

    #[serde(default)]
    pub description: Option<String>,
}
