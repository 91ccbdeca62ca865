//! Swagger 2.0 input shapes
//!
//! Path items are kept as raw JSON maps because their keys mix verbs with
//! non-operation entries (`parameters`); the converter sorts that out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Swagger 2.0 document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swagger2Spec {
    /// Version discriminator, always `"2.0"` by the time this is built
    pub swagger: String,

    #[serde(default)]
    pub info: Info,

    /// Path → path item, in declaration order
    #[serde(default)]
    pub paths: Map<String, Value>,

    /// Shared parameter table addressed by `$ref`
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

/// API metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

/// One operation under a path item verb key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Vendor extension naming override, highest precedence
    #[serde(rename = "x-swagger-js-method-name", default)]
    pub method_name_override: Option<String>,

    #[serde(rename = "operationId", default)]
    pub operation_id: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Operation-level parameters; entries may be inline or `$ref`s
    #[serde(default)]
    pub parameters: Vec<Value>,
}
