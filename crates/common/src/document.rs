//! Render-ready intermediate representation
//!
//! The unified, version-independent structure produced by a schema adapter
//! and consumed by the template engine. All structures are transient,
//! single-generation-call-scoped values with no cross-call sharing.

use crate::{Binding, HttpVerb};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root render-ready object, built once per generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Environment flag threaded from the output flavor (Node only)
    pub is_node: bool,

    /// Human-readable API description
    #[serde(default)]
    pub description: Option<String>,

    /// Caller-supplied module name
    pub module_name: String,

    /// Caller-supplied class name
    pub class_name: String,

    /// Methods in source-declaration order
    pub methods: Vec<Method>,

    /// Model declarations in source-declaration order (Swagger 1.x only)
    #[serde(default)]
    pub models: Vec<Model>,
}

/// One client method, unified across schema versions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Method {
    /// URL template as declared in the source schema
    pub path: String,

    /// Class name, duplicated per method for template convenience
    pub class_name: String,

    /// Method identifier; uniqueness within a class is not enforced
    pub name: String,

    pub verb: HttpVerb,

    /// True iff `verb` is GET
    pub is_get: bool,

    #[serde(default)]
    pub summary: Option<String>,

    /// Operation-level parameters first, then any path-scoped parameters
    pub parameters: Vec<Parameter>,

    /// Resolved return type (Swagger 1.x only)
    #[serde(default)]
    pub return_type: Option<String>,

    /// True iff any parameter binds to body (Swagger 1.x only)
    #[serde(default)]
    pub has_body: bool,
}

/// Fully resolved parameter description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Original identifier from the schema
    pub raw_name: String,

    /// Derived identifier used for code emission
    pub camel_case_name: String,

    pub binding: Binding,

    /// True iff the parameter declares an enumeration of exactly one value
    pub is_singleton: bool,

    /// The single allowed value when `is_singleton` is set
    #[serde(default)]
    pub singleton_value: Option<Value>,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub description: Option<String>,

    /// Resolved type name (Swagger 1.x only)
    #[serde(default)]
    pub param_type: Option<String>,
}

/// Named record type from the Swagger 1.x model table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    /// Marker-prefixed name (`I` + declared model name)
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Properties in declaration order
    pub properties: Vec<Property>,
}

/// Single model property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub name: String,

    /// Resolved type name
    #[serde(rename = "type")]
    pub property_type: String,

    #[serde(default)]
    pub description: Option<String>,
}
