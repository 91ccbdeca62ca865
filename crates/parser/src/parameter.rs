//! Parameter resolution
//!
//! Given a raw parameter entry (possibly a `$ref` into the document's shared
//! parameter table), produces a fully resolved `Parameter` annotated with
//! its binding location and naming.

use crate::naming::to_camel_case;
use crate::type_mapper::{resolve_type, TypeDescriptor};
use crate::SpecVersion;
use serde::Deserialize;
use serde_json::{Map, Value};
use swagger_client_generator_common::{Binding, GeneratorError, Parameter, Result};

/// Raw parameter entry after any shared-table resolution
#[derive(Debug, Deserialize)]
struct RawParameter {
    name: String,

    /// Binding location for Swagger 2.0
    #[serde(rename = "in", default)]
    location: Option<String>,

    /// Binding location for Swagger 1.x
    #[serde(rename = "paramType", default)]
    param_type: Option<String>,

    #[serde(rename = "enum", default)]
    enum_values: Vec<Value>,

    #[serde(default)]
    required: bool,

    #[serde(default)]
    description: Option<String>,

    #[serde(flatten)]
    type_descriptor: TypeDescriptor,
}

/// Extract the shared-table lookup key from a reference string: the last
/// path segment for multi-segment references (`#/parameters/name`), or the
/// whole string for single-segment references.
fn lookup_key(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

/// Resolve one raw parameter entry against the shared parameter table.
///
/// A `$ref` that misses the table is a hard `UnresolvedReference` error, and
/// an unrecognized (or absent) binding location is a hard `UnknownBinding`
/// error; neither condition is silently skipped.
pub fn resolve_parameter(
    raw: &Value,
    shared_table: &Map<String, Value>,
    version: SpecVersion,
) -> Result<Parameter> {
    let resolved = match raw.get("$ref").and_then(Value::as_str) {
        Some(reference) => shared_table
            .get(lookup_key(reference))
            .ok_or_else(|| GeneratorError::UnresolvedReference(reference.to_string()))?,
        None => raw,
    };

    let raw_param: RawParameter = serde_json::from_value(resolved.clone())
        .map_err(|e| GeneratorError::Parse(format!("malformed parameter entry: {e}")))?;

    let location = match version {
        SpecVersion::V1 => raw_param.param_type.as_deref(),
        SpecVersion::V2 => raw_param.location.as_deref(),
    }
    .unwrap_or("");
    let binding = Binding::classify(location, version == SpecVersion::V1).ok_or_else(|| {
        GeneratorError::UnknownBinding {
            parameter: raw_param.name.clone(),
            location: location.to_string(),
        }
    })?;

    let singleton_value = match raw_param.enum_values.as_slice() {
        [value] => Some(value.clone()),
        _ => None,
    };

    let param_type = match version {
        SpecVersion::V1 => Some(resolve_type(&raw_param.type_descriptor)?),
        SpecVersion::V2 => None,
    };

    Ok(Parameter {
        camel_case_name: to_camel_case(&raw_param.name),
        raw_name: raw_param.name,
        binding,
        is_singleton: singleton_value.is_some(),
        singleton_value,
        required: raw_param.required,
        description: raw_param.description,
        param_type,
    })
}
