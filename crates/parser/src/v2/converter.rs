//! Converts a Swagger 2.0 document to the unified IR

use super::types::{Operation, Swagger2Spec};
use crate::parameter::resolve_parameter;
use crate::{naming, DocumentOptions, SpecVersion};
use serde_json::Value;
use swagger_client_generator_common::{Document, GeneratorError, HttpVerb, Method, Result};

/// Build the unified IR from a raw Swagger 2.0 document.
///
/// Walks the path → operation map in declaration order. Per path, entries
/// whose key case-insensitively equals `parameters` form a path-scoped
/// parameter list applied to every verb under that path; operation-level
/// parameters come first in each method's sequence.
pub fn build_document(raw: &Value, opts: &DocumentOptions) -> Result<Document> {
    let spec: Swagger2Spec = serde_json::from_value(raw.clone())
        .map_err(|e| GeneratorError::Parse(format!("malformed Swagger 2.0 document: {e}")))?;

    let mut methods = Vec::new();
    for (path, item) in &spec.paths {
        let item = item.as_object().ok_or_else(|| {
            GeneratorError::Parse(format!("path item for '{path}' is not an object"))
        })?;

        let mut path_params: Vec<Value> = Vec::new();
        for (key, value) in item {
            if key.eq_ignore_ascii_case("parameters") {
                path_params = serde_json::from_value(value.clone()).map_err(|e| {
                    GeneratorError::Parse(format!(
                        "path-level parameters for '{path}' are not a list: {e}"
                    ))
                })?;
            }
        }

        for (key, value) in item {
            let Some(verb) = HttpVerb::from_token(key) else {
                continue;
            };
            let operation: Operation = serde_json::from_value(value.clone()).map_err(|e| {
                GeneratorError::Parse(format!("malformed operation {key} {path}: {e}"))
            })?;

            let name = operation
                .method_name_override
                .or(operation.operation_id)
                .unwrap_or_else(|| naming::method_name_from_path(key, path));

            let mut parameters = Vec::with_capacity(operation.parameters.len() + path_params.len());
            for entry in operation.parameters.iter().chain(path_params.iter()) {
                parameters.push(resolve_parameter(entry, &spec.parameters, SpecVersion::V2)?);
            }

            methods.push(Method {
                path: path.clone(),
                class_name: opts.class_name.clone(),
                name,
                is_get: verb == HttpVerb::Get,
                verb,
                summary: operation.description,
                parameters,
                return_type: None,
                has_body: false,
            });
        }
    }

    Ok(Document {
        is_node: opts.is_node,
        description: spec.info.description,
        module_name: opts.module_name.clone(),
        class_name: opts.class_name.clone(),
        methods,
        models: Vec::new(),
    })
}
