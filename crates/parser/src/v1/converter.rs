//! Converts a Swagger 1.x document to the unified IR

use super::types::{ModelSchema, PropertySchema, Swagger1Spec};
use crate::parameter::resolve_parameter;
use crate::type_mapper::{resolve_type, INTERFACE_PREFIX};
use crate::{DocumentOptions, SpecVersion};
use serde_json::{Map, Value};
use swagger_client_generator_common::{
    Binding, Document, GeneratorError, HttpVerb, Method, Model, Property, Result,
};

/// Build the unified IR from a raw Swagger 1.x document.
///
/// Every declared operation becomes a method directly (v1 carries explicit
/// nicknames, so no name derivation happens here), and the flat model table
/// becomes the IR's model list. v1 has no shared parameter table.
pub fn build_document(raw: &Value, opts: &DocumentOptions) -> Result<Document> {
    let spec: Swagger1Spec = serde_json::from_value(raw.clone())
        .map_err(|e| GeneratorError::Parse(format!("malformed Swagger 1.x document: {e}")))?;

    let shared_table = Map::new();
    let mut methods = Vec::new();
    for api in &spec.apis {
        for operation in &api.operations {
            let verb = HttpVerb::from_token(&operation.method).ok_or_else(|| {
                GeneratorError::Parse(format!(
                    "unrecognized HTTP method '{}' on operation '{}'",
                    operation.method, operation.nickname
                ))
            })?;

            let mut has_body = false;
            let mut parameters = Vec::with_capacity(operation.parameters.len());
            for entry in &operation.parameters {
                let parameter = resolve_parameter(entry, &shared_table, SpecVersion::V1)?;
                has_body |= parameter.binding == Binding::Body;
                parameters.push(parameter);
            }

            methods.push(Method {
                path: api.path.clone(),
                class_name: opts.class_name.clone(),
                name: operation.nickname.clone(),
                is_get: verb == HttpVerb::Get,
                verb,
                summary: operation.summary.clone(),
                parameters,
                return_type: Some(resolve_type(&operation.type_descriptor)?),
                has_body,
            });
        }
    }

    let mut models = Vec::new();
    for (model_name, schema) in &spec.models {
        let schema: ModelSchema = serde_json::from_value(schema.clone())
            .map_err(|e| GeneratorError::Parse(format!("malformed model '{model_name}': {e}")))?;

        let mut properties = Vec::with_capacity(schema.properties.len());
        for (property_name, property) in &schema.properties {
            let property: PropertySchema = serde_json::from_value(property.clone()).map_err(|e| {
                GeneratorError::Parse(format!(
                    "malformed property '{property_name}' on model '{model_name}': {e}"
                ))
            })?;
            properties.push(Property {
                name: property_name.clone(),
                property_type: resolve_type(&property.type_descriptor)?,
                description: property.description,
            });
        }

        models.push(Model {
            name: format!("{INTERFACE_PREFIX}{model_name}"),
            description: schema.description,
            properties,
        });
    }

    Ok(Document {
        is_node: opts.is_node,
        description: spec.description,
        module_name: opts.module_name.clone(),
        class_name: opts.class_name.clone(),
        methods,
        models,
    })
}
