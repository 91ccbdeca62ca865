//! Type resolution
//!
//! Maps a schema-level type descriptor to a target-language-agnostic type
//! name string. Resolution is a pure function of the descriptor; it never
//! consults external state.

use serde::{Deserialize, Serialize};
use swagger_client_generator_common::{GeneratorError, Result};

/// Marker prefixed onto referenced type names to distinguish generated
/// interface types from primitives
pub const INTERFACE_PREFIX: &str = "I";

/// Schema-level type descriptor as declared on Swagger 1.x operations,
/// parameters, and model properties
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Declared type: a primitive, `array`, or a reference name
    #[serde(rename = "type", default)]
    pub declared: Option<String>,

    /// Array item descriptor, required when `declared` is `array`
    #[serde(default)]
    pub items: Option<ItemsDescriptor>,
}

/// Array item reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemsDescriptor {
    #[serde(rename = "$ref", default)]
    pub ref_name: Option<String>,
}

/// Resolve a bare type name: `string` and `void` render verbatim, anything
/// else is treated as a reference and marker-prefixed.
pub fn resolve_typename(name: &str) -> String {
    match name {
        "string" | "void" => name.to_string(),
        _ => format!("{INTERFACE_PREFIX}{name}"),
    }
}

/// Resolve a type descriptor to a type name string.
///
/// `array` resolves the `items` reference name and appends the array marker;
/// no recursion beyond that one level. An absent declared type resolves to
/// `void` (operations without a return type).
pub fn resolve_type(descriptor: &TypeDescriptor) -> Result<String> {
    match descriptor.declared.as_deref() {
        Some("array") => {
            let reference = descriptor
                .items
                .as_ref()
                .and_then(|items| items.ref_name.as_deref())
                .ok_or_else(|| {
                    GeneratorError::UnresolvedReference(
                        "array type without an items $ref".to_string(),
                    )
                })?;
            Ok(format!("{}[]", resolve_typename(reference)))
        }
        Some(name) => Ok(resolve_typename(name)),
        None => Ok("void".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(json: serde_json::Value) -> TypeDescriptor {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_primitives_render_verbatim() {
        assert_eq!(resolve_typename("string"), "string");
        assert_eq!(resolve_typename("void"), "void");
    }

    #[test]
    fn test_references_are_marker_prefixed() {
        assert_eq!(resolve_typename("Pet"), "IPet");
        // Any non-string, non-void name is prefixed, integers included.
        assert_eq!(resolve_typename("integer"), "Iinteger");
    }

    #[test]
    fn test_resolve_array_of_reference() {
        let d = descriptor(serde_json::json!({"type": "array", "items": {"$ref": "Pet"}}));
        assert_eq!(resolve_type(&d).unwrap(), "IPet[]");
    }

    #[test]
    fn test_resolve_array_of_primitive_ref() {
        let d = descriptor(serde_json::json!({"type": "array", "items": {"$ref": "string"}}));
        assert_eq!(resolve_type(&d).unwrap(), "string[]");
    }

    #[test]
    fn test_resolve_plain_types() {
        let d = descriptor(serde_json::json!({"type": "string"}));
        assert_eq!(resolve_type(&d).unwrap(), "string");

        let d = descriptor(serde_json::json!({"type": "Pet"}));
        assert_eq!(resolve_type(&d).unwrap(), "IPet");

        assert_eq!(resolve_type(&TypeDescriptor::default()).unwrap(), "void");
    }

    #[test]
    fn test_array_without_items_ref_fails() {
        let d = descriptor(serde_json::json!({"type": "array"}));
        assert!(resolve_type(&d).is_err());

        let d = descriptor(serde_json::json!({"type": "array", "items": {"type": "string"}}));
        assert!(resolve_type(&d).is_err());
    }
}
