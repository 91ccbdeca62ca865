//! Schema parsing for Swagger API descriptions
//!
//! This crate normalizes two structurally different input dialects into one
//! render-ready intermediate representation (`Document`):
//!
//! - Swagger 1.x: operations nested under API path groups, plus a flat
//!   model-name → schema table.
//! - Swagger/OpenAPI 2.0: paths → verbs with shared and per-operation
//!   parameter lists and a `$ref`-based shared parameter table.
//!
//! The normalization is a pure, synchronous computation: one call transforms
//! one input document into one IR with no I/O and no shared state.

pub mod naming;
mod parameter;
pub mod type_mapper;
pub mod v1;
pub mod v2;

pub use parameter::resolve_parameter;

use serde_json::Value;
use swagger_client_generator_common::{Document, GeneratorError, Result};

/// Input schema dialect, determined by the version discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecVersion {
    V1,
    V2,
}

/// Caller-supplied metadata attached to the assembled IR
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    pub module_name: String,
    pub class_name: String,
    /// Environment flag from the output flavor; carried through untouched
    pub is_node: bool,
}

/// Inspect the version discriminator of a raw schema document.
///
/// A `swagger` field equal to `"2.0"` selects the 2.0 adapter. Documents
/// carrying the 1.x `swaggerVersion` field (or an `apis` group list) select
/// the 1.x adapter. Anything else is rejected rather than defaulted.
pub fn detect_version(document: &Value) -> Result<SpecVersion> {
    match document.get("swagger") {
        Some(Value::String(version)) if version == "2.0" => Ok(SpecVersion::V2),
        Some(Value::String(version)) => {
            Err(GeneratorError::UnsupportedVersion(version.clone()))
        }
        Some(other) => Err(GeneratorError::UnsupportedVersion(other.to_string())),
        None => {
            if document.get("swaggerVersion").is_some() || document.get("apis").is_some() {
                Ok(SpecVersion::V1)
            } else {
                Err(GeneratorError::UnsupportedVersion(
                    "no version discriminator found".to_string(),
                ))
            }
        }
    }
}

/// Normalize a raw schema document into the unified IR.
///
/// Dispatches to the v1 or v2 adapter based on the version discriminator and
/// attaches the caller-supplied metadata.
pub fn build_document(document: &Value, opts: &DocumentOptions) -> Result<Document> {
    match detect_version(document)? {
        SpecVersion::V1 => v1::build_document(document, opts),
        SpecVersion::V2 => v2::build_document(document, opts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_version_v2() {
        let doc = json!({"swagger": "2.0", "paths": {}});
        assert_eq!(detect_version(&doc).unwrap(), SpecVersion::V2);
    }

    #[test]
    fn test_detect_version_v1() {
        let doc = json!({"swaggerVersion": "1.2", "apis": []});
        assert_eq!(detect_version(&doc).unwrap(), SpecVersion::V1);

        let doc = json!({"apis": []});
        assert_eq!(detect_version(&doc).unwrap(), SpecVersion::V1);
    }

    #[test]
    fn test_detect_version_rejects_unknown() {
        let doc = json!({"swagger": "3.0"});
        match detect_version(&doc) {
            // String versions are reported without JSON quoting.
            Err(GeneratorError::UnsupportedVersion(version)) => assert_eq!(version, "3.0"),
            other => panic!("expected unsupported version error, got {other:?}"),
        }

        let doc = json!({"openapi": "3.0.0"});
        assert!(matches!(
            detect_version(&doc),
            Err(GeneratorError::UnsupportedVersion(_))
        ));
    }
}
