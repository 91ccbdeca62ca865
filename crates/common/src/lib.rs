//! Common types and utilities for Swagger Client Generator
//!
//! This crate contains the shared error taxonomy, the HTTP verb and
//! parameter binding enumerations, and the render-ready intermediate
//! representation used across the parser, generator, and CLI components.

mod document;

pub use document::{Document, Method, Model, Parameter, Property};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during client generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported Swagger version: {0}")]
    UnsupportedVersion(String),

    #[error("Unresolved reference: {0}")]
    UnresolvedReference(String),

    #[error("Unknown binding location '{location}' for parameter '{parameter}'")]
    UnknownBinding { parameter: String, location: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lint error: {message} in {evidence}")]
    Lint { message: String, evidence: String },

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// HTTP verbs authorized to appear as operations in a schema document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Copy,
    Head,
    Options,
    Link,
    Unlink,
    Purge,
    Lock,
    Unlock,
    Propfind,
}

impl HttpVerb {
    /// Parse a verb token case-insensitively.
    ///
    /// Returns `None` for tokens outside the authorized set, which lets the
    /// v2 adapter skip non-operation path item keys such as `parameters`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            "PATCH" => Some(Self::Patch),
            "COPY" => Some(Self::Copy),
            "HEAD" => Some(Self::Head),
            "OPTIONS" => Some(Self::Options),
            "LINK" => Some(Self::Link),
            "UNLINK" => Some(Self::Unlink),
            "PURGE" => Some(Self::Purge),
            "LOCK" => Some(Self::Lock),
            "UNLOCK" => Some(Self::Unlock),
            "PROPFIND" => Some(Self::Propfind),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Copy => "COPY",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Link => "LINK",
            Self::Unlink => "UNLINK",
            Self::Purge => "PURGE",
            Self::Lock => "LOCK",
            Self::Unlock => "UNLOCK",
            Self::Propfind => "PROPFIND",
        }
    }
}

impl std::fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport location of a parameter
///
/// Serialized lowercase so templates can match on `parameter.binding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Binding {
    Path,
    Query,
    Header,
    Body,
    Form,
}

impl Binding {
    /// Classify a location value from the schema.
    ///
    /// The recognized set is deliberately closed: `body`, `path`, `query`,
    /// `header`, plus `form` when `allow_form` is set (Swagger 1.x only).
    pub fn classify(location: &str, allow_form: bool) -> Option<Self> {
        match location {
            "body" => Some(Self::Body),
            "path" => Some(Self::Path),
            "query" => Some(Self::Query),
            "header" => Some(Self::Header),
            "form" if allow_form => Some(Self::Form),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_from_token() {
        assert_eq!(HttpVerb::from_token("get"), Some(HttpVerb::Get));
        assert_eq!(HttpVerb::from_token("PROPFIND"), Some(HttpVerb::Propfind));
        assert_eq!(HttpVerb::from_token("parameters"), None);
        assert_eq!(HttpVerb::from_token("TRACE"), None);
    }

    #[test]
    fn test_verb_serializes_uppercase() {
        let json = serde_json::to_string(&HttpVerb::Unlink).unwrap();
        assert_eq!(json, "\"UNLINK\"");
    }

    #[test]
    fn test_binding_classification() {
        assert_eq!(Binding::classify("path", false), Some(Binding::Path));
        assert_eq!(Binding::classify("form", true), Some(Binding::Form));
        assert_eq!(Binding::classify("form", false), None);
        assert_eq!(Binding::classify("formData", true), None);
    }
}
