//! JavaScript client generation from Swagger documents
//!
//! This crate orchestrates one generation call: normalize the raw schema
//! document into the IR (delegated to the parser crate), render it through
//! the three named templates of the selected output flavor, then run the
//! optional lint and beautify collaborators. Each call is independent and
//! stateless; collaborator results are never shared across calls.

mod beautify;
mod lint;
mod templates;

pub use beautify::{FormatOptions, Formatter};
pub use lint::{Diagnostic, Linter, LintOptions, ERROR_MARKER};
pub use templates::TemplateSet;

use serde_json::Value;
use swagger_client_generator_common::{GeneratorError, Result};
use swagger_client_generator_parser::{build_document, DocumentOptions};

/// Output flavor: which template set is used and whether the Node
/// environment flag is threaded into the IR. Never affects adapter choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Angular,
    Node,
    /// Caller supplies all three template bodies directly
    Custom,
}

/// Caller-supplied template bodies for the Custom flavor
#[derive(Debug, Clone, Default)]
pub struct TemplateOverride {
    pub class: Option<String>,
    pub method: Option<String>,
    pub request: Option<String>,
}

impl TemplateOverride {
    /// All three bodies must be present; anything less is a configuration
    /// error surfaced before the rendering engine is touched.
    fn resolve(&self) -> Result<TemplateSet> {
        match (&self.class, &self.method, &self.request) {
            (Some(class), Some(method), Some(request)) => Ok(TemplateSet {
                class: class.clone(),
                method: method.clone(),
                request: request.clone(),
            }),
            _ => Err(GeneratorError::Config(
                "custom flavor requires class, method, and request template bodies".to_string(),
            )),
        }
    }
}

/// Options for one generation call
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Raw schema document (Swagger 1.x or 2.0)
    pub swagger: Value,

    pub module_name: String,

    pub class_name: String,

    /// Run the diagnostic collaborator on the generated source
    pub lint: bool,

    /// Run the formatting collaborator on the generated source
    pub beautify: bool,

    /// Template bodies for the Custom flavor; ignored otherwise
    pub template: Option<TemplateOverride>,
}

/// Client code generator with optional external collaborators
#[derive(Default)]
pub struct CodeGenerator {
    linter: Option<Box<dyn Linter>>,
    formatter: Option<Box<dyn Formatter>>,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_linter(mut self, linter: Box<dyn Linter>) -> Self {
        self.linter = Some(linter);
        self
    }

    pub fn with_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Generate an Angular client
    pub fn generate_angular(&self, opts: &GenerateOptions) -> Result<String> {
        self.generate(Flavor::Angular, opts)
    }

    /// Generate a Node client
    pub fn generate_node(&self, opts: &GenerateOptions) -> Result<String> {
        self.generate(Flavor::Node, opts)
    }

    /// Generate a client from caller-supplied templates
    pub fn generate_custom(&self, opts: &GenerateOptions) -> Result<String> {
        self.generate(Flavor::Custom, opts)
    }

    fn generate(&self, flavor: Flavor, opts: &GenerateOptions) -> Result<String> {
        // Template configuration is validated before anything runs.
        let set = match flavor {
            Flavor::Custom => opts
                .template
                .as_ref()
                .ok_or_else(|| {
                    GeneratorError::Config(
                        "custom flavor requires class, method, and request template bodies"
                            .to_string(),
                    )
                })?
                .resolve()?,
            _ => TemplateSet::builtin(flavor)?,
        };

        let document = build_document(
            &opts.swagger,
            &DocumentOptions {
                module_name: opts.module_name.clone(),
                class_name: opts.class_name.clone(),
                is_node: flavor == Flavor::Node,
            },
        )?;

        let mut source = templates::render(&set, &document)?;

        if opts.lint {
            let linter = self.linter.as_deref().ok_or_else(|| {
                GeneratorError::Config("lint enabled but no linter configured".to_string())
            })?;
            let options = LintOptions {
                node: matches!(flavor, Flavor::Node | Flavor::Custom),
                browser: matches!(flavor, Flavor::Angular | Flavor::Custom),
                undef: true,
                strict: true,
            };
            let diagnostics = linter.lint(&source, &options);
            if let Some(fatal) = lint::first_fatal(&diagnostics) {
                return Err(GeneratorError::Lint {
                    message: fatal.message.clone(),
                    evidence: fatal.evidence.clone(),
                });
            }
        }

        if opts.beautify {
            let formatter = self.formatter.as_deref().ok_or_else(|| {
                GeneratorError::Config("beautify enabled but no formatter configured".to_string())
            })?;
            source = formatter.format(&source, &FormatOptions::default());
        }

        Ok(source)
    }
}

/// Generate an Angular client with no optional collaborators (convenience)
pub fn generate_angular(opts: &GenerateOptions) -> Result<String> {
    CodeGenerator::new().generate_angular(opts)
}

/// Generate a Node client with no optional collaborators (convenience)
pub fn generate_node(opts: &GenerateOptions) -> Result<String> {
    CodeGenerator::new().generate_node(opts)
}

/// Generate a custom-template client with no optional collaborators (convenience)
pub fn generate_custom(opts: &GenerateOptions) -> Result<String> {
    CodeGenerator::new().generate_custom(opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_override_requires_all_three_bodies() {
        let complete = TemplateOverride {
            class: Some("c".to_string()),
            method: Some("m".to_string()),
            request: Some("r".to_string()),
        };
        assert!(complete.resolve().is_ok());

        let missing_request = TemplateOverride {
            class: Some("c".to_string()),
            method: Some("m".to_string()),
            request: None,
        };
        assert!(matches!(
            missing_request.resolve(),
            Err(GeneratorError::Config(_))
        ));
    }
}
