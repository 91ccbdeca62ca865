//! Template loading and rendering
//!
//! Every generation call feeds exactly three named template bodies —
//! `class`, `method`, `request` — into a fresh per-call tera instance and
//! renders `class` against the serialized IR.

use crate::Flavor;
use swagger_client_generator_common::{Document, GeneratorError, Result};
use tera::Tera;

/// The three named template bodies supplied to the rendering engine
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub class: String,
    pub method: String,
    pub request: String,
}

impl TemplateSet {
    /// Built-in template set for a fixed flavor.
    ///
    /// The `method` body is shared between flavors; `class` and `request`
    /// are flavor-specific. Custom has no built-in set.
    pub fn builtin(flavor: Flavor) -> Result<Self> {
        match flavor {
            Flavor::Angular => Ok(Self {
                class: include_str!("../templates/angular-class.js.tera").to_string(),
                method: include_str!("../templates/method.js.tera").to_string(),
                request: include_str!("../templates/angular-request.js.tera").to_string(),
            }),
            Flavor::Node => Ok(Self {
                class: include_str!("../templates/node-class.js.tera").to_string(),
                method: include_str!("../templates/method.js.tera").to_string(),
                request: include_str!("../templates/node-request.js.tera").to_string(),
            }),
            Flavor::Custom => Err(GeneratorError::Config(
                "custom flavor has no built-in templates".to_string(),
            )),
        }
    }
}

/// Render the IR document through the template set.
pub fn render(set: &TemplateSet, document: &Document) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("class", set.class.as_str()),
        ("method", set.method.as_str()),
        ("request", set.request.as_str()),
    ])
    .map_err(|e| GeneratorError::Render(format!("failed to load templates: {e}")))?;

    let context = tera::Context::from_serialize(document)
        .map_err(|e| GeneratorError::Render(format!("failed to build template context: {e}")))?;

    tera.render("class", &context)
        .map_err(|e| GeneratorError::Render(format!("template error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sets_load() {
        assert!(TemplateSet::builtin(Flavor::Angular).is_ok());
        assert!(TemplateSet::builtin(Flavor::Node).is_ok());
        assert!(TemplateSet::builtin(Flavor::Custom).is_err());
    }

    #[test]
    fn test_render_minimal_document() {
        let document = Document {
            is_node: false,
            description: Some("Test API".to_string()),
            module_name: "test".to_string(),
            class_name: "Test".to_string(),
            methods: vec![],
            models: vec![],
        };

        let set = TemplateSet::builtin(Flavor::Angular).unwrap();
        let source = render(&set, &document).unwrap();
        assert!(source.contains("angular.module('test'"));
        assert!(source.contains("function Test(domain)"));
    }
}
