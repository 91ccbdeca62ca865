//! Integration tests for the Swagger 1.x adapter

use serde_json::json;
use swagger_client_generator_common::{Binding, GeneratorError, HttpVerb};
use swagger_client_generator_parser::{build_document, DocumentOptions};

fn opts() -> DocumentOptions {
    DocumentOptions {
        module_name: "petstore".to_string(),
        class_name: "PetStore".to_string(),
        is_node: true,
    }
}

#[test]
fn test_operations_become_methods() {
    let swagger = json!({
        "swaggerVersion": "1.2",
        "description": "Pet store API",
        "apis": [
            {
                "path": "/pet/{petId}",
                "operations": [
                    {
                        "nickname": "getPetById",
                        "method": "GET",
                        "summary": "Find pet by ID",
                        "type": "Pet",
                        "parameters": [
                            {"name": "petId", "paramType": "path", "type": "string", "required": true}
                        ]
                    },
                    {
                        "nickname": "updatePet",
                        "method": "PUT",
                        "type": "void",
                        "parameters": [
                            {"name": "petId", "paramType": "path", "type": "string"},
                            {"name": "body", "paramType": "body", "type": "Pet"}
                        ]
                    }
                ]
            }
        ],
        "models": {}
    });

    let document = build_document(&swagger, &opts()).unwrap();
    assert!(document.is_node);
    assert_eq!(document.description.as_deref(), Some("Pet store API"));
    assert_eq!(document.methods.len(), 2);

    let get = &document.methods[0];
    assert_eq!(get.name, "getPetById");
    assert_eq!(get.verb, HttpVerb::Get);
    assert!(get.is_get);
    assert_eq!(get.summary.as_deref(), Some("Find pet by ID"));
    assert_eq!(get.return_type.as_deref(), Some("IPet"));
    assert!(!get.has_body);
    assert_eq!(get.parameters[0].binding, Binding::Path);
    assert_eq!(get.parameters[0].param_type.as_deref(), Some("string"));

    let put = &document.methods[1];
    assert_eq!(put.return_type.as_deref(), Some("void"));
    assert!(put.has_body);
    assert_eq!(put.parameters[1].binding, Binding::Body);
    assert_eq!(put.parameters[1].param_type.as_deref(), Some("IPet"));
}

#[test]
fn test_model_table_produces_models_in_order() {
    let swagger = json!({
        "swaggerVersion": "1.2",
        "apis": [],
        "models": {
            "Pet": {
                "description": "A pet",
                "properties": {
                    "name": {"type": "string", "description": "Display name"},
                    "id": {"type": "integer"}
                }
            }
        }
    });

    let document = build_document(&swagger, &opts()).unwrap();
    assert_eq!(document.models.len(), 1);

    let model = &document.models[0];
    assert_eq!(model.name, "IPet");
    assert_eq!(model.description.as_deref(), Some("A pet"));
    assert_eq!(model.properties.len(), 2);
    // Declaration order preserved.
    assert_eq!(model.properties[0].name, "name");
    assert_eq!(model.properties[0].property_type, "string");
    assert_eq!(
        model.properties[0].description.as_deref(),
        Some("Display name")
    );
    assert_eq!(model.properties[1].name, "id");
    assert_eq!(model.properties[1].property_type, "Iinteger");
}

#[test]
fn test_array_return_type() {
    let swagger = json!({
        "swaggerVersion": "1.2",
        "apis": [
            {
                "path": "/pets",
                "operations": [
                    {
                        "nickname": "listPets",
                        "method": "GET",
                        "type": "array",
                        "items": {"$ref": "Pet"}
                    }
                ]
            }
        ]
    });

    let document = build_document(&swagger, &opts()).unwrap();
    assert_eq!(
        document.methods[0].return_type.as_deref(),
        Some("IPet[]")
    );
}

#[test]
fn test_missing_parameter_list_defaults_to_empty() {
    let swagger = json!({
        "swaggerVersion": "1.2",
        "apis": [
            {
                "path": "/ping",
                "operations": [
                    {"nickname": "ping", "method": "GET", "type": "void"}
                ]
            }
        ]
    });

    let document = build_document(&swagger, &opts()).unwrap();
    assert!(document.methods[0].parameters.is_empty());
}

#[test]
fn test_form_parameter_and_singleton() {
    let swagger = json!({
        "swaggerVersion": "1.2",
        "apis": [
            {
                "path": "/pet/uploadImage",
                "operations": [
                    {
                        "nickname": "uploadFile",
                        "method": "POST",
                        "type": "void",
                        "parameters": [
                            {"name": "file", "paramType": "form", "type": "File"},
                            {"name": "kind", "paramType": "query", "type": "string", "enum": ["image"]}
                        ]
                    }
                ]
            }
        ]
    });

    let document = build_document(&swagger, &opts()).unwrap();
    let method = &document.methods[0];
    assert_eq!(method.parameters[0].binding, Binding::Form);
    assert!(!method.has_body);
    assert!(method.parameters[1].is_singleton);
    assert_eq!(method.parameters[1].singleton_value, Some(json!("image")));
}

#[test]
fn test_unrecognized_method_fails() {
    let swagger = json!({
        "swaggerVersion": "1.2",
        "apis": [
            {
                "path": "/ping",
                "operations": [
                    {"nickname": "ping", "method": "TRACE", "type": "void"}
                ]
            }
        ]
    });

    assert!(matches!(
        build_document(&swagger, &opts()),
        Err(GeneratorError::Parse(_))
    ));
}
