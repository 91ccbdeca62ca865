//! Swagger/OpenAPI 2.0 schema adapter

mod converter;
mod types;

pub use converter::build_document;
pub use types::{Info, Operation, Swagger2Spec};
