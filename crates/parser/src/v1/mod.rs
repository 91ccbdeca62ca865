//! Swagger 1.x schema adapter

mod converter;
mod types;

pub use converter::build_document;
pub use types::{ApiGroup, ModelSchema, Operation, PropertySchema, Swagger1Spec};
