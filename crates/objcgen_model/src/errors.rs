//! Errors raised while assembling a model from front-end facts.

use miette::Diagnostic;
use thiserror::Error;

/// A front-end fact that cannot be represented in the model.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ModelError {
    #[error("field `{field}` is classified as both a primitive constant and a string constant")]
    #[diagnostic(code(objcgen::model::conflicting_field_class))]
    ConflictingFieldClass { field: String },
}
