//! Errors raised while generating a type implementation.
//!
//! Every variant is an internal contract violation: the front end handed over a model the generator cannot render
//! faithfully. They are detected before any text is written for the type.

use miette::Diagnostic;
use objcgen_model::ModelError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GenerateError {
    #[error("field `{field}` of `{type_name}` is classified as a constant but {reason}")]
    #[diagnostic(code(objcgen::generate::inconsistent_constant))]
    InconsistentConstant {
        type_name: String,
        field: String,
        reason: &'static str,
    },

    #[error("method `{method}` of `{type_name}` has designated-initializer selector `{selector}` but is not a constructor")]
    #[diagnostic(
        code(objcgen::generate::designated_selector_on_non_constructor),
        help("only constructors may use `init` or the boxed-number initializer selectors")
    )]
    DesignatedSelectorOnNonConstructor {
        type_name: String,
        method: String,
        selector: String,
    },

    #[error("selector `{selector}` has {keywords} keyword(s) for {params} parameter(s)")]
    #[diagnostic(code(objcgen::generate::selector_arity_mismatch))]
    SelectorArityMismatch {
        selector: String,
        keywords: usize,
        params: usize,
    },

    #[error("properties `{first}` and `{second}` of `{type_name}` share the storage `{storage}`")]
    #[diagnostic(code(objcgen::generate::aliased_property_storage))]
    AliasedPropertyStorage {
        type_name: String,
        first: String,
        second: String,
        storage: String,
    },

    #[error("enum constant `{constant}` of `{type_name}` has ordinal {found}, expected {expected}")]
    #[diagnostic(code(objcgen::generate::enum_ordinal_mismatch))]
    EnumOrdinalMismatch {
        type_name: String,
        constant: String,
        expected: usize,
        found: usize,
    },

    #[error("`{type_name}` is not an enum but declares {count} enum constant(s)")]
    #[diagnostic(code(objcgen::generate::enum_constants_on_non_enum))]
    EnumConstantsOnNonEnum { type_name: String, count: usize },

    /// A model-construction error. The generator never raises this itself; front ends building the model with `?`
    /// (for example through `FieldClass::from_flags`) get it converted for them.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(#[from] ModelError),
}
