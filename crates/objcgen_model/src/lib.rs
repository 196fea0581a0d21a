//! Resolved declaration model for the objcgen implementation generator.
//!
//! The front end builds this model after type checking; the generator only reads it. Every node kind that the
//! generator dispatches on is a closed enum ([`TypeKind`], [`FieldClass`], [`MethodKind`], [`BodyDeclaration`],
//! [`TypeRef`]) so new kinds cannot be skipped silently.

pub mod decl;
pub mod errors;
pub mod stmt;
pub mod types;

pub use decl::{
    BodyDeclaration, CompilationUnit, EnumConstant, Field, FieldClass, Function, Method, MethodKind,
    NativeDeclaration, Parameter, TypeDeclaration, TypeKind,
};
pub use errors::ModelError;
pub use stmt::{Expression, Statement};
pub use types::{PrimitiveKind, TypeName, TypeRef};
