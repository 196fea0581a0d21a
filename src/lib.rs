#![forbid(unsafe_code)]
//! objcgen: Objective-C implementation generator
//!
//! Given the resolved model of one Java type declaration, objcgen emits the implementation-section (`.m`) text for
//! the J2ObjC runtime: static storage, accessors, enum storage, class initialization, method and function bodies,
//! JNI bridges, and the metadata markers the runtime expects.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `backend` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Model contract violations**: inconsistent models are rejected with a [`GenerateError`] before any text is
//!   written; the generator never emits best-effort output.

pub mod backend;

pub use objcgen_core as vocab;
pub use objcgen_model as model;

pub use backend::impl_gen::{GenerateError, GenerationContext, ImplementationGenerator};
pub use backend::names::{NameResolver, NameTable};
pub use backend::options::{GeneratorOptions, MemoryManagement};
pub use backend::source_builder::SourceBuilder;
pub use backend::statements::{NativeStatementGenerator, StatementGenerator};
pub use backend::unit::generate_unit;
