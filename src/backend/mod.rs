//! objcgen Backend
//!
//! This module turns a resolved type declaration into Objective-C implementation text.
//!
//! The pipeline is:
//! 1. Resolved model from the front end → `ImplementationGenerator` → ordered writes into a `SourceBuilder`
//! 2. Identifiers come from a `NameResolver`; bodies come from a `StatementGenerator`
//! 3. `generate_unit` runs the generator for every type of a compilation unit
//!
//! ## Module Organization
//!
//! - `impl_gen/` - Implementation generator
//!   - `mod.rs` - `ImplementationGenerator` and the fixed section order
//!   - `validate.rs` - Model contract checks (run before any text is written)
//!   - `static_vars.rs` - Static storage and deferred string constants
//!   - `properties.rs` - `@synthesize` wiring
//!   - `accessors.rs` - Static accessors and enum constant accessors
//!   - `enums.rs` - Enum values array
//!   - `clinit.rs` - Class-initialization routine
//!   - `methods.rs` - Methods, designated initializers, native declarations
//!   - `functions.rs` - Functions, JNI bridges, const-ref argument shadowing
//!   - `metadata.rs` - Type literal / class init markers and name mapping
//! - `names.rs` - `NameResolver` and the reference `NameTable`
//! - `statements.rs` - `StatementGenerator` and the reference `NativeStatementGenerator`
//! - `signatures.rs` - Method, function and JNI signatures
//! - `source_builder.rs` - Low-level output buffer with line directives
//! - `options.rs` - Generator options
//! - `unit.rs` - Compilation-unit driver

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod impl_gen;
pub mod names;
pub mod options;
pub mod signatures;
pub mod source_builder;
pub mod statements;
pub mod unit;
