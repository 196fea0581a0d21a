//! Provide the canonical target-runtime vocabulary for the objcgen implementation generator.
//!
//! Everything the generator spells out literally in emitted Objective-C lives here: primitive type names, runtime
//! helper functions for volatile/retained static storage, marker macros, canonical initializer selectors and the
//! naming helpers shared by the name table.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no generator-specific types.
//! - Callers should avoid hard-coding runtime spellings and go through these registries instead.

pub mod markers;
pub mod naming;
pub mod primitives;
pub mod runtime;
pub mod selectors;
pub mod well_known;
