//! Implementation (`.m`) generator for one type declaration.
//!
//! [`ImplementationGenerator::generate`] writes the implementation section of a type in a fixed order:
//!
//! - static storage, deferred string constants and the enum values array,
//! - the `@implementation` block (properties, static accessors, methods, inner native code, `__clinit__`),
//! - functions and outer native code,
//! - type metadata markers and the name-mapping directive.
//!
//! Later sections reference identifiers defined by earlier ones, so the order is part of the output contract.
//!
//! ## Notes
//!
//! - The type is validated before anything is written; on error the builder is left untouched.
//! - Each section lives in its own module as an `impl ImplementationGenerator` block.
//!
//! ## See also
//!
//! - [`crate::backend::unit::generate_unit`] for whole compilation units

mod accessors;
mod clinit;
mod enums;
mod errors;
mod functions;
mod metadata;
mod methods;
mod properties;
mod static_vars;
mod validate;

pub use errors::GenerateError;

use objcgen_model::{BodyDeclaration, Statement, TypeDeclaration};

use super::names::NameResolver;
use super::options::GeneratorOptions;
use super::source_builder::SourceBuilder;
use super::statements::StatementGenerator;

/// Collaborators shared by every type generated in one pass.
#[derive(Clone, Copy)]
pub struct GenerationContext<'a> {
    pub options: &'a GeneratorOptions,
    pub names: &'a dyn NameResolver,
    pub statements: &'a dyn StatementGenerator,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        options: &'a GeneratorOptions,
        names: &'a dyn NameResolver,
        statements: &'a dyn StatementGenerator,
    ) -> Self {
        Self {
            options,
            names,
            statements,
        }
    }
}

/// Generates the implementation section of one type.
pub struct ImplementationGenerator<'a> {
    ctx: GenerationContext<'a>,
    ty: &'a TypeDeclaration,
    /// Emitted name of `ty`, resolved once.
    type_name: String,
    /// File name for `#line` directives.
    source_file: Option<&'a str>,
}

impl<'a> ImplementationGenerator<'a> {
    pub fn new(ty: &'a TypeDeclaration, ctx: GenerationContext<'a>) -> Self {
        Self {
            type_name: ctx.names.type_name(ty),
            ctx,
            ty,
            source_file: None,
        }
    }

    /// Set the file name the output is mapped to by `#line` directives.
    pub fn with_source_file(mut self, path: &'a str) -> Self {
        self.source_file = Some(path);
        self
    }

    /// Generate the type into `builder`.
    ///
    /// ## Errors
    /// - Any [`GenerateError`] contract violation; nothing is written in that case.
    #[tracing::instrument(skip_all, fields(type_name = %self.type_name))]
    pub fn generate(&self, builder: &mut SourceBuilder) -> Result<(), GenerateError> {
        self.validate()?;

        if self.ty.is_dead_class {
            tracing::debug!("dead class, emitting static storage only");
            builder.newline();
            self.print_static_vars(builder);
            return Ok(());
        }

        if let Some(path) = self.source_file {
            builder.sync_filename(path);
        }
        self.print_static_vars(builder);
        self.print_enum_values_array(builder);

        if !self.ty.is_interface_type() || self.ty.needs_companion_class {
            builder.newline();
            builder.sync_line(self.ty.line);
            builder.printf(format_args!("@implementation {}\n", self.type_name));
            self.print_properties(builder);
            self.print_static_accessors(builder);
            for decl in self.ty.inner_declarations() {
                self.print_declaration(builder, decl);
            }
            self.print_initialize_method(builder);
            builder.println("\n@end");
        }

        for decl in self.ty.outer_declarations() {
            self.print_declaration(builder, decl);
        }
        self.print_type_literal_implementation(builder);
        self.print_name_mapping(builder);
        Ok(())
    }

    fn print_declaration(&self, builder: &mut SourceBuilder, decl: &BodyDeclaration) {
        match decl {
            BodyDeclaration::Method(method) => self.print_method(builder, method),
            BodyDeclaration::Function(function) => self.print_function(builder, function),
            BodyDeclaration::Native(native) => self.print_native_declaration(builder, native),
        }
    }

    /// Render a statement starting at the builder's current output line.
    fn generate_statement(&self, builder: &SourceBuilder, stmt: &Statement) -> String {
        self.ctx.statements.generate_statement(stmt, builder.current_line())
    }
}
