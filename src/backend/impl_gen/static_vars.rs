//! Static field storage and the string-constant startup routine.

use objcgen_core::markers::{LOAD_TIME_CONSTRUCTOR, STRING_CONSTANTS_SUFFIX};
use objcgen_core::primitives::storage_word;
use objcgen_model::Field;

use super::ImplementationGenerator;
use crate::backend::source_builder::SourceBuilder;

impl<'a> ImplementationGenerator<'a> {
    /// Primitive constants are inlined at use sites; privately declared storage is already defined, except for
    /// string constants which still need their assignment.
    fn needs_definition(field: &Field) -> bool {
        !field.is_primitive_constant() && (!field.private_declaration || field.is_string_constant())
    }

    /// Declared type of a static variable, followed by a space unless it ends in `*`.
    fn declaration_type(&self, field: &Field) -> String {
        let mut ty = if field.is_volatile {
            format!("volatile_{}", storage_word(field.ty.primitive_kind()))
        } else {
            self.ctx.names.target_type(&field.ty)
        };
        if !ty.ends_with('*') {
            ty.push(' ');
        }
        ty
    }

    pub(super) fn print_static_vars(&self, builder: &mut SourceBuilder) {
        let fields: Vec<&Field> = self.ty.static_fields().filter(|f| Self::needs_definition(f)).collect();
        if fields.is_empty() {
            return;
        }
        builder.newline();
        let mut deferred = String::new();
        for field in fields {
            let name = self.ctx.names.static_var_name(field, self.ty);
            let decl_type = self.declaration_type(field);
            match &field.initializer {
                None => builder.printf(format_args!("{}{};\n", decl_type, name)),
                Some(init) if field.is_string_constant() => {
                    if !field.private_declaration {
                        builder.printf(format_args!("{}{};\n", decl_type, name));
                    }
                    let value = self.ctx.statements.generate_expression(init);
                    deferred.push_str(&format!("  {} = {};\n", name, value));
                }
                Some(init) => {
                    let cast = if field.is_volatile && !field.ty.is_primitive() {
                        "(void *)"
                    } else {
                        ""
                    };
                    let value = self.ctx.statements.generate_expression(init);
                    builder.printf(format_args!("{}{} = {}{};\n", decl_type, name, cast, value));
                }
            }
        }
        if !deferred.is_empty() {
            builder.printf(format_args!(
                "\n{} static void {}{}() {{\n",
                LOAD_TIME_CONSTRUCTOR, self.type_name, STRING_CONSTANTS_SUFFIX
            ));
            builder.print(&deferred);
            builder.print("}\n");
        }
    }
}
