//! The `__clinit__` class-initialization routine.
//!
//! Supertypes are initialized before any of the type's own static state is touched: the superclass first, then each
//! resolved interface in declaration order, then the type's initialization statements in source order.

use objcgen_core::markers::{CLINIT_SUFFIX, INITIALIZE_SUFFIX};
use objcgen_core::naming::is_intrinsic_type;

use super::ImplementationGenerator;
use crate::backend::source_builder::SourceBuilder;

impl<'a> ImplementationGenerator<'a> {
    pub(super) fn print_initialize_method(&self, builder: &mut SourceBuilder) {
        if !self.ty.needs_class_init {
            return;
        }
        let mut body = String::from("{\n");
        if !self.ty.is_annotation() {
            for supertype in self.initialized_supertypes() {
                body.push_str(&format!("{}{}();\n", supertype, INITIALIZE_SUFFIX));
            }
        }
        for stmt in &self.ty.class_init_statements {
            body.push_str(&self.generate_statement(builder, stmt));
        }
        body.push('}');
        let body = builder.reindent(&body);
        builder.printf(format_args!(
            "\nstatic void {}{}() {}\n",
            self.type_name, CLINIT_SUFFIX, body
        ));
    }

    /// Emitted names of the supertypes whose initialization must run first, in order.
    fn initialized_supertypes(&self) -> Vec<String> {
        let names = self.ctx.names;
        let superclass = self.ty.superclass.iter().map(|s| names.full_name(&s.qualified_name));
        let interfaces = self
            .ty
            .interfaces
            .iter()
            .filter(|i| !i.unresolved && !is_intrinsic_type(&i.qualified_name))
            .map(|i| names.full_name(&i.qualified_name));
        superclass.chain(interfaces).collect()
    }
}
