//! Type literal and class-initialize markers, and the name-mapping directive.

use objcgen_core::markers::{type_literal_source, CLASS_INITIALIZE_SOURCE};

use super::ImplementationGenerator;
use crate::backend::source_builder::SourceBuilder;

impl<'a> ImplementationGenerator<'a> {
    pub(super) fn print_type_literal_implementation(&self, builder: &mut SourceBuilder) {
        if !self.ty.needs_type_literal && !self.ty.needs_class_init {
            return;
        }
        builder.newline();
        if self.ty.needs_class_init {
            builder.printf(format_args!("{}({})\n", CLASS_INITIALIZE_SOURCE, self.type_name));
        }
        if self.ty.needs_type_literal {
            builder.printf(format_args!(
                "{}({})\n",
                type_literal_source(self.ty.is_interface_type()),
                self.type_name
            ));
        }
    }

    pub(super) fn print_name_mapping(&self, builder: &mut SourceBuilder) {
        if self.ctx.options.strip_name_mapping {
            return;
        }
        if let Some(mapping) = self.ctx.names.name_mapping(self.ty) {
            builder.newline();
            builder.println(&mapping);
        }
    }
}
