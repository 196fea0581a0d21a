//! `@synthesize` wiring for property fields.

use super::ImplementationGenerator;
use crate::backend::source_builder::SourceBuilder;

impl<'a> ImplementationGenerator<'a> {
    pub(super) fn print_properties(&self, builder: &mut SourceBuilder) {
        let mut properties = self.ty.instance_fields().filter(|f| f.is_property).peekable();
        if properties.peek().is_none() {
            return;
        }
        builder.newline();
        for field in properties {
            builder.printf(format_args!(
                "@synthesize {} = {};\n",
                self.ctx.names.base_name(field),
                self.ctx.names.instance_var_name(field)
            ));
        }
    }
}
