//! Enum constant storage.

use objcgen_core::markers::VALUES_ARRAY_SUFFIX;

use super::ImplementationGenerator;
use crate::backend::source_builder::SourceBuilder;

impl<'a> ImplementationGenerator<'a> {
    /// One slot per constant, indexed by ordinal.
    pub(super) fn print_enum_values_array(&self, builder: &mut SourceBuilder) {
        if !self.ty.is_enum() {
            return;
        }
        builder.newline();
        builder.printf(format_args!(
            "{} *{}{}[{}];\n",
            self.type_name,
            self.type_name,
            VALUES_ARRAY_SUFFIX,
            self.ty.enum_constants.len()
        ));
    }
}
