//! Class-method accessors for static fields and enum constants.

use objcgen_core::naming::capitalize;
use objcgen_core::runtime::{LoadHelper, StoreHelper, StoreKey};
use objcgen_model::Field;

use super::ImplementationGenerator;
use crate::backend::source_builder::SourceBuilder;

impl<'a> ImplementationGenerator<'a> {
    pub(super) fn print_static_accessors(&self, builder: &mut SourceBuilder) {
        if self.ctx.options.static_accessor_methods {
            for field in self.ty.static_fields().filter(|f| !f.private_declaration) {
                self.print_static_field_accessors(builder, field);
            }
        }
        if self.ty.is_enum() {
            for constant in &self.ty.enum_constants {
                builder.printf(format_args!(
                    "\n+ ({} *){} {{\n  return {};\n}}\n",
                    self.type_name,
                    self.ctx.names.enum_constant_accessor_name(constant),
                    self.ctx.names.enum_constant_var_name(constant, self.ty)
                ));
            }
        }
    }

    fn print_static_field_accessors(&self, builder: &mut SourceBuilder, field: &Field) {
        let names = self.ctx.names;
        let accessor = names.static_accessor_name(field);
        let var_name = names.static_var_name(field, self.ty);
        let objc_type = names.target_type(&field.ty);
        let base_name = names.base_name(field);
        let primitive = field.ty.primitive_kind();

        match names.find_getter(&base_name, &field.ty, self.ty, true) {
            Some(user_getter) => tracing::debug!(field = %field.name, %user_getter, "user getter, skipping"),
            None => {
                let load = LoadHelper::select(field.is_volatile, primitive).render(&var_name);
                builder.printf(format_args!(
                    "\n+ ({}){} {{\n  return {};\n}}\n",
                    objc_type, accessor, load
                ));
            }
        }

        if field.is_final {
            return;
        }
        match names.find_setter(&base_name, &field.ty, self.ty, true) {
            Some(user_setter) => tracing::debug!(field = %field.name, %user_setter, "user setter, skipping"),
            None => {
                let store = StoreHelper::select(StoreKey {
                    is_volatile: field.is_volatile,
                    primitive,
                    is_static: field.is_static,
                    reference_counting: self.ctx.options.memory_management.uses_reference_counting(),
                });
                builder.printf(format_args!(
                    "\n+ (void)set{}:({})value {{\n  {};\n}}\n",
                    capitalize(&accessor),
                    objc_type,
                    store.render(&var_name, "value")
                ));
            }
        }
    }
}
