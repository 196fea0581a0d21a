//! Methods and native declarations.

use objcgen_core::markers::{IGNORE_DESIGNATED_BEGIN, IGNORE_DESIGNATED_END};
use objcgen_core::selectors::is_designated_selector;
use objcgen_model::{Method, NativeDeclaration};

use super::ImplementationGenerator;
use crate::backend::signatures::method_signature;
use crate::backend::source_builder::SourceBuilder;

impl<'a> ImplementationGenerator<'a> {
    /// Constructors with the default selector, or the boxed-number initializers on boxed-numeric subtypes.
    fn is_designated_initializer(&self, method: &Method) -> bool {
        method.is_constructor()
            && is_designated_selector(
                &self.ctx.names.method_selector(method),
                self.ty.is_boxed_numeric_subtype,
            )
    }

    pub(super) fn print_method(&self, builder: &mut SourceBuilder, method: &Method) {
        let Some(body) = &method.body else {
            tracing::trace!(method = %method.name, "abstract, skipping");
            return;
        };
        builder.newline();
        let designated = self.is_designated_initializer(method);
        if designated {
            builder.println(IGNORE_DESIGNATED_BEGIN);
        }
        builder.sync_line(method.line);
        builder.print(&method_signature(self.ctx.names, method));
        builder.print(" ");
        let body = self.generate_statement(builder, body);
        let body = builder.reindent(&body);
        builder.println(&body);
        if designated {
            builder.println(IGNORE_DESIGNATED_END);
        }
    }

    pub(super) fn print_native_declaration(&self, builder: &mut SourceBuilder, native: &NativeDeclaration) {
        if let Some(code) = &native.implementation_code {
            builder.newline();
            let code = builder.reindent(code);
            builder.println(&code);
        }
    }
}
