//! Functions, including the JNI bridge for native ones.

use objcgen_core::markers::{AUTORELEASE_POOL, CLASS_ACCESSOR_SUFFIX, JNI_ENV_GLOBAL, JNI_EXPORT, SHADOWED_PARAM_SUFFIX};
use objcgen_model::{Function, Statement};

use super::ImplementationGenerator;
use crate::backend::signatures::{foreign_signature, function_signature, is_shadowed_param, join_type_and_name};
use crate::backend::source_builder::SourceBuilder;

impl<'a> ImplementationGenerator<'a> {
    pub(super) fn print_function(&self, builder: &mut SourceBuilder, function: &Function) {
        if !function.is_native && function.body.is_none() {
            tracing::trace!(function = %function.name, "no body, skipping");
            return;
        }
        builder.newline();
        builder.sync_line(function.line);
        match &function.body {
            _ if function.is_native => self.print_jni_function_and_wrapper(builder, function),
            Some(body) if self.ctx.options.const_ref_args && self.has_shadowed_params(function) => {
                self.print_const_ref_function(builder, function, body)
            }
            Some(body) => {
                let sig = function_signature(self.ctx.names, function, self.ty, false);
                let body = self.generate_statement(builder, body);
                let body = builder.reindent(&body);
                builder.printf(format_args!("{} {}\n", sig, body));
            }
            None => {}
        }
    }

    fn has_shadowed_params(&self, function: &Function) -> bool {
        function.params.iter().any(|p| is_shadowed_param(self.ctx.names, p))
    }

    /// Mutable object parameters arrive as `<name>_0` and are copied into locals before the body runs.
    fn print_const_ref_function(&self, builder: &mut SourceBuilder, function: &Function, body: &Statement) {
        let names = self.ctx.names;
        let sig = function_signature(names, function, self.ty, true);
        let mut wrapped = String::from("{\n");
        for param in function.params.iter().filter(|p| is_shadowed_param(names, p)) {
            let name = names.parameter_name(param);
            wrapped.push_str(&format!(
                "  {} = {}{};\n",
                join_type_and_name(&names.target_type(&param.ty), &name),
                name,
                SHADOWED_PARAM_SUFFIX
            ));
        }
        wrapped.push('\n');
        wrapped.push_str(AUTORELEASE_POOL);
        wrapped.push(' ');
        wrapped.push_str(&self.generate_statement(builder, body));
        wrapped.push('}');
        let wrapped = builder.reindent(&wrapped);
        builder.printf(format_args!("{} {}\n", sig, wrapped));
    }

    /// Declare the JNI symbol, then define the function as a call through to it.
    fn print_jni_function_and_wrapper(&self, builder: &mut SourceBuilder, function: &Function) {
        let names = self.ctx.names;
        builder.printf(format_args!(
            "{} {};\n\n",
            JNI_EXPORT,
            foreign_signature(names, function, self.ty)
        ));

        let mut args = vec![format!("&{}", JNI_ENV_GLOBAL)];
        if function.is_static {
            args.push(format!("{}{}()", self.type_name, CLASS_ACCESSOR_SUFFIX));
        }
        args.extend(function.params.iter().map(|p| names.parameter_name(p)));

        let result = if function.return_type.is_void() {
            String::new()
        } else if function.return_type.is_primitive() {
            "return ".to_string()
        } else {
            format!("return ({}) ", names.target_type(&function.return_type))
        };

        builder.printf(format_args!(
            "{} {{\n  {}{}({});\n}}\n",
            function_signature(names, function, self.ty, false),
            result,
            names.foreign_symbol(function, self.ty),
            args.join(", ")
        ));
    }
}
