//! Method, function and JNI signatures.

use objcgen_core::markers::{JNI_CLASS_PARAM, JNI_ENV_PARAM, SHADOWED_PARAM_SUFFIX};
use objcgen_model::{Function, Method, Parameter, TypeDeclaration};

use super::names::NameResolver;

/// Join a C type and a declarator: `jint x`, `NSString *x`.
pub fn join_type_and_name(ty: &str, name: &str) -> String {
    if ty.ends_with('*') {
        format!("{}{}", ty, name)
    } else {
        format!("{} {}", ty, name)
    }
}

/// Whether a target type spelling denotes an object pointer.
pub fn is_object_type(ty: &str) -> bool {
    ty.ends_with('*') || ty == "id" || ty.starts_with("id<")
}

/// Whether a function parameter is passed as a local copy under const-ref arguments.
pub fn is_shadowed_param(names: &dyn NameResolver, param: &Parameter) -> bool {
    param.is_mutable && is_object_type(&names.target_type(&param.ty))
}

/// `- (ret)keyword:(T)name keyword:(T)name`; `+` for static methods, `instancetype` for constructors.
pub fn method_signature(names: &dyn NameResolver, method: &Method) -> String {
    let prefix = if method.is_static() { '+' } else { '-' };
    let return_type = if method.is_constructor() {
        "instancetype".to_string()
    } else {
        names.target_type(&method.return_type)
    };
    let selector = names.method_selector(method);
    let mut sig = format!("{} ({})", prefix, return_type);
    if method.params.is_empty() {
        sig.push_str(&selector);
        return sig;
    }
    let keywords = selector.split_terminator(':');
    for (i, (keyword, param)) in keywords.zip(&method.params).enumerate() {
        if i > 0 {
            sig.push(' ');
        }
        sig.push_str(&format!(
            "{}:({}){}",
            keyword,
            names.target_type(&param.ty),
            names.parameter_name(param)
        ));
    }
    sig
}

/// `RET Name(T a, T *b)`.
///
/// With `shadow_mutable_refs`, mutable object parameters are declared as `<name>_0` so the body can rebind
/// `<name>` to a local copy.
pub fn function_signature(
    names: &dyn NameResolver,
    function: &Function,
    declaring: &TypeDeclaration,
    shadow_mutable_refs: bool,
) -> String {
    let params: Vec<String> = function
        .params
        .iter()
        .map(|param| {
            let mut name = names.parameter_name(param);
            if shadow_mutable_refs && is_shadowed_param(names, param) {
                name.push_str(SHADOWED_PARAM_SUFFIX);
            }
            join_type_and_name(&names.target_type(&param.ty), &name)
        })
        .collect();
    let head = join_type_and_name(
        &names.target_type(&function.return_type),
        &names.function_name(function, declaring),
    );
    format!("{}({})", head, params.join(", "))
}

/// `jret Java_sym(JNIEnv *_env_[, jclass _cls_][, jtype param...])`.
pub fn foreign_signature(names: &dyn NameResolver, function: &Function, declaring: &TypeDeclaration) -> String {
    let mut params = vec![JNI_ENV_PARAM.to_string()];
    if function.is_static {
        params.push(JNI_CLASS_PARAM.to_string());
    }
    params.extend(
        function
            .params
            .iter()
            .map(|param| join_type_and_name(&names.foreign_type(&param.ty), &names.parameter_name(param))),
    );
    format!(
        "{}({})",
        join_type_and_name(
            &names.foreign_type(&function.return_type),
            &names.foreign_symbol(function, declaring)
        ),
        params.join(", ")
    )
}
