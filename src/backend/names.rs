//! Name resolution for emitted identifiers.
//!
//! The generator never spells an identifier itself: every storage name, accessor, selector and type spelling is
//! asked from a [`NameResolver`]. [`NameTable`] is the reference implementation and follows the J2ObjC naming
//! conventions.
//!
//! ## Notes
//!
//! - Resolvers are consulted read-only; a generation pass never mutates one.
//! - `find_getter` / `find_setter` report *user-defined* accessors. When one exists the generator does not
//!   synthesize its own.

use std::collections::HashMap;

use objcgen_core::markers::NAME_MAPPING;
use objcgen_core::naming::{camel_case_package, capitalize, is_reserved_name, mangle_jni, split_qualified_name};
use objcgen_core::primitives::PrimitiveKind;
use objcgen_core::selectors::DEFAULT_INITIALIZER;
use objcgen_core::well_known;
use objcgen_model::{EnumConstant, Field, Function, Method, Parameter, TypeDeclaration, TypeRef};

/// Maps model symbols to emitted identifiers.
pub trait NameResolver {
    /// Emitted name of a type, by Java qualified name.
    fn full_name(&self, qualified_name: &str) -> String;

    /// Emitted name of a declared type.
    fn type_name(&self, ty: &TypeDeclaration) -> String {
        self.full_name(&ty.qualified_name)
    }

    /// Storage identifier of a static field.
    fn static_var_name(&self, field: &Field, declaring: &TypeDeclaration) -> String;

    /// Storage identifier of an instance field.
    fn instance_var_name(&self, field: &Field) -> String;

    /// Unadorned name of a field (the property name).
    fn base_name(&self, field: &Field) -> String;

    /// Class-method name of a static field's getter.
    fn static_accessor_name(&self, field: &Field) -> String;

    /// Storage identifier backing an enum constant.
    fn enum_constant_var_name(&self, constant: &EnumConstant, declaring: &TypeDeclaration) -> String;

    /// Class-method name returning an enum constant.
    fn enum_constant_accessor_name(&self, constant: &EnumConstant) -> String;

    /// Selector of a user-defined getter for `base_name`, if the declaring type has one.
    fn find_getter(&self, base_name: &str, ty: &TypeRef, declaring: &TypeDeclaration, is_static: bool)
    -> Option<String>;

    /// Selector of a user-defined setter for `base_name`, if the declaring type has one.
    fn find_setter(&self, base_name: &str, ty: &TypeRef, declaring: &TypeDeclaration, is_static: bool)
    -> Option<String>;

    /// Spelling of a type in declarations.
    fn target_type(&self, ty: &TypeRef) -> String;

    /// Spelling of a type across the JNI boundary.
    fn foreign_type(&self, ty: &TypeRef) -> String;

    /// Full selector of a method; one `:` per parameter.
    fn method_selector(&self, method: &Method) -> String;

    /// C name of a function.
    fn function_name(&self, function: &Function, declaring: &TypeDeclaration) -> String;

    /// JNI symbol implementing a native function.
    fn foreign_symbol(&self, function: &Function, declaring: &TypeDeclaration) -> String;

    /// Local name of a parameter.
    fn parameter_name(&self, param: &Parameter) -> String;

    /// Legacy name-mapping directive for a type, if it is renamed.
    fn name_mapping(&self, ty: &TypeDeclaration) -> Option<String>;
}

/// Reference name resolver following J2ObjC conventions.
///
/// Package prefixes registered with [`NameTable::with_package_prefix`] replace the camel-cased package in type
/// names, and make the table report a name mapping for types in that package.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    package_prefixes: HashMap<String, String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an explicit prefix for a package (`com.example.util` → `CEU`).
    pub fn with_package_prefix(mut self, package: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.package_prefixes.insert(package.into(), prefix.into());
        self
    }

    /// Escape identifiers that collide with Objective-C keywords or `NSObject` methods.
    fn escape(name: &str) -> String {
        if is_reserved_name(name) {
            format!("{}_", name)
        } else {
            name.to_string()
        }
    }

    /// Spelling of a type inside a selector keyword (`withInt:`, `withNSString:`).
    fn selector_part(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Void => "Void".to_string(),
            TypeRef::Primitive(kind) => kind.suffix().to_string(),
            TypeRef::Class(name) | TypeRef::Interface(name) => match well_known::lookup(name) {
                Some(known) => known.selector_part.to_string(),
                None => self.full_name(name),
            },
            TypeRef::Array(element) => {
                let element_part = match element.as_ref() {
                    TypeRef::Class(name) | TypeRef::Interface(name) => self.full_name(name),
                    other => self.selector_part(other),
                };
                format!("{}Array", element_part)
            }
        }
    }

    /// `base` followed by one keyword per parameter: `WithInt:` for the first, `withNSString:` after that.
    fn selector(&self, base: &str, params: &[Parameter]) -> String {
        let mut selector = base.to_string();
        for (i, param) in params.iter().enumerate() {
            let keyword = if i == 0 { "With" } else { "with" };
            selector.push_str(keyword);
            selector.push_str(&self.selector_part(&param.ty));
            selector.push(':');
        }
        selector
    }

    /// Whether `method` has exactly the shape of an accessor named `name`.
    fn is_accessor_candidate(method: &Method, name: &str, is_static: bool) -> bool {
        !method.is_constructor() && method.is_static() == is_static && method.name == name
    }
}

impl NameResolver for NameTable {
    fn full_name(&self, qualified_name: &str) -> String {
        if let Some(known) = well_known::lookup(qualified_name) {
            return known.objc_class.to_string();
        }
        let (package, classes) = split_qualified_name(qualified_name);
        let prefix = match self.package_prefixes.get(&package) {
            Some(prefix) => prefix.clone(),
            None => camel_case_package(&package),
        };
        format!("{}{}", prefix, classes.join("_"))
    }

    fn static_var_name(&self, field: &Field, declaring: &TypeDeclaration) -> String {
        format!("{}_{}", self.type_name(declaring), field.name)
    }

    fn instance_var_name(&self, field: &Field) -> String {
        format!("{}_", field.name)
    }

    fn base_name(&self, field: &Field) -> String {
        field.name.clone()
    }

    fn static_accessor_name(&self, field: &Field) -> String {
        Self::escape(&field.name)
    }

    fn enum_constant_var_name(&self, constant: &EnumConstant, declaring: &TypeDeclaration) -> String {
        format!("{}_{}", self.type_name(declaring), constant.name)
    }

    fn enum_constant_accessor_name(&self, constant: &EnumConstant) -> String {
        Self::escape(&constant.name)
    }

    fn find_getter(
        &self,
        base_name: &str,
        ty: &TypeRef,
        declaring: &TypeDeclaration,
        is_static: bool,
    ) -> Option<String> {
        let getter = format!("get{}", capitalize(base_name));
        let boolean_getter = format!("is{}", capitalize(base_name));
        let is_boolean = *ty == TypeRef::Primitive(PrimitiveKind::Boolean);
        declaring
            .methods()
            .find(|m| {
                m.params.is_empty()
                    && m.return_type == *ty
                    && (Self::is_accessor_candidate(m, &getter, is_static)
                        || (is_boolean && Self::is_accessor_candidate(m, &boolean_getter, is_static)))
            })
            .map(|m| self.method_selector(m))
    }

    fn find_setter(
        &self,
        base_name: &str,
        ty: &TypeRef,
        declaring: &TypeDeclaration,
        is_static: bool,
    ) -> Option<String> {
        let setter = format!("set{}", capitalize(base_name));
        declaring
            .methods()
            .find(|m| {
                m.return_type.is_void()
                    && m.params.len() == 1
                    && m.params[0].ty == *ty
                    && Self::is_accessor_candidate(m, &setter, is_static)
            })
            .map(|m| self.method_selector(m))
    }

    fn target_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Void => "void".to_string(),
            TypeRef::Primitive(kind) => kind.objc_type().to_string(),
            TypeRef::Class(name) => match well_known::lookup(name) {
                Some(known) => known.objc_type.to_string(),
                None => format!("{} *", self.full_name(name)),
            },
            TypeRef::Interface(name) => match well_known::lookup(name) {
                Some(known) => known.objc_type.to_string(),
                None => format!("id<{}>", self.full_name(name)),
            },
            TypeRef::Array(element) => match element.primitive_kind() {
                Some(kind) => format!("{} *", kind.array_class()),
                None => "IOSObjectArray *".to_string(),
            },
        }
    }

    fn foreign_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Void => "void".to_string(),
            TypeRef::Primitive(kind) => kind.objc_type().to_string(),
            TypeRef::Class(name) | TypeRef::Interface(name) => well_known::lookup(name)
                .map(|known| known.foreign_type)
                .unwrap_or("jobject")
                .to_string(),
            TypeRef::Array(element) => match element.primitive_kind() {
                Some(kind) => kind.foreign_array_type().to_string(),
                None => "jobjectArray".to_string(),
            },
        }
    }

    fn method_selector(&self, method: &Method) -> String {
        if method.is_constructor() {
            return self.selector(DEFAULT_INITIALIZER, &method.params);
        }
        // `init`, `copy`, `hash` and friends would override NSObject behavior.
        let base = if is_reserved_name(&method.name) {
            format!("{}__", method.name)
        } else {
            method.name.clone()
        };
        self.selector(&base, &method.params)
    }

    fn function_name(&self, function: &Function, declaring: &TypeDeclaration) -> String {
        let selector = self.selector(&function.name, &function.params);
        format!("{}_{}", self.type_name(declaring), selector.replace(':', "_"))
    }

    fn foreign_symbol(&self, function: &Function, declaring: &TypeDeclaration) -> String {
        format!(
            "Java_{}_{}",
            mangle_jni(&declaring.qualified_name),
            mangle_jni(&function.name)
        )
    }

    fn parameter_name(&self, param: &Parameter) -> String {
        Self::escape(&param.name)
    }

    fn name_mapping(&self, ty: &TypeDeclaration) -> Option<String> {
        let (package, _) = split_qualified_name(&ty.qualified_name);
        if !self.package_prefixes.contains_key(&package) {
            return None;
        }
        let type_name = self.type_name(ty);
        Some(format!(
            "{}({}, \"{}\", \"{}\")",
            NAME_MAPPING, type_name, ty.qualified_name, type_name
        ))
    }
}
