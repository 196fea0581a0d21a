//! Shared model fixtures for the integration, snapshot and property tests.

#![allow(dead_code)]

use objcgen::model::{
    Expression, Field, Function, Method, MethodKind, NativeDeclaration, Parameter, PrimitiveKind, Statement,
    TypeDeclaration, TypeKind, TypeName, TypeRef,
};
use objcgen::{
    GenerateError, GenerationContext, GeneratorOptions, ImplementationGenerator, NameTable, NativeStatementGenerator,
    SourceBuilder,
};

pub fn int() -> TypeRef {
    TypeRef::Primitive(PrimitiveKind::Int)
}

pub fn body(lines: &[&str]) -> Statement {
    Statement::block(lines.iter().map(|l| Statement::native(*l)).collect())
}

/// Generate one type with the reference name table and statement generator.
pub fn generate_with(ty: &TypeDeclaration, options: &GeneratorOptions, names: &NameTable) -> Result<String, GenerateError> {
    let statements = NativeStatementGenerator::new();
    let ctx = GenerationContext::new(options, names, &statements);
    let mut builder = SourceBuilder::new().with_line_directives(options.emit_line_directives);
    ImplementationGenerator::new(ty, ctx).generate(&mut builder)?;
    Ok(builder.finish())
}

pub fn generate(ty: &TypeDeclaration, options: &GeneratorOptions) -> Result<String, GenerateError> {
    generate_with(ty, options, &NameTable::new())
}

/// `class Counter extends Base implements Incrementable`, initializing `count = 0` in its static initializer.
pub fn counter() -> TypeDeclaration {
    TypeDeclaration::new(TypeKind::Class, "com.example.Counter")
        .at_line(3)
        .with_superclass(TypeName::new("com.example.Base"))
        .with_interface(TypeName::new("com.example.Incrementable"))
        .with_field(Field::new_static("count", int()).at_line(5))
        .with_field(Field::string_constant("LABEL", "counter").at_line(6))
        .with_field(Field::primitive_constant("MAX", PrimitiveKind::Int, "100").at_line(7))
        .with_field(Field::new("step", int()).mark_property().at_line(8))
        .with_method(Method::constructor().at_line(10).with_body(body(&["step_ = 1;"])))
        .with_method(
            Method::new("increment", MethodKind::Instance, TypeRef::Void)
                .at_line(14)
                .with_body(body(&["ComExampleCounter_count += step_;"])),
        )
        .with_method(Method::new("reset", MethodKind::Instance, TypeRef::Void).at_line(18))
        .with_class_init_statement(Statement::native("ComExampleCounter_count = 0;"))
        .mark_needs_class_init()
        .mark_needs_type_literal()
}

/// `enum Color { RED, GREEN, BLUE }`
pub fn color() -> TypeDeclaration {
    TypeDeclaration::new(TypeKind::Enum, "com.example.Color")
        .at_line(2)
        .with_superclass(TypeName::new("java.lang.Enum"))
        .with_enum_constant("RED")
        .with_enum_constant("GREEN")
        .with_enum_constant("BLUE")
        .with_method(
            Method::new("isWarm", MethodKind::Instance, TypeRef::Primitive(PrimitiveKind::Boolean))
                .at_line(6)
                .with_body(Statement::block(vec![Statement::Return(Some(Expression::native(
                    "self == ComExampleColor_RED",
                )))])),
        )
        .with_class_init_statement(Statement::native("ComExampleColor_initValues();"))
        .mark_needs_class_init()
        .mark_needs_type_literal()
}

/// A class with a static native `int f(int a, Object b)`, a plain function and native code blocks.
pub fn native_lib() -> TypeDeclaration {
    TypeDeclaration::new(TypeKind::Class, "com.example.NativeLib")
        .at_line(4)
        .with_superclass(TypeName::new("java.lang.Object"))
        .with_function(
            Function::new("f", int())
                .mark_native()
                .mark_static()
                .at_line(6)
                .with_param(Parameter::new("a", int()))
                .with_param(Parameter::new("b", TypeRef::class("java.lang.Object"))),
        )
        .with_function(
            Function::new("twice", int())
                .mark_static()
                .at_line(9)
                .with_param(Parameter::new("x", int()))
                .with_body(Statement::block(vec![Statement::Return(Some(Expression::native("x * 2")))])),
        )
        .with_native(NativeDeclaration::inner("static jint calls = 0;"))
        .with_native(NativeDeclaration::outer("// End of native helpers."))
        .mark_needs_type_literal()
}

/// A class in a prefixed package with assorted static fields and a user-defined getter for `size`.
pub fn cache() -> TypeDeclaration {
    TypeDeclaration::new(TypeKind::Class, "com.example.util.Cache")
        .at_line(1)
        .with_superclass(TypeName::new("java.lang.Object"))
        .with_field(Field::new_static("hits", TypeRef::Primitive(PrimitiveKind::Long)).mark_volatile())
        .with_field(Field::new_static("owner", TypeRef::string()))
        .with_field(
            Field::new_static("shared", TypeRef::class("com.example.util.Node"))
                .mark_volatile()
                .with_initializer(Expression::Null),
        )
        .with_field(
            Field::new_static("capacity", int())
                .mark_final()
                .with_initializer(Expression::number("64")),
        )
        .with_field(Field::new_static("secret", int()).mark_private_declaration())
        .with_field(Field::new_static("size", int()))
        .with_method(
            Method::new("getSize", MethodKind::Static, int()).with_body(Statement::block(vec![Statement::Return(
                Some(Expression::native("CEUCache_size")),
            )])),
        )
}

pub fn cache_names() -> NameTable {
    NameTable::new().with_package_prefix("com.example.util", "CEU")
}

/// A boxed-number subclass whose `initWithInt:` constructor is designated.
pub fn fraction() -> TypeDeclaration {
    TypeDeclaration::new(TypeKind::Class, "com.example.Fraction")
        .with_superclass(TypeName::new("java.lang.Number"))
        .mark_boxed_numeric()
        .with_method(
            Method::constructor()
                .with_param(Parameter::new("value", int()))
                .with_body(body(&["numerator_ = value;"])),
        )
        .with_method(
            Method::constructor()
                .with_param(Parameter::new("n", int()))
                .with_param(Parameter::new("d", int()))
                .with_body(body(&["numerator_ = n;", "denominator_ = d;"])),
        )
}
