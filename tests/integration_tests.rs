//! Integration tests for the implementation generator

mod common;

use common::{body, cache, cache_names, counter, fraction, generate, generate_with, int, native_lib};
use objcgen::model::{
    CompilationUnit, Field, FieldClass, Function, Method, MethodKind, ModelError, Parameter, PrimitiveKind, Statement,
    TypeDeclaration, TypeKind, TypeName, TypeRef,
};
use objcgen::{
    GenerateError, GenerationContext, GeneratorOptions, MemoryManagement, NameTable, NativeStatementGenerator,
    generate_unit,
};

/// Byte offset of `needle` in `haystack`, failing the test when absent.
fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("`{}` not found in:\n{}", needle, haystack))
}

#[test]
fn test_supertypes_initialize_before_own_statements() {
    let out = generate(&counter(), &GeneratorOptions::default()).unwrap();
    let base = position(&out, "ComExampleBase_initialize();");
    let iface = position(&out, "ComExampleIncrementable_initialize();");
    let own = position(&out, "ComExampleCounter_count = 0;");
    assert!(base < iface && iface < own);
}

#[test]
fn test_sections_follow_fixed_order() {
    let out = generate(&counter(), &GeneratorOptions::default()).unwrap();
    let order = [
        "jint ComExampleCounter_count;",
        "_init_string_constants()",
        "@implementation ComExampleCounter",
        "@synthesize step = step_;",
        "- (instancetype)init",
        "- (void)increment",
        "static void ComExampleCounter__clinit__()",
        "@end",
        "J2OBJC_CLASS_INITIALIZE_SOURCE(ComExampleCounter)",
        "J2OBJC_CLASS_TYPE_LITERAL_SOURCE(ComExampleCounter)",
    ];
    let positions: Vec<usize> = order.iter().map(|s| position(&out, s)).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "out of order:\n{}", out);
    // Primitive constants and abstract methods never appear.
    assert!(!out.contains("ComExampleCounter_MAX"));
    assert!(!out.contains("reset"));
}

#[test]
fn test_root_type_has_no_super_initialize() {
    let ty = TypeDeclaration::new(TypeKind::Class, "Root")
        .with_class_init_statement(Statement::native("Root_ready = true;"))
        .mark_needs_class_init();
    let out = generate(&ty, &GeneratorOptions::default()).unwrap();
    assert!(out.contains("static void Root__clinit__() {\n  Root_ready = true;\n}\n"));
}

#[test]
fn test_jni_bridge_signature_fidelity() {
    let out = generate(&native_lib(), &GeneratorOptions::default()).unwrap();
    assert!(out.contains(
        "JNIEXPORT jint Java_com_example_NativeLib_f(JNIEnv *_env_, jclass _cls_, jint a, jobject b);\n\n"
    ));
    assert!(out.contains(
        "  return Java_com_example_NativeLib_f(&J2ObjC_JNIEnv, ComExampleNativeLib_class_(), a, b);\n"
    ));
    // Functions and outer native code come after the implementation block.
    assert!(position(&out, "@end") < position(&out, "JNIEXPORT"));
    assert!(position(&out, "static jint calls = 0;") < position(&out, "@end"));
}

#[test]
fn test_instance_native_function_omits_class_argument() {
    let ty = TypeDeclaration::new(TypeKind::Class, "Lib").with_function(
        Function::new("poke", TypeRef::Void)
            .mark_native()
            .with_param(Parameter::new("x", int())),
    );
    let out = generate(&ty, &GeneratorOptions::default()).unwrap();
    assert!(out.contains("JNIEXPORT void Java_Lib_poke(JNIEnv *_env_, jint x);"));
    assert!(out.contains("void Lib_pokeWithInt_(jint x) {\n  Java_Lib_poke(&J2ObjC_JNIEnv, x);\n}\n"));
}

#[test]
fn test_user_defined_accessors_suppress_synthesis() {
    let options = GeneratorOptions::new().with_static_accessor_methods(true);
    let out = generate_with(&cache(), &options, &cache_names()).unwrap();
    assert!(!out.contains("+ (jint)size {"));
    assert!(out.contains("+ (void)setSize:(jint)value {"));
    // Final fields never get a setter; private fields get no accessors at all.
    assert!(!out.contains("setCapacity"));
    assert!(!out.contains("secret"));
}

#[test]
fn test_arc_uses_plain_reference_stores() {
    let options = GeneratorOptions::new()
        .with_static_accessor_methods(true)
        .with_memory_management(MemoryManagement::Arc);
    let out = generate_with(&cache(), &options, &cache_names()).unwrap();
    assert!(out.contains("+ (void)setOwner:(NSString *)value {\n  CEUCache_owner = value;\n}"));
    // Volatile stores keep their helper regardless of the memory model.
    assert!(out.contains("JreVolatileStaticAssign(&CEUCache_shared, value);"));
}

#[test]
fn test_boxed_numeric_designated_initializers() {
    let out = generate(&fraction(), &GeneratorOptions::default()).unwrap();
    assert!(out.contains(
        "J2OBJC_IGNORE_DESIGNATED_BEGIN\n- (instancetype)initWithInt:(jint)value {\n  numerator_ = value;\n}\nJ2OBJC_IGNORE_DESIGNATED_END\n"
    ));
    assert!(out.contains("\n\n- (instancetype)initWithInt:(jint)n withInt:(jint)d {"));
    assert_eq!(out.matches("J2OBJC_IGNORE_DESIGNATED_BEGIN").count(), 1);
}

#[test]
fn test_interface_without_companion() {
    let ty = TypeDeclaration::new(TypeKind::Interface, "com.example.Shape")
        .with_field(Field::new_static("UNIT", TypeRef::class("com.example.Shape")))
        .mark_needs_class_init()
        .mark_needs_type_literal();
    let out = generate(&ty, &GeneratorOptions::default()).unwrap();
    assert!(out.contains("ComExampleShape *ComExampleShape_UNIT;"));
    assert!(!out.contains("@implementation"));
    assert!(!out.contains("__clinit__"));
    assert!(out.ends_with(
        "\nJ2OBJC_CLASS_INITIALIZE_SOURCE(ComExampleShape)\nJ2OBJC_INTERFACE_TYPE_LITERAL_SOURCE(ComExampleShape)\n"
    ));
}

#[test]
fn test_intrinsic_and_unresolved_interfaces_are_not_initialized() {
    let ty = TypeDeclaration::new(TypeKind::Class, "Widget")
        .with_interface(TypeName::new("com.google.j2objc.annotations.ReflectionSupport"))
        .with_interface(TypeName::unresolved("com.example.Missing"))
        .with_interface(TypeName::new("java.lang.Cloneable"))
        .mark_needs_class_init();
    let out = generate(&ty, &GeneratorOptions::default()).unwrap();
    assert!(out.contains("static void Widget__clinit__() {\n  NSCopying_initialize();\n}\n"));
}

#[test]
fn test_contract_violations_are_fatal() {
    let ty = TypeDeclaration::new(TypeKind::Class, "Limits").with_field(
        Field::new_static("MAX", TypeRef::string()).with_class(FieldClass::PrimitiveConstant),
    );
    let err = generate(&ty, &GeneratorOptions::default()).unwrap_err();
    assert!(matches!(err, GenerateError::InconsistentConstant { ref field, .. } if field == "MAX"));

    let ty = TypeDeclaration::new(TypeKind::Enum, "Color").with_enum_constant("RED");
    let mut broken = ty.clone();
    broken.enum_constants[0].ordinal = 1;
    assert!(generate(&ty, &GeneratorOptions::default()).is_ok());
    assert!(matches!(
        generate(&broken, &GeneratorOptions::default()),
        Err(GenerateError::EnumOrdinalMismatch { .. })
    ));
}

/// Front ends classify fields from two independent flags; both set is rejected.
fn classify(name: &str, primitive: bool, string: bool) -> Result<Field, GenerateError> {
    let class = FieldClass::from_flags(name, primitive, string)?;
    Ok(Field::new_static(name, int()).with_class(class))
}

#[test]
fn test_model_errors_convert_into_generate_errors() {
    assert!(classify("A", true, false).is_ok());
    let err = classify("B", true, true).unwrap_err();
    assert_eq!(
        err,
        GenerateError::Model(ModelError::ConflictingFieldClass { field: "B".to_string() })
    );
    assert_eq!(
        err.to_string(),
        "field `B` is classified as both a primitive constant and a string constant"
    );
}

#[test]
fn test_unit_stops_at_first_error() {
    let bad = TypeDeclaration::new(TypeKind::Class, "Bad").with_enum_constant("X");
    let unit = CompilationUnit::new("Bad.java").with_type(counter()).with_type(bad);
    let options = GeneratorOptions::default();
    let names = NameTable::new();
    let statements = NativeStatementGenerator::new();
    let result = generate_unit(&unit, GenerationContext::new(&options, &names, &statements));
    assert!(matches!(result, Err(GenerateError::EnumConstantsOnNonEnum { .. })));
}

#[test]
fn test_relative_line_directives() {
    let cwd = std::env::current_dir().unwrap();
    let source = cwd.join("src").join("Counter.java");
    let unit = CompilationUnit::new(source.to_string_lossy()).with_type(counter());
    let options = GeneratorOptions::new().with_line_directives(true, true);
    let names = NameTable::new();
    let statements = NativeStatementGenerator::new();
    let out = generate_unit(&unit, GenerationContext::new(&options, &names, &statements)).unwrap();
    let expected = format!("#line 1 \"{}\"\n", std::path::Path::new("src").join("Counter.java").display());
    assert!(out.starts_with(&expected), "unexpected prefix:\n{}", out);
}

#[test]
fn test_const_ref_args_only_touch_mutable_object_params() {
    let ty = TypeDeclaration::new(TypeKind::Class, "Text").with_function(
        Function::new("pad", TypeRef::string())
            .mark_static()
            .with_param(Parameter::new("s", TypeRef::string()).mark_mutable())
            .with_param(Parameter::new("width", int()).mark_mutable())
            .with_param(Parameter::new("fill", TypeRef::string()))
            .with_body(body(&["return s;"])),
    );
    let options = GeneratorOptions::new().with_const_ref_args(true);
    let out = generate(&ty, &options).unwrap();
    assert!(out.contains("NSString *Text_padWithNSString_withInt_withNSString_(NSString *s_0, jint width, NSString *fill) {"));
    assert!(out.contains("  NSString *s = s_0;\n\n  @autoreleasepool {\n    return s;\n  }\n}\n"));
}

#[test]
fn test_reserved_method_names_are_escaped() {
    let ty = TypeDeclaration::new(TypeKind::Class, "Widget").with_method(
        Method::new("hash", MethodKind::Instance, TypeRef::Primitive(PrimitiveKind::Int)).with_body(body(&["return 1;"])),
    );
    let out = generate(&ty, &GeneratorOptions::default()).unwrap();
    assert!(out.contains("- (jint)hash__ {"));
}

fn generate_with_line_directives(ty: TypeDeclaration) -> String {
    let unit = CompilationUnit::new("A.java").with_type(ty);
    let options = GeneratorOptions::new().with_line_directives(true, false);
    let names = NameTable::new();
    let statements = NativeStatementGenerator::new();
    generate_unit(&unit, GenerationContext::new(&options, &names, &statements)).unwrap()
}

#[test]
fn test_implementation_resyncs_to_first_line_after_storage() {
    let ty = TypeDeclaration::new(TypeKind::Class, "A")
        .at_line(1)
        .with_field(Field::new_static("x", int()).at_line(1));
    let out = generate_with_line_directives(ty);
    assert!(out.starts_with("#line 1 \"A.java\"\n"), "unexpected prefix:\n{}", out);
    assert!(out.contains("jint A_x;"));
    assert!(out.contains("#line 1\n@implementation A\n"), "implementation not resynced:\n{}", out);
}

#[test]
fn test_members_on_one_source_line_each_get_a_directive() {
    let ty = TypeDeclaration::new(TypeKind::Class, "A")
        .at_line(1)
        .with_method(Method::new("first", MethodKind::Instance, TypeRef::Void).at_line(3).with_body(body(&["a();"])))
        .with_method(Method::new("second", MethodKind::Instance, TypeRef::Void).at_line(3).with_body(body(&["b();"])));
    let out = generate_with_line_directives(ty);
    assert_eq!(out.matches("#line 3\n").count(), 2, "missing directive:\n{}", out);
    assert!(out.contains("#line 3\n- (void)second {"));
}
