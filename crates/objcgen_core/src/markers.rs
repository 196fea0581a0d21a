//! Marker macros and fixed identifiers emitted into implementation files.

/// Opens a region where the runtime suppresses the designated-initializer completeness diagnostic.
pub const IGNORE_DESIGNATED_BEGIN: &str = "J2OBJC_IGNORE_DESIGNATED_BEGIN";

/// Closes a region opened by [`IGNORE_DESIGNATED_BEGIN`].
pub const IGNORE_DESIGNATED_END: &str = "J2OBJC_IGNORE_DESIGNATED_END";

/// Defines the class-initialization entry point for a type.
pub const CLASS_INITIALIZE_SOURCE: &str = "J2OBJC_CLASS_INITIALIZE_SOURCE";

/// Defines the type literal for a class.
pub const CLASS_TYPE_LITERAL_SOURCE: &str = "J2OBJC_CLASS_TYPE_LITERAL_SOURCE";

/// Defines the type literal for an interface.
pub const INTERFACE_TYPE_LITERAL_SOURCE: &str = "J2OBJC_INTERFACE_TYPE_LITERAL_SOURCE";

/// Maps a prefixed type name back to its Java name.
pub const NAME_MAPPING: &str = "J2OBJC_NAME_MAPPING";

/// Attribute that runs a static function at image load, before `main`.
pub const LOAD_TIME_CONSTRUCTOR: &str = "__attribute__((constructor))";

pub const AUTORELEASE_POOL: &str = "@autoreleasepool";

// JNI bridge
pub const JNI_EXPORT: &str = "JNIEXPORT";
pub const JNI_ENV_PARAM: &str = "JNIEnv *_env_";
pub const JNI_CLASS_PARAM: &str = "jclass _cls_";
pub const JNI_ENV_GLOBAL: &str = "J2ObjC_JNIEnv";

// Per-type identifier suffixes: `<TypeName><suffix>`
pub const CLINIT_SUFFIX: &str = "__clinit__";
pub const INITIALIZE_SUFFIX: &str = "_initialize";
pub const CLASS_ACCESSOR_SUFFIX: &str = "_class_";
pub const VALUES_ARRAY_SUFFIX: &str = "_values_";
pub const STRING_CONSTANTS_SUFFIX: &str = "_init_string_constants";

/// Suffix of the incoming name of a parameter that is shadowed by a local copy.
pub const SHADOWED_PARAM_SUFFIX: &str = "_0";

/// Return the type-literal macro for a class or interface type.
pub fn type_literal_source(is_interface: bool) -> &'static str {
    if is_interface {
        INTERFACE_TYPE_LITERAL_SOURCE
    } else {
        CLASS_TYPE_LITERAL_SOURCE
    }
}
