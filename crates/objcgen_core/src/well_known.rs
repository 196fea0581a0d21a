//! Java types that map onto Foundation or runtime classes instead of generated ones.

/// Spellings for a well-known Java type.
#[derive(Debug, Clone, Copy)]
pub struct WellKnownType {
    /// Java qualified name.
    pub qualified: &'static str,
    /// Runtime class (or protocol) name.
    pub objc_class: &'static str,
    /// Spelling in type position.
    pub objc_type: &'static str,
    /// Spelling inside selectors (`withNSString:`).
    pub selector_part: &'static str,
    /// JNI type.
    pub foreign_type: &'static str,
}

pub const JAVA_LANG_OBJECT: &str = "java.lang.Object";
pub const JAVA_LANG_STRING: &str = "java.lang.String";
pub const JAVA_LANG_NUMBER: &str = "java.lang.Number";
pub const JAVA_LANG_CLASS: &str = "java.lang.Class";

/// Registry of well-known types.
pub const WELL_KNOWN_TYPES: &[WellKnownType] = &[
    WellKnownType {
        qualified: JAVA_LANG_OBJECT,
        objc_class: "NSObject",
        objc_type: "id",
        selector_part: "Id",
        foreign_type: "jobject",
    },
    WellKnownType {
        qualified: JAVA_LANG_STRING,
        objc_class: "NSString",
        objc_type: "NSString *",
        selector_part: "NSString",
        foreign_type: "jstring",
    },
    WellKnownType {
        qualified: JAVA_LANG_NUMBER,
        objc_class: "NSNumber",
        objc_type: "NSNumber *",
        selector_part: "NSNumber",
        foreign_type: "jobject",
    },
    WellKnownType {
        qualified: JAVA_LANG_CLASS,
        objc_class: "IOSClass",
        objc_type: "IOSClass *",
        selector_part: "IOSClass",
        foreign_type: "jclass",
    },
    WellKnownType {
        qualified: "java.lang.Cloneable",
        objc_class: "NSCopying",
        objc_type: "id<NSCopying>",
        selector_part: "NSCopying",
        foreign_type: "jobject",
    },
];

/// Look up a well-known type by Java qualified name.
pub fn lookup(qualified: &str) -> Option<&'static WellKnownType> {
    WELL_KNOWN_TYPES.iter().find(|t| t.qualified == qualified)
}
