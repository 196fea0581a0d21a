//! Primitive type vocabulary.
//!
//! Each Java primitive maps to a fixed set of spellings in the target runtime: the `j`-prefixed scalar typedef, the
//! capitalized suffix used by volatile helpers and selectors, and the array classes on both sides of the JNI boundary.

/// Stable identifier for a Java primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

/// Spellings for one primitive type.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveInfo {
    pub id: PrimitiveKind,
    /// Java keyword (`int`).
    pub java: &'static str,
    /// Runtime scalar typedef (`jint`); also the JNI type.
    pub objc: &'static str,
    /// Capitalized suffix (`Int`) used by `JreLoadVolatileInt` and `withInt:`.
    pub suffix: &'static str,
    /// Runtime array class (`IOSIntArray`).
    pub array_class: &'static str,
    /// JNI array type (`jintArray`).
    pub foreign_array: &'static str,
}

const fn info(
    id: PrimitiveKind,
    java: &'static str,
    objc: &'static str,
    suffix: &'static str,
    array_class: &'static str,
    foreign_array: &'static str,
) -> PrimitiveInfo {
    PrimitiveInfo {
        id,
        java,
        objc,
        suffix,
        array_class,
        foreign_array,
    }
}

/// Registry of all primitive types.
pub const PRIMITIVES: &[PrimitiveInfo] = &[
    info(
        PrimitiveKind::Boolean,
        "boolean",
        "jboolean",
        "Boolean",
        "IOSBooleanArray",
        "jbooleanArray",
    ),
    info(PrimitiveKind::Byte, "byte", "jbyte", "Byte", "IOSByteArray", "jbyteArray"),
    info(PrimitiveKind::Char, "char", "jchar", "Char", "IOSCharArray", "jcharArray"),
    info(PrimitiveKind::Short, "short", "jshort", "Short", "IOSShortArray", "jshortArray"),
    info(PrimitiveKind::Int, "int", "jint", "Int", "IOSIntArray", "jintArray"),
    info(PrimitiveKind::Long, "long", "jlong", "Long", "IOSLongArray", "jlongArray"),
    info(PrimitiveKind::Float, "float", "jfloat", "Float", "IOSFloatArray", "jfloatArray"),
    info(
        PrimitiveKind::Double,
        "double",
        "jdouble",
        "Double",
        "IOSDoubleArray",
        "jdoubleArray",
    ),
];

impl PrimitiveKind {
    /// Resolve a Java keyword to a primitive kind.
    pub fn from_java_name(name: &str) -> Option<Self> {
        PRIMITIVES.iter().find(|p| p.java == name).map(|p| p.id)
    }

    /// Return the registry entry for this primitive.
    pub fn info(self) -> &'static PrimitiveInfo {
        // Indexed by declaration order; the guardrail test keeps the table and the enum aligned.
        &PRIMITIVES[self as usize]
    }

    pub fn java_name(self) -> &'static str {
        self.info().java
    }

    pub fn objc_type(self) -> &'static str {
        self.info().objc
    }

    pub fn suffix(self) -> &'static str {
        self.info().suffix
    }

    pub fn array_class(self) -> &'static str {
        self.info().array_class
    }

    pub fn foreign_array_type(self) -> &'static str {
        self.info().foreign_array
    }
}

/// Scalar spelling used when a value must be stored as a plain word: the primitive typedef, or `id` for references.
///
/// Volatile storage is declared as `volatile_<this>`.
pub fn storage_word(primitive: Option<PrimitiveKind>) -> &'static str {
    primitive.map(PrimitiveKind::objc_type).unwrap_or("id")
}
