//! Type references.

pub use objcgen_core::primitives::PrimitiveKind;
use objcgen_core::well_known::JAVA_LANG_STRING;

/// Reference to another declared type (superclass or implemented interface).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    /// Java qualified name (`com.example.Base`).
    pub qualified_name: String,
    /// Set when the front end could not resolve the type; such references never get initialization calls.
    pub unresolved: bool,
}

impl TypeName {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            unresolved: false,
        }
    }

    pub fn unresolved(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            unresolved: true,
        }
    }
}

/// The declared type of a field, parameter or return value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Void,
    Primitive(PrimitiveKind),
    /// A class type, by qualified name.
    Class(String),
    /// An interface type, by qualified name.
    Interface(String),
    Array(Box<TypeRef>),
}

impl TypeRef {
    pub fn class(qualified_name: impl Into<String>) -> Self {
        TypeRef::Class(qualified_name.into())
    }

    pub fn interface(qualified_name: impl Into<String>) -> Self {
        TypeRef::Interface(qualified_name.into())
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    /// `java.lang.String`
    pub fn string() -> Self {
        TypeRef::Class(JAVA_LANG_STRING.to_string())
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }

    /// Object types: classes, interfaces and arrays.
    pub fn is_reference(&self) -> bool {
        matches!(self, TypeRef::Class(_) | TypeRef::Interface(_) | TypeRef::Array(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, TypeRef::Class(name) if name == JAVA_LANG_STRING)
    }

    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            TypeRef::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }
}
