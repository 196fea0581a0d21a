//! Runtime helper vocabulary for static storage access.
//!
//! Static fields are read and written through small runtime functions whenever plain loads/stores would break the
//! runtime's guarantees: volatile fields need atomic access, and retained references need the static-assign helpers
//! under manual reference counting. This module turns the (volatility, primitiveness, scope, counting) key into a
//! symbolic helper instead of concatenating strings at the call site.
//!
//! ## Notes
//!
//! - Helper families that are keyed by type (`JreLoadVolatile*`, `JreAssignVolatile*`) take a [`TypeSuffix`].
//! - Selection precedence: volatility first, then reference counting, then direct access.

use std::fmt;

use super::primitives::PrimitiveKind;

/// Stable identifier for a runtime helper family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeHelperId {
    LoadVolatile,
    AssignVolatile,
    VolatileStaticAssign,
    VolatileStrongAssign,
    StaticAssign,
}

/// Metadata for a runtime helper family.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeHelperInfo {
    pub id: RuntimeHelperId,
    /// Function name, or the name prefix for suffixed families.
    pub canonical: &'static str,
    /// Whether the family is completed by a [`TypeSuffix`].
    pub suffixed: bool,
    pub description: &'static str,
}

/// Registry of runtime helper families.
pub const RUNTIME_HELPERS: &[RuntimeHelperInfo] = &[
    RuntimeHelperInfo {
        id: RuntimeHelperId::LoadVolatile,
        canonical: "JreLoadVolatile",
        suffixed: true,
        description: "Atomic load of a volatile static.",
    },
    RuntimeHelperInfo {
        id: RuntimeHelperId::AssignVolatile,
        canonical: "JreAssignVolatile",
        suffixed: true,
        description: "Atomic store into a volatile primitive static.",
    },
    RuntimeHelperInfo {
        id: RuntimeHelperId::VolatileStaticAssign,
        canonical: "JreVolatileStaticAssign",
        suffixed: false,
        description: "Atomic retaining store into a volatile static-scoped reference.",
    },
    RuntimeHelperInfo {
        id: RuntimeHelperId::VolatileStrongAssign,
        canonical: "JreVolatileStrongAssign",
        suffixed: false,
        description: "Atomic retaining store into a volatile strong reference.",
    },
    RuntimeHelperInfo {
        id: RuntimeHelperId::StaticAssign,
        canonical: "JreStaticAssign",
        suffixed: false,
        description: "Retaining store into a static reference under manual reference counting.",
    },
];

/// Return the registry entry for a helper family.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: RuntimeHelperId) -> &'static RuntimeHelperInfo {
    RUNTIME_HELPERS
        .iter()
        .find(|h| h.id == id)
        .expect("runtime helper info missing")
}

/// Return the canonical spelling (or prefix) for a helper family.
pub fn as_str(id: RuntimeHelperId) -> &'static str {
    info_for(id).canonical
}

/// Type suffix appended to keyed helper families: the capitalized primitive name, or `Id` for references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeSuffix {
    Primitive(PrimitiveKind),
    Id,
}

impl TypeSuffix {
    pub fn for_type(primitive: Option<PrimitiveKind>) -> Self {
        match primitive {
            Some(kind) => TypeSuffix::Primitive(kind),
            None => TypeSuffix::Id,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeSuffix::Primitive(kind) => kind.suffix(),
            TypeSuffix::Id => "Id",
        }
    }
}

impl fmt::Display for TypeSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a static accessor reads its storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadHelper {
    /// `JreLoadVolatile<Suffix>(&var)`
    Volatile(TypeSuffix),
    /// `var`
    Direct,
}

impl LoadHelper {
    pub fn select(is_volatile: bool, primitive: Option<PrimitiveKind>) -> Self {
        if is_volatile {
            LoadHelper::Volatile(TypeSuffix::for_type(primitive))
        } else {
            LoadHelper::Direct
        }
    }

    /// Render the load expression for `var`.
    pub fn render(self, var: &str) -> String {
        match self {
            LoadHelper::Volatile(suffix) => format!("{}{}(&{})", as_str(RuntimeHelperId::LoadVolatile), suffix, var),
            LoadHelper::Direct => var.to_string(),
        }
    }
}

/// Lookup key for [`StoreHelper::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreKey {
    pub is_volatile: bool,
    /// `None` for reference types.
    pub primitive: Option<PrimitiveKind>,
    /// Whether the storage itself is static-scoped.
    pub is_static: bool,
    /// Whether manual reference counting is in effect.
    pub reference_counting: bool,
}

/// How a static setter writes its storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreHelper {
    /// `JreAssignVolatile<Suffix>(&var, value)`
    AssignVolatile(TypeSuffix),
    /// `JreVolatileStaticAssign(&var, value)`
    VolatileStaticAssign,
    /// `JreVolatileStrongAssign(&var, value)`
    VolatileStrongAssign,
    /// `JreStaticAssign(&var, value)`
    StaticAssign,
    /// `var = value`
    Direct,
}

impl StoreHelper {
    pub fn select(key: StoreKey) -> Self {
        match (key.is_volatile, key.primitive, key.is_static, key.reference_counting) {
            (true, Some(kind), _, _) => StoreHelper::AssignVolatile(TypeSuffix::Primitive(kind)),
            (true, None, true, _) => StoreHelper::VolatileStaticAssign,
            (true, None, false, _) => StoreHelper::VolatileStrongAssign,
            (false, None, _, true) => StoreHelper::StaticAssign,
            (false, _, _, _) => StoreHelper::Direct,
        }
    }

    /// The helper function name, or `None` for a direct assignment.
    pub fn function_name(self) -> Option<String> {
        match self {
            StoreHelper::AssignVolatile(suffix) => Some(format!("{}{}", as_str(RuntimeHelperId::AssignVolatile), suffix)),
            StoreHelper::VolatileStaticAssign => Some(as_str(RuntimeHelperId::VolatileStaticAssign).to_string()),
            StoreHelper::VolatileStrongAssign => Some(as_str(RuntimeHelperId::VolatileStrongAssign).to_string()),
            StoreHelper::StaticAssign => Some(as_str(RuntimeHelperId::StaticAssign).to_string()),
            StoreHelper::Direct => None,
        }
    }

    /// Render the store statement (without trailing `;`) writing `value` into `var`.
    pub fn render(self, var: &str, value: &str) -> String {
        match self.function_name() {
            Some(func) => format!("{}(&{}, {})", func, var, value),
            None => format!("{} = {}", var, value),
        }
    }
}
