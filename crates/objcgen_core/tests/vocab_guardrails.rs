use std::collections::HashMap;

use objcgen_core::primitives::{PRIMITIVES, PrimitiveKind};
use objcgen_core::runtime::{self, RUNTIME_HELPERS};
use objcgen_core::selectors::{DEFAULT_INITIALIZER, NUMBER_DESIGNATED_INITIALIZERS};
use objcgen_core::well_known::{self, WELL_KNOWN_TYPES};

#[test]
fn primitive_registry_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, PrimitiveKind> = HashMap::new();

    for (index, info) in PRIMITIVES.iter().enumerate() {
        assert_eq!(info.id as usize, index, "primitive registry out of order at {:?}", info.id);
        assert_eq!(
            PrimitiveKind::from_java_name(info.java),
            Some(info.id),
            "primitive java spelling not resolvable: {}",
            info.java
        );
        assert!(info.objc.starts_with('j'), "scalar typedef must be j-prefixed: {}", info.objc);
        assert_eq!(info.array_class, format!("IOS{}Array", info.suffix));
        assert_eq!(info.foreign_array, format!("{}Array", info.objc));

        for spelling in [info.java, info.objc, info.suffix] {
            if let Some(prev) = seen.insert(spelling, info.id) {
                if prev != info.id {
                    panic!("duplicate primitive spelling {:?}: {:?} and {:?}", spelling, prev, info.id);
                }
            }
        }
    }
}

#[test]
fn runtime_helpers_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, runtime::RuntimeHelperId> = HashMap::new();
    for info in RUNTIME_HELPERS {
        assert_eq!(runtime::as_str(info.id), info.canonical);
        assert!(info.canonical.starts_with("Jre"), "runtime helpers live in the Jre namespace");
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate runtime helper {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn designated_selectors_are_unique_initializers() {
    let mut seen = std::collections::HashSet::new();
    assert!(!NUMBER_DESIGNATED_INITIALIZERS.contains(&DEFAULT_INITIALIZER));
    for selector in NUMBER_DESIGNATED_INITIALIZERS {
        assert!(selector.starts_with("initWith"), "not an initializer selector: {}", selector);
        assert_eq!(selector.matches(':').count(), 1, "numeric initializers take one argument: {}", selector);
        assert!(seen.insert(*selector), "duplicate selector {}", selector);
    }
}

#[test]
fn well_known_types_resolvable() {
    for ty in WELL_KNOWN_TYPES {
        let found = well_known::lookup(ty.qualified).expect("well-known type not resolvable");
        assert_eq!(found.objc_class, ty.objc_class);
        assert!(ty.foreign_type.starts_with('j'));
    }
}
