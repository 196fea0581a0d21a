//! Naming helpers shared by the name table.

/// Package prefix of the runtime's own annotation and marker types.
///
/// Interfaces in this package never have an initialization routine.
pub const INTRINSIC_PACKAGE_PREFIX: &str = "com.google.j2objc.";

/// Identifiers that cannot be used verbatim as Objective-C selectors, accessors or local names.
pub const RESERVED_NAMES: &[&str] = &[
    // C keywords that are not Java keywords
    "auto", "extern", "inline", "register", "restrict", "signed", "sizeof", "struct", "typedef", "union", "unsigned",
    // Objective-C keywords and well-known types
    "id", "in", "inout", "out", "bycopy", "byref", "oneway", "nil", "Nil", "YES", "NO", "BOOL", "SEL", "IMP", "Class",
    // NSObject methods a static accessor would clash with
    "alloc", "autorelease", "class", "copy", "dealloc", "description", "hash", "init", "isa", "new", "release",
    "retain", "retainCount", "self", "superclass", "zone",
];

/// Check whether an identifier needs escaping in emitted code.
pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// Check whether a qualified type name belongs to the runtime's intrinsic package.
pub fn is_intrinsic_type(qualified_name: &str) -> bool {
    qualified_name.starts_with(INTRINSIC_PACKAGE_PREFIX)
}

/// Uppercase the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Camel-case a dotted package name: `com.example.util` → `ComExampleUtil`.
pub fn camel_case_package(package: &str) -> String {
    package.split('.').filter(|s| !s.is_empty()).map(capitalize).collect()
}

/// Split a qualified name into its package and the chain of class segments.
///
/// Segments starting with a lowercase letter are treated as package segments, so `com.example.Outer.Inner` splits
/// into `("com.example", ["Outer", "Inner"])`.
pub fn split_qualified_name(qualified_name: &str) -> (String, Vec<&str>) {
    let segments: Vec<&str> = qualified_name.split('.').collect();
    let first_class = segments
        .iter()
        .position(|s| s.chars().next().is_some_and(|c| c.is_uppercase()))
        .unwrap_or(segments.len().saturating_sub(1));
    let package = segments[..first_class].join(".");
    (package, segments[first_class..].to_vec())
}

/// Mangle an identifier for a JNI symbol name.
///
/// `.` and `/` become `_`; `_`, `;` and `[` are escaped as `_1`, `_2`, `_3`; non-alphanumeric or non-ASCII characters
/// become `_0xxxx`.
pub fn mangle_jni(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '.' | '/' => out.push('_'),
            '_' => out.push_str("_1"),
            ';' => out.push_str("_2"),
            '[' => out.push_str("_3"),
            c if c.is_ascii_alphanumeric() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("_0{:04x}", unit));
                }
            }
        }
    }
    out
}
