//! Layering guardrails for the workspace crates.
//!
//! `objcgen_core` is the leaf vocabulary crate and must stay dependency-free; `objcgen_model` may depend on it but
//! never on the generator crate. These tests scan the manifests' `[dependencies]` tables.

/// Dependency names listed in the `[dependencies]` table of a manifest.
fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut deps = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            deps.push(name.trim().to_string());
        }
    }
    deps
}

#[test]
fn core_vocabulary_has_no_dependencies() {
    let deps = dependencies(include_str!("../crates/objcgen_core/Cargo.toml"));
    assert!(deps.is_empty(), "objcgen_core must stay dependency-free, found {:?}", deps);
}

#[test]
fn model_does_not_depend_on_generator() {
    let deps = dependencies(include_str!("../crates/objcgen_model/Cargo.toml"));
    assert!(deps.contains(&"objcgen_core".to_string()));
    assert!(
        !deps.iter().any(|d| d == "objcgen"),
        "objcgen_model must not depend on the generator crate"
    );
}
