//! Compilation-unit driver.
//!
//! Generates every type of a unit into one builder, in declaration order, and resolves the file name used by `#line`
//! directives.

use std::path::{Component, Path, PathBuf};

use objcgen_model::CompilationUnit;

use super::impl_gen::{GenerateError, GenerationContext, ImplementationGenerator};
use super::source_builder::SourceBuilder;

/// Generate the implementation text of every type in `unit`.
///
/// ## Errors
/// - The first [`GenerateError`] raised by any type; output of the preceding types is discarded.
#[tracing::instrument(skip_all, fields(path = %unit.source_file_path, type_count = unit.types.len()))]
pub fn generate_unit(unit: &CompilationUnit, ctx: GenerationContext<'_>) -> Result<String, GenerateError> {
    let source_file = line_directive_path(&unit.source_file_path, ctx.options.emit_relative_line_directives);
    let mut builder = SourceBuilder::new().with_line_directives(ctx.options.emit_line_directives);
    for ty in &unit.types {
        ImplementationGenerator::new(ty, ctx)
            .with_source_file(&source_file)
            .generate(&mut builder)?;
    }
    Ok(builder.finish())
}

/// The file name written into `#line` directives.
///
/// With `relative`, a path under the working directory is made relative to it; anything else is returned verbatim.
pub fn line_directive_path(path: &str, relative: bool) -> String {
    if !relative {
        return path.to_string();
    }
    match std::env::current_dir() {
        Ok(cwd) => relativize(path, &cwd),
        Err(err) => {
            tracing::debug!(%err, "no working directory, keeping source path");
            path.to_string()
        }
    }
}

/// `path` relative to `cwd` when it lies under it, else `path` unchanged.
///
/// Both paths are normalized lexically (`.` and `..` are folded) and made absolute against `cwd` first.
pub fn relativize(path: &str, cwd: &Path) -> String {
    let base = normalize(cwd);
    let target = normalize(&base.join(path));
    match target.strip_prefix(&base) {
        Ok(rel) => rel.to_string_lossy().into_owned(),
        Err(_) => path.to_string(),
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
