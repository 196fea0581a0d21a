//! Generator options
//!
//! Mirrors the translator flags that change implementation output. Options are passed explicitly into every
//! generation call; nothing is read from global state.

/// Memory-management model of the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemoryManagement {
    /// Manual retain/release.
    #[default]
    ReferenceCounting,
    /// Automatic reference counting.
    Arc,
    /// Garbage collected runtime.
    Gc,
}

impl MemoryManagement {
    /// Whether static reference stores must go through the retaining helpers.
    pub fn uses_reference_counting(self) -> bool {
        matches!(self, MemoryManagement::ReferenceCounting)
    }
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Synthesize class-method getters/setters for static fields
    pub static_accessor_methods: bool,
    /// Memory-management model
    pub memory_management: MemoryManagement,
    /// Pass mutable reference parameters of functions as local copies
    pub const_ref_args: bool,
    /// Suppress `J2OBJC_NAME_MAPPING` directives
    pub strip_name_mapping: bool,
    /// Emit `#line` directives mapping output back to the Java source
    pub emit_line_directives: bool,
    /// Make `#line` file names relative to the working directory
    pub emit_relative_line_directives: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            static_accessor_methods: false,
            memory_management: MemoryManagement::ReferenceCounting,
            const_ref_args: false,
            strip_name_mapping: false,
            emit_line_directives: false,
            emit_relative_line_directives: false,
        }
    }
}

impl GeneratorOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_static_accessor_methods(mut self, enabled: bool) -> Self {
        self.static_accessor_methods = enabled;
        self
    }

    pub fn with_memory_management(mut self, model: MemoryManagement) -> Self {
        self.memory_management = model;
        self
    }

    pub fn with_const_ref_args(mut self, enabled: bool) -> Self {
        self.const_ref_args = enabled;
        self
    }

    pub fn with_strip_name_mapping(mut self, enabled: bool) -> Self {
        self.strip_name_mapping = enabled;
        self
    }

    /// Enable `#line` directives; `relative` also makes their file names relative to the working directory.
    pub fn with_line_directives(mut self, enabled: bool, relative: bool) -> Self {
        self.emit_line_directives = enabled;
        self.emit_relative_line_directives = relative;
        self
    }
}
