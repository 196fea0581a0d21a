//! Source builder - accumulates generated Objective-C text
//!
//! Besides plain text, the builder keeps the output mapped back to the Java source through `#line` directives when
//! they are enabled.

use std::fmt::Write;

/// Spaces per brace level in re-indented bodies.
const INDENT_WIDTH: usize = 2;

/// The last `#line` directive written: the Java line it names and the output line it applies to.
#[derive(Debug, Clone, Copy)]
struct LineMark {
    java_line: u32,
    output_line: usize,
}

/// A buffer for building Objective-C source with brace-aware re-indentation
#[derive(Debug, Default)]
pub struct SourceBuilder {
    buffer: String,
    /// Whether `sync_*` calls write `#line` directives
    emit_line_directives: bool,
    last_mark: Option<LineMark>,
}

impl SourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable `#line` directives.
    pub fn with_line_directives(mut self, enabled: bool) -> Self {
        self.emit_line_directives = enabled;
        self
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Write text without newline
    pub fn print(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    /// Write text followed by a newline
    pub fn println(&mut self, s: &str) {
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write formatted text
    pub fn printf(&mut self, args: std::fmt::Arguments<'_>) {
        // Writing into a String cannot fail.
        let _ = self.buffer.write_fmt(args);
    }

    /// Write a newline
    pub fn newline(&mut self) {
        self.buffer.push('\n');
    }

    /// 1-based number of the output line being written.
    pub fn current_line(&self) -> usize {
        self.buffer.matches('\n').count() + 1
    }

    /// Strip the indentation of `code` and indent it again by brace depth.
    ///
    /// `#line` directives stay in column 0, blank lines stay empty, and the result has no trailing newline.
    pub fn reindent(&self, code: &str) -> String {
        let mut indent: usize = 0;
        let mut out = String::with_capacity(code.len());
        for (i, raw) in code.lines().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let line = raw.trim();
            if line.starts_with('}') {
                indent = indent.saturating_sub(INDENT_WIDTH);
            }
            if !line.is_empty() && !line.starts_with("#line") {
                out.extend(std::iter::repeat_n(' ', indent));
            }
            out.push_str(line);
            if line.ends_with('{') {
                indent += INDENT_WIDTH;
            }
        }
        out
    }

    /// Map the following output to line 1 of `file_name`.
    pub fn sync_filename(&mut self, file_name: &str) {
        if !self.emit_line_directives {
            return;
        }
        self.start_line();
        self.printf(format_args!("#line 1 \"{}\"\n", file_name));
        self.mark(1);
    }

    /// Map the following output to `line` of the current file.
    ///
    /// Line `0` is unknown and never synced. Nothing is written when the output line being written already maps to
    /// `line` under the last directive.
    pub fn sync_line(&mut self, line: u32) {
        if !self.emit_line_directives || line == 0 || self.mapped_line() == Some(line) {
            return;
        }
        self.start_line();
        self.printf(format_args!("#line {}\n", line));
        self.mark(line);
    }

    /// Java line that the output line being written maps to, counting the lines written since the last directive.
    fn mapped_line(&self) -> Option<u32> {
        let mark = self.last_mark?;
        let drift = self.current_line().checked_sub(mark.output_line)?;
        u32::try_from(drift).ok().map(|drift| mark.java_line.saturating_add(drift))
    }

    fn mark(&mut self, java_line: u32) {
        self.last_mark = Some(LineMark {
            java_line,
            output_line: self.current_line(),
        });
    }

    /// Directives must start a line.
    fn start_line(&mut self) {
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
    }
}
