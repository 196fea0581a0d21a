//! Statement and expression rendering.
//!
//! Bodies reach the implementation generator as model trees; a [`StatementGenerator`] turns them into Objective-C
//! text. The generator only splices that text, re-indenting it to the surrounding nesting level.

use objcgen_model::{Expression, Statement};

/// Renders statements and expressions to target text.
pub trait StatementGenerator {
    /// Render a statement. `current_line` is the output line the text will start on.
    fn generate_statement(&self, stmt: &Statement, current_line: usize) -> String;

    /// Render an expression.
    fn generate_expression(&self, expr: &Expression) -> String;
}

/// Reference statement generator for bodies that were lowered by the front end.
///
/// Indentation is not significant in its output; callers re-indent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeStatementGenerator;

impl NativeStatementGenerator {
    pub fn new() -> Self {
        Self
    }

    fn write_statement(&self, stmt: &Statement, out: &mut String) {
        match stmt {
            Statement::Block(stmts) => {
                out.push_str("{\n");
                for inner in stmts {
                    self.write_statement(inner, out);
                }
                out.push_str("}\n");
            }
            Statement::Native(code) => {
                out.push_str(code.trim_end());
                out.push('\n');
            }
            Statement::Expression(expr) => {
                out.push_str(&self.generate_expression(expr));
                out.push_str(";\n");
            }
            Statement::Return(None) => out.push_str("return;\n"),
            Statement::Return(Some(expr)) => {
                out.push_str("return ");
                out.push_str(&self.generate_expression(expr));
                out.push_str(";\n");
            }
        }
    }
}

impl StatementGenerator for NativeStatementGenerator {
    fn generate_statement(&self, stmt: &Statement, _current_line: usize) -> String {
        let mut out = String::new();
        self.write_statement(stmt, &mut out);
        out
    }

    fn generate_expression(&self, expr: &Expression) -> String {
        match expr {
            Expression::Native(code) => code.clone(),
            Expression::StringLiteral(value) => format!("@\"{}\"", escape_string(value)),
            Expression::NumberLiteral(spelling) => spelling.clone(),
            Expression::BooleanLiteral(true) => "true".to_string(),
            Expression::BooleanLiteral(false) => "false".to_string(),
            Expression::Null => "nil".to_string(),
        }
    }
}

/// Escape a string for an Objective-C string literal.
fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
