//! The single serializer from IR to PHP text.
//!
//! All escaping, quoting and indentation rules live here. Statements render
//! to line vectors so callers can re-indent fragments (template splicing
//! indents every line except the first).

use crate::hir::{BinOp, Expr, PhpFile, PhpMethod, Stmt};

/// One level of indentation in the emitted PHP.
pub const INDENT: &str = "    ";

/// Output line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix `\n`
    #[default]
    Lf,
    /// Windows `\r\n`
    CrLf,
}

impl LineEnding {
    /// Get the terminator string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Escape text for a double-quoted PHP string literal.
///
/// `$` is escaped so recorded text can never be interpolated by PHP at
/// runtime; stored-variable tokens are spliced out before this point.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_single(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Render an expression to PHP source text.
#[must_use]
pub fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::Null => "null".to_string(),
        Expr::Bool(true) => "true".to_string(),
        Expr::Bool(false) => "false".to_string(),
        Expr::Int(n) => n.to_string(),
        Expr::Str(s) => format!("\"{}\"", escape(s)),
        Expr::Var(name) => format!("${name}"),
        Expr::Const(name) => name.clone(),
        Expr::ClassConst { class, name } => format!("{class}::{name}"),
        Expr::Prop { recv, name } => format!("{}->{name}", render_operand(recv, None)),
        Expr::MethodCall { recv, name, args } => {
            format!("{}->{name}({})", render_operand(recv, None), render_args(args))
        }
        Expr::FuncCall { name, args } => format!("{name}({})", render_args(args)),
        Expr::ArrayLit(pairs) => {
            let inner = pairs
                .iter()
                .map(|(key, value)| match key {
                    Some(k) => format!("'{}' => {}", escape_single(k), render_expr(value)),
                    None => render_expr(value),
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("array({inner})")
        }
        Expr::Binary { left, op, right } => format!(
            "{} {} {}",
            render_operand(left, Some(*op)),
            op.as_str(),
            render_operand(right, Some(*op))
        ),
        Expr::Unary { op, operand } => {
            format!("{}{}", op.as_str(), render_operand(operand, None))
        }
    }
}

/// Render a sub-expression, parenthesizing nested operations whose
/// operator differs from the parent's.
fn render_operand(expr: &Expr, parent: Option<BinOp>) -> String {
    let needs_parens = match expr {
        Expr::Binary { op, .. } => parent != Some(*op),
        Expr::Unary { .. } => parent.is_none(),
        _ => false,
    };
    let rendered = render_expr(expr);
    if needs_parens {
        format!("({rendered})")
    } else {
        rendered
    }
}

fn render_args(args: &[Expr]) -> String {
    args.iter()
        .map(render_expr)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render one statement as lines, nested blocks indented one unit deeper.
#[must_use]
pub fn stmt_lines(stmt: &Stmt) -> Vec<String> {
    match stmt {
        Stmt::Expr(e) => vec![format!("{};", render_expr(e))],
        Stmt::Assign { target, value } => {
            vec![format!("{} = {};", render_expr(target), render_expr(value))]
        }
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            let mut lines = vec![format!("if ({}) {{", render_expr(condition))];
            lines.extend(indent_lines(render_stmts(then_branch)));
            if let Some(else_branch) = else_branch {
                lines.push("} else {".to_string());
                lines.extend(indent_lines(render_stmts(else_branch)));
            }
            lines.push("}".to_string());
            lines
        }
        Stmt::TryCatch {
            body,
            catch_class,
            catch_var,
            handler,
        } => {
            let mut lines = vec!["try {".to_string()];
            lines.extend(indent_lines(render_stmts(body)));
            lines.push(format!("}} catch ({catch_class} ${catch_var}) {{"));
            lines.extend(indent_lines(render_stmts(handler)));
            lines.push("}".to_string());
            lines
        }
        Stmt::WaitUntil {
            body,
            timeout_ms,
            use_vars,
        } => {
            let captures = if use_vars.is_empty() {
                String::new()
            } else {
                let vars = use_vars
                    .iter()
                    .map(|v| format!("${v}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(" use ({vars})")
            };
            let mut lines = vec![format!("$this->waitUntil(function($testCase){captures} {{")];
            lines.extend(indent_lines(render_stmts(body)));
            lines.push(format!("}}, {timeout_ms});"));
            lines
        }
        Stmt::Return(None) => vec!["return;".to_string()],
        Stmt::Return(Some(e)) => vec![format!("return {};", render_expr(e))],
        Stmt::Throw(e) => vec![format!("throw {};", render_expr(e))],
        Stmt::Comment(text) => vec![format!("// {text}")],
        Stmt::CommentedOut(inner) => stmt_lines(inner)
            .into_iter()
            .map(|line| format!("//{line}"))
            .collect(),
    }
}

/// Render a statement sequence as flat lines.
#[must_use]
pub fn render_stmts(stmts: &[Stmt]) -> Vec<String> {
    stmts.iter().flat_map(stmt_lines).collect()
}

fn indent_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| {
            if line.is_empty() {
                line
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect()
}

/// Render a method (doc comment, signature, body) as unindented lines.
#[must_use]
pub fn method_lines(method: &PhpMethod) -> Vec<String> {
    let mut lines = Vec::new();
    if !method.doc.is_empty() {
        lines.push("/**".to_string());
        for doc in &method.doc {
            lines.push(format!("* {doc}"));
        }
        lines.push("*/".to_string());
    }
    lines.push(format!("function {}() {{", method.name));
    lines.extend(indent_lines(render_stmts(&method.body)));
    lines.push("}".to_string());
    lines
}

/// Render a complete file.
#[must_use]
pub fn render_file(file: &PhpFile, eol: LineEnding) -> String {
    let mut lines = vec!["<?php".to_string(), "/*".to_string()];
    for header in &file.header {
        lines.push(format!("* {header}"));
    }
    lines.push("*/".to_string());

    if !file.pre_class.is_empty() {
        lines.push(String::new());
        lines.extend(file.pre_class.iter().cloned());
    }
    lines.push(String::new());

    lines.push(format!(
        "class {} extends {} {{",
        file.class.name, file.class.parent
    ));
    lines.push(String::new());

    if !file.class.additional_content.is_empty() {
        for content in &file.class.additional_content {
            lines.push(format!("{INDENT}{content}"));
        }
        lines.push(String::new());
    }

    for method in &file.class.methods {
        lines.extend(indent_lines(method_lines(method)));
        lines.push(String::new());
    }

    lines.push("}".to_string());
    let mut out = lines.join(eol.as_str());
    out.push_str(eol.as_str());
    out
}
