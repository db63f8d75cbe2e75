//! Typed PHP statement IR for the sideways converter.
//!
//! The converter never concatenates raw output text; every emitted command
//! builds IR values that one serializer ([`render`]) turns into
//! `PHPUnit_Extensions_Selenium2TestCase` PHP. Escaping and quoting rules
//! exist in exactly one place.
//!
//! ## Example
//!
//! ```rust
//! use sideways_php_gen::prelude::*;
//!
//! let stmts = vec![
//!     Stmt::assign_var("input", Expr::this_call("byId", vec![Expr::str("user"), Expr::bool(true)])).unwrap(),
//!     Stmt::expr(Expr::var("input").unwrap().method("clear", vec![])),
//! ];
//! assert_eq!(
//!     render_stmts(&stmts),
//!     vec!["$input = $this->byId(\"user\", true);", "$input->clear();"]
//! );
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod error;
mod hir;
pub mod render;

pub use error::{PhpGenError, Result};
pub use hir::{BinOp, Expr, Ident, PhpClass, PhpFile, PhpMethod, Stmt, UnaryOp};
pub use render::{
    escape, method_lines, render_expr, render_file, render_stmts, stmt_lines, LineEnding, INDENT,
};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::hir::{BinOp, Expr, Ident, PhpClass, PhpFile, PhpMethod, Stmt, UnaryOp};
    pub use crate::render::{
        escape, method_lines, render_expr, render_file, render_stmts, stmt_lines, LineEnding,
        INDENT,
    };
    pub use crate::{PhpGenError, Result};
}
