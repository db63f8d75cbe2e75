//! Fluent constructors for building the PHP IR.
//!
//! # Example
//!
//! ```rust
//! use sideways_php_gen::prelude::*;
//!
//! let stmt = Stmt::Expr(Expr::this_call("url", vec![Expr::str("http://x/")]));
//! assert_eq!(render_stmts(&[stmt]), vec!["$this->url(\"http://x/\");"]);
//! ```

use crate::hir::*;
use crate::Result;

/// Expression constructors.
impl Expr {
    /// Create a null literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean literal.
    #[must_use]
    pub const fn bool(v: bool) -> Self {
        Self::Bool(v)
    }

    /// Create an integer literal.
    #[must_use]
    pub const fn int(v: i64) -> Self {
        Self::Int(v)
    }

    /// Create a string literal.
    #[must_use]
    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    /// Create a variable reference, validating the name.
    pub fn var(name: impl Into<String>) -> Result<Self> {
        Ok(Self::Var(Ident::new(name)?))
    }

    /// The `$this` receiver.
    #[must_use]
    pub fn this() -> Self {
        Self::Var(Ident::new_unchecked("this"))
    }

    /// The `$testCase` receiver used inside wait closures.
    #[must_use]
    pub fn test_case() -> Self {
        Self::Var(Ident::new_unchecked("testCase"))
    }

    /// Bare constant reference: `__METHOD__`.
    #[must_use]
    pub fn constant(name: impl Into<String>) -> Self {
        Self::Const(name.into())
    }

    /// Class constant reference: `Class::NAME`.
    #[must_use]
    pub fn class_const(class: impl Into<String>, name: impl Into<String>) -> Self {
        Self::ClassConst {
            class: class.into(),
            name: name.into(),
        }
    }

    /// Property access on this expression: `self->name`.
    #[must_use]
    pub fn prop(self, name: impl Into<String>) -> Self {
        Self::Prop {
            recv: Box::new(self),
            name: name.into(),
        }
    }

    /// Method call on this expression: `self->name(args)`.
    #[must_use]
    pub fn method(self, name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::MethodCall {
            recv: Box::new(self),
            name: name.into(),
            args,
        }
    }

    /// Method call on `$this`.
    #[must_use]
    pub fn this_call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::this().method(name, args)
    }

    /// Function call: `name(args)`.
    #[must_use]
    pub fn func(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::FuncCall {
            name: name.into(),
            args,
        }
    }

    /// Keyed array literal: `array('k' => v, ...)`.
    #[must_use]
    pub fn array(pairs: Vec<(&str, Expr)>) -> Self {
        Self::ArrayLit(
            pairs
                .into_iter()
                .map(|(k, v)| (Some(k.to_string()), v))
                .collect(),
        )
    }

    /// Empty array literal: `array()`.
    #[must_use]
    pub fn empty_array() -> Self {
        Self::ArrayLit(Vec::new())
    }

    /// String concatenation: `self . other`.
    #[must_use]
    pub fn concat(self, other: Expr) -> Self {
        self.binary(BinOp::Concat, other)
    }

    /// Loose equality: `self == other`.
    #[must_use]
    pub fn eq(self, other: Expr) -> Self {
        self.binary(BinOp::Eq, other)
    }

    /// Identity: `self === other`.
    #[must_use]
    pub fn identical(self, other: Expr) -> Self {
        self.binary(BinOp::Identical, other)
    }

    /// Non-identity: `self !== other`.
    #[must_use]
    pub fn not_identical(self, other: Expr) -> Self {
        self.binary(BinOp::NotIdentical, other)
    }

    /// Greater than: `self > other`.
    #[must_use]
    pub fn gt(self, other: Expr) -> Self {
        self.binary(BinOp::Gt, other)
    }

    /// Logical and: `self && other`.
    #[must_use]
    pub fn and(self, other: Expr) -> Self {
        self.binary(BinOp::And, other)
    }

    /// Logical or: `self || other`.
    #[must_use]
    pub fn or(self, other: Expr) -> Self {
        self.binary(BinOp::Or, other)
    }

    /// Logical not: `!self`.
    #[must_use]
    pub fn not(self) -> Self {
        Self::Unary {
            op: UnaryOp::Not,
            operand: Box::new(self),
        }
    }

    fn binary(self, op: BinOp, other: Expr) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(other),
        }
    }
}

/// Statement constructors.
impl Stmt {
    /// Create an expression statement.
    #[must_use]
    pub const fn expr(e: Expr) -> Self {
        Self::Expr(e)
    }

    /// Assign to a local variable, validating the name: `$name = value;`
    pub fn assign_var(name: impl Into<String>, value: Expr) -> Result<Self> {
        Ok(Self::Assign {
            target: Expr::Var(Ident::new(name)?),
            value,
        })
    }

    /// Assign to an arbitrary target expression.
    #[must_use]
    pub const fn assign(target: Expr, value: Expr) -> Self {
        Self::Assign { target, value }
    }

    /// Create an if statement.
    #[must_use]
    pub fn if_then(condition: Expr, then_branch: Vec<Stmt>) -> Self {
        Self::If {
            condition,
            then_branch,
            else_branch: None,
        }
    }

    /// Create an if-else statement.
    #[must_use]
    pub fn if_else(condition: Expr, then_branch: Vec<Stmt>, else_branch: Vec<Stmt>) -> Self {
        Self::If {
            condition,
            then_branch,
            else_branch: Some(else_branch),
        }
    }

    /// Create a try-catch.
    pub fn try_catch(
        body: Vec<Stmt>,
        catch_class: impl Into<String>,
        catch_var: impl Into<String>,
        handler: Vec<Stmt>,
    ) -> Result<Self> {
        Ok(Self::TryCatch {
            body,
            catch_class: catch_class.into(),
            catch_var: Ident::new(catch_var)?,
            handler,
        })
    }

    /// Create a wait-until poll with the given timeout.
    #[must_use]
    pub fn wait_until(body: Vec<Stmt>, timeout_ms: u64) -> Self {
        Self::WaitUntil {
            body,
            timeout_ms,
            use_vars: Vec::new(),
        }
    }

    /// Create a wait-until poll whose closure captures locals.
    pub fn wait_until_capturing(
        body: Vec<Stmt>,
        timeout_ms: u64,
        captures: &[&str],
    ) -> Result<Self> {
        let use_vars = captures
            .iter()
            .map(|name| Ident::new(*name))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::WaitUntil {
            body,
            timeout_ms,
            use_vars,
        })
    }

    /// Create a bare return.
    #[must_use]
    pub const fn ret() -> Self {
        Self::Return(None)
    }

    /// Create a return with value.
    #[must_use]
    pub const fn ret_val(e: Expr) -> Self {
        Self::Return(Some(e))
    }

    /// Create a throw statement.
    #[must_use]
    pub const fn throw(e: Expr) -> Self {
        Self::Throw(e)
    }

    /// Create a comment.
    #[must_use]
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    /// Render a statement behind `//`.
    #[must_use]
    pub fn commented_out(stmt: Stmt) -> Self {
        Self::CommentedOut(Box::new(stmt))
    }
}
