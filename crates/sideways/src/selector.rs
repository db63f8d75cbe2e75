//! Locator string resolution.
//!
//! A recorder locator names exactly one lookup strategy; anything ambiguous
//! or unrecognized is a fatal parse error, never a guess.

use std::sync::OnceLock;

use regex::Regex;
use sideways_php_gen::Expr;

use crate::error::{ConvertError, ConvertResult};
use crate::substitute;

/// Lookup strategy for locating one page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `id=x`
    Id,
    /// `name=x`
    Name,
    /// `css=x`
    Css,
    /// `xpath=x` or a bare `//...`
    XPath,
    /// `link=x`
    LinkText,
}

impl Strategy {
    /// Driver lookup method emitted for this strategy.
    #[must_use]
    pub const fn lookup_method(self) -> &'static str {
        match self {
            Self::Id => "byId",
            Self::Name => "byName",
            Self::Css => "byCssSelector",
            Self::XPath => "byXPath",
            Self::LinkText => "byLinkText",
        }
    }
}

/// A resolved locator: strategy, cleaned-up value, and whether the emitted
/// lookup waits for the element to appear.
///
/// Interactions wait (`click` on a not-yet-rendered element should be
/// retried by the driver); presence and visibility assertions must not
/// block, so they use the non-waiting form.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorExpression {
    /// Lookup strategy
    pub strategy: Strategy,
    /// Strategy-specific selector value
    pub value: String,
    /// Whether the lookup waits for the element
    pub wait: bool,
}

impl SelectorExpression {
    /// Render the element lookup against the given receiver
    /// (`$this` in method bodies, `$testCase` inside wait closures).
    #[must_use]
    pub fn lookup(&self, recv: Expr) -> Expr {
        let mut args = vec![substitute::substitute(&self.value)];
        if self.wait {
            args.push(Expr::bool(true));
        }
        recv.method(self.strategy.lookup_method(), args)
    }
}

fn prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::unwrap_used)]
    RE.get_or_init(|| Regex::new(r"^([a-z]+)=(.+)$").unwrap())
}

fn attribute_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::unwrap_used)]
    RE.get_or_init(|| Regex::new(r"^(.+?)/?@([^@\s]+)$").unwrap())
}

/// Resolve a locator string into a [`SelectorExpression`].
///
/// # Errors
///
/// Returns [`ConvertError::UnknownSelector`] for any syntax outside the
/// closed strategy set.
pub fn resolve(locator: &str, wait: bool) -> ConvertResult<SelectorExpression> {
    if locator.starts_with("//") {
        return Ok(SelectorExpression {
            strategy: Strategy::XPath,
            value: locator.to_string(),
            wait,
        });
    }

    if let Some(caps) = prefix_re().captures(locator) {
        let raw = &caps[2];
        let (strategy, value) = match &caps[1] {
            "id" => (Strategy::Id, raw.to_string()),
            "name" => (Strategy::Name, raw.to_string()),
            "link" => (Strategy::LinkText, raw.to_string()),
            "xpath" => (Strategy::XPath, raw.trim_end_matches('/').to_string()),
            // The recorder sometimes doubles dots in css class chains
            "css" => (Strategy::Css, raw.replace("..", ".")),
            _ => {
                return Err(ConvertError::UnknownSelector {
                    locator: locator.to_string(),
                })
            }
        };
        return Ok(SelectorExpression {
            strategy,
            value,
            wait,
        });
    }

    Err(ConvertError::UnknownSelector {
        locator: locator.to_string(),
    })
}

/// Split an attribute locator (`//div/a/@href`, `css=.link@href`) into the
/// element locator and the attribute name, matching the rightmost `@`.
///
/// Returns `None` when the locator carries no attribute suffix.
#[must_use]
pub fn split_attribute(locator: &str) -> Option<(String, String)> {
    let caps = attribute_re().captures(locator)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}
