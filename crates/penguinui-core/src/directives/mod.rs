//! Handlers for the `@package` and `@use` at-rules.
//!
//! Each handler consumes one directive node: it may insert a diagnostic
//! comment in front of it and append declarations to the enclosing rule, and
//! it always removes the directive itself.

mod expander;
mod registrar;

pub use expander::{UsedRules, expand};
pub use registrar::register;

use penguinui_constants::COMMENT_PREFIX;
use penguinui_css::{NodeId, Stylesheet};

/// Whitespace-separated tokens of a directive's params.
fn tokens(sheet: &Stylesheet, directive: NodeId) -> Vec<String> {
    sheet
        .params(directive)
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn annotate(sheet: &mut Stylesheet, directive: NodeId, text: &str) {
    sheet.insert_comment_before(directive, &format!("{COMMENT_PREFIX} {text}"));
}
