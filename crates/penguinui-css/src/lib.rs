//! A small, editable stylesheet tree.
//!
//! Just enough of a CSS object model to find at-rules and style rules, read
//! and append declarations, insert comments and remove nodes, then print the
//! result back out. Selectors, at-rule params and declaration values are kept
//! as raw text; nothing here validates CSS.

mod parser;
mod printer;
mod tree;

pub use tree::{NodeId, NodeKind, Stylesheet};
