//! The template frontend.
//!
//! A template is plain grammar text with embedded actions:
//! ```text
//! find: {{ start_document }} {{ named_field "filter" "document" }} {{ end_document }};
//! ```
//! Every action calls exactly one function. Arguments are string literals
//! (`"..."` or `` `...` ``) or parenthesized calls. `{{/* ... */}}` is a comment
//! and `{{- ` / ` -}}` trim the whitespace around an action.
//! There are no variables, pipelines, conditionals or loops, and calls nest at
//! most 32 levels deep.

mod parser;

use crate::error::{Position, TemplateError};

/// A call of a composition function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    name: String,
    args: Vec<Argument>,
    position: Position,
}

impl Call {
    pub(crate) fn new(name: String, args: Vec<Argument>, position: Position) -> Self {
        Self {
            name,
            args,
            position,
        }
    }

    /// Name of the called function.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments in the order they were written.
    pub fn args(&self) -> &[Argument] {
        &self.args
    }

    /// Where the function name appears in the template.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// An argument of a [`Call`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// A string literal with escapes already resolved
    Literal(String),
    /// A nested call whose result becomes the argument
    Call(Call),
}

/// A top-level piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text that is copied verbatim into the output
    Text(String),
    /// A placeholder that is replaced by the result of its call
    Action(Call),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parse `input`. Nothing is evaluated yet.
    pub fn parse(input: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            nodes: parser::parse(input)?,
        })
    }

    /// The nodes in template order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}
