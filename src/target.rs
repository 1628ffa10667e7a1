//! Target-specific pieces of the generated grammar.
//!
//! The only thing that differs between target languages is the grammar symbol
//! used for the 4-byte length prefix of a document. A [`LengthStrategy`] is
//! handed to the generator once and never changes afterwards.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Deserialize;

/// Supplies the grammar symbol of a document length field.
pub trait LengthStrategy {
    /// The symbol that matches a length prefix.
    fn length(&self) -> &str;
}

/// Length fields of grammars that get compiled into a Java parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct Java;

impl LengthStrategy for Java {
    fn length(&self) -> &str {
        "int32"
    }
}

/// An arbitrary, user-chosen length symbol.
#[derive(Debug, Clone)]
pub struct LengthSymbol(String);

impl LengthSymbol {
    /// Use `symbol` verbatim as the length field.
    pub fn new<S: Into<String>>(symbol: S) -> Self {
        Self(symbol.into())
    }
}

impl LengthStrategy for LengthSymbol {
    fn length(&self) -> &str {
        &self.0
    }
}

/// The built-in targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// See [`Java`]
    #[default]
    Java,
}

impl Target {
    /// The length strategy of this target.
    pub fn strategy(&self) -> Box<dyn LengthStrategy + Send + Sync> {
        match self {
            Target::Java => Box::new(Java),
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Target::Java => write!(f, "java"),
        }
    }
}
