//! Errors of every stage of a generator run.

use std::path::PathBuf;
use thiserror::Error;

/// A location inside a template, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number
    pub line: usize,
    /// Column number, counted in characters
    pub column: usize,
}

impl Position {
    pub(crate) fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Coarse classification of every failure this crate can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A field name contains a character outside of `[a-z$]`
    UnsupportedNameCharacter,
    /// The template is not a sequence of literal text and placeholder calls
    TemplateSyntaxError,
    /// A placeholder calls a function that is not registered for the active flavor
    UndefinedPlaceholder,
    /// A placeholder was called with the wrong arguments
    InvalidArguments,
    /// Reading the template or writing the grammar failed
    IOFailure,
    /// The configuration file could not be loaded
    Config,
}

/// Errors of the name transliterator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The character at `position` has no lexer token
    #[error("unsupported character '{character}' at position {position} in field name \"{name}\"")]
    UnsupportedCharacter {
        /// The offending field name
        name: String,
        /// The character that could not be translated
        character: char,
        /// Index of `character` inside `name`, counted in characters
        position: usize,
    },
}

/// Errors raised by a composition function while it is being called.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// A field name could not be transliterated
    #[error(transparent)]
    Name(#[from] NameError),

    /// The function was called with the wrong number of arguments
    #[error("wrong number of args: want {expected}, got {found}")]
    Arity {
        /// Human readable description of the accepted argument counts
        expected: &'static str,
        /// Number of arguments that were passed
        found: usize,
    },

    /// A type argument does not name a known field type
    #[error("unknown field type \"{0}\"")]
    UnknownFieldType(String),
}

/// Errors that can appear while parsing and expanding a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template could not be parsed
    #[error("syntax error at {position}: {message}")]
    Syntax {
        /// Where parsing failed
        position: Position,
        /// What went wrong
        message: String,
    },

    /// The template calls a function that does not exist
    #[error("{position}: function \"{name}\" not defined")]
    UndefinedPlaceholder {
        /// Name of the missing function
        name: String,
        /// Where the call appears
        position: Position,
    },

    /// A composition function failed
    #[error("{position}: error calling {name}: {source}")]
    Call {
        /// Name of the function that failed
        name: String,
        /// Where the call appears
        position: Position,
        /// The underlying failure
        #[source]
        source: CallError,
    },
}

impl TemplateError {
    pub(crate) fn syntax<S: Into<String>>(position: Position, message: S) -> Self {
        Self::Syntax {
            position,
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TemplateError::Syntax { .. } => ErrorKind::TemplateSyntaxError,
            TemplateError::UndefinedPlaceholder { .. } => ErrorKind::UndefinedPlaceholder,
            TemplateError::Call { source: CallError::Name(_), .. } => ErrorKind::UnsupportedNameCharacter,
            TemplateError::Call { .. } => ErrorKind::InvalidArguments,
        }
    }
}

/// Errors of a complete generator run, one variant per stage.
#[derive(Debug, Error)]
pub enum Error {
    /// The template file could not be read
    #[error("could not load template {}: {source}", .path.display())]
    LoadTemplate {
        /// Path of the template
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The template could not be expanded
    #[error("could not evaluate template {}: {source}", .path.display())]
    Evaluate {
        /// Path of the template
        path: PathBuf,
        /// What went wrong during expansion
        #[source]
        source: TemplateError,
    },

    /// The expanded grammar could not be written
    #[error("could not write grammar {}: {source}", .path.display())]
    WriteOutput {
        /// Path of the output grammar
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is invalid
    #[error("invalid configuration in {}: {msg}", .path.display())]
    Config {
        /// Path of the configuration file
        path: PathBuf,
        /// What went wrong
        msg: String,
    },
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LoadTemplate { .. } | Error::WriteOutput { .. } => ErrorKind::IOFailure,
            Error::Evaluate { source, .. } => source.kind(),
            Error::Config { .. } => ErrorKind::Config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let err = TemplateError::Call {
            name: "named_field_int32".to_string(),
            position: Position::new(1, 1),
            source: CallError::Name(NameError::UnsupportedCharacter {
                name: "a_b".to_string(),
                character: '_',
                position: 1,
            }),
        };
        assert_eq!(err.kind(), ErrorKind::UnsupportedNameCharacter);
        assert_eq!(
            err.to_string(),
            "1:1: error calling named_field_int32: unsupported character '_' at position 1 in field name \"a_b\""
        );

        let err = TemplateError::Call {
            name: "end_document".to_string(),
            position: Position::new(3, 7),
            source: CallError::Arity { expected: "0", found: 1 },
        };
        assert_eq!(err.kind(), ErrorKind::InvalidArguments);

        let err = Error::LoadTemplate {
            path: PathBuf::from("missing.tmpl"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.kind(), ErrorKind::IOFailure);
        assert_eq!(err.to_string(), "could not load template missing.tmpl: not found");
    }
}
