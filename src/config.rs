//! Loading generator settings from a JSON file.
//!
//! C-style comments are allowed:
//! ```text
//! {
//!     // "document" or "legacy"
//!     "flavor": "legacy",
//!     "target": "java",
//!     /* overrides the length symbol of the target */
//!     "length_symbol": "length"
//! }
//! ```
//! Every key is optional.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use json_comments::{CommentSettings, StripComments};
use serde::Deserialize;

use crate::{
    error::Error,
    generator::{GeneratorBuilder, GrammarGenerator},
    grammar::Flavor,
    target::{LengthSymbol, Target},
};

/// Settings of a generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Flavor of the template
    pub flavor: Flavor,
    /// Built-in target that provides the length symbol
    pub target: Target,
    /// Custom length symbol, takes precedence over `target`
    pub length_symbol: Option<String>,
}

impl Config {
    /// Load a configuration from the file at `path`.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            msg: e.to_string(),
        })?;

        Self::from_reader(BufReader::new(file)).map_err(|msg| Error::Config {
            path: path.to_path_buf(),
            msg,
        })
    }

    fn from_reader<R: Read>(reader: R) -> Result<Self, String> {
        let reader = StripComments::with_settings(CommentSettings::c_style(), reader);
        serde_json::from_reader(reader).map_err(|e| e.to_string())
    }

    /// A [`GeneratorBuilder`] with these settings applied.
    pub fn builder(&self) -> GeneratorBuilder {
        let builder = GrammarGenerator::builder().flavor(self.flavor);

        match &self.length_symbol {
            Some(symbol) => builder.length(LengthSymbol::new(symbol.clone())),
            None => builder.target(self.target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let config = Config::from_reader(
            r#"{
                // the older grammar
                "flavor": "legacy",
                /* only target */
                "target": "java"
            }"#
            .as_bytes(),
        )
        .unwrap();
        assert_eq!(
            config,
            Config {
                flavor: Flavor::Legacy,
                target: Target::Java,
                length_symbol: None,
            }
        );

        assert_eq!(Config::from_reader("{}".as_bytes()).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid() {
        assert!(Config::from_reader(r#"{"flavor": "wide"}"#.as_bytes()).is_err());
        assert!(Config::from_reader(r#"{"colour": "red"}"#.as_bytes()).is_err());
        assert!(Config::from_reader("{".as_bytes()).is_err());
    }

    #[test]
    fn test_builder() {
        let config = Config {
            flavor: Flavor::Legacy,
            target: Target::Java,
            length_symbol: Some("length".to_string()),
        };
        let generator = config.builder().build();
        assert_eq!(generator.flavor(), Flavor::Legacy);
        assert_eq!(generator.generate("{{ named_start_document \"a\" }}").unwrap(), "TYPE_DOCUMENT A NUL_BYTE length");
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_json("does/not/exist.json").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    }
}
