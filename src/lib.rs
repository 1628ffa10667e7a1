//! This library expands grammar templates into ANTLR grammars for the BSON wire format.
//!
//! It consists of
//! - __template__: Parse templates, which are grammar text with embedded `{{ ... }}` placeholders.
//! - __grammar__: The composition functions that emit grammar fragments for field names,
//!   scalar values and nested documents, plus the constant definitions every grammar needs.
//! - __generator__: Evaluate all placeholders of a template and produce the final grammar.
//!
//! ## Getting Started
//! Configure a [`GrammarGenerator`] with a [`Flavor`](grammar::Flavor) and a length strategy
//! and hand it a template:
//! ```
//! use bsongen::{GrammarGenerator, grammar::Flavor, target::Target};
//!
//! let generator = GrammarGenerator::builder()
//!     .flavor(Flavor::Document)
//!     .target(Target::Java)
//!     .build();
//!
//! let grammar = generator.generate("query: {{ start_document \"a\" }}{{ end_document }};").unwrap();
//! assert_eq!(grammar, "query: TYPE_DOCUMENT A NUL_BYTE int32NUL_BYTE;");
//! ```
//! Or let it read and write files with [`GrammarGenerator::generate_file`].
//!
//! ## Flavors
//! - `document`: the five scalar types `decimal128`, `double`, `int32`, `int64` and `string`.
//!   Placeholders: `definitions`, `end_document`, `field`, `length`, `named_field`,
//!   `named_field_any`, `named_field_<type>`, `start_document`, `start_document_no_type`.
//! - `legacy`: the four numeric types.
//!   Placeholders: `any_field_any`, `any_start_document`, `definitions`, `end_document`, `length`,
//!   `named_field_any`, `named_field_document`, `named_field_<type>`, `named_start_document`.

#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod generator;
pub mod grammar;
pub mod target;
pub mod template;

pub use generator::GrammarGenerator;
