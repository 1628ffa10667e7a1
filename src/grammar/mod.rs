//! The building blocks of the generated grammar.
//!
//! - [`names`]: turns field names into the lexer tokens that spell them
//! - [`catalog`]: the scalar types and the flavors that select a type catalog
//! - [`Composer`]: builds the fragments for fields and documents
//! - [`definitions`](definitions()): the constant rules every grammar needs
//!
//! ```
//! use bsongen::grammar::{Composer, FieldType, Flavor, ScalarType};
//! use bsongen::target::Java;
//!
//! let composer = Composer::new(Flavor::Document, Box::new(Java));
//! let fragment = composer.named_field("$eq", &[FieldType::from(ScalarType::Int64)]).unwrap();
//! assert_eq!(fragment, "TYPE_INT64 DOLLAR E Q NUL_BYTE int64");
//! ```

pub mod catalog;
pub mod names;
mod composer;
mod definitions;

pub use catalog::{FieldType, Flavor, ScalarType};
pub use composer::Composer;
pub use definitions::definitions;
