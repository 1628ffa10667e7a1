//! The scalar types and the flavors that select which of them a grammar alternates over.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::Deserialize;

/// The scalar BSON types the generator can alternate over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// 128-bit IEEE 754 decimal
    Decimal128,
    /// 64-bit IEEE 754 float
    Double,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// Length-prefixed UTF-8 string
    String,
}

impl ScalarType {
    /// Name of the grammar rule that matches a value of this type.
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::Decimal128 => "decimal128",
            ScalarType::Double => "double",
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::String => "string",
        }
    }
}

const NARROW_CATALOG: [ScalarType; 4] = [
    ScalarType::Decimal128,
    ScalarType::Double,
    ScalarType::Int32,
    ScalarType::Int64,
];

const WIDE_CATALOG: [ScalarType; 5] = [
    ScalarType::Decimal128,
    ScalarType::Double,
    ScalarType::Int32,
    ScalarType::Int64,
    ScalarType::String,
];

/// The type of a field as it can be requested by a template.
/// Besides the scalars a field may hold an embedded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// A scalar value
    Scalar(ScalarType),
    /// An embedded document; its grammar rule is expected to be written in the template
    Document,
}

impl FieldType {
    /// Name of the grammar rule that matches a value of this type.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Scalar(scalar) => scalar.name(),
            FieldType::Document => "document",
        }
    }

    /// The lexer token of the type-tag byte.
    pub fn tag(&self) -> String {
        format!("TYPE_{}", self.name().to_ascii_uppercase())
    }
}

impl From<ScalarType> for FieldType {
    fn from(scalar: ScalarType) -> Self {
        FieldType::Scalar(scalar)
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "document" {
            return Ok(FieldType::Document);
        }

        WIDE_CATALOG
            .iter()
            .find(|scalar| scalar.name() == s)
            .map(|scalar| FieldType::Scalar(*scalar))
            .ok_or_else(|| s.to_string())
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name())
    }
}

/// Selects the type catalog and the set of placeholders a template may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    /// Five scalar types including `string`, with explicit document support
    #[default]
    Document,
    /// The older four-type catalog built around `any_field_any`
    Legacy,
}

impl Flavor {
    /// The ordered type catalog of this flavor.
    pub fn catalog(&self) -> &'static [ScalarType] {
        match self {
            Flavor::Document => &WIDE_CATALOG,
            Flavor::Legacy => &NARROW_CATALOG,
        }
    }
}

impl Display for Flavor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Flavor::Document => write!(f, "document"),
            Flavor::Legacy => write!(f, "legacy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs() {
        let names: Vec<_> = Flavor::Document.catalog().iter().map(ScalarType::name).collect();
        assert_eq!(names, ["decimal128", "double", "int32", "int64", "string"]);

        let names: Vec<_> = Flavor::Legacy.catalog().iter().map(ScalarType::name).collect();
        assert_eq!(names, ["decimal128", "double", "int32", "int64"]);
    }

    #[test]
    fn test_field_type() {
        assert_eq!("int64".parse::<FieldType>(), Ok(FieldType::Scalar(ScalarType::Int64)));
        assert_eq!("document".parse::<FieldType>(), Ok(FieldType::Document));
        assert_eq!("int16".parse::<FieldType>(), Err("int16".to_string()));
        assert_eq!(FieldType::Scalar(ScalarType::Decimal128).tag(), "TYPE_DECIMAL128");
        assert_eq!(FieldType::Document.tag(), "TYPE_DOCUMENT");
    }
}
