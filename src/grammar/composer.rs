use itertools::Itertools;

use crate::{
    error::NameError,
    grammar::{
        catalog::{FieldType, Flavor},
        names::{transliterate, NUL_BYTE},
    },
    target::LengthStrategy,
};

/// Builds the grammar fragments for fields and documents.
///
/// A composer is bound to one [`Flavor`], whose type catalog drives
/// [`named_field_any`](Composer::named_field_any), and to one [`LengthStrategy`]
/// that provides the symbol of document length prefixes.
pub struct Composer {
    flavor: Flavor,
    length: Box<dyn LengthStrategy + Send + Sync>,
}

impl Composer {
    /// Create a composer for `flavor` that emits length fields with `length`.
    pub fn new(flavor: Flavor, length: Box<dyn LengthStrategy + Send + Sync>) -> Self {
        Self {
            flavor,
            length,
        }
    }

    /// The active flavor.
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// The symbol of a document length prefix.
    pub fn length(&self) -> &str {
        self.length.length()
    }

    fn named_field_with_type(&self, name: &str, field_type: FieldType) -> Result<String, NameError> {
        Ok(format!("{} {} {}", field_type.tag(), transliterate(name)?, field_type.name()))
    }

    /// A field called `name` whose value may be of any of the given `types`.
    ///
    /// Without types this is the same as [`named_field_any`](Composer::named_field_any).
    /// Multiple types are emitted as an alternation in the given order.
    pub fn named_field(&self, name: &str, types: &[FieldType]) -> Result<String, NameError> {
        match types {
            [] => self.named_field_any(name),
            [field_type] => self.named_field_with_type(name, *field_type),
            _ => {
                let alternatives: Vec<_> = types
                    .iter()
                    .map(|field_type| self.named_field_with_type(name, *field_type))
                    .collect::<Result<_, _>>()?;
                Ok(alternatives.join(" | "))
            },
        }
    }

    /// A parenthesized alternation that matches a field called `name` with a value of
    /// any type in the catalog.
    pub fn named_field_any(&self, name: &str) -> Result<String, NameError> {
        let markers = transliterate(name)?;

        Ok(format!(
            "({})",
            self.flavor
                .catalog()
                .iter()
                .map(|scalar| {
                    let field_type = FieldType::from(*scalar);
                    format!("{} {} {}", field_type.tag(), markers, field_type.name())
                })
                .join(" | ")
        ))
    }

    /// A reference to the predefined `field` rule.
    pub fn field(&self) -> &'static str {
        "field"
    }

    /// A reference to the predefined `any_field_any` rule of the legacy flavor.
    pub fn any_field_any(&self) -> &'static str {
        "any_field_any"
    }

    /// An embedded document field called `name` together with its length prefix.
    pub fn named_field_document(&self, name: &str) -> Result<String, NameError> {
        Ok(format!("{} {}", self.named_field_with_type(name, FieldType::Document)?, self.length()))
    }

    /// The start of a document. Anonymous documents match any name.
    pub fn start_document(&self, name: Option<&str>) -> Result<String, NameError> {
        let name = match name {
            Some(name) => transliterate(name)?,
            None => "name=cstring".to_string(),
        };

        Ok(format!("{} {} {}", FieldType::Document.tag(), name, self.length()))
    }

    /// The start of a document whose type tag has already been matched.
    pub fn start_document_no_type(&self) -> &str {
        self.length()
    }

    /// The end of a document.
    pub fn end_document(&self) -> &'static str {
        NUL_BYTE
    }
}
