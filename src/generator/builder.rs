use crate::{
    generator::{functions::functions, GrammarGenerator},
    grammar::{Composer, Flavor},
    target::{LengthStrategy, Target},
};

/// The GeneratorBuilder configures a [`GrammarGenerator`].
///
/// Use it like so:
/// ```
/// use bsongen::{GrammarGenerator, grammar::Flavor, target::LengthSymbol};
///
/// let generator = GrammarGenerator::builder()
///     // Select the type catalog and the available placeholders
///     .flavor(Flavor::Legacy)
///     // Use a custom symbol for document length prefixes
///     .length(LengthSymbol::new("length"))
///     .build();
/// ```
pub struct GeneratorBuilder {
    flavor: Flavor,
    length: Box<dyn LengthStrategy + Send + Sync>,
}

impl GeneratorBuilder {
    pub(crate) fn new() -> Self {
        Self {
            flavor: Flavor::default(),
            length: Target::default().strategy(),
        }
    }

    /// Select the flavor of the templates this generator expands. Defaults to [`Flavor::Document`].
    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// Use the length strategy of a built-in `target`. Defaults to [`Target::Java`].
    pub fn target(mut self, target: Target) -> Self {
        self.length = target.strategy();
        self
    }

    /// Use a custom length strategy.
    pub fn length<L>(mut self, length: L) -> Self
    where
        L: LengthStrategy + Send + Sync + 'static,
    {
        self.length = Box::new(length);
        self
    }

    /// Create a [`GrammarGenerator`].
    pub fn build(self) -> GrammarGenerator {
        tracing::debug!(flavor = %self.flavor, length = self.length.length(), "building generator");

        GrammarGenerator {
            functions: functions(self.flavor),
            composer: Composer::new(self.flavor, self.length),
        }
    }
}
