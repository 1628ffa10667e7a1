//! The template expansion engine.
//!
//! Use it like so:
//! ```
//! use bsongen::{GrammarGenerator, grammar::Flavor};
//!
//! let generator = GrammarGenerator::builder()
//!     .flavor(Flavor::Legacy)
//!     .build();
//!
//! let grammar = generator.generate("value: {{ named_field_int32 \"foo\" }};").unwrap();
//! assert_eq!(grammar, "value: TYPE_INT32 F O O NUL_BYTE int32;");
//! ```
//! Every action of the template is evaluated exactly once, from left to right,
//! and nested calls are evaluated before the call that uses their result.
//! The first failure aborts the whole expansion.

mod builder;
mod functions;

pub use builder::GeneratorBuilder;

use std::fs;
use std::io::Write;
use std::path::Path;

use ahash::AHashMap;
use itertools::Itertools;
use tempfile::NamedTempFile;

use crate::{
    error::{Error, TemplateError},
    generator::functions::Function,
    grammar::{Composer, Flavor},
    template::{Argument, Call, Node, Template},
};

/// Expands grammar templates.
///
/// The generator holds no state besides its configuration, so it can expand any
/// number of templates, also from multiple threads at once.
pub struct GrammarGenerator {
    composer: Composer,
    functions: AHashMap<String, Function>,
}

impl GrammarGenerator {
    /// Start configuring a new generator.
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// The flavor this generator was built for.
    pub fn flavor(&self) -> Flavor {
        self.composer.flavor()
    }

    /// Names of all functions a template may call, sorted.
    pub fn registered(&self) -> Vec<&str> {
        self.functions.keys().map(String::as_str).sorted().collect()
    }

    fn evaluate(&self, call: &Call) -> Result<String, TemplateError> {
        let function = self.functions.get(call.name()).ok_or_else(|| TemplateError::UndefinedPlaceholder {
            name: call.name().to_string(),
            position: call.position(),
        })?;

        let mut args = Vec::with_capacity(call.args().len());

        for arg in call.args() {
            match arg {
                Argument::Literal(value) => args.push(value.clone()),
                Argument::Call(inner) => args.push(self.evaluate(inner)?),
            }
        }

        tracing::debug!(name = call.name(), ?args, "calling placeholder");

        function(&self.composer, &args).map_err(|source| TemplateError::Call {
            name: call.name().to_string(),
            position: call.position(),
            source,
        })
    }

    /// Expand `template` into a grammar.
    pub fn generate(&self, template: &str) -> Result<String, TemplateError> {
        let template = Template::parse(template)?;
        let mut output = String::new();
        let mut actions = 0;

        for node in template.nodes() {
            match node {
                Node::Text(text) => output.push_str(text),
                Node::Action(call) => {
                    output.push_str(&self.evaluate(call)?);
                    actions += 1;
                },
            }
        }

        tracing::debug!(actions, bytes = output.len(), "expanded template");
        Ok(output)
    }

    /// Read the template at `input`, expand it and write the grammar to `output`.
    ///
    /// The output file is only replaced after the expansion succeeded.
    pub fn generate_file<P, Q>(&self, input: P, output: Q) -> Result<(), Error>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let input = input.as_ref();
        let output = output.as_ref();

        let template = fs::read_to_string(input).map_err(|source| Error::LoadTemplate {
            path: input.to_path_buf(),
            source,
        })?;

        let grammar = self.generate(&template).map_err(|source| Error::Evaluate {
            path: input.to_path_buf(),
            source,
        })?;

        write_atomically(output, grammar.as_bytes()).map_err(|source| Error::WriteOutput {
            path: output.to_path_buf(),
            source,
        })?;

        tracing::info!(input = %input.display(), output = %output.display(), "wrote grammar");
        Ok(())
    }
}

fn write_atomically(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file().set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
