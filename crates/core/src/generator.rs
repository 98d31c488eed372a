//! Sequential load → parse → emit → write pipeline.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::codegen::Emitter;
use crate::config::GeneratorConfig;
use crate::document::{self, Node};
use crate::error::{GenerateError, LoadError, MissingFieldError, WriteError};
use crate::model::ParsedSpec;
use crate::walker;
use crate::writer;

/// Records and text produced from one document.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Everything the walker extracted.
    pub spec: ParsedSpec,
    /// The assembled output file.
    pub source: String,
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Where the output was written.
    pub output: PathBuf,
    /// Size of the output in bytes.
    pub bytes: usize,
    /// Number of generated functions.
    pub endpoints: usize,
    /// Number of parsed (not emitted) definitions.
    pub definitions: usize,
    /// Operations that were skipped.
    pub diagnostics: Vec<MissingFieldError>,
}

/// Runs the generation pipeline for one configuration.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator for `config`.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator runs with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Load the configured input document.
    pub fn load(&self) -> Result<Node, LoadError> {
        document::load(&self.config.input)
    }

    /// Walk `root` and assemble the output text.
    pub fn render(&self, root: &Node) -> Rendered {
        let spec = walker::parse(root);
        let source = Emitter::new(&self.config).assemble(&spec);
        debug!(
            endpoints = spec.endpoints.len(),
            bytes = source.len(),
            "Assembled SDK source."
        );
        Rendered { spec, source }
    }

    /// Write rendered text to the configured output.
    pub fn write(&self, rendered: &Rendered) -> Result<GenerateReport, WriteError> {
        let bytes = writer::write(&self.config.output, &rendered.source)?;
        Ok(GenerateReport {
            output: self.config.output.clone(),
            bytes,
            endpoints: rendered.spec.endpoints.len(),
            definitions: rendered.spec.definitions.len(),
            diagnostics: rendered.spec.diagnostics.clone(),
        })
    }

    /// Load, render and write in one go. Nothing is written if loading fails.
    pub fn run(&self) -> Result<GenerateReport, GenerateError> {
        info!(input = %self.config.input.display(), "Generating SDK.");
        let root = self.load()?;
        let rendered = self.render(&root);
        Ok(self.write(&rendered)?)
    }
}

/// Render the output text for an already loaded document.
pub fn generate_source(root: &Node, config: &GeneratorConfig) -> String {
    Emitter::new(config).assemble(&walker::parse(root))
}
