//! Generate Go/WebAssembly client SDK stubs from an OpenAPI (Swagger 2.0) document.
//!
//! The pipeline is a single synchronous batch:
//! 1. Load: file bytes -> [`Node`] tree ([`document`])
//! 2. Walk: [`Node`] -> endpoints and definitions ([`walker`])
//! 3. Emit: records -> Go source text ([`codegen`])
//! 4. Write: text -> output file ([`writer`])
//!
//! [`Generator`] runs all four stages for a [`GeneratorConfig`].

pub mod codegen;
pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod model;
pub mod translate;
pub mod walker;
pub mod writer;

pub use config::GeneratorConfig;
pub use document::Node;
pub use error::{ConfigError, GenerateError, LoadError, MissingFieldError, WriteError};
pub use generator::{GenerateReport, Generator, Rendered, generate_source};
pub use model::{Definition, Endpoint, Parameter, ParsedSpec, Property};
