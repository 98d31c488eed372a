//! Go SDK code generation.
//!
//! The pipeline is:
//! 1. Build: `ParsedSpec` -> `SdkFile` (naming, ordering, doc wrapping)
//! 2. Emit: `SdkFile` -> `String` (via the `Emit` trait)
//!
//! ## Module Structure
//!
//! - `fragments`: the named pieces of the output file
//! - `emit`: fragment -> Go text
//! - `utils`: wrapping, identifier sanitizing, string quoting

mod emit;
mod fragments;
mod utils;

use std::collections::HashSet;

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::model::{Endpoint, Parameter, ParsedSpec};
use crate::translate::translate;

pub use emit::{Emit, GENERATED_BANNER};
pub use fragments::{
    Bridge, Contract, DocLine, EntryPoint, GO_IMPORTS, GoFunction, GoParam, Header,
    RuntimeHelpers, SdkFile, Signature,
};
pub use utils::{quote_go, sanitize_go_identifier, split_by_size};

/// Builds the generated file from parsed records.
#[derive(Debug, Clone, Copy)]
pub struct Emitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> Emitter<'a> {
    /// Create an emitter for `config`.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Build every fragment of the output file.
    ///
    /// Endpoints are emitted in lexicographic OperationID order, so the same
    /// input always produces the same text.
    pub fn build(&self, spec: &ParsedSpec) -> SdkFile {
        let functions: Vec<GoFunction> = spec
            .endpoints
            .values()
            .map(|endpoint| self.function(endpoint))
            .collect();

        let contract = Contract {
            signatures: functions.iter().map(|f| f.signature.clone()).collect(),
        };

        debug!(functions = functions.len(), "Built SDK fragments.");

        SdkFile {
            header: Header {
                package: self.config.package_name.clone(),
            },
            contract,
            functions,
            bridge: Bridge {
                sdk_name: self.config.sdk_name.clone(),
            },
            helpers: RuntimeHelpers {
                sdk_version: self.config.sdk_version.clone(),
            },
            entry: EntryPoint {
                sdk_name: self.config.sdk_name.clone(),
            },
        }
    }

    /// Build and emit the complete output text.
    pub fn assemble(&self, spec: &ParsedSpec) -> String {
        self.build(spec).emit()
    }

    /// Build the function fragment for one endpoint.
    pub fn function(&self, endpoint: &Endpoint) -> GoFunction {
        let name = format!("{}{}", self.config.function_prefix, endpoint.operation_id);
        let width = self.config.wrap_width();
        let params = go_params(&endpoint.parameters);

        let mut doc = vec![DocLine::Text(name.clone())];
        doc.extend(
            split_by_size(&endpoint.description, width)
                .into_iter()
                .map(DocLine::Text),
        );
        doc.push(DocLine::Text(format!("Method: {}", endpoint.action)));
        doc.push(DocLine::Text(format!("Path: {}", endpoint.path)));

        if params.is_empty() {
            doc.push(DocLine::Text("Parameters: none".to_string()));
        } else {
            doc.push(DocLine::Text("Parameters:".to_string()));
            for (param, go_param) in endpoint.parameters.iter().zip(&params) {
                let mut chunks = split_by_size(&param.description, width).into_iter();
                doc.push(DocLine::Param {
                    name: go_param.name.clone(),
                    text: chunks.next().unwrap_or_default(),
                });
                doc.extend(chunks.map(DocLine::Continued));
            }
        }

        GoFunction {
            signature: Signature { name, params },
            doc,
            host: self.config.api_host.clone(),
            path: endpoint.path.clone(),
        }
    }
}

/// Map parameters to Go identifiers and types, keeping names unique.
fn go_params(parameters: &[Parameter]) -> Vec<GoParam> {
    let mut seen = HashSet::new();
    parameters
        .iter()
        .enumerate()
        .map(|(position, param)| {
            let base = sanitize_go_identifier(&param.name, position);
            let mut name = base.clone();
            let mut suffix = position;
            while !seen.insert(name.clone()) {
                name = format!("{base}_{suffix}");
                suffix += 1;
            }
            GoParam {
                name,
                ty: translate(&param.param_type),
            }
        })
        .collect()
}
