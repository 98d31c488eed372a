//! Typed records extracted from the OpenAPI document.
//!
//! Records are built by the walker and never mutated afterwards; they are the
//! only input the code emitter sees.

use std::collections::BTreeMap;

use crate::error::MissingFieldError;

/// One HTTP verb bound to one path template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    /// Unique key of the endpoint, e.g. `CosmosBankV1Beta1AllBalances`.
    pub operation_id: String,
    /// Operation summary, used as the doc comment of the generated function.
    pub description: String,
    /// Path segments used as tags, see [`crate::walker::derive_tags`].
    pub tags: Vec<String>,
    /// Upper-cased HTTP verb.
    pub action: String,
    /// Raw path template, may contain `{param}` placeholders.
    pub path: String,
    /// Declared response status codes, in document order.
    pub responses: Vec<String>,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
}

/// A single operation parameter. Missing fields keep their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name with `.` replaced by `_`.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Whether the parameter must be supplied.
    pub required: bool,
    /// Specification-level type, untranslated (`integer`, `array`, ...).
    pub param_type: String,
    /// Format hint, e.g. `uint64` or `byte`.
    pub format: String,
    /// Location tag: `query`, `path`, `body` or `header`.
    pub location: String,
}

/// A named data shape from the `definitions` section.
///
/// Parsed and kept, but not emitted into the generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    /// Key of the definition in the document.
    pub name: String,
    /// Declared type, usually `object`.
    pub def_type: String,
    /// Free-text description.
    pub description: String,
    /// Properties in document order.
    pub properties: Vec<Property>,
}

/// One property of a [`Definition`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Translated (Go) type.
    pub prop_type: String,
    /// Free-text description.
    pub description: String,
}

/// Result of walking a document.
#[derive(Debug, Clone, Default)]
pub struct ParsedSpec {
    /// Endpoints keyed by OperationID. Iteration order is lexicographic.
    pub endpoints: BTreeMap<String, Endpoint>,
    /// Definitions in document order.
    pub definitions: Vec<Definition>,
    /// Operations that were skipped, with the reason.
    pub diagnostics: Vec<MissingFieldError>,
}

impl ParsedSpec {
    /// Insert an endpoint, replacing any earlier endpoint with the same OperationID.
    ///
    /// Returns the replaced endpoint, if any.
    pub fn insert_endpoint(&mut self, endpoint: Endpoint) -> Option<Endpoint> {
        self.endpoints
            .insert(endpoint.operation_id.clone(), endpoint)
    }
}
