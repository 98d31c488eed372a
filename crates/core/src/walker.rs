//! Walks the generic document tree and extracts endpoints and definitions.
//!
//! Only the top-level `paths` and `definitions` keys are read. Every field is
//! read through [`Node`]'s optional accessors: an optional field that is
//! missing or of the wrong shape keeps its zero value. An operation without
//! `operationId` or `summary` is skipped and recorded as a diagnostic.

use tracing::{debug, warn};

use crate::document::Node;
use crate::error::MissingFieldError;
use crate::model::{Definition, Endpoint, Parameter, ParsedSpec, Property};
use crate::translate::translate;

/// Path-item keys that denote operations.
const HTTP_VERBS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Walk `root` and collect every endpoint and definition it declares.
///
/// Endpoints sharing an OperationID collapse to the one seen last in
/// document order.
pub fn parse(root: &Node) -> ParsedSpec {
    let mut parsed = ParsedSpec::default();

    let Some(sections) = root.as_mapping() else {
        warn!("Document root is not a mapping; nothing to generate.");
        return parsed;
    };

    for (key, value) in sections {
        match key.as_str() {
            "paths" => walk_paths(value, &mut parsed),
            "definitions" => walk_definitions(value, &mut parsed),
            _ => {}
        }
    }

    debug!(
        endpoints = parsed.endpoints.len(),
        definitions = parsed.definitions.len(),
        skipped = parsed.diagnostics.len(),
        "Walked specification document."
    );
    parsed
}

/// Derive tags from a path template.
///
/// Splits on `/` and keeps everything between the leading empty segment and
/// the final two segments, so `/cosmos/bank/v1beta1/balances/{address}`
/// yields `cosmos`, `bank`, `v1beta1`. Paths that are empty, relative, or
/// have fewer than three parts yield no tags.
pub fn derive_tags(path: &str) -> Vec<String> {
    if !path.starts_with('/') {
        return Vec::new();
    }

    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() < 3 {
        return Vec::new();
    }

    parts[1..parts.len() - 2]
        .iter()
        .map(|part| (*part).to_string())
        .collect()
}

fn is_http_verb(key: &str) -> bool {
    HTTP_VERBS.iter().any(|verb| verb.eq_ignore_ascii_case(key))
}

fn walk_paths(paths: &Node, parsed: &mut ParsedSpec) {
    let Some(paths) = paths.as_mapping() else {
        warn!("`paths` is not a mapping; ignored.");
        return;
    };

    for (path, item) in paths {
        let Some(verbs) = item.as_mapping() else {
            debug!(path = %path, "Path item is not a mapping; ignored.");
            continue;
        };
        let tags = derive_tags(path);

        for (verb, operation) in verbs {
            if !is_http_verb(verb) {
                debug!(path = %path, key = %verb, "Ignoring non-operation path key.");
                continue;
            }

            match parse_operation(path, verb, operation, &tags) {
                Ok(endpoint) => {
                    if let Some(previous) = parsed.insert_endpoint(endpoint) {
                        warn!(
                            operation_id = %previous.operation_id,
                            replaced = %format!("{} {}", previous.action, previous.path),
                            "Duplicate operationId; keeping the later operation."
                        );
                    }
                }
                Err(err) => {
                    warn!("{err}");
                    parsed.diagnostics.push(err);
                }
            }
        }
    }
}

fn parse_operation(
    path: &str,
    verb: &str,
    operation: &Node,
    tags: &[String],
) -> Result<Endpoint, MissingFieldError> {
    let action = verb.to_ascii_uppercase();
    let missing = |field| MissingFieldError {
        path: path.to_string(),
        method: action.clone(),
        field,
    };

    let operation_id = operation
        .str_field("operationId")
        .ok_or_else(|| missing("operationId"))?;
    let summary = operation
        .str_field("summary")
        .ok_or_else(|| missing("summary"))?;

    let responses = operation
        .get("responses")
        .and_then(Node::as_mapping)
        .map(|codes| codes.iter().map(|(code, _)| code.clone()).collect())
        .unwrap_or_default();

    let parameters = operation
        .get("parameters")
        .and_then(Node::as_sequence)
        .map(|params| params.iter().filter_map(parse_parameter).collect())
        .unwrap_or_default();

    Ok(Endpoint {
        operation_id: operation_id.to_string(),
        description: summary.to_string(),
        tags: tags.to_vec(),
        action,
        path: path.to_string(),
        responses,
        parameters,
    })
}

fn parse_parameter(node: &Node) -> Option<Parameter> {
    node.as_mapping()?;

    let field = |key| node.str_field(key).unwrap_or_default().to_string();
    Some(Parameter {
        name: field("name").replace('.', "_"),
        description: field("description"),
        required: node.bool_field("required").unwrap_or(false),
        param_type: field("type"),
        format: field("format"),
        location: field("in"),
    })
}

fn walk_definitions(definitions: &Node, parsed: &mut ParsedSpec) {
    let Some(definitions) = definitions.as_mapping() else {
        warn!("`definitions` is not a mapping; ignored.");
        return;
    };

    for (name, definition) in definitions {
        if definition.as_mapping().is_none() {
            debug!(definition = %name, "Definition is not a mapping; ignored.");
            continue;
        }

        let properties = definition
            .get("properties")
            .and_then(Node::as_mapping)
            .map(|props| {
                props
                    .iter()
                    .map(|(prop_name, prop)| Property {
                        name: prop_name.clone(),
                        prop_type: translate(prop.str_field("type").unwrap_or_default()),
                        description: prop.str_field("description").unwrap_or_default().to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        parsed.definitions.push(Definition {
            name: name.clone(),
            def_type: definition.str_field("type").unwrap_or_default().to_string(),
            description: definition
                .str_field("description")
                .unwrap_or_default()
                .to_string(),
            properties,
        });
    }
}
