//! End-to-end tests: document on disk -> generated Go file on disk.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wasm_sdk_core::{
    GenerateError, Generator, GeneratorConfig, document::from_yaml_str, generate_source,
};

const TWO_PATHS_YAML: &str = r"
swagger: '2.0'
paths:
  /cosmos/staking/v1beta1/validators:
    post:
      operationId: StakingValidators
      summary: Validators queries all validators that match the given status.
      parameters:
        - name: status
          in: query
          type: string
        - name: pagination.offset
          in: query
          type: integer
  /cosmos/bank/v1beta1/balances/{address}:
    get:
      operationId: BankAllBalances
      summary: AllBalances queries the balance of all coins for a single account.
      parameters:
        - name: address
          in: path
          required: true
          type: string
definitions:
  Coin:
    type: object
    properties:
      denom:
        type: string
";

fn config_in(dir: &Path) -> GeneratorConfig {
    GeneratorConfig {
        input: dir.join("openapi.yml"),
        output: dir.join("out").join("sdk.go"),
        ..GeneratorConfig::default()
    }
}

fn contract_lines(source: &str) -> Vec<&str> {
    source
        .lines()
        .skip_while(|line| *line != "type SDKInterface interface {")
        .skip(1)
        .take_while(|line| *line != "}")
        .map(str::trim)
        .collect()
}

#[test]
fn test_two_operations_yield_two_functions_in_order() {
    let root = from_yaml_str(TWO_PATHS_YAML).unwrap();
    let source = generate_source(&root, &GeneratorConfig::default());

    assert_eq!(source.matches("func (sdk *SDK) ").count(), 2);
    assert_eq!(
        contract_lines(&source),
        [
            "callBankAllBalances(address string)",
            "callStakingValidators(status string, pagination_offset int64)",
        ]
    );

    let bank = source.find("func (sdk *SDK) callBankAllBalances").unwrap();
    let staking = source.find("func (sdk *SDK) callStakingValidators").unwrap();
    assert!(bank < staking);
}

#[test]
fn test_output_is_reproducible() {
    let config = GeneratorConfig::default();
    let first = generate_source(&from_yaml_str(TWO_PATHS_YAML).unwrap(), &config);
    let second = generate_source(&from_yaml_str(TWO_PATHS_YAML).unwrap(), &config);
    assert_eq!(first, second);
}

#[test]
fn test_generated_file_layout() {
    let source = generate_source(
        &from_yaml_str(TWO_PATHS_YAML).unwrap(),
        &GeneratorConfig::default(),
    );

    assert!(source.starts_with("//go:build js && wasm\n"));
    assert!(source.contains("// Code generated by wasm-sdk. DO NOT EDIT.\n"));
    assert!(source.contains(
        "makeRequest(\"http://localhost:1317\", \"/cosmos/bank/v1beta1/balances/{address}\")"
    ));
    assert!(source.contains("// Method: POST\n// Path: /cosmos/staking/v1beta1/validators\n"));
    assert!(source.contains("//\tpagination_offset\n"));
    assert!(source.ends_with("fmt.Println(SDKVersion(\"COSM-SDK\"), \"exited\")\n}\n"));
    // Definitions are parsed but not emitted.
    assert!(!source.contains("Coin"));
}

#[test]
fn test_run_writes_output_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("openapi.yml"), TWO_PATHS_YAML).unwrap();
    let config = config_in(dir.path());

    let report = Generator::new(config.clone()).run().unwrap();

    let written = fs::read_to_string(&config.output).unwrap();
    assert_eq!(report.output, config.output);
    assert_eq!(report.bytes, written.len());
    assert_eq!(report.endpoints, 2);
    assert_eq!(report.definitions, 1);
    assert!(report.diagnostics.is_empty());
    assert_eq!(
        written,
        generate_source(&from_yaml_str(TWO_PATHS_YAML).unwrap(), &config)
    );
}

#[test]
fn test_skipped_operations_are_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("openapi.yml"),
        "paths:\n  /a/b/c:\n    get:\n      summary: no id\n",
    )
    .unwrap();

    let report = Generator::new(config_in(dir.path())).run().unwrap();
    assert_eq!(report.endpoints, 0);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].field, "operationId");
}

#[test]
fn test_load_failure_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());

    let err = Generator::new(config.clone()).run().unwrap_err();
    assert!(matches!(err, GenerateError::Load(_)));
    assert!(!config.output.exists());
}
