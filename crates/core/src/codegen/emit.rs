//! Go code emission via the Emit trait.
//!
//! Every fragment implements `Emit`; [`SdkFile`] concatenates them in their
//! fixed order. Emission is purely mechanical: all decisions (naming,
//! ordering, wrapping) are made when the fragments are built.

use super::fragments::{
    Bridge, Contract, DocLine, EntryPoint, GO_IMPORTS, GoFunction, GoParam, Header,
    RuntimeHelpers, SdkFile, Signature,
};
use super::utils::quote_go;

/// Banner recognised by Go tooling as marking a generated file.
pub const GENERATED_BANNER: &str = "Code generated by wasm-sdk. DO NOT EDIT.";

/// Trait for emitting Go source from fragments.
pub trait Emit {
    /// Convert the fragment to its Go source text.
    fn emit(&self) -> String;
}

// =============================================================================
// Header & contract
// =============================================================================

impl Emit for Header {
    fn emit(&self) -> String {
        let mut output = String::new();
        output.push_str("//go:build js && wasm\n");
        output.push_str("// +build js,wasm\n\n");
        output.push_str(&format!("// {GENERATED_BANNER}\n\n"));
        output.push_str(&format!("package {}\n\n", self.package));
        output.push_str("import (\n");
        for import in GO_IMPORTS {
            output.push_str(&format!("\t\"{import}\"\n"));
        }
        output.push_str(")\n");
        output
    }
}

impl Emit for GoParam {
    fn emit(&self) -> String {
        format!("{} {}", self.name, self.ty)
    }
}

impl Emit for Signature {
    fn emit(&self) -> String {
        let params = self
            .params
            .iter()
            .map(Emit::emit)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", self.name, params)
    }
}

impl Emit for Contract {
    fn emit(&self) -> String {
        let mut output = String::from("// SDKInterface is the interface for the SDK\n");
        output.push_str("type SDKInterface interface {\n");
        for signature in &self.signatures {
            output.push_str(&format!("\t{}\n", signature.emit()));
        }
        output.push_str("}\n\n");
        output.push_str("// SDK implements SDKInterface against a REST endpoint.\n");
        output.push_str("type SDK struct{}\n\n");
        output.push_str("var _ SDKInterface = (*SDK)(nil)\n");
        output
    }
}

// =============================================================================
// Per-endpoint functions
// =============================================================================

impl Emit for DocLine {
    fn emit(&self) -> String {
        match self {
            DocLine::Text(text) if text.is_empty() => "//\n".to_string(),
            DocLine::Text(text) => format!("// {text}\n"),
            DocLine::Param { name, text } if text.is_empty() => format!("//\t{name}\n"),
            DocLine::Param { name, text } => format!("//\t{name}: {text}\n"),
            DocLine::Continued(text) => format!("//\t\t{text}\n"),
        }
    }
}

impl Emit for GoFunction {
    fn emit(&self) -> String {
        let name = &self.signature.name;
        let mut output = String::new();

        for line in &self.doc {
            output.push_str(&line.emit());
        }

        output.push_str(&format!("func (sdk *SDK) {} {{\n", self.signature.emit()));
        output.push_str(&format!(
            "\tresult, err := makeRequest({}, {})\n",
            quote_go(&self.host),
            quote_go(&self.path)
        ));
        output.push_str("\tif err != nil {\n");
        output.push_str(&format!("\t\tfmt.Println({}, err)\n", quote_go(&format!("{name}:"))));
        output.push_str("\t\treturn\n");
        output.push_str("\t}\n");
        output.push_str("\tfmt.Println(PrettyPrint(result))\n");
        output.push_str("}\n");
        output
    }
}

// =============================================================================
// Fixed boilerplate
// =============================================================================

const BRIDGE_TEMPLATE: &str = r#"// jsSDKVersion exposes SDKVersion to the JavaScript host.
func jsSDKVersion(this js.Value, args []js.Value) interface{} {
	return SDKVersion($SDK_NAME)
}

// ExportJS registers the SDK functions with the JavaScript host.
func ExportJS() {
	js.Global().Set("SDKVersion", js.FuncOf(jsSDKVersion))
}
"#;

const HELPERS_TEMPLATE: &str = r#"// SDK_VERSION is the version reported by SDKVersion.
const SDK_VERSION = $SDK_VERSION

// makeRequest performs a GET request against host+path and decodes the JSON body.
func makeRequest(host string, path string) (map[string]interface{}, error) {
	resp, err := http.Get(host + path)
	if err != nil {
		return nil, err
	}
	defer resp.Body.Close()

	if resp.StatusCode != http.StatusOK {
		return nil, fmt.Errorf("unexpected status: %s", resp.Status)
	}

	contentType := resp.Header.Get("Content-Type")
	if !strings.HasPrefix(contentType, "application/json") {
		return nil, fmt.Errorf("unexpected content type: %s", contentType)
	}

	body, err := io.ReadAll(resp.Body)
	if err != nil {
		return nil, err
	}

	var result map[string]interface{}
	if err := json.Unmarshal(body, &result); err != nil {
		return nil, err
	}
	return result, nil
}

// PrettyPrint is used to display any value nicely in the log output.
func PrettyPrint(v interface{}) string {
	b, err := json.MarshalIndent(v, "", "  ")
	if err != nil {
		return ""
	}
	return fmt.Sprintf("Dump of [%T]:\n%s\n", v, string(b))
}

// SDKVersion formats the SDK name and version.
func SDKVersion(name string) string {
	return fmt.Sprintf("%s v%s", name, SDK_VERSION)
}
"#;

const ENTRY_TEMPLATE: &str = r#"func main() {
	// Nothing ever sends on c: main blocks so the host can keep calling in.
	c := make(chan bool)

	ExportJS()
	fmt.Println(SDKVersion($SDK_NAME), "ready")

	<-c

	fmt.Println(SDKVersion($SDK_NAME), "exited")
}
"#;

impl Emit for Bridge {
    fn emit(&self) -> String {
        BRIDGE_TEMPLATE.replace("$SDK_NAME", &quote_go(&self.sdk_name))
    }
}

impl Emit for RuntimeHelpers {
    fn emit(&self) -> String {
        HELPERS_TEMPLATE.replace("$SDK_VERSION", &quote_go(&self.sdk_version))
    }
}

impl Emit for EntryPoint {
    fn emit(&self) -> String {
        ENTRY_TEMPLATE.replace("$SDK_NAME", &quote_go(&self.sdk_name))
    }
}

// =============================================================================
// File
// =============================================================================

impl Emit for SdkFile {
    fn emit(&self) -> String {
        let mut output = self.header.emit();

        output.push('\n');
        output.push_str(&self.contract.emit());

        for function in &self.functions {
            output.push('\n');
            output.push_str(&function.emit());
        }

        for fragment in [self.bridge.emit(), self.helpers.emit(), self.entry.emit()] {
            output.push('\n');
            output.push_str(&fragment);
        }

        output
    }
}

// =============================================================================
// Tests
// =============================================================================
