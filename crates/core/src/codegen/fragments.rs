//! Named fragments of the generated Go file.
//!
//! Each fragment is a plain value; turning it into text is the job of the
//! [`Emit`](super::Emit) trait. [`SdkFile`] fixes the order in which the
//! fragments appear in the output.

/// Packages imported by every generated file.
pub const GO_IMPORTS: [&str; 6] = [
    "encoding/json",
    "fmt",
    "io",
    "net/http",
    "strings",
    "syscall/js",
];

/// Build constraint, generated-file banner, package clause and imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Package clause of the generated file.
    pub package: String,
}

/// A parameter in a generated signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoParam {
    /// Go identifier.
    pub name: String,
    /// Go type.
    pub ty: String,
}

/// Method name plus parameter list, shared by the contract and the function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Method name: prefix + OperationID.
    pub name: String,
    /// Parameters in declaration order.
    pub params: Vec<GoParam>,
}

/// The `SDKInterface` declaration and the `SDK` type implementing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contract {
    /// One entry per endpoint, in emission order.
    pub signatures: Vec<Signature>,
}

/// One line of a generated doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocLine {
    /// `// text`
    Text(String),
    /// `//\tname: text`, the first line describing a parameter.
    Param {
        /// Parameter name.
        name: String,
        /// First chunk of the parameter description, may be empty.
        text: String,
    },
    /// `//\t\ttext`, a continuation of a parameter description.
    Continued(String),
}

/// One generated method calling the request helper for a single endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoFunction {
    /// Name and parameters.
    pub signature: Signature,
    /// Doc comment above the function.
    pub doc: Vec<DocLine>,
    /// Host passed to the request helper.
    pub host: String,
    /// Path template passed to the request helper.
    pub path: String,
}

/// Version query exported to the JavaScript host and its registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bridge {
    /// Name reported by the version query.
    pub sdk_name: String,
}

/// Request helper, value dumper and version formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeHelpers {
    /// Version reported by the version formatter.
    pub sdk_version: String,
}

/// `main`: registers the bridge and blocks forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    /// Name printed in the ready/exited log lines.
    pub sdk_name: String,
}

/// The whole generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkFile {
    /// Emitted first.
    pub header: Header,
    /// Emitted second.
    pub contract: Contract,
    /// One per endpoint, lexicographic by OperationID.
    pub functions: Vec<GoFunction>,
    /// Emitted after the functions.
    pub bridge: Bridge,
    /// Emitted after the bridge.
    pub helpers: RuntimeHelpers,
    /// Emitted last.
    pub entry: EntryPoint,
}
