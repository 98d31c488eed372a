//! Text helpers shared by the fragment builders.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::DEFAULT_LINE_LENGTH;

/// Names a generated parameter must not take. Besides Go keywords and
/// predeclared identifiers this covers every name a generated body refers to.
static GO_RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
        // predeclared
        "any",
        "bool",
        "byte",
        "comparable",
        "complex64",
        "complex128",
        "error",
        "float32",
        "float64",
        "int",
        "int8",
        "int16",
        "int32",
        "int64",
        "rune",
        "string",
        "uint",
        "uint8",
        "uint16",
        "uint32",
        "uint64",
        "uintptr",
        "true",
        "false",
        "iota",
        "nil",
        "append",
        "cap",
        "clear",
        "close",
        "complex",
        "copy",
        "delete",
        "imag",
        "len",
        "make",
        "max",
        "min",
        "new",
        "panic",
        "print",
        "println",
        "real",
        "recover",
        // generated file scope
        "sdk",
        "result",
        "err",
        "fmt",
        "json",
        "http",
        "io",
        "strings",
        "js",
        "makeRequest",
        "PrettyPrint",
        "SDKVersion",
        "SDK_VERSION",
    ]
    .into_iter()
    .collect()
});

/// Split `s` into chunks of at most `chunk_size` characters.
///
/// Tabs and newlines are removed first. Every chunk but the last is exactly
/// `chunk_size` characters long. A `chunk_size` of `0` selects
/// [`DEFAULT_LINE_LENGTH`]. Input that is empty after stripping yields no chunks.
pub fn split_by_size(s: &str, chunk_size: usize) -> Vec<String> {
    let chunk_size = if chunk_size == 0 {
        DEFAULT_LINE_LENGTH
    } else {
        chunk_size
    };

    let chars: Vec<char> = s.chars().filter(|c| !matches!(c, '\t' | '\n')).collect();
    chars
        .chunks(chunk_size)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Make `name` usable as a Go identifier.
///
/// Characters other than ASCII alphanumerics and `_` become `_`, a leading
/// digit gets a `_` prefix, reserved words get a `_` suffix and an empty name
/// becomes `param{position}`.
pub fn sanitize_go_identifier(name: &str, position: usize) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.is_empty() {
        return format!("param{position}");
    }

    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }

    if GO_RESERVED_WORDS.contains(ident.as_str()) {
        ident.push('_');
    }

    ident
}

/// Quote `s` as a Go interpreted string literal.
pub fn quote_go(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", u32::from(c))),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}
