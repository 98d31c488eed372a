//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable holding a plain level or a full filter spec.
const LOG_ENV: &str = "WASM_SDK_LOG";

pub(crate) fn init_tracing() {
    // WASM_SDK_LOG: "trace", "debug", "info", "warn", "error"
    // or a full tracing filter spec like "wasm_sdk_core=debug"
    let filter = filter_spec(std::env::var(LOG_ENV).ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn filter_spec(env: Option<&str>) -> String {
    match env {
        Some(level) if is_plain_level(level) => scoped(level),
        Some(spec) => spec.to_string(),
        None => scoped("info"),
    }
}

fn scoped(level: &str) -> String {
    format!("wasm_sdk={level},wasm_sdk_core={level}")
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_spec() {
        assert_eq!(filter_spec(None), "wasm_sdk=info,wasm_sdk_core=info");
        assert_eq!(filter_spec(Some("debug")), "wasm_sdk=debug,wasm_sdk_core=debug");
        assert_eq!(filter_spec(Some("WARN")), "wasm_sdk=WARN,wasm_sdk_core=WARN");
        assert_eq!(filter_spec(Some("wasm_sdk_core=trace")), "wasm_sdk_core=trace");
    }
}
