#![no_main]
use api_compat::parsers::{OpenApiParser, SpecParser};
use libfuzzer_sys::fuzz_target;

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz the OpenAPI parser directly.
///
/// Wraps the input as a `paths` object so that most runs get past the
/// version check and into operation and parameter handling.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let parser = OpenApiParser::new();

        let _ = parser.parse_str(s);

        if s.len() < MAX_WRAPPED_INPUT_LEN {
            let wrapped = format!(
                r#"{{"openapi":"3.0.3","info":{{"title":"fuzz","version":"1"}},"paths":{{{s}}}}}"#,
            );
            let _ = parser.parse_str(&wrapped);
        }
    }
});
