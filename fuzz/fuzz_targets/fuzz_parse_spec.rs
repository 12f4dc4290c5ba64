#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the main parsing entry point.
///
/// `parse_spec_str` runs format detection and dispatches to the canonical
/// or OpenAPI parser, so every detection heuristic is reachable from here.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = api_compat::parsers::parse_spec_str(s);
    }
});
