#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz format detection without parsing.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = api_compat::parsers::detect_format(s);
    }
});
