#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing, validation and warning collection must never panic
        let _ = packagr::config::parse_with_warnings(content, Path::new("packagr.json"));
    }
});
