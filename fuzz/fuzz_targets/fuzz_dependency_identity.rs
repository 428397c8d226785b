#![no_main]

use libfuzzer_sys::fuzz_target;
use packagr::domain::value_objects::DependencyPath;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        for line in content.lines() {
            if let Some(dep) = DependencyPath::from_reported(line) {
                let _ = dep.root_pattern(Path::new("/work/api"));
            }
        }
    }
});
