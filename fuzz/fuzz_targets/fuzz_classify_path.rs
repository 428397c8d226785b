#![no_main]

use libfuzzer_sys::fuzz_target;
use packagr::domain::services::PathClassifier;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // First line is the compiled-sources pattern, the rest are paths
        let mut lines = content.lines();
        let pattern = lines.next().unwrap_or_default();
        let classifier = PathClassifier::for_compiled_sources(pattern);
        for path in lines {
            let _ = classifier.destination(path);
        }
    }
});
