#![no_main]

use libfuzzer_sys::fuzz_target;
use patchlint::services::extractor::PatchExtractor;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let extractor = PatchExtractor::new(true);
        let _ = extractor.extract(text);
    }
});
