#![no_main]

use libfuzzer_sys::fuzz_target;
use patchlint::services::diff::DiffParser;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = DiffParser::parse(text);
    }
});
