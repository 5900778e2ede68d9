#![no_main]

use libfuzzer_sys::fuzz_target;
use patchlint::services::diff::decode_path;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = decode_path(text);
    }
});
