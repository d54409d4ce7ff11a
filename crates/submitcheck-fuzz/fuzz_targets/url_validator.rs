#![no_main]
use libfuzzer_sys::fuzz_target;
use submitcheck_core::url::MAX_URL_LENGTH;
use submitcheck_core::{validate_url, ValidationMode};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for mode in [ValidationMode::NewSubmission, ValidationMode::PullRequest] {
            let outcome = validate_url(s, mode);
            if s.chars().count() > MAX_URL_LENGTH {
                assert!(!outcome.is_valid());
            }
        }
    }
});
