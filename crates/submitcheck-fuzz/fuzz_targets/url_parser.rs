#![no_main]
use libfuzzer_sys::fuzz_target;
use submitcheck_core::parse_repo_url;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(repo) = parse_repo_url(s) {
            // Segments never carry the delimiter
            assert!(!repo.owner().is_empty() && !repo.owner().contains('/'));
            assert!(!repo.name().contains('/'));
            assert!(!repo.normalized_url().ends_with('/'));
        }
    }
});
