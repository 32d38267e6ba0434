//! Shared proptest configuration for domain property tests.

use proptest::test_runner::Config as ProptestConfig;

/// Case count from `PROPTEST_CASES`, low by default for fast CI.
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
