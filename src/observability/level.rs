//! Severity threshold resolution.

use tracing_subscriber::filter::LevelFilter;

const LEVELS: [(&str, LevelFilter); 4] = [
    ("debug", LevelFilter::DEBUG),
    ("info", LevelFilter::INFO),
    ("warn", LevelFilter::WARN),
    ("error", LevelFilter::ERROR),
];

/// Map a configured level name to a threshold.
///
/// Matching ignores ASCII case but nothing else: surrounding whitespace or an
/// unknown name (including `trace`) silently falls back to `INFO`.
pub fn parse_level(level: &str) -> LevelFilter {
    LEVELS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(level))
        .map(|(_, filter)| *filter)
        .unwrap_or(LevelFilter::INFO)
}
