//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// "slidetoe 2026-10-16 (abc1234)"
pub fn version_line() -> String {
    format!("slidetoe {} ({})", BUILD_DATE, BUILD_COMMIT)
}
