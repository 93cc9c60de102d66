use std::fmt;

use serde::Serialize;

/// Build metadata stamped by the build script.
///
/// Every field falls back to a sensible default when the corresponding env
/// var was not set at compile time, so the crate also builds standalone.
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_profile: &'static str,
    pub build_timestamp: &'static str,
    pub rust_version: &'static str,
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: option_env!("REPO_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")),
        build_profile: option_env!("BUILD_PROFILE").unwrap_or("unknown"),
        build_timestamp: option_env!("BUILD_TIMESTAMP").unwrap_or("unknown"),
        rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} build, {})",
            self.version, self.build_profile, self.build_timestamp
        )
    }
}
