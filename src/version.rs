//! Build metadata: the crate version and the git state recorded by the
//! build script.

/// Crate version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Branch the crate was built from, or "unknown" outside a git checkout.
pub const GIT_BRANCH: &str = or_unknown(option_env!("VERGEN_GIT_BRANCH"));

/// Full commit SHA the crate was built from, or "unknown".
pub const GIT_SHA: &str = or_unknown(option_env!("VERGEN_GIT_SHA"));

const fn or_unknown(value: Option<&'static str>) -> &'static str {
    match value {
        Some(value) => value,
        None => "unknown",
    }
}

/// Abbreviated commit SHA (seven characters).
pub fn short_sha() -> &'static str {
    GIT_SHA.get(..7).unwrap_or(GIT_SHA)
}

/// Whether the build had uncommitted changes.
pub fn git_dirty() -> bool {
    option_env!("VERGEN_GIT_DIRTY") == Some("true")
}

/// Long version printed by `enka --version`, e.g. `0.3.0 (main abc1234)` or
/// `0.3.0 (main abc1234 dirty)`.
pub fn version_string() -> String {
    let dirty = if git_dirty() { " dirty" } else { "" };
    format!("{PKG_VERSION} ({GIT_BRANCH} {}{dirty})", short_sha())
}

/// Default `User-Agent` header. Only the crate version goes on the wire.
pub fn user_agent() -> String {
    format!("enka-rs/{PKG_VERSION}")
}
