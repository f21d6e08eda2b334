//! Version information.

/// Package version from Cargo.toml; reported by the health endpoint.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name from Cargo.toml.
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// `{name}/{version}`, used in startup logs.
pub fn version_string() -> String {
    format!("{PKG_NAME}/{PKG_VERSION}")
}
