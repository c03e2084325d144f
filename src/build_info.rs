//! Compile-time build metadata exposed to the CLI version surface.

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("TWTHEME_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("TWTHEME_BUILD_TIMESTAMP");

/// Version block printed by `twtheme --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("TWTHEME_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("TWTHEME_BUILD_TIMESTAMP")
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_version_contains_all_fields() {
        assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(LONG_VERSION.contains(&format!("commit: {GIT_COMMIT}")));
        assert!(LONG_VERSION.contains(&format!("built: {BUILD_TIMESTAMP}")));
    }
}
