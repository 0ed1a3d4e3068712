//! Common constants used throughout the scribe application.

/// Default output document name
pub const README_FILE: &str = "README.md";

/// Manifest consulted for the package version
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Literal code fence delimiter substituted for the template placeholder
pub const CODE_FENCE: &str = "```";

/// Pattern matching semantic version markers in an existing README
pub const VERSION_MARKER_PATTERN: &str = r">(?P<version>\d+\.\d+\.\d+)<";
