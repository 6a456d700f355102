//! Schema versioning for exported traces.

/// Current schema version for all JSON outputs.
///
/// Follows semver: MAJOR.MINOR.PATCH
/// - MAJOR: field removals or type changes
/// - MINOR: new optional fields
pub const SCHEMA_VERSION: &str = "1.0.0";
