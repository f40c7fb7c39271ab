/// Timestamp format printed in the report header: "2024-01-15 10:30:00"
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fallback value when the working directory cannot be resolved
pub(crate) const UNKNOWN_DIR: &str = "Unknown";

/// Width of the separator line under the greeting
pub(crate) const SEPARATOR_WIDTH: usize = 30;
