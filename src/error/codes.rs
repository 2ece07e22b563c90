/// Error code registry for ckprune
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: Filesystem errors
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_PARSE_ERROR: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;

    // Filesystem errors (3000-3999)
    pub const DIRECTORY_UNREADABLE: u16 = 3001;
    pub const DELETION_FAILED: u16 = 3002;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1001 => "Configuration file not found",
        1002 => "Failed to parse configuration",
        1003 => "Invalid value in configuration",
        3001 => "Checkpoint directory could not be listed",
        3002 => "Checkpoint file could not be removed",
        _ => "Unknown error",
    }
}
