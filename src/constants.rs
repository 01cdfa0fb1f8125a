//! Constants used throughout the stencil application

/// Opening directive delimiter
pub const LEFT_DELIM: &str = "{{";

/// Closing directive delimiter
pub const RIGHT_DELIM: &str = "}}";

/// Comment-open token, closed by the ordinary closing delimiter
pub const COMMENT_OPEN: &str = "/*";

/// Marker line prepended to emitted clipboard contents
pub const CLIP_MARKER: &str = "//---------------\n";

/// Placeholder emitted when the clipboard is unavailable or empty
pub const CLIP_PLACEHOLDER: &str = "clipboard";

/// Default extension for derived output file names
pub const DEFAULT_OUTPUT_EXT: &str = ".exec";

/// STDIN/STDOUT indicator for CLI arguments
pub const STDIO_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
