//! Exit code constants for the prompt-include CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or malformed input, bad config)
//! - 2: Expansion produced inline errors and `--strict` was requested
//! - 3: I/O failure outside directive resolution (working directory, stdin)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, malformed input files, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Strict mode only: at least one directive rendered an inline error marker.
pub const EXPANSION_ERRORS: i32 = 2;

/// I/O failure that prevents expansion from running at all.
pub const IO_FAILURE: i32 = 3;
