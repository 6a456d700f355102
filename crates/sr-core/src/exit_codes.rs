//! Exit codes for the sortreplay CLI.
//!
//! Stable so scripts can branch on the outcome without parsing output.

use sr_common::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Clean = 0,

    /// Configuration error (bad flag, env value, file or preset)
    ConfigError = 10,

    /// Input array could not be parsed or is too large
    InputError = 11,

    /// I/O or serialization error
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        self == ExitCode::Clean
    }

    pub fn is_error(self) -> bool {
        (self as i32) >= 10
    }

    /// Map a library error onto the code reported to the shell.
    pub fn from_error(err: &Error) -> Self {
        match err.code() {
            10..=19 => ExitCode::ConfigError,
            20..=29 => ExitCode::InputError,
            60..=69 => ExitCode::IoError,
            _ => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}
