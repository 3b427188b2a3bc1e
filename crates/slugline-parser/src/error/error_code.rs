//! Error codes for the Slugline diagnostic system.
//!
//! - `E1xx` - Project file errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Malformed project file.
    ///
    /// The file is not valid TOML, or a field has the wrong type, or a
    /// required field is missing.
    E100,

    /// Empty project name.
    ///
    /// The `name` field is present but blank.
    E101,

    /// Unsupported project file version.
    ///
    /// The `version` field names a format this build cannot read.
    E102,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "malformed project file",
            ErrorCode::E101 => "empty project name",
            ErrorCode::E102 => "unsupported project version",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E102.to_string(), "E102");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E100.description(), "malformed project file");
        assert_eq!(ErrorCode::E101.description(), "empty project name");
    }
}
