//! Error types for registry lookups

use core::fmt;

use crate::range::{range_of, Subsystem};

/// A raw value that is not a declared code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnrecognizedCode {
    code: u32,
}

impl UnrecognizedCode {
    pub const fn new(code: u32) -> Self {
        Self { code }
    }

    /// The offending raw value.
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// The subsystem range the value falls in, if any. A value can be
    /// inside a range and still undeclared (reserved room in a theme).
    pub const fn range(&self) -> Option<Subsystem> {
        range_of(self.code)
    }
}

impl fmt::Display for UnrecognizedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized error code {:#010x}", self.code)?;
        match self.range() {
            Some(sub) => write!(f, " (undeclared in {} range)", sub.label()),
            None => write!(f, " (outside all ranges)"),
        }
    }
}

impl std::error::Error for UnrecognizedCode {}

/// Failure to parse a code from its name or number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCodeError {
    /// Input was empty
    Empty,

    /// Looked like a number but did not fit in a `u32`
    InvalidNumber(String),

    /// Not a known C or short name
    UnknownName(String),

    /// A well-formed number that is not a declared code
    Unrecognized(UnrecognizedCode),
}

impl fmt::Display for ParseCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCodeError::Empty => write!(f, "empty error code"),
            ParseCodeError::InvalidNumber(s) => write!(f, "invalid numeric error code '{}'", s),
            ParseCodeError::UnknownName(s) => write!(f, "unknown error code name '{}'", s),
            ParseCodeError::Unrecognized(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ParseCodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseCodeError::Unrecognized(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnrecognizedCode> for ParseCodeError {
    fn from(e: UnrecognizedCode) -> Self {
        ParseCodeError::Unrecognized(e)
    }
}

/// Unknown subsystem name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSubsystemError(pub String);

impl fmt::Display for ParseSubsystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown subsystem '{}' (expected common, buf, sync, stream, ipc or event)",
            self.0
        )
    }
}

impl std::error::Error for ParseSubsystemError {}
