use std::io;

use crate::code::NvSciError;

/// Maps `io::ErrorKind` to the closest common code.
fn kind_to_code(kind: io::ErrorKind) -> NvSciError {
    match kind {
        io::ErrorKind::NotFound         => NvSciError::NoSuchEntry,
        io::ErrorKind::PermissionDenied => NvSciError::AccessDenied,
        io::ErrorKind::ConnectionReset  => NvSciError::ConnectionReset,
        io::ErrorKind::AlreadyExists    => NvSciError::FileExists,
        io::ErrorKind::WouldBlock       => NvSciError::TryItAgain,
        io::ErrorKind::InvalidInput     => NvSciError::BadParameter,
        io::ErrorKind::InvalidData      => NvSciError::InconsistentData,
        io::ErrorKind::TimedOut         => NvSciError::Timeout,
        io::ErrorKind::Interrupted      => NvSciError::InterruptedCall,
        io::ErrorKind::UnexpectedEof    => NvSciError::EndOfFile,
        io::ErrorKind::OutOfMemory      => NvSciError::InsufficientMemory,
        io::ErrorKind::Unsupported      => NvSciError::NotSupported,
        _                               => NvSciError::Unknown,
    }
}

/// Reverse of `kind_to_code`, used when a code has no host errno.
fn code_to_kind(code: NvSciError) -> io::ErrorKind {
    match code {
        NvSciError::NoSuchEntry        => io::ErrorKind::NotFound,
        NvSciError::AccessDenied       => io::ErrorKind::PermissionDenied,
        NvSciError::ConnectionReset    => io::ErrorKind::ConnectionReset,
        NvSciError::FileExists         => io::ErrorKind::AlreadyExists,
        NvSciError::TryItAgain         => io::ErrorKind::WouldBlock,
        NvSciError::BadParameter       => io::ErrorKind::InvalidInput,
        NvSciError::InconsistentData   => io::ErrorKind::InvalidData,
        NvSciError::Timeout            => io::ErrorKind::TimedOut,
        NvSciError::InterruptedCall    => io::ErrorKind::Interrupted,
        NvSciError::EndOfFile          => io::ErrorKind::UnexpectedEof,
        NvSciError::InsufficientMemory => io::ErrorKind::OutOfMemory,
        NvSciError::NotSupported       => io::ErrorKind::Unsupported,
        _                              => io::ErrorKind::Other,
    }
}

// ── From<io::Error> ───────────────────────────────────────────────

impl From<io::Error> for NvSciError {
    /// Raw OS errors go through the errno table. A custom io error that
    /// wraps an `NvSciError` gives the wrapped code back; anything else is
    /// mapped by kind.
    fn from(err: io::Error) -> Self {
        if let Some(errno) = err.raw_os_error() {
            return NvSciError::from_errno(errno);
        }
        if let Some(code) = err.get_ref().and_then(|inner| inner.downcast_ref::<NvSciError>()) {
            return *code;
        }
        kind_to_code(err.kind())
    }
}

// ── Into<io::Error> ───────────────────────────────────────────────

impl From<NvSciError> for io::Error {
    /// Codes with a host errno become OS errors. The rest are wrapped as
    /// custom io errors so the code survives a round trip.
    fn from(code: NvSciError) -> Self {
        match code.errno() {
            Some(errno) if errno != 0 => io::Error::from_raw_os_error(errno),
            _ => io::Error::new(code_to_kind(code), code),
        }
    }
}
