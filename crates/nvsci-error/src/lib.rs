//! # nvsci-error
//!
//! Error codes shared by the NvSci family of libraries (NvSciBuf,
//! NvSciSync, NvSciStream, NvSciIpc, NvSciEvent).
//!
//! One flat `#[repr(u32)]` enumeration, partitioned into fixed numeric
//! ranges. Each code carries its C symbol name, a human-readable
//! description and, for many common codes, a POSIX `errno` condition.
//!
//! ## Code ranges
//!
//! | Range                       | Owner       | Unknown      | End          |
//! |-----------------------------|-------------|--------------|--------------|
//! | `0x00000000 - 0x00FFFFFF`   | common      | `0x00000001` | `0x00FFFFFF` |
//! | `0x01000000 - 0x01FFFFFF`   | NvSciBuf    | `0x01000000` | `0x01FFFFFF` |
//! | `0x02000000 - 0x02FFFFFF`   | NvSciSync   | `0x02000000` | `0x02FFFFFF` |
//! | `0x03000000 - 0x03FFFFFF`   | NvSciStream | `0x03000000` | `0x03FFFFFF` |
//! | `0x04000000 - 0x04FFFFFF`   | NvSciIpc    | `0x04000000` | `0x04FFFFFF` |
//! | `0x05000000 - 0x05FFFFFF`   | NvSciEvent  | `0x05000000` | `0x05FFFFFF` |
//!
//! `Success` is `0`. Values are part of the binary interface and never
//! change once published; `golden/nvscierror.golden` pins them.
//!
//! ## Modules
//!
//! - `code` - the `NvSciError` enumeration
//! - `range` - subsystem ranges and failure themes
//! - `registry` - describe / lookup / check over the declared codes
//! - `errno` - POSIX errno correspondence
//! - `convert` - `std::io::Error` bridging
//! - `kprint` - leveled stderr macros
//! - `env` - environment variable utilities
//!
//! ```
//! use nvsci_error::{check, range_of, NvSciError, Subsystem};
//!
//! assert_eq!(NvSciError::BadParameter.code(), 0x100);
//! assert_eq!(range_of(0x100), Some(Subsystem::Common));
//! assert_eq!(check(0x0300_0100), Err(NvSciError::StreamBadBlock));
//! ```

#[macro_use]
pub mod kprint;
pub mod env;

mod code;
mod convert;
mod errno;
mod error;
mod range;
mod registry;

pub use code::{NvSciError, NAME_PREFIX};
pub use errno::{ErrnoTable, PlatformErrno};
pub use error::{ParseCodeError, ParseSubsystemError, UnrecognizedCode};
pub use range::{range_of, theme_of, Subsystem, Theme, RANGE_WIDTH};
pub use registry::{check, describe, golden, lookup};

/// Result alias used by code that reports NvSci errors.
pub type NvSciResult<T> = Result<T, NvSciError>;
