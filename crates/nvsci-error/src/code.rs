//! The `NvSciError` enumeration.
//!
//! Every code is declared exactly once in the `nvsci_codes!` invocation
//! below. The macro expands into the `#[repr(u32)]` enum plus the name,
//! description and POSIX tables, so the four can never drift apart.
//!
//! Declaration order is ascending by value. New codes are appended at the
//! end of their range; existing values are never renumbered or removed.

use core::fmt;
use core::str::FromStr;

use crate::error::{ParseCodeError, UnrecognizedCode};
use crate::range::{theme_of, Subsystem, Theme};

/// Prefix shared by every C symbol name.
pub const NAME_PREFIX: &str = "NvSciError_";

macro_rules! nvsci_codes {
    ($(
        $variant:ident = $value:literal, $name:literal, $posix:expr, $desc:literal;
    )*) => {
        /// Return/error codes shared by all NvSci libraries.
        ///
        /// Discriminants are the bit-exact values native consumers see.
        /// Codes tagged with a POSIX condition report it through
        /// [`NvSciError::posix_name`].
        #[repr(u32)]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum NvSciError {
            $(
                #[doc = $desc]
                $variant = $value,
            )*
        }

        impl NvSciError {
            /// Every declared code, ascending by value.
            pub const ALL: &'static [NvSciError] = &[
                $( NvSciError::$variant, )*
            ];

            /// Strict conversion from a raw value. `None` for anything
            /// that is not a declared code.
            pub const fn from_raw(code: u32) -> Option<Self> {
                match code {
                    $( $value => Some(NvSciError::$variant), )*
                    _ => None,
                }
            }

            /// The C symbol name, e.g. `NvSciError_BadParameter`.
            pub const fn name(self) -> &'static str {
                match self {
                    $( NvSciError::$variant => $name, )*
                }
            }

            /// Human-readable meaning of the code.
            pub const fn description(self) -> &'static str {
                match self {
                    $( NvSciError::$variant => $desc, )*
                }
            }

            /// The standard `errno.h` condition this code corresponds to.
            pub const fn posix_name(self) -> Option<&'static str> {
                match self {
                    $( NvSciError::$variant => $posix, )*
                }
            }
        }
    };
}

nvsci_codes! {
    // ── Common: 0x00000000 - 0x00FFFFFF ──────────────────────────────
    Success                  = 0x00000000, "NvSciError_Success",                  Some("EOK"),            "No error";
    Unknown                  = 0x00000001, "NvSciError_Unknown",                  None,                   "Unidentified error with no additional info";

    // generic
    NotImplemented           = 0x00000010, "NvSciError_NotImplemented",           Some("ENOSYS"),         "Feature is not implemented";
    NotSupported             = 0x00000011, "NvSciError_NotSupported",             Some("ENOTSUP"),        "Feature is not supported";
    AccessDenied             = 0x00000020, "NvSciError_AccessDenied",             Some("EACCES"),         "Access to resource denied";
    NotPermitted             = 0x00000021, "NvSciError_NotPermitted",             Some("EPERM"),          "No permission to perform operation";
    InvalidState             = 0x00000022, "NvSciError_InvalidState",             None,                   "Resource is in wrong state to perform operation";
    InvalidOperation         = 0x00000023, "NvSciError_InvalidOperation",         None,                   "Requested operation is not legal";
    NotInitialized           = 0x00000024, "NvSciError_NotInitialized",           None,                   "Required resource is not initialized";
    AlreadyInUse             = 0x00000025, "NvSciError_AlreadyInUse",             None,                   "Requested resource is already in use";
    AlreadyDone              = 0x00000026, "NvSciError_AlreadyDone",              None,                   "Operation has already been performed";
    NotYetAvailable          = 0x00000027, "NvSciError_NotYetAvailable",          None,                   "Resource/information not yet available";
    NoLongerAvailable        = 0x00000028, "NvSciError_NoLongerAvailable",        None,                   "Resource/information no longer available";
    InsufficientMemory       = 0x00000030, "NvSciError_InsufficientMemory",       Some("ENOMEM"),         "Not enough memory";
    InsufficientResource     = 0x00000031, "NvSciError_InsufficientResource",     None,                   "Not enough (non-memory) resources";
    ResourceError            = 0x00000032, "NvSciError_ResourceError",            None,                   "Resource failed";

    // function parameters
    BadParameter             = 0x00000100, "NvSciError_BadParameter",             Some("EINVAL"),         "Invalid parameter value";
    BadAddress               = 0x00000101, "NvSciError_BadAddress",               Some("EFAULT"),         "Invalid address";
    TooBig                   = 0x00000102, "NvSciError_TooBig",                   Some("E2BIG"),          "Parameter list too long";
    Overflow                 = 0x00000103, "NvSciError_Overflow",                 Some("EOVERFLOW"),      "Value too large for data type";
    InconsistentData         = 0x00000104, "NvSciError_InconsistentData",         None,                   "Parameters are inconsistent with each other or prior settings";
    InsufficientData         = 0x00000105, "NvSciError_InsufficientData",         None,                   "Parameters or prior settings are insufficient";
    IndexOutOfRange          = 0x00000106, "NvSciError_IndexOutOfRange",          None,                   "An index is not in the allowed range";
    ValueOutOfRange          = 0x00000107, "NvSciError_ValueOutOfRange",          None,                   "A value is not in the allowed range";
    RevalidationSuccess      = 0x00000108, "NvSciError_Revalidation_Success",     None,                   "An object is successfully revalidated";

    // timing / temporary
    Timeout                  = 0x00000200, "NvSciError_Timeout",                  Some("ETIMEDOUT"),      "Operation timed out";
    TryItAgain               = 0x00000201, "NvSciError_TryItAgain",               Some("EAGAIN"),         "Resource unavailable. Try again.";
    Busy                     = 0x00000202, "NvSciError_Busy",                     Some("EBUSY"),          "Resource is busy";
    InterruptedCall          = 0x00000203, "NvSciError_InterruptedCall",          Some("EINTR"),          "An interrupt occurred";

    // device
    NoSuchDevice             = 0x00001000, "NvSciError_NoSuchDevice",             Some("ENODEV"),         "No such device";
    NoSpace                  = 0x00001001, "NvSciError_NoSpace",                  Some("ENOSPC"),         "No space left on device";
    NoSuchDevAddr            = 0x00001002, "NvSciError_NoSuchDevAddr",            Some("ENXIO"),          "No such device or address";
    Io                       = 0x00001003, "NvSciError_IO",                       Some("EIO"),            "Input/output error";
    InvalidIoctlNum          = 0x00001004, "NvSciError_InvalidIoctlNum",          Some("ENOTTY"),         "Inappropriate I/O control operation";

    // file system
    NoSuchEntry              = 0x00001100, "NvSciError_NoSuchEntry",              Some("ENOENT"),         "No such file or directory";
    BadFileDesc              = 0x00001101, "NvSciError_BadFileDesc",              Some("EBADF"),          "Bad file descriptor";
    CorruptedFileSys         = 0x00001102, "NvSciError_CorruptedFileSys",         Some("EBADFSYS"),       "Corrupted file system detected";
    FileExists               = 0x00001103, "NvSciError_FileExists",               Some("EEXIST"),         "File already exists";
    IsDirectory              = 0x00001104, "NvSciError_IsDirectory",              Some("EISDIR"),         "File is a directory";
    ReadOnlyFileSys          = 0x00001105, "NvSciError_ReadOnlyFileSys",          Some("EROFS"),          "Read-only file system";
    TextFileBusy             = 0x00001106, "NvSciError_TextFileBusy",             Some("ETXTBSY"),        "Text file is busy";
    FileNameTooLong          = 0x00001107, "NvSciError_FileNameTooLong",          Some("ENAMETOOLONG"),   "File name is too long";
    FileTooBig               = 0x00001108, "NvSciError_FileTooBig",               Some("EFBIG"),          "File is too large";
    TooManySymbolLinks       = 0x00001109, "NvSciError_TooManySymbolLinks",       Some("ELOOP"),          "Too many levels of symbolic links";
    TooManyOpenFiles         = 0x0000110A, "NvSciError_TooManyOpenFiles",         Some("EMFILE"),         "Too many open files in process";
    FileTableOverflow        = 0x0000110B, "NvSciError_FileTableOverflow",        Some("ENFILE"),         "Too many open files in system";
    EndOfFile                = 0x0000110C, "NvSciError_EndOfFile",                None,                   "End of file reached";

    // communication
    ConnectionReset          = 0x00001200, "NvSciError_ConnectionReset",          Some("ECONNRESET"),     "Connection was closed or lost";
    AlreadyInProgress        = 0x00001201, "NvSciError_AlreadyInProgress",        Some("EALREADY"),       "Pending connection is already in progress";
    NoData                   = 0x00001202, "NvSciError_NoData",                   Some("ENODATA"),        "No message data available";
    NoDesiredMessage         = 0x00001203, "NvSciError_NoDesiredMessage",         Some("ENOMSG"),         "No message of the desired type available";
    MessageSize              = 0x00001204, "NvSciError_MessageSize",              Some("EMSGSIZE"),       "Message is too large";
    NoRemote                 = 0x00001205, "NvSciError_NoRemote",                 Some("ENOREMOTE"),      "Remote node doesn't exist";

    // process / thread
    NoSuchProcess            = 0x00002000, "NvSciError_NoSuchProcess",            Some("ESRCH"),          "No such process";

    // mutex
    MutexNotRecoverable      = 0x00002100, "NvSciError_MutexNotRecoverable",      Some("ENOTRECOVERABLE"), "Mutex damaged by previous owner's death";
    LockOwnerDead            = 0x00002101, "NvSciError_LockOwnerDead",            Some("EOWNERDEAD"),     "Previous owner died while holding mutex";
    ResourceDeadlock         = 0x00002102, "NvSciError_ResourceDeadlock",         Some("EDEADLK"),        "Taking ownership would cause deadlock";

    // attribute lists
    ReconciliationFailed     = 0x00010100, "NvSciError_ReconciliationFailed",     None,                   "Could not reconcile attributes";
    AttrListValidationFailed = 0x00010101, "NvSciError_AttrListValidationFailed", None,                   "Could not validate attributes";
    ObjValidationFailed      = 0x00010102, "NvSciError_ObjValidationFailed",      None,                   "Object validation has errors";

    CommonEnd                = 0x00FFFFFF, "NvSciError_CommonEnd",                None,                   "End of range for common error codes";

    // ── NvSciBuf: 0x01000000 - 0x01FFFFFF ────────────────────────────
    NvSciBufUnknown          = 0x01000000, "NvSciError_NvSciBufUnknown",          None,                   "Unidentified NvSciBuf error with no additional info";
    NvSciBufEnd              = 0x01FFFFFF, "NvSciError_NvSciBufEnd",              None,                   "End of range for NvSciBuf errors";

    // ── NvSciSync: 0x02000000 - 0x02FFFFFF ───────────────────────────
    NvSciSyncUnknown         = 0x02000000, "NvSciError_NvSciSyncUnknown",         None,                   "Unidentified NvSciSync error with no additional info";
    UnsupportedConfig        = 0x02000001, "NvSciError_UnsupportedConfig",        None,                   "Unsupported configuration";
    ClearedFence             = 0x02000002, "NvSciError_ClearedFence",             None,                   "Provided fence is cleared";
    NvSciSyncEnd             = 0x02FFFFFF, "NvSciError_NvSciSyncEnd",             None,                   "End of range for NvSciSync errors";

    // ── NvSciStream: 0x03000000 - 0x03FFFFFF ─────────────────────────
    NvSciStreamUnknown       = 0x03000000, "NvSciError_NvSciStreamUnknown",       None,                   "Unidentified NvSciStream error with no additional info";
    StreamInternalError      = 0x03000001, "NvSciError_StreamInternalError",      None,                   "Internal stream resource failure occurred";
    StreamBadBlock           = 0x03000100, "NvSciError_StreamBadBlock",           None,                   "Unrecognized block handle";
    StreamBadPacket          = 0x03000101, "NvSciError_StreamBadPacket",          None,                   "Unrecognized packet handle";
    StreamBadCookie          = 0x03000102, "NvSciError_StreamBadCookie",          None,                   "Invalid packet cookie value";
    StreamNotConnected       = 0x03000200, "NvSciError_StreamNotConnected",       None,                   "Operation requires stream be fully connected";
    StreamNotSetupPhase      = 0x03000201, "NvSciError_StreamNotSetupPhase",      None,                   "Operation can only be performed in setup phase";
    StreamNotSafetyPhase     = 0x03000202, "NvSciError_StreamNotSafetyPhase",     None,                   "Operation can only be performed in safety phase";
    NoStreamPacket           = 0x03001000, "NvSciError_NoStreamPacket",           None,                   "No stream packet available";
    StreamPacketInaccessible = 0x03001001, "NvSciError_StreamPacketInaccessible", None,                   "Referenced packet's current location does not allow this operation";
    StreamPacketDeleted      = 0x03001002, "NvSciError_StreamPacketDeleted",      None,                   "Internal error due to operation on deleted packet";
    StreamInfoNotProvided    = 0x03003000, "NvSciError_StreamInfoNotProvided",    None,                   "Queried info does not exist";
    // lower-level system failures, not caused by API misuse
    StreamLockFailed         = 0x03400000, "NvSciError_StreamLockFailed",         None,                   "Failed to acquire lock on mutex used to ensure thread safety";
    // internal failures, only reachable from unit tests
    StreamBadSrcIndex        = 0x03800000, "NvSciError_StreamBadSrcIndex",        None,                   "Invalid input index was passed to a block";
    StreamBadDstIndex        = 0x03800001, "NvSciError_StreamBadDstIndex",        None,                   "Invalid output index was passed to a block";
    NvSciStreamEnd           = 0x03FFFFFF, "NvSciError_NvSciStreamEnd",           None,                   "End of range for NvSciStream errors";

    // ── NvSciIpc: 0x04000000 - 0x04FFFFFF ────────────────────────────
    NvSciIpcUnknown          = 0x04000000, "NvSciError_NvSciIpcUnknown",          None,                   "Unidentified NvSciIpc error with no additional info";
    NvSciIpcEnd              = 0x04FFFFFF, "NvSciError_NvSciIpcEnd",              None,                   "End of range for NvSciIpc errors";

    // ── NvSciEvent: 0x05000000 - 0x05FFFFFF ──────────────────────────
    NvSciEventUnknown        = 0x05000000, "NvSciError_NvSciEventUnknown",        None,                   "Unidentified NvSciEvent error with no additional info";
    NvSciEventEnd            = 0x05FFFFFF, "NvSciError_NvSciEventEnd",            None,                   "End of range for NvSciEvent errors";
}

// The highest declared code must stay inside the last subsystem range,
// `subsystem()` indexes `Subsystem::ALL` with it.
const _: () = assert!(
    ((NvSciError::ALL[NvSciError::ALL.len() - 1] as u32) >> 24) < (Subsystem::ALL.len() as u32)
);

impl NvSciError {
    /// The raw 32-bit value.
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// The name without the `NvSciError_` prefix, e.g. `BadParameter`.
    pub fn short_name(self) -> &'static str {
        let name = self.name();
        name.strip_prefix(NAME_PREFIX).unwrap_or(name)
    }

    /// Iterate over every declared code in ascending order.
    pub fn iter() -> impl Iterator<Item = NvSciError> {
        Self::ALL.iter().copied()
    }

    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, NvSciError::Success)
    }

    /// True for the Unknown and End values that bound each range.
    pub const fn is_sentinel(self) -> bool {
        matches!(
            self,
            NvSciError::Unknown
                | NvSciError::CommonEnd
                | NvSciError::NvSciBufUnknown
                | NvSciError::NvSciBufEnd
                | NvSciError::NvSciSyncUnknown
                | NvSciError::NvSciSyncEnd
                | NvSciError::NvSciStreamUnknown
                | NvSciError::NvSciStreamEnd
                | NvSciError::NvSciIpcUnknown
                | NvSciError::NvSciIpcEnd
                | NvSciError::NvSciEventUnknown
                | NvSciError::NvSciEventEnd
        )
    }

    /// The subsystem range that owns this code.
    #[inline]
    pub const fn subsystem(self) -> Subsystem {
        Subsystem::ALL[(self.code() >> 24) as usize]
    }

    /// The failure theme (sparse sub-range) of this code, if it has one.
    #[inline]
    pub fn theme(self) -> Option<Theme> {
        theme_of(self.code())
    }
}

impl fmt::Display for NvSciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#010x}): {}", self.name(), self.code(), self.description())
    }
}

impl fmt::Debug for NvSciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:#010x})", self.name(), self.code())
    }
}

impl std::error::Error for NvSciError {}

impl From<NvSciError> for u32 {
    #[inline]
    fn from(code: NvSciError) -> Self {
        code.code()
    }
}

impl TryFrom<u32> for NvSciError {
    type Error = UnrecognizedCode;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        NvSciError::from_raw(code).ok_or(UnrecognizedCode::new(code))
    }
}

impl FromStr for NvSciError {
    type Err = ParseCodeError;

    /// Accepts `NvSciError_Timeout`, `Timeout`, `0x200` or `512`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCodeError::Empty);
        }
        if let Some(code) = crate::registry::lookup(s) {
            return Ok(code);
        }

        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            // from_str_radix also takes a leading sign
            Some(hex) if hex.starts_with(|c: char| c.is_ascii_hexdigit()) => {
                u32::from_str_radix(hex, 16)
            }
            Some(_) => return Err(ParseCodeError::InvalidNumber(s.to_string())),
            None if s.starts_with(|c: char| c.is_ascii_digit()) => s.parse::<u32>(),
            None => return Err(ParseCodeError::UnknownName(s.to_string())),
        };
        let value = parsed.map_err(|_| ParseCodeError::InvalidNumber(s.to_string()))?;
        NvSciError::try_from(value).map_err(ParseCodeError::Unrecognized)
    }
}
