//! POSIX errno correspondence
//!
//! Many common codes mirror a standard `errno.h` condition. The symbolic
//! tag (`EINVAL`) is part of the declaration and is always available via
//! [`NvSciError::posix_name`]. The numeric errno differs between operating
//! systems, so it comes from a platform table selected at compile time.
//!
//! `EBADFSYS` and `ENOREMOTE` only exist on QNX; hosts without them report
//! no errno for `CorruptedFileSys` and `NoRemote`.

use crate::code::NvSciError;

/// Platform mapping between codes and the host's numeric errno values.
pub trait ErrnoTable {
    /// Host errno for a code, if the code has a POSIX counterpart here.
    fn to_host(code: NvSciError) -> Option<i32>;

    /// Code for a host errno, if one corresponds.
    fn from_host(errno: i32) -> Option<NvSciError>;
}

// Platform-specific tables
cfg_if::cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android", target_vendor = "apple"))] {
        mod libc_table;
        pub use libc_table::LibcErrno as PlatformErrno;
    } else {
        // Only EOK is portable without a libc table
        mod fallback;
        pub use fallback::NoErrno as PlatformErrno;
    }
}

impl NvSciError {
    /// The host's numeric errno for this code. `Success` maps to `0`.
    #[inline]
    pub fn errno(self) -> Option<i32> {
        PlatformErrno::to_host(self)
    }

    /// Map a host errno to a code. `0` is `Success`; an errno without a
    /// counterpart becomes `Unknown`.
    pub fn from_errno(errno: i32) -> NvSciError {
        match PlatformErrno::from_host(errno) {
            Some(code) => code,
            None => {
                kdebug!("errno {} has no NvSciError counterpart", errno);
                NvSciError::Unknown
            }
        }
    }
}

#[cfg(unix)]
mod nix_bridge {
    use nix::errno::Errno;

    use crate::code::NvSciError;

    impl From<Errno> for NvSciError {
        fn from(errno: Errno) -> Self {
            NvSciError::from_errno(errno as i32)
        }
    }

    impl NvSciError {
        /// The host errno as a typed `nix` value. `None` for `Success`,
        /// which is not an error.
        pub fn nix_errno(self) -> Option<Errno> {
            self.errno().filter(|&errno| errno != 0).map(Errno::from_raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_eok() {
        assert_eq!(NvSciError::Success.errno(), Some(0));
        assert_eq!(NvSciError::from_errno(0), NvSciError::Success);
    }

    #[test]
    fn codes_without_posix_tag_have_no_errno() {
        for code in NvSciError::iter() {
            if code.posix_name().is_none() {
                assert_eq!(code.errno(), None, "{:?}", code);
            }
        }
    }

    #[test]
    fn round_trip_through_host_errno() {
        for code in NvSciError::iter() {
            if let Some(errno) = code.errno() {
                assert_eq!(NvSciError::from_errno(errno), code, "errno {}", errno);
            }
        }
    }

    #[test]
    fn unmapped_errno_is_unknown() {
        assert_eq!(NvSciError::from_errno(-1), NvSciError::Unknown);
        assert_eq!(NvSciError::from_errno(100_000), NvSciError::Unknown);
    }

    #[cfg(any(target_os = "linux", target_os = "android", target_vendor = "apple"))]
    #[test]
    fn host_values() {
        assert_eq!(NvSciError::BadParameter.errno(), Some(libc::EINVAL));
        assert_eq!(NvSciError::TryItAgain.errno(), Some(libc::EAGAIN));
        assert_eq!(NvSciError::ResourceDeadlock.errno(), Some(libc::EDEADLK));
        assert_eq!(NvSciError::from_errno(libc::ECONNRESET), NvSciError::ConnectionReset);
        assert_eq!(NvSciError::from_errno(libc::ENOENT), NvSciError::NoSuchEntry);
        // QNX-only conditions
        assert_eq!(NvSciError::CorruptedFileSys.errno(), None);
        assert_eq!(NvSciError::NoRemote.errno(), None);
        // a real errno with no counterpart
        assert_eq!(NvSciError::from_errno(libc::EPIPE), NvSciError::Unknown);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_numbers() {
        assert_eq!(NvSciError::BadParameter.errno(), Some(22));
        assert_eq!(NvSciError::NotSupported.errno(), Some(95));
        assert_eq!(NvSciError::MutexNotRecoverable.errno(), Some(131));
    }

    #[cfg(any(target_os = "linux", target_os = "android", target_vendor = "apple"))]
    #[test]
    fn nix_conversions() {
        use nix::errno::Errno;

        assert_eq!(NvSciError::from(Errno::EINVAL), NvSciError::BadParameter);
        assert_eq!(NvSciError::from(Errno::ETIMEDOUT), NvSciError::Timeout);
        assert_eq!(NvSciError::Busy.nix_errno(), Some(Errno::EBUSY));
        assert_eq!(NvSciError::ClearedFence.nix_errno(), None);
        assert_eq!(NvSciError::Success.nix_errno(), None);
    }
}
