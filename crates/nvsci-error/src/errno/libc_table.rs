//! errno table backed by the host libc constants.

use super::ErrnoTable;
use crate::code::NvSciError;

/// Linux, Android and Apple hosts.
pub struct LibcErrno;

impl ErrnoTable for LibcErrno {
    fn to_host(code: NvSciError) -> Option<i32> {
        use NvSciError::*;

        let errno = match code {
            Success => 0,
            NotImplemented => libc::ENOSYS,
            NotSupported => libc::ENOTSUP,
            AccessDenied => libc::EACCES,
            NotPermitted => libc::EPERM,
            InsufficientMemory => libc::ENOMEM,
            BadParameter => libc::EINVAL,
            BadAddress => libc::EFAULT,
            TooBig => libc::E2BIG,
            Overflow => libc::EOVERFLOW,
            Timeout => libc::ETIMEDOUT,
            TryItAgain => libc::EAGAIN,
            Busy => libc::EBUSY,
            InterruptedCall => libc::EINTR,
            NoSuchDevice => libc::ENODEV,
            NoSpace => libc::ENOSPC,
            NoSuchDevAddr => libc::ENXIO,
            Io => libc::EIO,
            InvalidIoctlNum => libc::ENOTTY,
            NoSuchEntry => libc::ENOENT,
            BadFileDesc => libc::EBADF,
            FileExists => libc::EEXIST,
            IsDirectory => libc::EISDIR,
            ReadOnlyFileSys => libc::EROFS,
            TextFileBusy => libc::ETXTBSY,
            FileNameTooLong => libc::ENAMETOOLONG,
            FileTooBig => libc::EFBIG,
            TooManySymbolLinks => libc::ELOOP,
            TooManyOpenFiles => libc::EMFILE,
            FileTableOverflow => libc::ENFILE,
            ConnectionReset => libc::ECONNRESET,
            AlreadyInProgress => libc::EALREADY,
            NoData => libc::ENODATA,
            NoDesiredMessage => libc::ENOMSG,
            MessageSize => libc::EMSGSIZE,
            NoSuchProcess => libc::ESRCH,
            MutexNotRecoverable => libc::ENOTRECOVERABLE,
            LockOwnerDead => libc::EOWNERDEAD,
            ResourceDeadlock => libc::EDEADLK,
            // EBADFSYS / ENOREMOTE are QNX-only
            _ => return None,
        };
        Some(errno)
    }

    fn from_host(errno: i32) -> Option<NvSciError> {
        use NvSciError::*;

        let code = match errno {
            0 => Success,
            libc::ENOSYS => NotImplemented,
            libc::ENOTSUP => NotSupported,
            libc::EACCES => AccessDenied,
            libc::EPERM => NotPermitted,
            libc::ENOMEM => InsufficientMemory,
            libc::EINVAL => BadParameter,
            libc::EFAULT => BadAddress,
            libc::E2BIG => TooBig,
            libc::EOVERFLOW => Overflow,
            libc::ETIMEDOUT => Timeout,
            libc::EAGAIN => TryItAgain,
            libc::EBUSY => Busy,
            libc::EINTR => InterruptedCall,
            libc::ENODEV => NoSuchDevice,
            libc::ENOSPC => NoSpace,
            libc::ENXIO => NoSuchDevAddr,
            libc::EIO => Io,
            libc::ENOTTY => InvalidIoctlNum,
            libc::ENOENT => NoSuchEntry,
            libc::EBADF => BadFileDesc,
            libc::EEXIST => FileExists,
            libc::EISDIR => IsDirectory,
            libc::EROFS => ReadOnlyFileSys,
            libc::ETXTBSY => TextFileBusy,
            libc::ENAMETOOLONG => FileNameTooLong,
            libc::EFBIG => FileTooBig,
            libc::ELOOP => TooManySymbolLinks,
            libc::EMFILE => TooManyOpenFiles,
            libc::ENFILE => FileTableOverflow,
            libc::ECONNRESET => ConnectionReset,
            libc::EALREADY => AlreadyInProgress,
            libc::ENODATA => NoData,
            libc::ENOMSG => NoDesiredMessage,
            libc::EMSGSIZE => MessageSize,
            libc::ESRCH => NoSuchProcess,
            libc::ENOTRECOVERABLE => MutexNotRecoverable,
            libc::EOWNERDEAD => LockOwnerDead,
            libc::EDEADLK => ResourceDeadlock,
            _ => return None,
        };
        Some(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tagged_code_except_qnx_only_is_mapped() {
        for code in NvSciError::iter() {
            let qnx_only = matches!(code.posix_name(), Some("EBADFSYS") | Some("ENOREMOTE"));
            let tagged = code.posix_name().is_some();
            assert_eq!(
                LibcErrno::to_host(code).is_some(),
                tagged && !qnx_only,
                "{:?}",
                code
            );
        }
    }

    #[test]
    fn host_values_distinct() {
        let mut seen = std::collections::HashSet::new();
        for code in NvSciError::iter() {
            if let Some(errno) = LibcErrno::to_host(code) {
                assert!(seen.insert(errno), "errno {} mapped twice", errno);
            }
        }
    }
}
