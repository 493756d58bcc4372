//! errno table for hosts without a libc mapping.

use super::ErrnoTable;
use crate::code::NvSciError;

/// Knows only that `EOK` is zero.
pub struct NoErrno;

impl ErrnoTable for NoErrno {
    fn to_host(code: NvSciError) -> Option<i32> {
        code.is_success().then_some(0)
    }

    fn from_host(errno: i32) -> Option<NvSciError> {
        (errno == 0).then_some(NvSciError::Success)
    }
}
