//! Lookups over the declared codes.
//!
//! The registry has no state of its own; everything here is derived from
//! the `NvSciError` declaration.

use std::fmt::Write;

use crate::code::{NvSciError, NAME_PREFIX};
use crate::error::UnrecognizedCode;
use crate::range::{range_of, Subsystem};
use crate::NvSciResult;

/// Description of a declared code.
///
/// Undeclared values fail, including values inside a range that are still
/// reserved. The error reports which range (if any) the value falls in.
///
/// ```
/// use nvsci_error::describe;
/// assert_eq!(describe(0x100), Ok("Invalid parameter value"));
/// assert!(describe(0x0600_0000).is_err());
/// ```
pub fn describe(code: u32) -> Result<&'static str, UnrecognizedCode> {
    NvSciError::try_from(code).map(NvSciError::description)
}

/// Find a code by its C name (`NvSciError_Busy`) or short name (`Busy`).
/// Both forms are ASCII case-insensitive.
pub fn lookup(name: &str) -> Option<NvSciError> {
    let short = match name.get(..NAME_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(NAME_PREFIX) => &name[NAME_PREFIX.len()..],
        _ => name,
    };
    NvSciError::iter().find(|code| code.short_name().eq_ignore_ascii_case(short))
}

/// Turn a raw status from a native library into a `Result`.
///
/// - `0` is `Ok(())`
/// - a declared code is returned as-is
/// - an undeclared value becomes the Unknown sentinel of its range, or
///   `NvSciError::Unknown` when it is outside every range
pub fn check(raw: u32) -> NvSciResult<()> {
    match NvSciError::from_raw(raw) {
        Some(NvSciError::Success) => Ok(()),
        Some(code) => Err(code),
        None => {
            let fallback = range_of(raw).map_or(NvSciError::Unknown, Subsystem::unknown);
            kdebug!("undeclared status {:#010x}, reporting {}", raw, fallback.name());
            Err(fallback)
        }
    }
}

/// One `NAME = 0xVVVVVVVV` line per declared code, ascending.
///
/// The checked-in `golden/nvscierror.golden` file must always equal this
/// output for codes that already shipped.
pub fn golden() -> String {
    let mut out = String::new();
    for code in NvSciError::iter() {
        let _ = writeln!(out, "{} = {:#010x}", code.name(), code.code());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const GOLDEN: &str = include_str!("../golden/nvscierror.golden");

    fn golden_entries() -> Vec<(&'static str, u32)> {
        GOLDEN
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| {
                let (name, value) = line.split_once('=').expect("NAME = VALUE");
                let hex = value.trim().trim_start_matches("0x");
                let value = u32::from_str_radix(hex, 16).expect("hex value");
                (name.trim(), value)
            })
            .collect()
    }

    #[test]
    fn golden_values_are_stable() {
        let entries = golden_entries();
        for (name, value) in &entries {
            let code = lookup(name).unwrap_or_else(|| panic!("{} was removed", name));
            assert_eq!(code.code(), *value, "{} was renumbered", name);
        }
        for code in NvSciError::iter() {
            assert!(
                entries.iter().any(|(name, _)| *name == code.name()),
                "{} missing from golden list",
                code.name()
            );
        }
        assert_eq!(entries.len(), NvSciError::ALL.len());
    }

    #[test]
    fn golden_output_matches_file() {
        let expected: Vec<_> = golden_entries()
            .into_iter()
            .map(|(name, value)| format!("{} = {:#010x}", name, value))
            .collect();
        let actual: Vec<_> = golden().lines().map(str::to_string).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn values_unique() {
        let mut seen = HashSet::new();
        for code in NvSciError::iter() {
            assert!(seen.insert(code.code()), "duplicate value {:#010x}", code.code());
        }
    }

    #[test]
    fn names_unique() {
        let mut seen = HashSet::new();
        for code in NvSciError::iter() {
            assert!(seen.insert(code.name()), "duplicate name {}", code.name());
            assert!(!code.short_name().is_empty());
        }
    }

    #[test]
    fn success_is_the_only_zero() {
        assert_eq!(NvSciError::Success.code(), 0);
        assert_eq!(NvSciError::iter().filter(|c| c.code() == 0).count(), 1);
        assert!(NvSciError::Success.is_success());
        assert!(!NvSciError::RevalidationSuccess.is_success());
    }

    #[test]
    fn every_code_inside_its_range() {
        for code in NvSciError::iter() {
            let sub = code.subsystem();
            assert!(sub.contains(code.code()), "{:?} outside {}", code, sub);
            assert_eq!(range_of(code.code()), Some(sub));
        }
    }

    #[test]
    fn end_sentinel_is_maximum_of_range() {
        for sub in Subsystem::ALL {
            let end = sub.end_sentinel();
            for code in sub.codes() {
                assert!(end.code() >= code.code(), "{:?} above {:?}", code, end);
            }
            assert_eq!(sub.codes().last(), Some(end));
        }
    }

    #[test]
    fn unknown_sentinel_is_first_failure_of_range() {
        for sub in Subsystem::ALL {
            let first_failure = sub.codes().find(|c| !c.is_success());
            assert_eq!(first_failure, Some(sub.unknown()));
        }
    }

    #[test]
    fn describe_known_and_unknown() {
        assert_eq!(describe(0x0000_0000), Ok("No error"));
        assert_eq!(describe(0x0000_0100), Ok("Invalid parameter value"));
        assert_eq!(describe(0x0200_0002), Ok("Provided fence is cleared"));

        let err = describe(0x0000_0002).unwrap_err();
        assert_eq!(err.range(), Some(Subsystem::Common));
        let err = describe(0x0600_0000).unwrap_err();
        assert_eq!(err.range(), None);
    }

    #[test]
    fn describe_every_declared_code() {
        for code in NvSciError::iter() {
            let desc = describe(code.code());
            assert_eq!(desc, Ok(code.description()));
            assert!(!code.description().is_empty());
        }
    }

    #[test]
    fn lookup_names() {
        assert_eq!(lookup("NvSciError_NoRemote"), Some(NvSciError::NoRemote));
        assert_eq!(lookup("NoRemote"), Some(NvSciError::NoRemote));
        assert_eq!(lookup("noremote"), Some(NvSciError::NoRemote));
        assert_eq!(lookup("NvSciError_IO"), Some(NvSciError::Io));
        assert_eq!(lookup("Revalidation_Success"), Some(NvSciError::RevalidationSuccess));
        assert_eq!(lookup("NvSciError_noremote"), Some(NvSciError::NoRemote));
        assert_eq!(lookup("nvscierror_timeout"), Some(NvSciError::Timeout));
        assert_eq!(lookup("NVSCIERROR_IO"), Some(NvSciError::Io));
        assert_eq!(lookup("NvSciError_"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("NoSuchCode"), None);
    }

    #[test]
    fn check_raw_status() {
        assert_eq!(check(0), Ok(()));
        assert_eq!(check(0x0000_0202), Err(NvSciError::Busy));
        assert_eq!(check(0x0300_0100), Err(NvSciError::StreamBadBlock));
        assert_eq!(check(0x0000_0002), Err(NvSciError::Unknown));
        assert_eq!(check(0x0100_1234), Err(NvSciError::NvSciBufUnknown));
        assert_eq!(check(0x0400_0001), Err(NvSciError::NvSciIpcUnknown));
        assert_eq!(check(0xDEAD_BEEF), Err(NvSciError::Unknown));
    }

    #[test]
    fn check_with_question_mark() {
        fn native_call(status: u32) -> NvSciResult<u32> {
            check(status)?;
            Ok(7)
        }
        assert_eq!(native_call(0), Ok(7));
        assert_eq!(native_call(0x201), Err(NvSciError::TryItAgain));
    }
}
