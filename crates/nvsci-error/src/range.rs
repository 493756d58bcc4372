//! Subsystem ranges and failure themes.
//!
//! # Code Ranges
//!
//! The `u32` code space is split into blocks of `RANGE_WIDTH` values, one
//! per library:
//!
//! | Range                       | Owner       |
//! |-----------------------------|-------------|
//! | `0x00000000 - 0x00FFFFFF`   | Common      |
//! | `0x01000000 - 0x01FFFFFF`   | NvSciBuf    |
//! | `0x02000000 - 0x02FFFFFF`   | NvSciSync   |
//! | `0x03000000 - 0x03FFFFFF`   | NvSciStream |
//! | `0x04000000 - 0x04FFFFFF`   | NvSciIpc    |
//! | `0x05000000 - 0x05FFFFFF`   | NvSciEvent  |
//!
//! Inside a range, related failures share a sparse sub-range (a [`Theme`]).
//! The gaps between themes are reserved so that codes can be appended to a
//! theme without renumbering anything.

use core::fmt;
use core::str::FromStr;

use crate::code::NvSciError;
use crate::error::ParseSubsystemError;

/// Number of values reserved for each subsystem.
pub const RANGE_WIDTH: u32 = 0x0100_0000;

/// The library that owns a block of codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subsystem {
    /// Errors common to all NvSci libraries.
    Common = 0,
    Buf = 1,
    Sync = 2,
    Stream = 3,
    Ipc = 4,
    Event = 5,
}

impl Subsystem {
    /// All subsystems in range order. `ALL[i].base() == i * RANGE_WIDTH`.
    pub const ALL: [Subsystem; 6] = [
        Subsystem::Common,
        Subsystem::Buf,
        Subsystem::Sync,
        Subsystem::Stream,
        Subsystem::Ipc,
        Subsystem::Event,
    ];

    /// First value of the range.
    #[inline]
    pub const fn base(self) -> u32 {
        self as u32 * RANGE_WIDTH
    }

    /// Last value of the range (inclusive).
    #[inline]
    pub const fn end(self) -> u32 {
        self.base() + (RANGE_WIDTH - 1)
    }

    #[inline]
    pub const fn contains(self, code: u32) -> bool {
        code >= self.base() && code <= self.end()
    }

    /// The "unidentified error" sentinel of the range.
    ///
    /// The common range starts with `Success`, so its Unknown sits at `0x1`.
    pub const fn unknown(self) -> NvSciError {
        match self {
            Subsystem::Common => NvSciError::Unknown,
            Subsystem::Buf => NvSciError::NvSciBufUnknown,
            Subsystem::Sync => NvSciError::NvSciSyncUnknown,
            Subsystem::Stream => NvSciError::NvSciStreamUnknown,
            Subsystem::Ipc => NvSciError::NvSciIpcUnknown,
            Subsystem::Event => NvSciError::NvSciEventUnknown,
        }
    }

    /// The End sentinel of the range.
    pub const fn end_sentinel(self) -> NvSciError {
        match self {
            Subsystem::Common => NvSciError::CommonEnd,
            Subsystem::Buf => NvSciError::NvSciBufEnd,
            Subsystem::Sync => NvSciError::NvSciSyncEnd,
            Subsystem::Stream => NvSciError::NvSciStreamEnd,
            Subsystem::Ipc => NvSciError::NvSciIpcEnd,
            Subsystem::Event => NvSciError::NvSciEventEnd,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Subsystem::Common => "common",
            Subsystem::Buf => "NvSciBuf",
            Subsystem::Sync => "NvSciSync",
            Subsystem::Stream => "NvSciStream",
            Subsystem::Ipc => "NvSciIpc",
            Subsystem::Event => "NvSciEvent",
        }
    }

    /// Declared codes that fall inside this range, ascending.
    pub fn codes(self) -> impl Iterator<Item = NvSciError> {
        NvSciError::iter().filter(move |code| self.contains(code.code()))
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{:#010x}, {:#010x}]", self.label(), self.base(), self.end())
    }
}

impl FromStr for Subsystem {
    type Err = ParseSubsystemError;

    /// Case-insensitive: `common`, `buf`, `NvSciBuf`, `nvscistream`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let short = lower.strip_prefix("nvsci").unwrap_or(&lower);
        match short {
            "common" => Ok(Subsystem::Common),
            "buf" => Ok(Subsystem::Buf),
            "sync" => Ok(Subsystem::Sync),
            "stream" => Ok(Subsystem::Stream),
            "ipc" => Ok(Subsystem::Ipc),
            "event" => Ok(Subsystem::Event),
            _ => Err(ParseSubsystemError(s.to_string())),
        }
    }
}

/// Which subsystem range a raw value falls in, by interval containment.
///
/// ```
/// use nvsci_error::{range_of, Subsystem};
/// assert_eq!(range_of(0x0000_0100), Some(Subsystem::Common));
/// assert_eq!(range_of(0x0300_1000), Some(Subsystem::Stream));
/// assert_eq!(range_of(0x0600_0000), None);
/// ```
pub const fn range_of(code: u32) -> Option<Subsystem> {
    let index = (code / RANGE_WIDTH) as usize;
    if index < Subsystem::ALL.len() {
        Some(Subsystem::ALL[index])
    } else {
        None
    }
}

// ── Themes ────────────────────────────────────────────────────────

/// A group of related failures sharing a sparse sub-range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    // common range
    Generic,
    Parameter,
    Timing,
    Device,
    FileSystem,
    Communication,
    Process,
    Mutex,
    AttributeList,

    // NvSciStream range
    StreamGeneral,
    StreamHandle,
    StreamPhase,
    StreamPacket,
    StreamInfo,
    /// Failures detected in lower-level system components.
    StreamSystem,
    /// Internal failures that only unit tests can provoke.
    StreamInternal,
}

/// `(first, last, theme)`, inclusive bounds, ascending and disjoint.
const THEMES: &[(u32, u32, Theme)] = &[
    (0x0000_0000, 0x0000_00FF, Theme::Generic),
    (0x0000_0100, 0x0000_01FF, Theme::Parameter),
    (0x0000_0200, 0x0000_02FF, Theme::Timing),
    (0x0000_1000, 0x0000_10FF, Theme::Device),
    (0x0000_1100, 0x0000_11FF, Theme::FileSystem),
    (0x0000_1200, 0x0000_12FF, Theme::Communication),
    (0x0000_2000, 0x0000_20FF, Theme::Process),
    (0x0000_2100, 0x0000_21FF, Theme::Mutex),
    (0x0001_0100, 0x0001_01FF, Theme::AttributeList),
    (0x0300_0000, 0x0300_00FF, Theme::StreamGeneral),
    (0x0300_0100, 0x0300_01FF, Theme::StreamHandle),
    (0x0300_0200, 0x0300_02FF, Theme::StreamPhase),
    (0x0300_1000, 0x0300_10FF, Theme::StreamPacket),
    (0x0300_3000, 0x0300_30FF, Theme::StreamInfo),
    (0x0340_0000, 0x037F_FFFF, Theme::StreamSystem),
    (0x0380_0000, 0x03FF_FFFE, Theme::StreamInternal),
];

impl Theme {
    /// Inclusive `(first, last)` bounds of the theme's sub-range.
    pub fn span(self) -> (u32, u32) {
        THEMES
            .iter()
            .find(|(_, _, theme)| *theme == self)
            .map(|&(first, last, _)| (first, last))
            .unwrap_or((0, 0))
    }

    pub fn subsystem(self) -> Subsystem {
        match self {
            Theme::StreamGeneral
            | Theme::StreamHandle
            | Theme::StreamPhase
            | Theme::StreamPacket
            | Theme::StreamInfo
            | Theme::StreamSystem
            | Theme::StreamInternal => Subsystem::Stream,
            _ => Subsystem::Common,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Theme::Generic => "generic",
            Theme::Parameter => "parameter",
            Theme::Timing => "timing",
            Theme::Device => "device",
            Theme::FileSystem => "filesystem",
            Theme::Communication => "communication",
            Theme::Process => "process",
            Theme::Mutex => "mutex",
            Theme::AttributeList => "attribute-list",
            Theme::StreamGeneral => "stream",
            Theme::StreamHandle => "stream-handle",
            Theme::StreamPhase => "stream-phase",
            Theme::StreamPacket => "stream-packet",
            Theme::StreamInfo => "stream-info",
            Theme::StreamSystem => "stream-system",
            Theme::StreamInternal => "stream-internal",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The theme a raw value falls in. Reserved gaps and End sentinels have none.
pub fn theme_of(code: u32) -> Option<Theme> {
    THEMES
        .iter()
        .find(|&&(first, last, _)| code >= first && code <= last)
        .map(|&(_, _, theme)| theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds() {
        assert_eq!(Subsystem::Common.base(), 0x0000_0000);
        assert_eq!(Subsystem::Common.end(), 0x00FF_FFFF);
        assert_eq!(Subsystem::Stream.base(), 0x0300_0000);
        assert_eq!(Subsystem::Event.end(), 0x05FF_FFFF);
        for (i, sub) in Subsystem::ALL.iter().enumerate() {
            assert_eq!(sub.base(), i as u32 * RANGE_WIDTH);
            assert_eq!(sub.end() - sub.base(), 0x00FF_FFFF);
        }
    }

    #[test]
    fn ranges_are_disjoint_and_contiguous() {
        for pair in Subsystem::ALL.windows(2) {
            assert_eq!(pair[0].end() + 1, pair[1].base());
        }
    }

    #[test]
    fn range_of_containment() {
        assert_eq!(range_of(0), Some(Subsystem::Common));
        assert_eq!(range_of(0x0000_0100), Some(Subsystem::Common));
        assert_eq!(range_of(0x00FF_FFFF), Some(Subsystem::Common));
        assert_eq!(range_of(0x0100_0000), Some(Subsystem::Buf));
        assert_eq!(range_of(0x02AB_CDEF), Some(Subsystem::Sync));
        assert_eq!(range_of(0x04FF_FFFF), Some(Subsystem::Ipc));
        assert_eq!(range_of(0x0500_0000), Some(Subsystem::Event));
        assert_eq!(range_of(0x0600_0000), None);
        assert_eq!(range_of(u32::MAX), None);
    }

    #[test]
    fn sentinels_bound_their_range() {
        for sub in Subsystem::ALL {
            assert!(sub.contains(sub.unknown().code()));
            assert_eq!(sub.end_sentinel().code(), sub.end());
        }
        assert_eq!(Subsystem::Common.unknown().code(), 0x1);
        assert_eq!(Subsystem::Buf.unknown().code(), Subsystem::Buf.base());
    }

    #[test]
    fn codes_per_range() {
        assert_eq!(Subsystem::Buf.codes().count(), 2);
        assert_eq!(Subsystem::Sync.codes().count(), 4);
        assert_eq!(Subsystem::Ipc.codes().count(), 2);
        assert_eq!(Subsystem::Event.codes().count(), 2);
        assert_eq!(Subsystem::Stream.codes().count(), 16);
        assert_eq!(Subsystem::Common.codes().count(), 61);
    }

    #[test]
    fn parse_subsystem() {
        assert_eq!("common".parse::<Subsystem>(), Ok(Subsystem::Common));
        assert_eq!("NvSciBuf".parse::<Subsystem>(), Ok(Subsystem::Buf));
        assert_eq!("nvscistream".parse::<Subsystem>(), Ok(Subsystem::Stream));
        assert_eq!(" IPC ".parse::<Subsystem>(), Ok(Subsystem::Ipc));
        assert!("gpu".parse::<Subsystem>().is_err());
    }

    #[test]
    fn display_subsystem() {
        assert_eq!(
            format!("{}", Subsystem::Sync),
            "NvSciSync [0x02000000, 0x02ffffff]"
        );
    }

    #[test]
    fn themes_disjoint_and_inside_owner() {
        for pair in THEMES.windows(2) {
            assert!(pair[0].1 < pair[1].0, "{:?} overlaps {:?}", pair[0].2, pair[1].2);
        }
        for &(first, last, theme) in THEMES {
            assert!(first <= last);
            assert!(theme.subsystem().contains(first));
            assert!(theme.subsystem().contains(last));
            assert_eq!(theme.span(), (first, last));
        }
    }

    #[test]
    fn theme_lookup() {
        assert_eq!(theme_of(0x0000_0100), Some(Theme::Parameter));
        assert_eq!(theme_of(0x0000_2102), Some(Theme::Mutex));
        assert_eq!(theme_of(0x0001_0101), Some(Theme::AttributeList));
        assert_eq!(theme_of(0x0300_0201), Some(Theme::StreamPhase));
        assert_eq!(theme_of(0x0380_0001), Some(Theme::StreamInternal));
        // reserved gap between timing and device
        assert_eq!(theme_of(0x0000_0500), None);
        assert_eq!(theme_of(0x00FF_FFFF), None);
        assert_eq!(theme_of(0x03FF_FFFF), None);
        assert_eq!(theme_of(0x0100_0000), None);
    }

    #[test]
    fn every_non_end_common_and_stream_code_has_a_theme() {
        for code in Subsystem::Common.codes().chain(Subsystem::Stream.codes()) {
            if code == code.subsystem().end_sentinel() {
                assert_eq!(code.theme(), None);
            } else {
                let theme = code.theme();
                assert!(theme.is_some(), "{:?} has no theme", code);
                assert_eq!(theme.map(Theme::subsystem), Some(code.subsystem()));
            }
        }
    }
}
