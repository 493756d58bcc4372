//! Leveled stderr logging for nvsci-error
//!
//! The registry is silent except for lossy mappings (an undeclared status
//! handed to `check`, an errno with no counterpart), which log at debug
//! level. Binaries built on the crate report their own diagnostics through
//! the same macros so one variable controls all of it.
//!
//! # Environment Variables
//!
//! - `NVSCI_LOG_LEVEL=<level>` - off, error, warn (default), info, debug; or 0-4
//! - `NVSCI_FLUSH_EPRINT=1` - flush stderr after every line
//!
//! ```ignore
//! use nvsci_error::{kdebug, kerror};
//!
//! kdebug!("status {:#010x}", raw);
//! kerror!("unknown subsystem '{}'", name);
//! ```

use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

use crate::env::{env_get_bool, env_get_opt};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl LogLevel {
    const DEFAULT: LogLevel = LogLevel::Warn;

    fn from_raw(v: u8) -> Self {
        match v {
            0 => LogLevel::Off,
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    /// Level name or digit, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        let level = match s.trim().to_ascii_lowercase().as_str() {
            "off" | "0" => LogLevel::Off,
            "error" | "1" => LogLevel::Error,
            "warn" | "2" => LogLevel::Warn,
            "info" | "3" => LogLevel::Info,
            "debug" | "4" => LogLevel::Debug,
            _ => return None,
        };
        Some(level)
    }

    fn tag(self) -> &'static str {
        match self {
            LogLevel::Off => "",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

struct Settings {
    level: AtomicU8,
    flush: bool,
}

impl Settings {
    fn from_env() -> Self {
        let level = env_get_opt::<String>("NVSCI_LOG_LEVEL")
            .and_then(|raw| LogLevel::parse(&raw))
            .unwrap_or(LogLevel::DEFAULT);
        Settings {
            level: AtomicU8::new(level as u8),
            flush: env_get_bool("NVSCI_FLUSH_EPRINT", false),
        }
    }
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

fn settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::from_env)
}

#[inline]
pub fn log_level() -> LogLevel {
    LogLevel::from_raw(settings().level.load(Ordering::Relaxed))
}

/// Override the environment, e.g. from a `--verbose` flag.
pub fn set_log_level(level: LogLevel) {
    settings().level.store(level as u8, Ordering::Relaxed);
}

#[inline]
pub fn level_enabled(level: LogLevel) -> bool {
    level != LogLevel::Off && level <= log_level()
}

#[doc(hidden)]
pub fn _klog_impl(level: LogLevel, args: std::fmt::Arguments<'_>) {
    if !level_enabled(level) {
        return;
    }
    // one locked write per line so concurrent callers never interleave
    let mut handle = std::io::stderr().lock();
    let _ = writeln!(handle, "nvsci {}: {}", level.tag(), args);
    if settings().flush {
        let _ = handle.flush();
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! klog {
    ($level:ident, $($arg:tt)*) => {
        $crate::kprint::_klog_impl(
            $crate::kprint::LogLevel::$level,
            format_args!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! kerror {
    ($($arg:tt)*) => { $crate::klog!(Error, $($arg)*) };
}

#[macro_export]
macro_rules! kwarn {
    ($($arg:tt)*) => { $crate::klog!(Warn, $($arg)*) };
}

/// Used for lossy mappings
#[macro_export]
macro_rules! kdebug {
    ($($arg:tt)*) => { $crate::klog!(Debug, $($arg)*) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_order() {
        assert!(LogLevel::Off < LogLevel::Error);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(LogLevel::parse("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse(" WARN "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("1"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("trace"), None);
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn test_raw_round_trip() {
        for level in [LogLevel::Off, LogLevel::Error, LogLevel::Warn, LogLevel::Info, LogLevel::Debug] {
            assert_eq!(LogLevel::from_raw(level as u8), level);
        }
    }

    #[test]
    fn test_off_is_never_enabled() {
        assert!(!level_enabled(LogLevel::Off));
    }
}
