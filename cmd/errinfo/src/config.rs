//! nvsci-errinfo configuration

use nvsci_error::env::{env_get, env_get_bool};

/// Widest name column accepted.
pub const MAX_NAME_WIDTH: usize = 80;

/// Output settings for nvsci-errinfo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrinfoConfig {
    /// Show the POSIX errno column
    pub show_errno: bool,

    /// Show the theme column
    pub show_theme: bool,

    /// Exit with status 1 when any input is unrecognized
    pub strict: bool,

    /// Padding of the name column
    pub name_width: usize,
}

impl Default for ErrinfoConfig {
    fn default() -> Self {
        Self {
            show_errno: true,
            show_theme: true,
            strict: true,
            name_width: 40,
        }
    }
}

impl ErrinfoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `NVSCI_ERRINFO_*` variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self::new()
            .show_errno(env_get_bool("NVSCI_ERRINFO_ERRNO", defaults.show_errno))
            .show_theme(env_get_bool("NVSCI_ERRINFO_THEME", defaults.show_theme))
            .strict(env_get_bool("NVSCI_ERRINFO_STRICT", defaults.strict))
            .name_width(env_get("NVSCI_ERRINFO_NAME_WIDTH", defaults.name_width))
    }

    pub fn show_errno(mut self, enable: bool) -> Self {
        self.show_errno = enable;
        self
    }

    pub fn show_theme(mut self, enable: bool) -> Self {
        self.show_theme = enable;
        self
    }

    pub fn strict(mut self, enable: bool) -> Self {
        self.strict = enable;
        self
    }

    pub fn name_width(mut self, width: usize) -> Self {
        self.name_width = width;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name_width == 0 {
            return Err("name_width must be at least 1");
        }
        if self.name_width > MAX_NAME_WIDTH {
            return Err("name_width exceeds maximum");
        }
        Ok(())
    }
}
