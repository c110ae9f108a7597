//! Runtime settings and environment loading.
//!
//! All fields are optional so adapters can layer sources (environment,
//! flags) and fall back to defaults through the `effective_*` accessors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default base URL of the source host's control API.
pub const DEFAULT_MEGA_API_BASE: &str = "https://g.api.mega.co.nz";

/// Default base URL of the destination host's API.
pub const DEFAULT_GOFILE_API_BASE: &str = "https://api.gofile.io";

/// Default port for the panel HTTP server.
pub const DEFAULT_PANEL_PORT: u16 = 5000;

/// Default bound on the resolve call, in seconds.
pub const DEFAULT_RESOLVE_TIMEOUT_SECS: u64 = 8;

/// Default bound on the full download stream, in seconds.
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 120;

/// Default admin-list file name.
pub const DEFAULT_ADMIN_FILE: &str = "admins.txt";

/// Default statistics file name.
pub const DEFAULT_STATS_FILE: &str = "relink_stats.json";

/// Application settings.
///
/// All fields are optional to support partial sources and graceful
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the source host control API.
    pub mega_api_base: Option<String>,

    /// Base URL of the destination host API.
    pub gofile_api_base: Option<String>,

    /// Seconds allowed for the resolve call.
    pub resolve_timeout_secs: Option<u64>,

    /// Seconds allowed for the full download stream.
    pub download_timeout_secs: Option<u64>,

    /// Path of the admin-id flat file.
    pub admin_file: Option<String>,

    /// Path of the statistics JSON file.
    pub stats_file: Option<String>,

    /// Port the panel HTTP server binds to.
    pub panel_port: Option<u16>,

    /// Panel login password. No default: the panel refuses to start
    /// without one.
    pub panel_password: Option<String>,

    /// Operator id seeded into a missing admin file at startup.
    pub initial_admin: Option<u64>,

    /// Operator id assumed when a command omits `--operator`.
    pub operator_id: Option<u64>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            mega_api_base: None,
            gofile_api_base: None,
            resolve_timeout_secs: Some(DEFAULT_RESOLVE_TIMEOUT_SECS),
            download_timeout_secs: Some(DEFAULT_DOWNLOAD_TIMEOUT_SECS),
            admin_file: None,
            stats_file: None,
            panel_port: Some(DEFAULT_PANEL_PORT),
            panel_password: None,
            initial_admin: None,
            operator_id: None,
        }
    }

    /// Load settings from `RELINK_*` environment variables.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings from an arbitrary variable lookup.
    ///
    /// Split out from [`Self::from_env`] so tests can drive it from a map
    /// instead of mutating process environment.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        Ok(Self {
            mega_api_base: string_var(&lookup, "RELINK_MEGA_API_BASE"),
            gofile_api_base: string_var(&lookup, "RELINK_GOFILE_API_BASE"),
            resolve_timeout_secs: parsed_var(&lookup, "RELINK_RESOLVE_TIMEOUT_SECS")?,
            download_timeout_secs: parsed_var(&lookup, "RELINK_DOWNLOAD_TIMEOUT_SECS")?,
            admin_file: string_var(&lookup, "RELINK_ADMIN_FILE"),
            stats_file: string_var(&lookup, "RELINK_STATS_FILE"),
            panel_port: parsed_var(&lookup, "RELINK_PANEL_PORT")?,
            panel_password: string_var(&lookup, "RELINK_PANEL_PASSWORD"),
            initial_admin: parsed_var(&lookup, "RELINK_INITIAL_ADMIN")?,
            operator_id: parsed_var(&lookup, "RELINK_OPERATOR_ID")?,
        })
    }

    /// Get the effective source-host API base (with default fallback).
    #[must_use]
    pub fn effective_mega_api_base(&self) -> &str {
        self.mega_api_base.as_deref().unwrap_or(DEFAULT_MEGA_API_BASE)
    }

    /// Get the effective destination-host API base (with default fallback).
    #[must_use]
    pub fn effective_gofile_api_base(&self) -> &str {
        self.gofile_api_base
            .as_deref()
            .unwrap_or(DEFAULT_GOFILE_API_BASE)
    }

    /// Get the effective resolve timeout in seconds.
    #[must_use]
    pub const fn effective_resolve_timeout_secs(&self) -> u64 {
        match self.resolve_timeout_secs {
            Some(secs) => secs,
            None => DEFAULT_RESOLVE_TIMEOUT_SECS,
        }
    }

    /// Get the effective download timeout in seconds.
    #[must_use]
    pub const fn effective_download_timeout_secs(&self) -> u64 {
        match self.download_timeout_secs {
            Some(secs) => secs,
            None => DEFAULT_DOWNLOAD_TIMEOUT_SECS,
        }
    }

    /// Get the effective admin file path (with default fallback).
    #[must_use]
    pub fn effective_admin_file(&self) -> &str {
        self.admin_file.as_deref().unwrap_or(DEFAULT_ADMIN_FILE)
    }

    /// Get the effective stats file path (with default fallback).
    #[must_use]
    pub fn effective_stats_file(&self) -> &str {
        self.stats_file.as_deref().unwrap_or(DEFAULT_STATS_FILE)
    }

    /// Get the effective panel port (with default fallback).
    #[must_use]
    pub const fn effective_panel_port(&self) -> u16 {
        match self.panel_port {
            Some(port) => port,
            None => DEFAULT_PANEL_PORT,
        }
    }
}

fn string_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parsed_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, SettingsError> {
    match string_var(lookup, name) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| SettingsError::InvalidValue {
            name: name.to_string(),
            value: raw,
        }),
    }
}

/// Errors raised while loading settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// A variable held a value that does not parse for its field.
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue {
        /// The variable name.
        name: String,
        /// The raw value that failed to parse.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_cover_every_accessor() {
        let settings = Settings::with_defaults();
        assert_eq!(settings.effective_mega_api_base(), DEFAULT_MEGA_API_BASE);
        assert_eq!(
            settings.effective_gofile_api_base(),
            DEFAULT_GOFILE_API_BASE
        );
        assert_eq!(
            settings.effective_resolve_timeout_secs(),
            DEFAULT_RESOLVE_TIMEOUT_SECS
        );
        assert_eq!(
            settings.effective_download_timeout_secs(),
            DEFAULT_DOWNLOAD_TIMEOUT_SECS
        );
        assert_eq!(settings.effective_admin_file(), DEFAULT_ADMIN_FILE);
        assert_eq!(settings.effective_stats_file(), DEFAULT_STATS_FILE);
        assert_eq!(settings.effective_panel_port(), DEFAULT_PANEL_PORT);
        assert_eq!(settings.panel_password, None);
    }

    #[test]
    fn test_lookup_overrides_defaults() {
        let lookup = lookup_from(&[
            ("RELINK_MEGA_API_BASE", "https://api.example.test"),
            ("RELINK_PANEL_PORT", "8080"),
            ("RELINK_INITIAL_ADMIN", "12345"),
        ]);
        let settings = Settings::from_lookup(lookup).unwrap();
        assert_eq!(settings.effective_mega_api_base(), "https://api.example.test");
        assert_eq!(settings.effective_panel_port(), 8080);
        assert_eq!(settings.initial_admin, Some(12345));
        // Untouched fields keep their fallback behavior
        assert_eq!(settings.effective_admin_file(), DEFAULT_ADMIN_FILE);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let lookup = lookup_from(&[("RELINK_PANEL_PASSWORD", "   ")]);
        let settings = Settings::from_lookup(lookup).unwrap();
        assert_eq!(settings.panel_password, None);
    }

    #[test]
    fn test_unparseable_number_is_an_error() {
        let lookup = lookup_from(&[("RELINK_PANEL_PORT", "not-a-port")]);
        let err = Settings::from_lookup(lookup).unwrap_err();
        assert_eq!(
            err,
            SettingsError::InvalidValue {
                name: "RELINK_PANEL_PORT".to_string(),
                value: "not-a-port".to_string(),
            }
        );
    }
}
