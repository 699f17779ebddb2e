// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! External collaborator contracts.
//!
//! Settings, feature flags and translations live in remote-backed stores
//! owned by the hosting application. The policy functions take these traits
//! as explicit dependencies instead of reaching into ambient state, which
//! keeps them deterministic under test. Accessor failures are the
//! collaborator's failure domain: they surface as errors and are propagated
//! unchanged rather than masked with defaults.

use anyhow::Result;

/// Raw management setting as returned by the settings accessor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Setting {
    /// Explicitly configured value, if any.
    pub value: Option<String>,
    /// Server-side default, if any.
    pub default: Option<String>,
}

impl Setting {
    /// Effective string value: the configured value when non-empty, else the
    /// default when non-empty, else `fallback`.
    pub fn resolve_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.value
            .as_deref()
            .filter(|v| !v.is_empty())
            .or_else(|| self.default.as_deref().filter(|v| !v.is_empty()))
            .unwrap_or(fallback)
    }
}

/// Read access to management settings.
pub trait SettingStore {
    /// Look up a setting by id. `Ok(None)` means the setting does not exist;
    /// `Err` means the store itself failed.
    fn setting(&self, id: &str) -> Result<Option<Setting>>;
}

/// Read access to feature flags.
pub trait FeatureGates {
    /// Whether the named feature flag is enabled.
    fn feature_enabled(&self, name: &str) -> Result<bool>;
}

/// Text resolution with a caller-supplied fallback.
pub trait Translator {
    /// Resolve `key` to display text, returning `fallback` when the key has
    /// no translation.
    fn with_fallback(&self, key: &str, fallback: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_resolve_prefers_value() {
        let setting = Setting {
            value: Some("true".to_string()),
            default: Some("false".to_string()),
        };
        assert_eq!(setting.resolve_or("false"), "true");
    }

    #[test]
    fn test_setting_resolve_skips_empty_value() {
        let setting = Setting {
            value: Some(String::new()),
            default: Some("true".to_string()),
        };
        assert_eq!(setting.resolve_or("false"), "true");
    }

    #[test]
    fn test_setting_resolve_falls_back() {
        assert_eq!(Setting::default().resolve_or("false"), "false");

        let empty = Setting {
            value: Some(String::new()),
            default: Some(String::new()),
        };
        assert_eq!(empty.resolve_or("false"), "false");
    }
}
