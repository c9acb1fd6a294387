//! Locale support for number parsing
//!
//! This module handles loading and managing the per-locale separator
//! conventions used when parsing numeric strings, keyed by locale
//! identifier or Windows locale code.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::types::LocaleSettings;

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleError {
    /// An error occurred while parsing locale data
    ParseError(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::ParseError(msg) => write!(f, "Error parsing locale data: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}

type Result<T> = std::result::Result<T, LocaleError>;

/// Provides access to the separator conventions of the known locales
pub struct LocaleManager {
    locale_codes: HashMap<u32, String>,
    locale_settings: HashMap<String, LocaleSettings>,
}

// Global singleton for locale settings
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    /// Create a new locale manager with the default locale data
    fn new() -> Self {
        let mut manager = Self {
            locale_codes: HashMap::new(),
            locale_settings: HashMap::new(),
        };

        // Parse and load the built-in locale data
        if let Err(e) = manager.load_embedded_data() {
            // Just log the error and continue with empty maps
            eprintln!("Failed to load embedded locale data: {}", e);
        }

        manager
    }

    /// Load the embedded locale data from the TOML files
    fn load_embedded_data(&mut self) -> Result<()> {
        let locale_codes_toml = include_str!("locale/locale_codes.toml");
        self.parse_locale_codes(locale_codes_toml)?;

        let locale_settings_toml = include_str!("locale/locale_settings.toml");
        self.parse_locale_settings(locale_settings_toml)?;

        Ok(())
    }

    /// Parse the locale codes TOML data
    fn parse_locale_codes(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        for (key, value) in table {
            if key.starts_with("code_") {
                let code_table = value
                    .as_table()
                    .ok_or_else(|| LocaleError::ParseError(format!("{} is not a table", key)))?;

                let code = code_table
                    .get("code")
                    .and_then(|v| v.as_integer())
                    .ok_or_else(|| {
                        LocaleError::ParseError(format!("Missing or invalid code in {}", key))
                    })?;

                let locale = code_table
                    .get("locale")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| {
                        LocaleError::ParseError(format!("Missing or invalid locale in {}", key))
                    })?;

                self.locale_codes.insert(code as u32, locale.to_string());
            }
        }

        Ok(())
    }

    /// Parse the locale settings TOML data
    fn parse_locale_settings(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        // First load base settings if available
        let base_settings = if let Some(base) = table.get("base") {
            let mut settings = LocaleSettings::default();
            Self::apply_locale_specific_settings(&mut settings, base)?;
            settings
        } else {
            LocaleSettings::default()
        };

        // Now load each locale's settings over the base settings
        for (locale_id, value) in table {
            if locale_id == "base" {
                continue; // Already handled
            }

            let mut locale_settings = base_settings;
            Self::apply_locale_specific_settings(&mut locale_settings, value)?;

            self.locale_settings
                .insert(locale_id.to_string(), locale_settings);
        }

        Ok(())
    }

    /// Apply locale-specific settings from TOML to a LocaleSettings object
    fn apply_locale_specific_settings(
        settings: &mut LocaleSettings,
        value: &toml::Value,
    ) -> Result<()> {
        let table = value
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Locale setting is not a table".to_string()))?;

        // Decimal point
        if let Some(decimal) = table.get("decimal").and_then(|v| v.as_str()) {
            if let Some(c) = decimal.chars().next() {
                settings.decimal_point = c;
            }
        }

        // Thousands separator
        if let Some(group) = table.get("group").and_then(|v| v.as_str()) {
            if let Some(c) = group.chars().next() {
                settings.thousands_separator = c;
            }
        }

        Ok(())
    }

    /// Get the global locale manager instance
    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }

    /// Get locale settings by locale identifier (e.g., "en_US", "de_DE")
    fn get_locale_settings(&self, locale_id: &str) -> Option<&LocaleSettings> {
        self.locale_settings.get(locale_id)
    }

    /// Resolve a locale code (numeric) to a locale identifier
    fn resolve_locale_code(&self, code: u32) -> Option<&str> {
        self.locale_codes.get(&code).map(|s| s.as_str())
    }
}

/// Get locale settings by locale identifier (e.g., "en_US", "de_DE")
pub fn get_locale_settings(locale_id: &str) -> Option<LocaleSettings> {
    LocaleManager::get().get_locale_settings(locale_id).copied()
}

/// Get locale settings by Windows locale code (e.g., 0x0409 for en_US)
pub fn get_locale_settings_by_code(code: u32) -> Option<LocaleSettings> {
    let manager = LocaleManager::get();
    manager
        .resolve_locale_code(code)
        .and_then(|locale_id| manager.get_locale_settings(locale_id))
        .copied()
}

/// List all available locale identifiers
pub fn list_available_locales() -> Vec<String> {
    LocaleManager::get()
        .locale_settings
        .keys()
        .cloned()
        .collect()
}
