//! TOML-based application configuration.
//!
//! Stores calendar preferences including:
//! - Hijri year mode (derived or pinned demo year) and dual-calendar display
//! - First day of the week for month grids
//! - Fixed Gregorian and lunar Hijri holiday rules
//! - Recurring conflict windows (Friday prayer by default)
//!
//! The default holidays and windows are demo values, not an authoritative
//! civil or religious calendar.
//!
//! Configuration is stored at `~/.config/taqwim/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::calendar::{HijriYearMode, DEMO_PINNED_HIJRI_YEAR};
use crate::conflict::TimeWindow;
use crate::error::{ConfigError, Result, ValidationError};
use crate::holiday::{default_fixed_rules, default_lunar_rules, FixedGregorianRule, LunarHijriRule};

/// How the Hijri year is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearModeSetting {
    #[default]
    Derived,
    Pinned,
}

/// Hijri display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HijriConfig {
    #[serde(default)]
    pub year_mode: YearModeSetting,
    /// Year shown for every date when `year_mode = "pinned"`.
    #[serde(default = "default_pinned_year")]
    pub pinned_year: i32,
    #[serde(default = "default_true")]
    pub show_dual_calendar: bool,
}

/// Month grid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// 0 = Sunday ... 6 = Saturday
    #[serde(default)]
    pub week_starts_on: u8,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/taqwim/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hijri: HijriConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default = "default_fixed_rules")]
    pub fixed_holidays: Vec<FixedGregorianRule>,
    #[serde(default = "default_lunar_rules")]
    pub lunar_holidays: Vec<LunarHijriRule>,
    #[serde(default = "default_conflict_windows")]
    pub conflict_windows: Vec<TimeWindow>,
}

// Default functions
fn default_pinned_year() -> i32 {
    DEMO_PINNED_HIJRI_YEAR
}
fn default_true() -> bool {
    true
}
fn default_conflict_windows() -> Vec<TimeWindow> {
    vec![TimeWindow::friday_prayer()]
}

impl Default for HijriConfig {
    fn default() -> Self {
        Self {
            year_mode: YearModeSetting::Derived,
            pinned_year: default_pinned_year(),
            show_dual_calendar: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hijri: HijriConfig::default(),
            calendar: CalendarConfig::default(),
            fixed_holidays: default_fixed_rules(),
            lunar_holidays: default_lunar_rules(),
            conflict_windows: default_conflict_windows(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<i64>() {
                            serde_json::Value::Number(n.into())
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as integer")));
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Year mode handed to the Hijri converter.
    pub fn hijri_year_mode(&self) -> HijriYearMode {
        match self.hijri.year_mode {
            YearModeSetting::Derived => HijriYearMode::Derived,
            YearModeSetting::Pinned => HijriYearMode::Pinned(self.hijri.pinned_year),
        }
    }

    /// Check every rule and window.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.calendar.week_starts_on > 6 {
            return Err(ValidationError::InvalidWeekday(self.calendar.week_starts_on));
        }
        for rule in &self.fixed_holidays {
            rule.validate()?;
        }
        for rule in &self.lunar_holidays {
            rule.validate()?;
        }
        for window in &self.conflict_windows {
            window.validate()?;
        }
        Ok(())
    }

    /// Load from the default location, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// holds invalid rules, or if the default config cannot be written.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults if no file exists there.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                if let Err(e) = cfg.validate() {
                    tracing::warn!(path = %path.display(), error = %e, "configuration rejected");
                    return Err(e.into());
                }
                tracing::debug!(path = %path.display(), "loaded configuration");
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                tracing::info!(path = %path.display(), "wrote default configuration");
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. Does not save.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the resulting configuration is invalid. `self` is unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}
