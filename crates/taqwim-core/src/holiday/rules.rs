//! Holiday rule definitions.
//!
//! The default rule set is illustrative demo data for a university calendar,
//! not an authoritative civil or religious calendar.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::calendar::days_in_month;
use crate::error::ValidationError;

/// Holiday on the same Gregorian month/day every year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedGregorianRule {
    pub month: u32,
    pub day: u32,
    pub label: String,
}

impl FixedGregorianRule {
    pub fn new(month: u32, day: u32, label: impl Into<String>) -> Self {
        Self {
            month,
            day,
            label: label.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // Leap year so 02-29 is accepted.
        let max_day = days_in_month(2000, self.month);
        if max_day == 0 {
            return Err(self.invalid(format!("month {} is not 1-12", self.month)));
        }
        if self.day == 0 || self.day > max_day {
            return Err(self.invalid(format!(
                "day {} is not valid for month {}",
                self.day, self.month
            )));
        }
        Ok(())
    }

    pub fn matches(&self, month: u32, day: u32) -> bool {
        self.month == month && self.day == day
    }

    fn invalid(&self, message: String) -> ValidationError {
        ValidationError::InvalidRule {
            label: self.label.clone(),
            message,
        }
    }
}

/// Holiday spanning one or more days of a Hijri month, every Hijri year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarHijriRule {
    pub hijri_month: u32,
    pub hijri_days: BTreeSet<u32>,
    pub label: String,
}

impl LunarHijriRule {
    pub fn new(
        hijri_month: u32,
        hijri_days: impl IntoIterator<Item = u32>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            hijri_month,
            hijri_days: hijri_days.into_iter().collect(),
            label: label.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=12).contains(&self.hijri_month) {
            return Err(self.invalid(format!("Hijri month {} is not 1-12", self.hijri_month)));
        }
        if self.hijri_days.is_empty() {
            return Err(self.invalid("no Hijri days given".to_string()));
        }
        if let Some(bad) = self.hijri_days.iter().find(|d| !(1..=30).contains(*d)) {
            return Err(self.invalid(format!("Hijri day {bad} is not 1-30")));
        }
        Ok(())
    }

    pub fn matches(&self, hijri_month: u32, hijri_day: u32) -> bool {
        self.hijri_month == hijri_month && self.hijri_days.contains(&hijri_day)
    }

    fn invalid(&self, message: String) -> ValidationError {
        ValidationError::InvalidRule {
            label: self.label.clone(),
            message,
        }
    }
}

/// Either kind of holiday rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HolidayRule {
    FixedGregorian(FixedGregorianRule),
    LunarHijri(LunarHijriRule),
}

impl HolidayRule {
    pub fn label(&self) -> &str {
        match self {
            HolidayRule::FixedGregorian(rule) => &rule.label,
            HolidayRule::LunarHijri(rule) => &rule.label,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            HolidayRule::FixedGregorian(rule) => rule.validate(),
            HolidayRule::LunarHijri(rule) => rule.validate(),
        }
    }
}

/// Demo fixed-date holidays.
pub fn default_fixed_rules() -> Vec<FixedGregorianRule> {
    vec![
        FixedGregorianRule::new(2, 22, "Founding Day"),
        FixedGregorianRule::new(9, 23, "National Day"),
    ]
}

/// Demo lunar holidays.
pub fn default_lunar_rules() -> Vec<LunarHijriRule> {
    vec![
        LunarHijriRule::new(10, 1..=3, "Eid al-Fitr"),
        LunarHijriRule::new(12, 10..=13, "Eid al-Adha"),
    ]
}
