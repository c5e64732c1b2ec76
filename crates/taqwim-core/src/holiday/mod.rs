//! Holiday classification for calendar badges.
//!
//! A date is a holiday when its Gregorian month/day matches a fixed rule or
//! its arithmetic Hijri month/day matches a lunar rule. Fixed rules are
//! checked first; within each list the first rule in order wins.

mod rules;

pub use rules::{
    default_fixed_rules, default_lunar_rules, FixedGregorianRule, HolidayRule, LunarHijriRule,
};

use serde::{Deserialize, Serialize};

use crate::calendar::{days_in_month, to_hijri_date, GregorianDate, HijriDate};
use crate::error::ValidationError;

/// Which rule list produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    FixedGregorian,
    LunarHijri,
}

/// A matched holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub label: String,
    pub kind: HolidayKind,
}

/// Whether `date` falls on any of the given holidays.
pub fn is_recognized_holiday(
    date: GregorianDate,
    fixed_rules: &[FixedGregorianRule],
    lunar_rules: &[LunarHijriRule],
) -> bool {
    recognized_holiday(date, fixed_rules, lunar_rules).is_some()
}

/// Label of the first holiday matching `date`.
pub fn recognized_holiday<'a>(
    date: GregorianDate,
    fixed_rules: &'a [FixedGregorianRule],
    lunar_rules: &'a [LunarHijriRule],
) -> Option<&'a str> {
    if let Some(rule) = fixed_rules
        .iter()
        .find(|rule| rule.matches(date.month(), date.day()))
    {
        return Some(&rule.label);
    }
    if lunar_rules.is_empty() {
        return None;
    }
    let hijri = to_hijri_date(date);
    lunar_rules
        .iter()
        .find(|rule| rule.matches(hijri.month, hijri.day))
        .map(|rule| rule.label.as_str())
}

/// Both rule lists, as loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    pub fixed_rules: Vec<FixedGregorianRule>,
    pub lunar_rules: Vec<LunarHijriRule>,
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self {
            fixed_rules: default_fixed_rules(),
            lunar_rules: default_lunar_rules(),
        }
    }
}

impl HolidayCalendar {
    /// Build a calendar, validating every rule.
    pub fn new(
        fixed_rules: Vec<FixedGregorianRule>,
        lunar_rules: Vec<LunarHijriRule>,
    ) -> Result<Self, ValidationError> {
        for rule in &fixed_rules {
            rule.validate()?;
        }
        for rule in &lunar_rules {
            rule.validate()?;
        }
        Ok(Self {
            fixed_rules,
            lunar_rules,
        })
    }

    /// A calendar with no rules; nothing is a holiday.
    pub fn empty() -> Self {
        Self {
            fixed_rules: Vec::new(),
            lunar_rules: Vec::new(),
        }
    }

    /// Every rule, fixed first.
    pub fn rules(&self) -> Vec<HolidayRule> {
        self.fixed_rules
            .iter()
            .cloned()
            .map(HolidayRule::FixedGregorian)
            .chain(self.lunar_rules.iter().cloned().map(HolidayRule::LunarHijri))
            .collect()
    }

    pub fn is_holiday(&self, date: GregorianDate) -> bool {
        is_recognized_holiday(date, &self.fixed_rules, &self.lunar_rules)
    }

    /// First matching holiday, if any.
    pub fn classify(&self, date: GregorianDate) -> Option<Holiday> {
        self.all_matches(date).into_iter().next()
    }

    /// Every matching holiday, in rule order.
    pub fn all_matches(&self, date: GregorianDate) -> Vec<Holiday> {
        let hijri = to_hijri_date(date);
        self.matches_with_hijri(date, &hijri)
    }

    /// Same as [`all_matches`](Self::all_matches) with a precomputed Hijri date.
    pub(crate) fn matches_with_hijri(
        &self,
        date: GregorianDate,
        hijri: &HijriDate,
    ) -> Vec<Holiday> {
        let fixed = self
            .fixed_rules
            .iter()
            .filter(|rule| rule.matches(date.month(), date.day()))
            .map(|rule| Holiday {
                label: rule.label.clone(),
                kind: HolidayKind::FixedGregorian,
            });
        let lunar = self
            .lunar_rules
            .iter()
            .filter(|rule| rule.matches(hijri.month, hijri.day))
            .map(|rule| Holiday {
                label: rule.label.clone(),
                kind: HolidayKind::LunarHijri,
            });
        fixed.chain(lunar).collect()
    }

    /// Every holiday date in a Gregorian month, in date order.
    pub fn holidays_in_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<(GregorianDate, Holiday)>, ValidationError> {
        let first = GregorianDate::new(year, month, 1)?;
        let mut found = Vec::new();
        let mut date = first;
        for _ in 0..days_in_month(year, month) {
            for holiday in self.all_matches(date) {
                found.push((date, holiday));
            }
            date = date.succ();
        }
        Ok(found)
    }
}
