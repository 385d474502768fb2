//! Year-scoped public-holiday tables.
//!
//! A [`HolidayMap`] is built from the fixed-date rules first, then the movable
//! feasts are merged in. When two rules land on the same date the one merged
//! later wins, so a movable feast overwrites a fixed holiday.

use std::collections::btree_map::{self, BTreeMap};

use chrono::{Datelike, NaiveDate};
use serde::ser::{Serialize, Serializer};

use crate::calendar::{date_key, parse_date_key, validate_year};
use crate::error::Result;
use crate::feast::movable_feasts;

/// A holiday that falls on the same month and day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHoliday {
    pub name: &'static str,
    /// 1-based month.
    pub month: u32,
    pub day: u32,
}

impl FixedHoliday {
    pub const fn new(name: &'static str, month: u32, day: u32) -> Self {
        Self { name, month, day }
    }

    /// The rule's date in `year`, or `None` when that date does not exist.
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day).filter(|d| d.year() == year)
    }
}

/// Fixed-date public holidays observed in Cyprus.
pub const CYPRUS_FIXED_HOLIDAYS: [FixedHoliday; 10] = [
    FixedHoliday::new("New Year's Day", 1, 1),
    FixedHoliday::new("Epiphany", 1, 6),
    FixedHoliday::new("Greek Independence Day", 3, 25),
    FixedHoliday::new("Cyprus National Day (EOKA Day)", 4, 1),
    FixedHoliday::new("Labour Day / May Day", 5, 1),
    FixedHoliday::new("Assumption Day", 8, 15),
    FixedHoliday::new("Cyprus Independence Day", 10, 1),
    FixedHoliday::new("Ochi Day (Greek National Day)", 10, 28),
    FixedHoliday::new("Christmas Day", 12, 25),
    FixedHoliday::new("Boxing Day", 12, 26),
];

/// Mapping from date to holiday name for a single year.
///
/// Entries iterate in chronological order. At most one name is stored per date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayMap {
    year: i32,
    entries: BTreeMap<NaiveDate, String>,
}

impl HolidayMap {
    /// A map for `year` with no holidays in it.
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            entries: BTreeMap::new(),
        }
    }

    /// Build a map for `year` from explicit entries. Later duplicates overwrite
    /// earlier ones.
    pub fn from_entries<I, S>(year: i32, entries: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, S)>,
        S: Into<String>,
    {
        let mut map = Self::empty(year);
        for (date, name) in entries {
            map.insert(date, name);
        }
        map
    }

    /// The year this map was built for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Insert a holiday, returning the name it replaced.
    pub fn insert(&mut self, date: NaiveDate, name: impl Into<String>) -> Option<String> {
        self.entries.insert(date, name.into())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    pub fn get(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    /// Look up a holiday by its `YYYY-MM-DD` key.
    pub fn get_by_key(&self, key: &str) -> Option<&str> {
        parse_date_key(key).and_then(|date| self.get(date))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, NaiveDate, String> {
        self.entries.iter()
    }

    /// Entries as (`YYYY-MM-DD`, name) pairs in chronological order.
    pub fn keyed(&self) -> Vec<(String, &str)> {
        self.entries
            .iter()
            .map(|(date, name)| (date_key(*date), name.as_str()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a HolidayMap {
    type Item = (&'a NaiveDate, &'a String);
    type IntoIter = btree_map::Iter<'a, NaiveDate, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for HolidayMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(date, name)| (date_key(*date), name)))
    }
}

/// Build the holiday map for `year` from `rules` plus the movable feasts.
///
/// Rules whose date does not exist in `year` are skipped with a warning. A
/// movable feast that lands outside `year` is still inserted under its own
/// date.
pub fn build_holiday_map(year: i32, rules: &[FixedHoliday]) -> Result<HolidayMap> {
    let mut map = HolidayMap::empty(year);

    for rule in rules {
        match rule.date_in(year) {
            Some(date) => {
                map.insert(date, rule.name);
            }
            None => {
                tracing::warn!(
                    holiday = rule.name,
                    month = rule.month,
                    day = rule.day,
                    year,
                    "skipping holiday rule with no valid date in year"
                );
            }
        }
    }

    for (date, feast) in movable_feasts(year)? {
        if date.year() != year {
            tracing::warn!(holiday = feast.name(), date = %date, year, "movable feast falls outside year");
        }
        if let Some(previous) = map.insert(date, feast.name()) {
            tracing::debug!(
                date = %date,
                replaced = %previous,
                holiday = feast.name(),
                "movable feast overwrites fixed holiday"
            );
        }
    }

    Ok(map)
}

/// Public holidays for `year` using the built-in calendar.
///
/// # Errors
/// Returns `EngineError::InvalidYear` when `year` is outside the supported range.
pub fn compute_public_holidays(year: i32) -> Result<HolidayMap> {
    validate_year(year)?;
    build_holiday_map(year, &CYPRUS_FIXED_HOLIDAYS)
}
