use super::city::City;
use crate::errors::AppError;
use crate::utils::date::{month_name, weekday_name};
use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

/// Months covered by the trip data
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

pub const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// 1-based month number
    Month(u32),
}

impl MonthFilter {
    /// "all" followed by the month names, as accepted at the prompt
    pub fn choices() -> Vec<&'static str> {
        std::iter::once("all").chain(MONTHS).collect()
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => *m == month,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if needle == "all" {
            return Ok(MonthFilter::All);
        }
        MONTHS
            .iter()
            .position(|m| *m == needle)
            .map(|i| MonthFilter::Month(i as u32 + 1))
            .ok_or_else(|| AppError::InvalidMonth(s.to_string()))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(m) => f.write_str(&month_name(*m).unwrap_or("?").to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    pub fn choices() -> Vec<&'static str> {
        std::iter::once("all").chain(DAYS).collect()
    }

    pub fn matches(&self, day: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == day,
        }
    }
}

impl FromStr for DayFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if needle == "all" {
            return Ok(DayFilter::All);
        }
        DAYS.iter()
            .position(|d| *d == needle)
            .map(|i| DayFilter::Day(WEEKDAYS[i]))
            .ok_or_else(|| AppError::InvalidDay(s.to_string()))
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Day(d) => f.write_str(&weekday_name(*d).to_lowercase()),
        }
    }
}

/// The (city, month, day) triple chosen for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Build from normalized prompt answers
    pub fn parse(city: &str, month: &str, day: &str) -> Result<Self, AppError> {
        Ok(Self {
            city: city.parse()?,
            month: month.parse()?,
            day: day.parse()?,
        })
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city={}, month={}, day={}",
            self.city.as_str(),
            self.month,
            self.day
        )
    }
}
