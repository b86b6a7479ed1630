use super::{ReportContext, stat_line};
use crate::core::stats::mode;
use crate::models::Dataset;
use crate::utils::date::{month_name, weekday_name};
use chrono::Weekday;
use std::io::{self, Write};

pub const TITLE: &str = "The Most Frequent Times of Travel";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TimeStats {
    pub month: Option<u32>,
    pub weekday: Option<Weekday>,
    pub hour: Option<u32>,
}

pub fn compute(dataset: &Dataset) -> TimeStats {
    TimeStats {
        month: mode(dataset.trips.iter().map(|t| t.month)),
        weekday: mode(dataset.trips.iter().map(|t| t.weekday)),
        hour: mode(dataset.trips.iter().map(|t| t.hour)),
    }
}

pub fn render<W: Write>(stats: &TimeStats, ctx: &ReportContext, out: &mut W) -> io::Result<()> {
    let month = stats
        .month
        .map(|m| month_name(m).map(str::to_string).unwrap_or_else(|| m.to_string()));
    stat_line(out, ctx, "Most common month", month)?;
    stat_line(
        out,
        ctx,
        "Most common day of week",
        stats.weekday.map(|d| weekday_name(d).to_string()),
    )?;
    stat_line(
        out,
        ctx,
        "Most common start hour",
        stats.hour.map(|h| h.to_string()),
    )
}
