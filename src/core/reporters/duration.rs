use super::{ReportContext, stat_line};
use crate::core::stats::{mean, sum};
use crate::models::Dataset;
use crate::utils::formatting::{format_count, format_number, format_seconds};
use std::io::{self, Write};

pub const TITLE: &str = "Trip Duration";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DurationStats {
    pub trips: usize,
    pub total: f64,
    pub mean: Option<f64>,
}

pub fn compute(dataset: &Dataset) -> DurationStats {
    let durations: Vec<f64> = dataset.trips.iter().map(|t| t.duration).collect();
    DurationStats {
        trips: durations.len(),
        total: sum(&durations),
        mean: mean(&durations),
    }
}

fn seconds(v: f64) -> String {
    format!("{} seconds ({})", format_number(v), format_seconds(v))
}

pub fn render<W: Write>(
    stats: &DurationStats,
    ctx: &ReportContext,
    out: &mut W,
) -> io::Result<()> {
    stat_line(out, ctx, "Trips", Some(format_count(stats.trips)))?;
    stat_line(out, ctx, "Total travel time", Some(seconds(stats.total)))?;
    stat_line(out, ctx, "Mean travel time", stats.mean.map(seconds))
}
