use super::{ReportContext, stat_line};
use crate::core::stats::mode;
use crate::models::Dataset;
use std::io::{self, Write};

pub const TITLE: &str = "The Most Popular Stations and Trip";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub route: Option<(String, String)>,
}

pub fn compute(dataset: &Dataset) -> StationStats {
    let trips = &dataset.trips;
    StationStats {
        start_station: mode(trips.iter().map(|t| t.start_station.as_str())).map(str::to_string),
        end_station: mode(trips.iter().map(|t| t.end_station.as_str())).map(str::to_string),
        route: mode(trips.iter().map(|t| t.route()))
            .map(|(from, to)| (from.to_string(), to.to_string())),
    }
}

pub fn render<W: Write>(stats: &StationStats, ctx: &ReportContext, out: &mut W) -> io::Result<()> {
    stat_line(out, ctx, "Most common start station", stats.start_station.clone())?;
    stat_line(out, ctx, "Most common end station", stats.end_station.clone())?;
    stat_line(
        out,
        ctx,
        "Most common trip",
        stats
            .route
            .as_ref()
            .map(|(from, to)| format!("{} -> {}", from, to)),
    )
}
