use super::{ReportContext, stat_line};
use crate::core::stats::{mode, value_counts};
use crate::models::Dataset;
use crate::utils::formatting::format_count;
use std::io::{self, Write};

pub const TITLE: &str = "User Stats";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BirthYears {
    pub earliest: Option<i32>,
    pub most_recent: Option<i32>,
    pub most_common: Option<i32>,
}

/// `gender` and `birth_years` are `None` when the city's file has no such
/// column; that is different from a column with no values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub gender: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYears>,
}

pub fn compute(dataset: &Dataset) -> UserStats {
    let trips = &dataset.trips;

    let counts = |values: Vec<&str>| -> Vec<(String, usize)> {
        value_counts(values)
            .into_iter()
            .map(|(v, n)| (v.to_string(), n))
            .collect()
    };

    let user_types = counts(trips.iter().filter_map(|t| t.user_type.as_deref()).collect());

    let gender = dataset
        .has_gender()
        .then(|| counts(trips.iter().filter_map(|t| t.gender.as_deref()).collect()));

    let birth_years = dataset.has_birth_year().then(|| {
        let years: Vec<i32> = trips.iter().filter_map(|t| t.birth_year).collect();
        BirthYears {
            earliest: years.iter().min().copied(),
            most_recent: years.iter().max().copied(),
            most_common: mode(years.iter().copied()),
        }
    });

    UserStats {
        user_types,
        gender,
        birth_years,
    }
}

fn render_counts<W: Write>(
    out: &mut W,
    ctx: &ReportContext,
    label: &str,
    counts: &[(String, usize)],
) -> io::Result<()> {
    if counts.is_empty() {
        return stat_line(out, ctx, label, None);
    }
    for (value, n) in counts {
        stat_line(out, ctx, value, Some(format_count(*n)))?;
    }
    Ok(())
}

pub fn render<W: Write>(stats: &UserStats, ctx: &ReportContext, out: &mut W) -> io::Result<()> {
    render_counts(out, ctx, "User types", &stats.user_types)?;

    if let Some(gender) = &stats.gender {
        writeln!(out)?;
        render_counts(out, ctx, "Gender", gender)?;
    }

    if let Some(years) = &stats.birth_years {
        let year = |y: Option<i32>| y.map(|v| v.to_string());
        writeln!(out)?;
        stat_line(out, ctx, "Earliest year of birth", year(years.earliest))?;
        stat_line(out, ctx, "Most recent year of birth", year(years.most_recent))?;
        stat_line(out, ctx, "Most common year of birth", year(years.most_common))?;
    }

    Ok(())
}
