//! The four statistics reporters.
//!
//! Each reporter splits into a pure `compute` step returning a summary
//! struct and a `render` step writing it as text, so the numbers can be
//! tested without parsing output.

pub mod duration;
pub mod station;
pub mod time;
pub mod users;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Dataset;
use crate::utils::colors::Theme;
use std::io::{self, Write};
use std::time::Instant;

pub const NO_DATA: &str = "no data";

/// Presentation settings shared by every reporter.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub theme: Theme,
    pub show_elapsed: bool,
    pub separator: String,
}

impl ReportContext {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            theme: Theme::new(cfg.use_colors()),
            show_elapsed: cfg.show_elapsed,
            separator: cfg.separator(),
        }
    }

    /// No colors, no timings: output is deterministic
    pub fn plain() -> Self {
        Self {
            theme: Theme::plain(),
            show_elapsed: false,
            separator: "-".repeat(40),
        }
    }
}

/// Writes a `+ label: value` line, or `+ label: no data` for `None`.
pub(crate) fn stat_line<W: Write>(
    out: &mut W,
    ctx: &ReportContext,
    label: &str,
    value: Option<String>,
) -> io::Result<()> {
    let value = match value {
        Some(v) => ctx.theme.value(&v),
        None => ctx.theme.muted(NO_DATA),
    };
    writeln!(out, "+ {}: {}", ctx.theme.label(label), value)
}

/// Title, body, elapsed time and separator around one reporter.
fn section<W, F>(out: &mut W, ctx: &ReportContext, title: &str, body: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    writeln!(out)?;
    writeln!(out, "{}", ctx.theme.heading(&format!("Calculating {}...", title)))?;
    writeln!(out)?;

    let started = Instant::now();
    body(out)?;

    if ctx.show_elapsed {
        let secs = started.elapsed().as_secs_f64();
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            ctx.theme.muted(&format!("This took {:.6} seconds.", secs))
        )?;
    }
    writeln!(out, "{}", ctx.separator)
}

/// Runs the reporters in fixed order: time, station, duration, users.
pub fn report_all<W: Write>(dataset: &Dataset, ctx: &ReportContext, out: &mut W) -> AppResult<()> {
    section(out, ctx, time::TITLE, |o| {
        time::render(&time::compute(dataset), ctx, o)
    })?;
    section(out, ctx, station::TITLE, |o| {
        station::render(&station::compute(dataset), ctx, o)
    })?;
    section(out, ctx, duration::TITLE, |o| {
        duration::render(&duration::compute(dataset), ctx, o)
    })?;
    section(out, ctx, users::TITLE, |o| {
        users::render(&users::compute(dataset), ctx, o)
    })?;
    out.flush()?;
    Ok(())
}
