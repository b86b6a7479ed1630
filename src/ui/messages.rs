use crate::utils::colors::Theme;
use std::fmt;
use std::io::{self, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tagged<W: Write, T: fmt::Display>(
    out: &mut W,
    colored: bool,
    color: &str,
    icon: &str,
    msg: T,
) -> io::Result<()> {
    if colored {
        writeln!(out, "{}{}{} {}{}", color, BOLD, icon, RESET, msg)
    } else {
        writeln!(out, "{} {}", icon, msg)
    }
}

pub fn info<W: Write, T: fmt::Display>(out: &mut W, theme: Theme, msg: T) -> io::Result<()> {
    tagged(out, theme.enabled, FG_BLUE, ICON_INFO, msg)
}

pub fn success<W: Write, T: fmt::Display>(out: &mut W, theme: Theme, msg: T) -> io::Result<()> {
    tagged(out, theme.enabled, FG_GREEN, ICON_OK, msg)
}

pub fn warning<W: Write, T: fmt::Display>(out: &mut W, theme: Theme, msg: T) -> io::Result<()> {
    tagged(out, theme.enabled, FG_YELLOW, ICON_WARN, msg)
}

/// Errors always go to stderr; the config may not be loaded yet, so only
/// `NO_COLOR` is honored here.
pub fn error<T: fmt::Display>(msg: T) {
    let mut err = io::stderr();
    let colored = std::env::var_os("NO_COLOR").is_none();
    let _ = tagged(&mut err, colored, FG_RED, ICON_ERR, msg);
}

/// Formatted section header
pub fn header<W: Write, T: fmt::Display>(out: &mut W, theme: Theme, msg: T) -> io::Result<()> {
    if theme.enabled {
        writeln!(out, "{}{}{}{}", FG_BLUE, BOLD, msg, RESET)
    } else {
        writeln!(out, "{}", msg)
    }
}
