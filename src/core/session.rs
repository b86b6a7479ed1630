//! Interactive session: an explicit state machine driving filter selection,
//! loading, reporting, raw data browsing and restart.
//!
//! ```text
//! SelectFilters -> Loading -> Reporting -> BrowsingRaw -> AskRestart -> Done
//!       ^                                   |   ^ (more)       |
//!       |                                   +---+              |
//!       +------------------------ yes -------------------------+
//! ```

use crate::cli::prompt::{Prompter, YES_NO, YES_NO_RETRY};
use crate::core::loader::load_dataset;
use crate::core::pager::{PAGE_SIZE, Pager};
use crate::core::reporters::{ReportContext, report_all};
use crate::errors::AppResult;
use crate::models::{City, Dataset, DayFilter, FilterSelection, MonthFilter, Trip};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::date::weekday_name;
use crate::utils::formatting::{format_count, format_number};
use crate::utils::table::{Column, Table};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const ASK_CITY: &str = "Would you like to see data for chicago, new york city, or washington?";
pub const RETRY_CITY: &str = "Invalid city! Try again";
pub const ASK_MONTH: &str = "Which month? all, january, february, march, april, may, or june?";
pub const RETRY_MONTH: &str = "Invalid month! Try again";
pub const ASK_DAY: &str = "Which day of week? all, monday, tuesday, ..., sunday?";
pub const RETRY_DAY: &str = "Invalid day! Try again";
pub const ASK_RAW: &str = "Would you like to see 5 lines of raw data?";
pub const ASK_MORE_RAW: &str = "Would you like to see more raw data?";
pub const ASK_RESTART: &str = "Would you like to restart? Enter yes or no.";

#[derive(Debug)]
pub enum SessionState {
    SelectFilters,
    Loading(FilterSelection),
    Reporting(Dataset),
    BrowsingRaw { dataset: Dataset, pager: Pager },
    AskRestart,
    Done,
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::SelectFilters => "SelectFilters",
            SessionState::Loading(_) => "Loading",
            SessionState::Reporting(_) => "Reporting",
            SessionState::BrowsingRaw { .. } => "BrowsingRaw",
            SessionState::AskRestart => "AskRestart",
            SessionState::Done => "Done",
        }
    }
}

pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    data_dir: PathBuf,
    ctx: ReportContext,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(prompter: Prompter<R, W>, data_dir: PathBuf, ctx: ReportContext) -> Self {
        Self {
            prompter,
            data_dir,
            ctx,
        }
    }

    /// Runs until the user declines to restart or input ends.
    /// A data-access failure while loading is returned as an error.
    pub fn run(&mut self) -> AppResult<()> {
        let mut state = SessionState::SelectFilters;
        while !matches!(state, SessionState::Done) {
            log::debug!("session state: {}", state.name());
            state = self.step(state)?;
        }
        Ok(())
    }

    /// Advances the machine by one state.
    pub fn step(&mut self, state: SessionState) -> AppResult<SessionState> {
        match state {
            SessionState::SelectFilters => self.select_filters(),
            SessionState::Loading(selection) => {
                let dataset = load_dataset(&self.data_dir, &selection)?;
                let n = dataset.len();
                info(
                    self.prompter.output(),
                    self.ctx.theme,
                    format!(
                        "{} {} loaded for {} (month: {}, day: {})",
                        format_count(n),
                        if n == 1 { "trip" } else { "trips" },
                        selection.city,
                        selection.month,
                        selection.day
                    ),
                )?;
                Ok(SessionState::Reporting(dataset))
            }
            SessionState::Reporting(dataset) => {
                report_all(&dataset, &self.ctx, self.prompter.output())?;
                let pager = Pager::new(dataset.len(), PAGE_SIZE);
                Ok(SessionState::BrowsingRaw { dataset, pager })
            }
            SessionState::BrowsingRaw { dataset, pager } => self.browse(dataset, pager),
            SessionState::AskRestart => match self.prompter.ask_yes_no(ASK_RESTART)? {
                Some(true) => Ok(SessionState::SelectFilters),
                Some(false) => {
                    success(self.prompter.output(), self.ctx.theme, "Thanks for exploring! Goodbye.")?;
                    Ok(SessionState::Done)
                }
                None => self.input_closed(),
            },
            SessionState::Done => Ok(SessionState::Done),
        }
    }

    fn select_filters(&mut self) -> AppResult<SessionState> {
        header(self.prompter.output(), self.ctx.theme, GREETING)?;

        let cities = City::names();
        let Some(city) = self.prompter.ask_choice(ASK_CITY, RETRY_CITY, &cities)? else {
            return self.input_closed();
        };

        let months = MonthFilter::choices();
        let Some(month) = self.prompter.ask_choice(ASK_MONTH, RETRY_MONTH, &months)? else {
            return self.input_closed();
        };

        let days = DayFilter::choices();
        let Some(day) = self.prompter.ask_choice(ASK_DAY, RETRY_DAY, &days)? else {
            return self.input_closed();
        };

        writeln!(self.prompter.output(), "{}", self.ctx.separator)?;
        let selection = FilterSelection::parse(&city, &month, &day)?;
        Ok(SessionState::Loading(selection))
    }

    fn browse(&mut self, dataset: Dataset, mut pager: Pager) -> AppResult<SessionState> {
        let question = if pager.offset() == 0 {
            ASK_RAW
        } else {
            ASK_MORE_RAW
        };

        match self.prompter.ask_choice(question, YES_NO_RETRY, &YES_NO)? {
            None => return self.input_closed(),
            Some(answer) if answer != "yes" => return Ok(SessionState::AskRestart),
            Some(_) => {}
        }

        if let Some(range) = pager.next_page() {
            let page = render_page(&dataset, dataset.page(range.start, range.len()));
            write!(self.prompter.output(), "{}", page)?;
        }

        if pager.is_exhausted() {
            Ok(SessionState::AskRestart)
        } else {
            Ok(SessionState::BrowsingRaw { dataset, pager })
        }
    }

    fn input_closed(&mut self) -> AppResult<SessionState> {
        warning(self.prompter.output(), self.ctx.theme, "Input closed, ending session.")?;
        Ok(SessionState::Done)
    }
}

/// Raw rows as a table, including the derived calendar columns.
pub fn render_page(dataset: &Dataset, rows: &[Trip]) -> String {
    if rows.is_empty() {
        return "No rows to display.\n".to_string();
    }

    let mut columns = vec![
        Column::new("#", 8),
        Column::new("Start Time", 19),
        Column::new("End Time", 19),
        Column::new("Trip Duration", 13),
        Column::new("Start Station", 28),
        Column::new("End Station", 28),
        Column::new("User Type", 10),
    ];
    if dataset.has_gender() {
        columns.push(Column::new("Gender", 6));
    }
    if dataset.has_birth_year() {
        columns.push(Column::new("Birth Year", 10));
    }
    columns.push(Column::new("Month", 5));
    columns.push(Column::new("Day of Week", 11));
    columns.push(Column::new("Hour", 4));

    let mut table = Table::new(columns);
    for t in rows {
        let mut row = vec![
            t.index.to_string(),
            t.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            t.end_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            format_number(t.duration),
            t.start_station.clone(),
            t.end_station.clone(),
            t.user_type.clone().unwrap_or_default(),
        ];
        if dataset.has_gender() {
            row.push(t.gender.clone().unwrap_or_default());
        }
        if dataset.has_birth_year() {
            row.push(t.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        row.push(t.month.to_string());
        row.push(weekday_name(t.weekday).to_string());
        row.push(t.hour.to_string());
        table.add_row(row);
    }

    table.render()
}
