use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub index: usize,              // ⇔ 0-based data row in the source file
    pub start_time: NaiveDateTime, // ⇔ "Start Time"
    pub end_time: NaiveDateTime,   // ⇔ "End Time"
    pub duration: f64,             // ⇔ "Trip Duration" (seconds)
    pub start_station: String,     // ⇔ "Start Station"
    pub end_station: String,       // ⇔ "End Station"
    pub user_type: Option<String>, // ⇔ "User Type" (blank → None)
    pub gender: Option<String>,    // ⇔ "Gender", when the city has it
    pub birth_year: Option<i32>,   // ⇔ "Birth Year", when the city has it

    // derived from start_time
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

impl Trip {
    /// Builds a trip and derives month, weekday and hour from `start_time`.
    pub fn new(
        index: usize,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        duration: f64,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
    ) -> Self {
        Self {
            index,
            start_time,
            end_time,
            duration,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
        }
    }

    pub fn with_user_type(mut self, user_type: Option<String>) -> Self {
        self.user_type = user_type;
        self
    }

    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_birth_year(mut self, birth_year: Option<i32>) -> Self {
        self.birth_year = birth_year;
        self
    }

    /// (start, end) pair used as a single "trip" category
    pub fn route(&self) -> (&str, &str) {
        (&self.start_station, &self.end_station)
    }
}
