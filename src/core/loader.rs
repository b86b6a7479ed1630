//! Reads a city's trip CSV into a [`Dataset`] and applies the month/day filter.

use crate::errors::{AppError, AppResult};
use crate::models::{City, Dataset, DayFilter, FilterSelection, MonthFilter, Schema, Trip};
use crate::utils::date::parse_timestamp;
use crate::utils::path::data_file;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const COL_START_TIME: &str = "Start Time";
pub const COL_END_TIME: &str = "End Time";
pub const COL_DURATION: &str = "Trip Duration";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

/// Header positions of the columns we read.
struct Columns {
    start_time: usize,
    end_time: usize,
    duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord, source: &Path) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| AppError::MissingColumn {
                file: source.to_path_buf(),
                column: name.to_string(),
            })
        };

        Ok(Self {
            start_time: require(COL_START_TIME)?,
            end_time: require(COL_END_TIME)?,
            duration: require(COL_DURATION)?,
            start_station: require(COL_START_STATION)?,
            end_station: require(COL_END_STATION)?,
            user_type: require(COL_USER_TYPE)?,
            gender: find(COL_GENDER),
            birth_year: find(COL_BIRTH_YEAR),
        })
    }

    fn schema(&self) -> Schema {
        Schema {
            gender: self.gender.is_some(),
            birth_year: self.birth_year.is_some(),
        }
    }
}

/// Loads the selected city's file from `data_dir` and keeps the rows
/// matching the month and day filters.
pub fn load_dataset(data_dir: &Path, selection: &FilterSelection) -> AppResult<Dataset> {
    let path = data_file(data_dir, selection.city.file_name());
    if !path.is_file() {
        return Err(AppError::DataFileNotFound(path));
    }

    log::debug!("loading {} ({})", path.display(), selection);
    let file = File::open(&path)?;
    let dataset = parse(file, selection.city, &path)?;
    let total = dataset.len();

    let filtered = apply_filter(dataset, selection.month, selection.day);
    log::info!(
        "{}: {} of {} trips match {}",
        path.display(),
        filtered.len(),
        total,
        selection
    );

    Ok(filtered)
}

/// Parses a trip CSV without filtering.
pub fn read_dataset<R: Read>(reader: R, city: City) -> AppResult<Dataset> {
    parse(reader, city, &PathBuf::from(city.file_name()))
}

/// Keeps trips whose derived month and weekday match the filters.
pub fn apply_filter(mut dataset: Dataset, month: MonthFilter, day: DayFilter) -> Dataset {
    dataset
        .trips
        .retain(|t| month.matches(t.month) && day.matches(t.weekday));
    dataset
}

fn parse<R: Read>(reader: R, city: City, source: &Path) -> AppResult<Dataset> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = Columns::locate(&headers, source)?;

    let mut trips = Vec::new();
    for (index, record) in rdr.records().enumerate() {
        let record = record?;
        trips.push(parse_trip(index, &record, &columns)?);
    }

    Ok(Dataset::new(city, columns.schema(), trips))
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn field<'r>(record: &'r StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("")
}

fn optional_text(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.map(|i| field(record, i))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn timestamp(record: &StringRecord, idx: usize) -> AppResult<chrono::NaiveDateTime> {
    let raw = field(record, idx);
    parse_timestamp(raw).ok_or_else(|| AppError::InvalidTimestamp {
        line: line_of(record),
        value: raw.to_string(),
    })
}

fn number(record: &StringRecord, idx: usize, column: &str) -> AppResult<f64> {
    let raw = field(record, idx);
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::InvalidNumber {
            line: line_of(record),
            column: column.to_string(),
            value: raw.to_string(),
        })
}

fn parse_trip(index: usize, record: &StringRecord, cols: &Columns) -> AppResult<Trip> {
    let start = timestamp(record, cols.start_time)?;
    let end = timestamp(record, cols.end_time)?;
    let duration = number(record, cols.duration, COL_DURATION)?;

    // Birth years come through as floats ("1992.0") in some exports
    let birth_year = match cols.birth_year {
        Some(i) if !field(record, i).is_empty() => {
            Some(number(record, i, COL_BIRTH_YEAR)?.round() as i32)
        }
        _ => None,
    };

    Ok(Trip::new(
        index,
        start,
        end,
        duration,
        field(record, cols.start_station),
        field(record, cols.end_station),
    )
    .with_user_type(optional_text(record, Some(cols.user_type)))
    .with_gender(optional_text(record, cols.gender))
    .with_birth_year(birth_year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-01-02 08:00:00,2017-01-02 08:10:00,600,Canal St,Clark St,Subscriber,Male,1992.0
955915,2017-02-01 09:00:00,2017-02-01 09:20:00,1200,Clark St,Canal St,Customer,,
9031,2017-01-09 17:30:00,2017-01-09 17:35:00,300,Canal St,Clark St,Subscriber,Female,1985.0
";

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
";

    #[test]
    fn test_read_full_schema() {
        let ds = read_dataset(CHICAGO.as_bytes(), City::Chicago).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.schema, Schema::full());

        let first = &ds.trips[0];
        assert_eq!(first.index, 0);
        assert_eq!(first.weekday, Weekday::Mon);
        assert_eq!(first.hour, 8);
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992));

        let second = &ds.trips[1];
        assert_eq!(second.gender, None);
        assert_eq!(second.birth_year, None);
        assert_eq!(second.user_type.as_deref(), Some("Customer"));
    }

    #[test]
    fn test_read_without_optional_columns() {
        let ds = read_dataset(WASHINGTON.as_bytes(), City::Washington).unwrap();
        assert_eq!(ds.len(), 1);
        assert!(!ds.has_gender());
        assert!(!ds.has_birth_year());
        assert!((ds.trips[0].duration - 489.066).abs() < 1e-9);
    }

    #[test]
    fn test_filter_by_month_keeps_matching_rows() {
        let ds = read_dataset(CHICAGO.as_bytes(), City::Chicago).unwrap();
        let jan = apply_filter(ds, MonthFilter::Month(1), DayFilter::All);
        assert_eq!(jan.len(), 2);
        assert!(jan.trips.iter().all(|t| t.month == 1));
    }

    #[test]
    fn test_filter_by_day() {
        let ds = read_dataset(CHICAGO.as_bytes(), City::Chicago).unwrap();
        let wed = apply_filter(ds, MonthFilter::All, DayFilter::Day(Weekday::Wed));
        assert_eq!(wed.len(), 1);
        assert_eq!(wed.trips[0].start_station, "Clark St");
    }

    #[test]
    fn test_all_filters_keep_everything() {
        let ds = read_dataset(CHICAGO.as_bytes(), City::Chicago).unwrap();
        let all = apply_filter(ds, MonthFilter::All, DayFilter::All);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_filter_can_empty_dataset() {
        let ds = read_dataset(CHICAGO.as_bytes(), City::Chicago).unwrap();
        let none = apply_filter(ds, MonthFilter::Month(6), DayFilter::All);
        assert!(none.is_empty());
        assert_eq!(none.schema, Schema::full());
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Start Time,End Time,Trip Duration,Start Station\n";
        let err = read_dataset(csv.as_bytes(), City::Chicago).unwrap_err();
        assert!(matches!(
            err,
            AppError::MissingColumn { ref column, .. } if column == "End Station"
        ));
    }

    #[test]
    fn test_bad_timestamp_is_error() {
        let csv = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
not a date,2017-01-02 08:10:00,600,A,B,Subscriber
";
        let err = read_dataset(csv.as_bytes(), City::Chicago).unwrap_err();
        assert!(matches!(err, AppError::InvalidTimestamp { line: 2, .. }));
    }

    #[test]
    fn test_bad_duration_is_error() {
        let csv = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,2017-01-02 08:10:00,ten,A,B,Subscriber
";
        let err = read_dataset(csv.as_bytes(), City::Chicago).unwrap_err();
        assert!(matches!(err, AppError::InvalidNumber { .. }));
    }

    #[test]
    fn test_ragged_row_is_error() {
        let csv = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,2017-01-02 08:10:00,600,A
";
        let err = read_dataset(csv.as_bytes(), City::Chicago).unwrap_err();
        assert!(matches!(err, AppError::Csv(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = std::env::temp_dir().join("bikeshare_loader_missing_dir");
        let sel = FilterSelection::new(City::Washington, MonthFilter::All, DayFilter::All);
        let err = load_dataset(&dir, &sel).unwrap_err();
        assert!(matches!(err, AppError::DataFileNotFound(_)));
    }

    #[test]
    fn test_load_from_disk_applies_filter() {
        let dir = std::env::temp_dir().join("bikeshare_loader_disk");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("chicago.csv"), CHICAGO).unwrap();

        let sel = FilterSelection::parse("chicago", "january", "monday").unwrap();
        let ds = load_dataset(&dir, &sel).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.city, City::Chicago);
    }
}
