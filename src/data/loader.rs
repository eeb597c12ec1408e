//! History table loader
//!
//! Expected header:
//! `commit,file,line,type,depth,length,author,date,time,timezone,datetime`

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use serde::Deserialize;

use super::DataLoadError;
use crate::model::LineRecord;

/// Columns that must be present in the header
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "commit", "file", "line", "type", "depth", "length", "author", "date", "time", "timezone",
    "datetime",
];

/// One row as it appears on disk (all columns are text)
#[derive(Debug, Deserialize)]
struct RawRow {
    commit: String,
    file: String,
    line: String,
    #[serde(rename = "type")]
    kind: String,
    depth: String,
    length: String,
    author: String,
    date: String,
    time: String,
    timezone: String,
    datetime: String,
}

/// Load line records from a CSV file
pub fn load_records(path: &Path) -> Result<Vec<LineRecord>, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(file)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded history table");
    Ok(records)
}

/// Parse line records from any CSV source, in input order
pub fn parse_records<R: Read>(source: R) -> Result<Vec<LineRecord>, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(DataLoadError::MissingColumn(*missing));
    }

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<RawRow>().enumerate() {
        // Header is row 1
        records.push(convert_row(row?, idx + 2)?);
    }
    Ok(records)
}

fn convert_row(row: RawRow, row_number: usize) -> Result<LineRecord, DataLoadError> {
    let line = parse_count(&row.line, "line", row_number)?;
    let depth = parse_count(&row.depth, "depth", row_number)?;
    let length = parse_count(&row.length, "length", row_number)?;

    let date = parse_local_midnight(&row.date, &row.timezone).ok_or_else(|| {
        DataLoadError::InvalidDate {
            row: row_number,
            column: "date",
            value: format!("{}T00:00{}", row.date, row.timezone),
        }
    })?;
    let datetime = DateTime::parse_from_rfc3339(&row.datetime).map_err(|_| {
        DataLoadError::InvalidDate {
            row: row_number,
            column: "datetime",
            value: row.datetime.clone(),
        }
    })?;

    Ok(LineRecord {
        file: row.file,
        line,
        kind: row.kind,
        depth,
        length,
        commit: row.commit,
        author: row.author,
        date,
        time: row.time,
        timezone: row.timezone,
        datetime,
    })
}

fn parse_count(value: &str, column: &'static str, row: usize) -> Result<u32, DataLoadError> {
    value.parse().map_err(|_| DataLoadError::InvalidNumber {
        row,
        column,
        value: value.to_string(),
    })
}

/// `date` at 00:00 in the offset given by `timezone`
fn parse_local_midnight(date: &str, timezone: &str) -> Option<DateTime<FixedOffset>> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let offset = parse_offset(timezone)?;
    offset
        .from_local_datetime(&day.and_hms_opt(0, 0, 0)?)
        .single()
}

/// Parse `Z`, `±HH`, `±HHMM` or `±HH:MM`
fn parse_offset(timezone: &str) -> Option<FixedOffset> {
    if timezone.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match timezone.as_bytes().first()? {
        b'+' => (1, &timezone[1..]),
        b'-' => (-1, &timezone[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
