//! Flattened view over a translated record
//!
//! Library builders want one string per field and plain numbers. The record
//! keeps every value; this picks the first one the way the library build does.

use crate::mapping::fields;
use serde::Serialize;
use tonearm_core::TranslatedRecord;

/// One track's tags, reduced to single values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackSummary {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub album_artist: String,
    pub genre: String,
    pub date: String,
    pub track_number: Option<u32>,
    pub disc_number: Option<u32>,
    pub duration_seconds: Option<f64>,
    pub filetype: String,
}

impl TrackSummary {
    /// Reduce `record` to single values
    ///
    /// Text fields prefer the first `str_list` entry and fall back to the
    /// `str` bucket. Track and disc numbers take the first run of digits, so
    /// `"3/12"` reads as 3.
    pub fn from_record(record: &TranslatedRecord) -> Self {
        Self {
            title: first_string(record, fields::TITLE),
            artist: first_string(record, fields::ARTIST),
            album: first_string(record, fields::ALBUM),
            album_artist: first_string(record, fields::ALBUM_ARTIST),
            genre: first_string(record, fields::GENRE),
            date: first_string(record, fields::DATE),
            track_number: number_field(record, fields::TRACK_NUMBER),
            disc_number: number_field(record, fields::DISC_NUMBER),
            duration_seconds: record.float(fields::DURATION),
            filetype: record.string(fields::FILETYPE).unwrap_or_default().to_string(),
        }
    }

    /// Duration as `m:ss`, empty when unknown
    pub fn duration_display(&self) -> String {
        self.duration_seconds.map(format_duration).unwrap_or_default()
    }
}

fn first_string(record: &TranslatedRecord, name: &str) -> String {
    record
        .string_list(name)
        .and_then(|values| values.first())
        .map(String::as_str)
        .or_else(|| record.string(name))
        .unwrap_or_default()
        .to_string()
}

fn number_field(record: &TranslatedRecord, name: &str) -> Option<u32> {
    let raw = record
        .string_list(name)
        .and_then(|values| values.first())
        .map(String::as_str)
        .or_else(|| record.string(name));

    match raw {
        Some(text) => leading_number(text),
        None => record
            .int(name)
            .or_else(|| record.int_list(name).and_then(|v| v.first().copied()))
            .and_then(|n| u32::try_from(n).ok()),
    }
}

/// First run of ASCII digits in `text`, parsed
///
/// `"3/12"` gives 3, `"Track 07"` gives 7, `"A-side"` gives `None`.
pub fn leading_number(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse() {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!("Unusable number tag {:?}: {}", text, e);
            None
        }
    }
}

/// Format seconds as `m:ss`
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format seconds as a spoken length such as `"1 hour and 05 minutes"`
pub fn format_duration_long(seconds: f64) -> String {
    let total_minutes = seconds.max(0.0) as u64 / 60;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);

    match hours {
        0 => format!("{} minutes", minutes),
        1 => format!("1 hour and {:02} minutes", minutes),
        _ => format!("{} hours and {:02} minutes", hours, minutes),
    }
}
