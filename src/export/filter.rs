//! Optional start-date restriction of the recording set

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::api::Recording;

/// Accepted input format for the start date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-MM-dd` filter; blank or malformed input means "no filter"
pub fn parse_start_date(filter: Option<&str>) -> Option<NaiveDate> {
    let raw = filter.map(str::trim).filter(|s| !s.is_empty())?;

    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("Ignoring start date {:?} ({}); expected yyyy-MM-dd", raw, e);
            None
        }
    }
}

/// UTC calendar date of a recording's start, if the timestamp is representable
pub fn start_date(recording: &Recording) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(recording.start_time).map(|dt| dt.date_naive())
}

/// Keep recordings starting on or after `filter`, preserving order.
///
/// Absent, blank or malformed filters return the input unchanged.
pub fn apply(recordings: Option<Vec<Recording>>, filter: Option<&str>) -> Vec<Recording> {
    let recordings = match recordings {
        Some(r) if !r.is_empty() => r,
        _ => return Vec::new(),
    };

    let Some(since) = parse_start_date(filter) else {
        return recordings;
    };

    let total = recordings.len();
    let kept: Vec<Recording> = recordings
        .into_iter()
        .filter(|r| match start_date(r) {
            Some(date) => date >= since,
            None => {
                debug!("Recording {} has an out-of-range start time; excluded", r.id);
                false
            }
        })
        .collect();

    info!("Start date {}: kept {} of {} recordings", since, kept.len(), total);

    kept
}
