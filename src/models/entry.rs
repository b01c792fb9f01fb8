//! The time-tracking record and its wire/row representation.
//!
//! An [`Entry`] keeps explicit `Option` times in memory; the flattened
//! [`EntryRecord`] carries integer Unix seconds and is what both the
//! `entries` table and the HTTP API exchange. Conversions between the two
//! happen only at the storage boundary: immediately after a fetch and
//! immediately before a persist.

use crate::errors::AppResult;
use crate::utils::time::{format_duration, parse_duration};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One tracked activity: a start, an optional end, and a message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entry {
    pub id: Option<i64>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub message: String,
}

impl Entry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// True once a start instant has been recorded.
    pub fn started(&self) -> bool {
        self.start.is_some()
    }

    /// True once an end instant has been recorded.
    pub fn ended(&self) -> bool {
        self.end.is_some()
    }

    /// An entry that has started but not yet ended.
    pub fn open(&self) -> bool {
        self.started() && !self.ended()
    }

    /// Elapsed time: `end - start` once ended, `now - start` while running.
    ///
    /// Recomputed on every call. A start is required; an entry that never
    /// started reports a zero duration.
    pub fn duration(&self, now: DateTime<Utc>) -> Duration {
        let Some(start) = self.start else {
            return Duration::zero();
        };
        match self.end {
            Some(end) => end - start,
            None => now - start,
        }
    }

    /// Render the elapsed time as `<h>h <m>m <s>s`.
    pub fn time_string(&self, now: DateTime<Utc>) -> String {
        format_duration(self.duration(now))
    }

    /// Span the entry over `spec` (e.g. `"1h30m"`) counting from `now`.
    pub fn set_duration(&mut self, spec: &str, now: DateTime<Utc>) -> AppResult<()> {
        let duration = parse_duration(spec)?;
        self.start = Some(now);
        self.end = Some(now + duration);
        Ok(())
    }
}

/// Flattened entry as persisted and sent over the wire.
///
/// `0` consistently means "unset" for `id`, `start_time` and `end_time`;
/// timestamps are whole Unix seconds in both directions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub start_time: i64,
    #[serde(default)]
    pub end_time: i64,
    #[serde(default)]
    pub message: String,
}

impl From<EntryRecord> for Entry {
    /// After-read normalization: rebuild in-memory times from the stored
    /// integer seconds.
    fn from(rec: EntryRecord) -> Self {
        Self {
            id: (rec.id > 0).then_some(rec.id),
            start: from_unix(rec.start_time),
            end: from_unix(rec.end_time),
            message: rec.message,
        }
    }
}

impl From<&Entry> for EntryRecord {
    /// Flatten in-memory times to integer seconds. Does not default the
    /// start time; that is the write boundary's job.
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id.unwrap_or(0),
            start_time: entry.start.map(|t| t.timestamp()).unwrap_or(0),
            end_time: entry.end.map(|t| t.timestamp()).unwrap_or(0),
            message: entry.message.clone(),
        }
    }
}

fn from_unix(secs: i64) -> Option<DateTime<Utc>> {
    if secs <= 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn fresh_entry_is_neither_started_nor_ended() {
        let e = Entry::new("writing spec");
        assert!(!e.started());
        assert!(!e.ended());
        assert!(!e.open());
    }

    #[test]
    fn started_and_ended_track_recorded_instants() {
        let mut e = Entry::new("writing spec");
        e.start = Some(at(1_000));
        assert!(e.started());
        assert!(e.open());

        e.end = Some(at(2_000));
        assert!(e.ended());
        assert!(!e.open());
    }

    #[test]
    fn running_duration_counts_up_to_now() {
        let mut e = Entry::new("still going");
        e.start = Some(at(1_000));

        assert_eq!(e.duration(at(1_090)), Duration::seconds(90));
        // fresh on every call, not cached
        assert_eq!(e.duration(at(1_200)), Duration::seconds(200));
    }

    #[test]
    fn ended_duration_is_constant() {
        let mut e = Entry::new("done");
        e.start = Some(at(1_000));
        e.end = Some(at(4_000));

        assert_eq!(e.duration(at(5_000)), Duration::seconds(3_000));
        assert_eq!(e.duration(at(9_999)), Duration::seconds(3_000));
    }

    #[test]
    fn time_string_renders_hours_minutes_seconds() {
        let mut e = Entry::new("long one");
        e.start = Some(at(0));
        e.end = Some(at(3 * 3600 + 5 * 60 + 9));
        assert_eq!(e.time_string(at(0)), "3h 5m 9s");

        let mut short = Entry::new("short one");
        short.start = Some(at(0));
        short.end = Some(at(90));
        assert_eq!(short.time_string(at(0)), "0h 1m 30s");
    }

    #[test]
    fn set_duration_spans_from_now() {
        let now = at(50_000);
        let mut e = Entry::new("lunch");
        e.set_duration("1h", now).unwrap();

        assert_eq!(e.start, Some(now));
        assert_eq!(e.end, Some(now + Duration::hours(1)));
        assert_eq!(e.duration(now), Duration::hours(1));
    }

    #[test]
    fn set_duration_rejects_garbage() {
        let mut e = Entry::new("bad");
        assert!(e.set_duration("soon", at(0)).is_err());
        assert!(!e.started());
    }

    #[test]
    fn record_round_trip_preserves_times_and_message() {
        let mut e = Entry::new("round trip");
        e.id = Some(7);
        e.start = Some(at(1_700_000_000));
        e.end = Some(at(1_700_003_600));

        let rec = EntryRecord::from(&e);
        assert_eq!(rec.id, 7);
        assert_eq!(rec.start_time, 1_700_000_000);
        assert_eq!(rec.end_time, 1_700_003_600);

        assert_eq!(Entry::from(rec), e);
    }

    #[test]
    fn unset_fields_flatten_to_zero_and_back() {
        let e = Entry::new("open");
        let rec = EntryRecord::from(&e);
        assert_eq!(rec.id, 0);
        assert_eq!(rec.start_time, 0);
        assert_eq!(rec.end_time, 0);

        let back = Entry::from(rec);
        assert_eq!(back.id, None);
        assert!(!back.started());
        assert!(!back.ended());
    }
}
