//! Rolling daily-sentiment trend, persisted as a flat JSON object of
//! `YYYY-MM-DD -> integer` pairs so the file stays human-inspectable.

use chrono::{Duration, NaiveDate, Utc};
use std::collections::BTreeMap;
use std::path::PathBuf;

use pulse_core::{PulseError, PulseResult, TrendDirection};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Retention horizon: today plus the four preceding days.
pub const TREND_WINDOW_DAYS: i64 = 5;

/// File-backed store for the daily sentiment entries.
///
/// A missing file reads as an empty mapping; any read, parse or write
/// failure propagates. Trend state is the only data that survives a run,
/// so the caller treats store errors as fatal.
pub struct TrendStore {
    path: PathBuf,
}

impl TrendStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> PulseResult<BTreeMap<NaiveDate, i32>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let raw = std::fs::read_to_string(&self.path)?;
        let keyed: BTreeMap<String, i32> = serde_json::from_str(&raw)?;

        let mut entries = BTreeMap::new();
        for (key, value) in keyed {
            let date = NaiveDate::parse_from_str(&key, DATE_FORMAT).map_err(|e| {
                PulseError::TrendStore(format!("invalid date key {key:?}: {e}"))
            })?;
            entries.insert(date, value);
        }
        Ok(entries)
    }

    pub fn save(&self, entries: &BTreeMap<NaiveDate, i32>) -> PulseResult<()> {
        let keyed: BTreeMap<String, i32> = entries
            .iter()
            .map(|(date, value)| (date.format(DATE_FORMAT).to_string(), *value))
            .collect();
        let raw = serde_json::to_string_pretty(&keyed)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// Maintains the 5-day rolling window and reports its direction.
pub struct TrendTracker {
    store: TrendStore,
}

impl TrendTracker {
    pub fn new(store: TrendStore) -> Self {
        Self { store }
    }

    /// Record today's sentiment and report the window direction.
    ///
    /// Load, upsert (a rerun on the same day overwrites), prune everything
    /// outside `[today - 4, today]`, persist, then compare the oldest and
    /// newest retained values in date order.
    pub fn update(&self, today: NaiveDate, sentiment: i32) -> PulseResult<TrendDirection> {
        let mut entries = self.store.load()?;
        entries.insert(today, sentiment);

        let cutoff = today - Duration::days(TREND_WINDOW_DAYS - 1);
        let before = entries.len();
        entries.retain(|date, _| *date >= cutoff && *date <= today);
        if entries.len() < before {
            tracing::debug!(pruned = before - entries.len(), "dropped stale trend entries");
        }

        self.store.save(&entries)?;

        let direction = window_direction(&entries);
        tracing::info!(
            retained = entries.len(),
            direction = direction.to_label(),
            "trend updated"
        );
        Ok(direction)
    }

    /// `update` with the current calendar date.
    pub fn update_today(&self, sentiment: i32) -> PulseResult<TrendDirection> {
        self.update(Utc::now().date_naive(), sentiment)
    }
}

fn window_direction(entries: &BTreeMap<NaiveDate, i32>) -> TrendDirection {
    let (Some((_, &oldest)), Some((_, &newest))) =
        (entries.first_key_value(), entries.last_key_value())
    else {
        return TrendDirection::Insufficient;
    };
    if entries.len() < 2 {
        return TrendDirection::Insufficient;
    }

    if newest > oldest {
        TrendDirection::Improving
    } else if newest < oldest {
        TrendDirection::Worsening
    } else {
        TrendDirection::Stable
    }
}
