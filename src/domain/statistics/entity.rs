use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::drama::{DramaRecord, WatchStatus};

/// Average episode runtime used for the hours estimate
pub const MINUTES_PER_EPISODE: u64 = 60;

/// Shelf counts and watch totals across the whole log.
/// Derived data: can be recomputed from any snapshot at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DramaStatistics {
    pub total: usize,
    pub watching: usize,
    pub completed: usize,
    pub watchlist: usize,
    pub episodes_watched: u64,
    pub hours_watched: u64,
    pub watching_percent: f64,
    pub completed_percent: f64,
    pub watchlist_percent: f64,
    pub generated_at: DateTime<Utc>,
}

impl DramaStatistics {
    pub fn from_records(records: &[DramaRecord]) -> Self {
        let count = |status: WatchStatus| records.iter().filter(|r| r.status == status).count();

        let total = records.len();
        let watching = count(WatchStatus::Watching);
        let completed = count(WatchStatus::Completed);
        let watchlist = count(WatchStatus::Watchlist);

        let episodes_watched: u64 = records
            .iter()
            .map(|r| u64::from(r.watched_episodes))
            .sum();
        let minutes = episodes_watched * MINUTES_PER_EPISODE;
        let hours_watched = (minutes + 30) / 60;

        Self {
            total,
            watching,
            completed,
            watchlist,
            episodes_watched,
            hours_watched,
            watching_percent: percent(watching, total),
            completed_percent: percent(completed, total),
            watchlist_percent: percent(watchlist, total),
            generated_at: Utc::now(),
        }
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}
