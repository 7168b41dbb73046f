// Watch-state rules for a single record.
//
// Every mutation is planned here against a freshly read record and the
// resulting patch is written by the caller in one partial update. Nothing in
// this module touches storage.

use super::entity::{DramaPatch, DramaRecord, Viewer, WatchStatus};
use super::invariants::validate_rating;
use crate::domain::{DomainError, DomainResult};

/// Patch produced by a progress edit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressPlan {
    pub patch: DramaPatch,
    /// Progress reached the full run and the status flipped to completed
    pub auto_completed: bool,
}

/// Plan a progress edit.
///
/// The stored `total_episodes` is authoritative: a value past the end of a
/// known run is clamped to the run length. Reaching the end of a known run
/// completes the record in the same write. Unknown length (0) never does.
pub fn plan_progress(record: &DramaRecord, watched_episodes: i64) -> DomainResult<ProgressPlan> {
    if watched_episodes < 0 {
        return Err(DomainError::InvalidProgress(watched_episodes));
    }
    let total = record.total_episodes;
    let clamped = if total > 0 {
        watched_episodes.min(i64::from(total))
    } else {
        watched_episodes
    };
    let watched =
        u32::try_from(clamped).map_err(|_| DomainError::InvalidProgress(watched_episodes))?;
    let auto_completed = total > 0 && watched >= total;

    let patch = DramaPatch {
        watched_episodes: Some(watched),
        status: auto_completed.then_some(WatchStatus::Completed),
        ..DramaPatch::default()
    };

    Ok(ProgressPlan {
        patch,
        auto_completed,
    })
}

/// Plan a status change.
///
/// `chosen_by` is written only when supplied. Moving to watching needs a
/// chooser, either supplied now or already on the record. Completing a known
/// run forces progress to the full count.
pub fn plan_status(
    record: &DramaRecord,
    status: WatchStatus,
    chosen_by: Option<Viewer>,
) -> DomainResult<DramaPatch> {
    if status == WatchStatus::Watching && chosen_by.is_none() && record.chosen_by.is_none() {
        return Err(DomainError::MissingChosenBy);
    }

    let watched_episodes = match status {
        WatchStatus::Completed if record.total_episodes > 0 => Some(record.total_episodes),
        _ => None,
    };

    Ok(DramaPatch {
        status: Some(status),
        chosen_by,
        watched_episodes,
        rating: None,
    })
}

/// Plan a rating change. Touches exactly one viewer's rating.
pub fn plan_rating(viewer: Viewer, rating: f64) -> DomainResult<DramaPatch> {
    validate_rating(rating)?;
    Ok(DramaPatch {
        rating: Some((viewer, rating)),
        ..DramaPatch::default()
    })
}
