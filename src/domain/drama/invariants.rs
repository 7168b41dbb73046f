use super::entity::{DramaDraft, DramaRecord, WatchStatus};
use crate::domain::{DomainError, DomainResult};

pub const MAX_RATING: f64 = 5.0;

/// Validates all DramaRecord invariants
pub fn validate_drama(drama: &DramaRecord) -> DomainResult<()> {
    validate_title(&drama.title)?;
    validate_episode_bounds(drama.watched_episodes, drama.total_episodes)?;
    validate_rating(drama.ratings.dan)?;
    validate_rating(drama.ratings.carol)?;
    validate_chosen_by(drama)?;
    Ok(())
}

/// Rules a draft must satisfy before anything is written
pub fn validate_draft(draft: &DramaDraft) -> DomainResult<()> {
    validate_title(&draft.title)?;
    validate_external_id(&draft.external_id)?;

    match draft.status {
        WatchStatus::Watchlist => Ok(()),
        WatchStatus::Watching if draft.chosen_by.is_none() => Err(DomainError::MissingChosenBy),
        WatchStatus::Watching => Ok(()),
        WatchStatus::Completed => Err(DomainError::InvalidInitialStatus(draft.status.to_string())),
    }
}

/// Ratings live on a closed 0..=5 scale. NaN and infinities are rejected.
pub fn validate_rating(rating: f64) -> DomainResult<()> {
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        return Err(DomainError::InvalidRating(rating));
    }
    Ok(())
}

/// TMDB show ids are plain decimal numbers. Anything else would change the
/// provider path it is interpolated into.
pub fn validate_external_id(external_id: &str) -> DomainResult<()> {
    if external_id.is_empty() || !external_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::InvalidExternalId(external_id.to_string()));
    }
    Ok(())
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Drama title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// An unknown length (0) places no upper bound on progress
fn validate_episode_bounds(watched: u32, total: u32) -> DomainResult<()> {
    if total > 0 && watched > total {
        return Err(DomainError::InvariantViolation(format!(
            "Watched episodes {} exceed total {}",
            watched, total
        )));
    }
    Ok(())
}

fn validate_chosen_by(drama: &DramaRecord) -> DomainResult<()> {
    if drama.status == WatchStatus::Watching && drama.chosen_by.is_none() {
        return Err(DomainError::MissingChosenBy);
    }
    Ok(())
}

/// Invariants that must hold true for the Drama domain:
///
/// 1. Record id, external id, title and poster never change after creation
/// 2. total_episodes is fixed at creation; 0 means unknown
/// 3. 0 <= watched_episodes <= total_episodes whenever total_episodes > 0
/// 4. Each rating is in [0, 5]; the two ratings are independent
/// 5. A watching record always names who chose it
/// 6. chosen_by is never assigned unless a caller supplied it
