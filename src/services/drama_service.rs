// src/services/drama_service.rs
//
// Drama lifecycle orchestration.
//
// Every mutation follows the same shape: read the record, plan a patch with the
// domain lifecycle rules, write the patch, then emit an event. Persistence
// failures surface as StorageWriteFailed and are never retried.

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::drama::{
    plan_progress, plan_rating, plan_status, validate_draft, validate_drama, DramaDraft,
    DramaPatch, DramaRecord, Viewer, WatchStatus,
};
use crate::error::{AppError, AppResult};
use crate::events::{DramaAdded, DramaProgressUpdated, DramaRated, DramaRemoved, DramaStatusChanged, EventBus};
use crate::integrations::MetadataProvider;
use crate::repositories::DramaRepository;

#[derive(Debug, Clone)]
pub struct AddDramaRequest {
    pub external_id: String,
    pub title: String,
    pub poster_path: String,
    pub status: WatchStatus,
    pub chosen_by: Option<Viewer>,
}

/// Outcome of a progress edit as written to the store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    pub watched_episodes: u32,
    pub status: WatchStatus,
    pub auto_completed: bool,
}

pub struct DramaService {
    drama_repo: Arc<dyn DramaRepository>,
    metadata: Arc<dyn MetadataProvider>,
    event_bus: Arc<EventBus>,
    language: String,
}

impl DramaService {
    pub fn new(
        drama_repo: Arc<dyn DramaRepository>,
        metadata: Arc<dyn MetadataProvider>,
        event_bus: Arc<EventBus>,
        language: String,
    ) -> Self {
        Self {
            drama_repo,
            metadata,
            event_bus,
            language,
        }
    }

    /// Add a show to the log.
    ///
    /// The episode count comes from the metadata provider; nothing is written
    /// when the provider fails.
    pub async fn add_drama(&self, request: AddDramaRequest) -> AppResult<Uuid> {
        let mut draft = DramaDraft {
            external_id: request.external_id,
            title: request.title,
            poster_path: request.poster_path,
            status: request.status,
            chosen_by: request.chosen_by,
            total_episodes: 0,
            created_at: Utc::now(),
        };

        validate_draft(&draft)?;

        let details = self
            .metadata
            .get_details(&draft.external_id, &self.language)
            .await
            .map_err(|e| match e {
                AppError::MetadataUnavailable(msg) => AppError::MetadataUnavailable(msg),
                other => AppError::MetadataUnavailable(other.to_string()),
            })?;
        draft.total_episodes = details.number_of_episodes;

        let id = self
            .drama_repo
            .create(&draft)
            .map_err(AppError::into_storage_failure)?;

        log::info!(
            "Added drama {} '{}' as {} ({} episodes)",
            id,
            draft.title,
            draft.status,
            draft.total_episodes
        );

        self.event_bus.emit(DramaAdded::new(
            id,
            draft.title,
            draft.status,
            draft.total_episodes,
        ));

        Ok(id)
    }

    /// Set the watched count, completing the record when it reaches the end
    /// of a known run.
    pub async fn update_progress(&self, drama_id: Uuid, watched_episodes: i64) -> AppResult<ProgressUpdate> {
        let record = self.require(drama_id)?;
        let plan = plan_progress(&record, watched_episodes)?;
        Self::check_result(&record, &plan.patch)?;

        self.drama_repo
            .update(drama_id, &plan.patch)
            .map_err(AppError::into_storage_failure)?;

        let update = ProgressUpdate {
            watched_episodes: plan.patch.watched_episodes.unwrap_or(record.watched_episodes),
            status: plan.patch.status.unwrap_or(record.status),
            auto_completed: plan.auto_completed,
        };

        if update.auto_completed {
            log::info!("Drama {} auto-completed at episode {}", drama_id, update.watched_episodes);
        }

        self.event_bus.emit(DramaProgressUpdated::new(
            drama_id,
            update.watched_episodes,
            update.auto_completed,
        ));

        Ok(update)
    }

    /// Set one viewer's rating. The other viewer's rating is not touched.
    pub async fn update_rating(&self, drama_id: Uuid, viewer: Viewer, rating: f64) -> AppResult<()> {
        let patch = plan_rating(viewer, rating)?;

        self.drama_repo
            .update(drama_id, &patch)
            .map_err(AppError::into_storage_failure)?;

        self.event_bus.emit(DramaRated::new(drama_id, viewer, rating));
        Ok(())
    }

    /// Move a record to another shelf.
    ///
    /// `chosen_by` is written only when given. Completing a known run fills
    /// progress to the full count.
    pub async fn update_status(
        &self,
        drama_id: Uuid,
        status: WatchStatus,
        chosen_by: Option<Viewer>,
    ) -> AppResult<()> {
        let record = self.require(drama_id)?;
        let patch = plan_status(&record, status, chosen_by)?;
        Self::check_result(&record, &patch)?;

        self.drama_repo
            .update(drama_id, &patch)
            .map_err(AppError::into_storage_failure)?;

        if let Some(watched) = patch.watched_episodes {
            if watched != record.watched_episodes {
                log::info!("Drama {} marked completed, progress set to {}", drama_id, watched);
            }
        }

        self.event_bus
            .emit(DramaStatusChanged::new(drama_id, record.status, status));
        Ok(())
    }

    /// Hard delete. Unknown ids succeed.
    pub async fn delete_drama(&self, drama_id: Uuid) -> AppResult<()> {
        self.drama_repo
            .delete(drama_id)
            .map_err(AppError::into_storage_failure)?;

        self.event_bus.emit(DramaRemoved::new(drama_id));
        Ok(())
    }

    pub fn get_drama(&self, drama_id: Uuid) -> AppResult<Option<DramaRecord>> {
        self.drama_repo.get_by_id(drama_id)
    }

    /// All records, newest first
    pub fn list_dramas(&self) -> AppResult<Vec<DramaRecord>> {
        self.drama_repo.list_recent()
    }

    pub fn list_by_status(&self, status: WatchStatus) -> AppResult<Vec<DramaRecord>> {
        self.drama_repo.list_by_status(status)
    }

    /// The record as it will read after the patch must satisfy every invariant
    fn check_result(record: &DramaRecord, patch: &DramaPatch) -> AppResult<()> {
        let mut next = record.clone();
        next.apply(patch);
        validate_drama(&next)?;
        Ok(())
    }

    fn require(&self, drama_id: Uuid) -> AppResult<DramaRecord> {
        self.drama_repo
            .get_by_id(drama_id)
            .map_err(AppError::into_storage_failure)?
            .ok_or(AppError::RecordNotFound(drama_id))
    }
}
