// src/application/state.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::error::AppResult;
use crate::events::{create_event_bus, register_feed_handlers, EventBus};
use crate::integrations::MetadataProvider;
use crate::repositories::{DramaRepository, SqliteDramaRepository};
use crate::services::{DramaService, FeedService, StatisticsService};

/// Application state shared by every HTTP command.
/// All fields are Arc-wrapped; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub event_bus: Arc<EventBus>,
    pub metadata: Arc<dyn MetadataProvider>,
    pub drama_service: Arc<DramaService>,
    pub feed_service: Arc<FeedService>,
    pub statistics_service: Arc<StatisticsService>,
    /// Provider language used when a request does not name one
    pub default_language: String,
}

impl AppState {
    /// Wire repositories, services and event handlers over an initialized
    /// database.
    pub fn initialize(
        pool: Arc<ConnectionPool>,
        metadata: Arc<dyn MetadataProvider>,
        default_language: String,
    ) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let event_bus = Arc::new(create_event_bus());

        // 2. REPOSITORIES
        let drama_repo: Arc<dyn DramaRepository> = Arc::new(SqliteDramaRepository::new(pool.clone()));

        // 3. SERVICES
        let drama_service = Arc::new(DramaService::new(
            drama_repo.clone(),
            metadata.clone(),
            event_bus.clone(),
            default_language.clone(),
        ));
        let feed_service = Arc::new(FeedService::new(drama_repo.clone())?);
        let statistics_service = Arc::new(StatisticsService::new(drama_repo));

        // 4. EVENT HANDLER REGISTRATION (WIRING)
        register_feed_handlers(&event_bus, feed_service.clone());

        Ok(Self {
            pool,
            event_bus,
            metadata,
            drama_service,
            feed_service,
            statistics_service,
            default_language,
        })
    }

    /// Language from the request, falling back to the configured default
    pub fn language(&self, requested: Option<String>) -> String {
        requested
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| self.default_language.clone())
    }
}
