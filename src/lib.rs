// src/lib.rs
// DramaLog - shared drama watch log for two viewers
//
// Architecture:
// - Domain-centric: watch-state rules live in the domain
// - Event-driven: services announce mutations on the event bus
// - Explicit: every mutation is read, planned, then written as a partial update
// - Application layer: HTTP boundary (axum)

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    DomainError, DramaDraft, DramaPatch, DramaRecord, DramaStatistics, Ratings, Viewer,
    WatchStatus,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::{AppConfig, TmdbConfig};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, register_feed_handlers, DomainEvent, DramaAdded, DramaProgressUpdated,
    DramaRated, DramaRemoved, DramaStatusChanged, EventBus, EventLogEntry,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, verify_database_integrity, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{DramaRepository, SqliteDramaRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{AddDramaRequest, DramaService, FeedService, ProgressUpdate, StatisticsService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{build_cors_layer, build_router, AppState};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{MetadataProvider, SearchPage, ShowDetails, ShowSummary, TmdbClient};
