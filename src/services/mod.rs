// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod drama_service;
pub mod feed_service;
pub mod statistics_service;

// Re-export all services and their types
pub use drama_service::{
    AddDramaRequest,
    DramaService,
    ProgressUpdate,
};

pub use feed_service::{
    FeedService,
    Snapshot,
};

pub use statistics_service::StatisticsService;
