// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::drama::{Viewer, WatchStatus};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($event:ty, $name:literal) => {
        impl DomainEvent for $event {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { $name }
        }
    };
}

/// Emitted when a drama is added to the log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DramaAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub drama_id: Uuid,
    pub title: String,
    pub status: WatchStatus,
    pub total_episodes: u32,
}

impl DramaAdded {
    pub fn new(drama_id: Uuid, title: String, status: WatchStatus, total_episodes: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            drama_id,
            title,
            status,
            total_episodes,
        }
    }
}

impl_domain_event!(DramaAdded, "DramaAdded");

/// Emitted after a progress edit is written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DramaProgressUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub drama_id: Uuid,
    pub watched_episodes: u32,
    pub auto_completed: bool,
}

impl DramaProgressUpdated {
    pub fn new(drama_id: Uuid, watched_episodes: u32, auto_completed: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            drama_id,
            watched_episodes,
            auto_completed,
        }
    }
}

impl_domain_event!(DramaProgressUpdated, "DramaProgressUpdated");

/// Emitted after a manual status change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DramaStatusChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub drama_id: Uuid,
    pub previous: WatchStatus,
    pub status: WatchStatus,
}

impl DramaStatusChanged {
    pub fn new(drama_id: Uuid, previous: WatchStatus, status: WatchStatus) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            drama_id,
            previous,
            status,
        }
    }
}

impl_domain_event!(DramaStatusChanged, "DramaStatusChanged");

/// Emitted when one viewer rates a drama
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DramaRated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub drama_id: Uuid,
    pub viewer: Viewer,
    pub rating: f64,
}

impl DramaRated {
    pub fn new(drama_id: Uuid, viewer: Viewer, rating: f64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            drama_id,
            viewer,
            rating,
        }
    }
}

impl_domain_event!(DramaRated, "DramaRated");

/// Emitted when a drama is removed from the log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DramaRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub drama_id: Uuid,
}

impl DramaRemoved {
    pub fn new(drama_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            drama_id,
        }
    }
}

impl_domain_event!(DramaRemoved, "DramaRemoved");
