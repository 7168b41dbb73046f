// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod drama;
pub mod statistics;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Drama Domain
pub use drama::{
    plan_progress, plan_rating, plan_status, validate_draft, validate_drama, validate_rating,
    DramaDraft, DramaPatch, DramaRecord, ProgressPlan, Ratings, Viewer, WatchStatus,
};

// Statistics Domain (Derived Data)
pub use statistics::DramaStatistics;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Rating {0} is outside 0..=5")]
    InvalidRating(f64),

    #[error("Watched episodes cannot be {0}")]
    InvalidProgress(i64),

    #[error("A show being watched must name who chose it")]
    MissingChosenBy,

    #[error("A new drama cannot start as {0}")]
    InvalidInitialStatus(String),

    #[error("External id must be a numeric TMDB id, got '{0}'")]
    InvalidExternalId(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
