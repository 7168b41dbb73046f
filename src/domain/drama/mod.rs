pub mod entity;
pub mod invariants;
pub mod lifecycle;

pub use entity::{DramaDraft, DramaPatch, DramaRecord, Ratings, Viewer, WatchStatus};
pub use invariants::{validate_draft, validate_drama, validate_external_id, validate_rating, MAX_RATING};
pub use lifecycle::{plan_progress, plan_rating, plan_status, ProgressPlan};
