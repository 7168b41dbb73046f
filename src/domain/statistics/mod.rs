//! Statistics Invariants:
//!
//! 1. Statistics are ALWAYS derived from the current record set, NEVER stored
//! 2. Statistics can be recalculated at any time
//! 3. Statistics NEVER alter record state
//! 4. An empty log yields zero counts and zero percentages

pub mod entity;
pub use entity::{DramaStatistics, MINUTES_PER_EPISODE};
