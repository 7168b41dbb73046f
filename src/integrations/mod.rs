// src/integrations/mod.rs
//
// External Integrations Module
//
// Read-only metadata sources. Nothing here writes drama records.

pub mod provider;
pub mod tmdb;

pub use provider::{CastMember, MetadataProvider, SearchPage, ShowDetails, ShowSummary};
pub use tmdb::TmdbClient;
