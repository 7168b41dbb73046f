// src/integrations/provider.rs
//
// Metadata provider boundary.
//
// Provider-neutral DTOs: nothing here knows about TMDB wire formats, and
// nothing here creates or mutates domain records.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// One hit from a title search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowSummary {
    pub external_id: String,
    pub name: String,
    pub original_name: Option<String>,
    pub poster_path: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: f64,
    pub overview: Option<String>,
    pub origin_country: Vec<String>,
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub page: u32,
    pub results: Vec<ShowSummary>,
    pub total_pages: u32,
    pub total_results: u32,
}

impl SearchPage {
    pub fn empty() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

/// Full description of a single show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowDetails {
    pub external_id: String,
    pub name: String,
    pub poster_path: Option<String>,
    /// 0 when the provider does not know the episode count
    pub number_of_episodes: u32,
    pub number_of_seasons: u32,
    pub genres: Vec<String>,
    pub overview: Option<String>,
    pub status: Option<String>,
    pub tagline: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: f64,
    pub cast: Vec<CastMember>,
}

/// Read-only source of show metadata.
///
/// Failures surface as `AppError::MetadataUnavailable`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Search shows by title. A blank query returns an empty page without
    /// touching the network.
    async fn search(&self, query: &str, language: &str) -> AppResult<SearchPage>;

    async fn get_details(&self, external_id: &str, language: &str) -> AppResult<ShowDetails>;
}
