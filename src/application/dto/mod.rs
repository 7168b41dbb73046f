// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations (camelCase JSON)
// - DTOs are simple, serializable structs
// - Parsing of loose UI input happens here, before any service is called

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::error_handling::ErrorResponse;
use crate::domain::drama::{DramaRecord, Ratings, Viewer, WatchStatus};
use crate::domain::statistics::DramaStatistics;
use crate::services::{AddDramaRequest, ProgressUpdate};

// ============================================================================
// DRAMA DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DramaDto {
    pub id: String,
    pub external_id: String,
    pub title: String,
    pub poster_path: String,
    pub status: String,
    pub chosen_by: Option<String>,
    pub ratings: RatingsDto,
    pub total_episodes: u32,
    pub watched_episodes: u32,
    pub progress_percent: Option<f64>,
    pub average_rating: f64,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingsDto {
    pub dan: f64,
    pub carol: f64,
}

impl From<Ratings> for RatingsDto {
    fn from(ratings: Ratings) -> Self {
        Self {
            dan: ratings.dan,
            carol: ratings.carol,
        }
    }
}

impl From<&DramaRecord> for DramaDto {
    fn from(drama: &DramaRecord) -> Self {
        Self {
            id: drama.id.to_string(),
            external_id: drama.external_id.clone(),
            title: drama.title.clone(),
            poster_path: drama.poster_path.clone(),
            status: drama.status.to_string(),
            chosen_by: drama.chosen_by.map(|v| v.to_string()),
            ratings: drama.ratings.into(),
            total_episodes: drama.total_episodes,
            watched_episodes: drama.watched_episodes,
            progress_percent: drama.progress_percent(),
            average_rating: drama.average_rating(),
            created_at: drama.created_at.to_rfc3339(),
        }
    }
}

impl From<DramaRecord> for DramaDto {
    fn from(drama: DramaRecord) -> Self {
        Self::from(&drama)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDramaDto {
    pub external_id: String,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    pub status: String,
    #[serde(default)]
    pub chosen_by: Option<String>,
}

impl TryFrom<AddDramaDto> for AddDramaRequest {
    type Error = ErrorResponse;

    fn try_from(dto: AddDramaDto) -> Result<Self, Self::Error> {
        Ok(Self {
            external_id: dto.external_id,
            title: dto.title,
            poster_path: dto.poster_path.unwrap_or_default(),
            status: parse_status(&dto.status)?,
            chosen_by: dto.chosen_by.as_deref().map(parse_viewer).transpose()?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedDto {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressDto {
    /// Signed so negative input reaches the domain check
    pub watched_episodes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResultDto {
    pub watched_episodes: u32,
    pub status: String,
    pub auto_completed: bool,
}

impl From<ProgressUpdate> for ProgressResultDto {
    fn from(update: ProgressUpdate) -> Self {
        Self {
            watched_episodes: update.watched_episodes,
            status: update.status.to_string(),
            auto_completed: update.auto_completed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRatingDto {
    pub viewer: String,
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusDto {
    pub status: String,
    #[serde(default)]
    pub chosen_by: Option<String>,
}

// ============================================================================
// QUERY DTOs
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDramasQuery {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageQuery {
    pub language: Option<String>,
}

// ============================================================================
// STATISTICS DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DramaStatisticsDto {
    pub total: usize,
    pub watching: usize,
    pub completed: usize,
    pub watchlist: usize,
    pub episodes_watched: u64,
    pub hours_watched: u64,
    pub watching_percent: f64,
    pub completed_percent: f64,
    pub watchlist_percent: f64,
    pub generated_at: String,
}

impl From<DramaStatistics> for DramaStatisticsDto {
    fn from(stats: DramaStatistics) -> Self {
        Self {
            total: stats.total,
            watching: stats.watching,
            completed: stats.completed,
            watchlist: stats.watchlist,
            episodes_watched: stats.episodes_watched,
            hours_watched: stats.hours_watched,
            watching_percent: stats.watching_percent,
            completed_percent: stats.completed_percent,
            watchlist_percent: stats.watchlist_percent,
            generated_at: stats.generated_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// PARSING HELPERS
// ============================================================================

pub fn parse_drama_id(raw: &str) -> Result<Uuid, ErrorResponse> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation(format!("Invalid drama id: {}", raw)))
}

pub fn parse_status(raw: &str) -> Result<WatchStatus, ErrorResponse> {
    raw.parse::<WatchStatus>().map_err(ErrorResponse::validation)
}

pub fn parse_viewer(raw: &str) -> Result<Viewer, ErrorResponse> {
    raw.parse::<Viewer>().map_err(ErrorResponse::validation)
}
