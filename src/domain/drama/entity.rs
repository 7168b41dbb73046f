use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// A tracked show and the shared watch state of both viewers.
///
/// The serialized form is the stored document: `id` holds the TMDB id and the
/// store-assigned record id lives outside the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DramaRecord {
    /// Store-assigned identifier (row key, never part of the document)
    #[serde(skip)]
    pub id: Uuid,

    /// Identifier from the metadata provider
    #[serde(rename = "id")]
    pub external_id: String,

    pub title: String,

    /// Opaque poster reference as returned by the provider
    pub poster_path: String,

    pub status: WatchStatus,

    /// Who picked the show. Absent for list-only and legacy records.
    #[serde(
        rename = "chosenBy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub chosen_by: Option<Viewer>,

    #[serde(default)]
    pub ratings: Ratings,

    /// Fixed at creation. 0 means the length is unknown.
    #[serde(rename = "totalEpisodes")]
    pub total_episodes: u32,

    #[serde(rename = "watchedEpisodes")]
    pub watched_episodes: u32,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Where a show sits on the shared shelf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    Watchlist,
    Watching,
    Completed,
}

/// One of the two people sharing the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Viewer {
    Dan,
    Carol,
}

/// Independent per-viewer ratings on a 0..=5 scale. 0 means unrated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ratings {
    pub dan: f64,
    pub carol: f64,
}

/// Everything needed to persist a brand-new record.
/// Produced by the service once the episode count is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct DramaDraft {
    pub external_id: String,
    pub title: String,
    pub poster_path: String,
    pub status: WatchStatus,
    pub chosen_by: Option<Viewer>,
    pub total_episodes: u32,
    pub created_at: DateTime<Utc>,
}

/// Partial update. Only `Some` fields are written.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DramaPatch {
    pub status: Option<WatchStatus>,
    pub chosen_by: Option<Viewer>,
    pub watched_episodes: Option<u32>,
    pub rating: Option<(Viewer, f64)>,
}

impl DramaRecord {
    /// Materialize a stored record from a draft and its assigned id
    pub fn from_draft(id: Uuid, draft: DramaDraft) -> Self {
        Self {
            id,
            external_id: draft.external_id,
            title: draft.title,
            poster_path: draft.poster_path,
            status: draft.status,
            chosen_by: draft.chosen_by,
            ratings: Ratings::default(),
            total_episodes: draft.total_episodes,
            watched_episodes: 0,
            created_at: draft.created_at,
        }
    }

    /// Watched share of the full run, `None` when the length is unknown
    pub fn progress_percent(&self) -> Option<f64> {
        if self.total_episodes == 0 {
            return None;
        }
        let percent = f64::from(self.watched_episodes) / f64::from(self.total_episodes) * 100.0;
        Some(percent.min(100.0))
    }

    pub fn average_rating(&self) -> f64 {
        (self.ratings.dan + self.ratings.carol) / 2.0
    }

    /// Apply a patch in memory, mirroring what the store does on update
    pub fn apply(&mut self, patch: &DramaPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(viewer) = patch.chosen_by {
            self.chosen_by = Some(viewer);
        }
        if let Some(watched) = patch.watched_episodes {
            self.watched_episodes = watched;
        }
        if let Some((viewer, rating)) = patch.rating {
            self.ratings.set(viewer, rating);
        }
    }
}

impl Ratings {
    pub fn set(&mut self, viewer: Viewer, rating: f64) {
        match viewer {
            Viewer::Dan => self.dan = rating,
            Viewer::Carol => self.carol = rating,
        }
    }
}

impl DramaPatch {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.chosen_by.is_none()
            && self.watched_episodes.is_none()
            && self.rating.is_none()
    }
}

impl Viewer {
    /// Key of this viewer's entry inside the `ratings` map
    pub fn rating_key(&self) -> &'static str {
        match self {
            Viewer::Dan => "dan",
            Viewer::Carol => "carol",
        }
    }
}

impl std::fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatchStatus::Watchlist => write!(f, "watchlist"),
            WatchStatus::Watching => write!(f, "watching"),
            WatchStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for WatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "watchlist" => Ok(WatchStatus::Watchlist),
            "watching" => Ok(WatchStatus::Watching),
            "completed" => Ok(WatchStatus::Completed),
            other => Err(format!("Invalid status: {}", other)),
        }
    }
}

impl std::fmt::Display for Viewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Viewer::Dan => write!(f, "Dan"),
            Viewer::Carol => write!(f, "Carol"),
        }
    }
}

impl FromStr for Viewer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dan" => Ok(Viewer::Dan),
            "carol" => Ok(Viewer::Carol),
            other => Err(format!("Unknown viewer: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(total: u32, watched: u32) -> DramaRecord {
        DramaRecord {
            id: Uuid::new_v4(),
            external_id: "100".to_string(),
            title: "Crash Landing on You".to_string(),
            poster_path: "/poster.jpg".to_string(),
            status: WatchStatus::Watching,
            chosen_by: Some(Viewer::Carol),
            ratings: Ratings::default(),
            total_episodes: total,
            watched_episodes: watched,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_document_omits_unset_chosen_by() {
        let mut record = sample(16, 0);
        record.chosen_by = None;

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("chosenBy").is_none());
        assert_eq!(json["id"], "100");
        assert_eq!(json["ratings"]["carol"], 0.0);
    }

    #[test]
    fn test_legacy_document_without_chosen_by_parses() {
        let json = r#"{
            "id": "42",
            "title": "Goblin",
            "poster_path": "/g.jpg",
            "status": "completed",
            "ratings": {"dan": 4.0, "carol": 5.0},
            "totalEpisodes": 16,
            "watchedEpisodes": 16,
            "createdAt": "2024-03-01T12:00:00Z"
        }"#;

        let record: DramaRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.chosen_by, None);
        assert_eq!(record.status, WatchStatus::Completed);
        assert_eq!(record.id, Uuid::nil());
    }

    #[test]
    fn test_progress_percent_unknown_length() {
        assert_eq!(sample(0, 5).progress_percent(), None);
        assert_eq!(sample(16, 8).progress_percent(), Some(50.0));
    }

    #[test]
    fn test_average_rating() {
        let mut record = sample(16, 0);
        record.ratings.set(Viewer::Dan, 3.0);
        record.ratings.set(Viewer::Carol, 4.0);
        assert_eq!(record.average_rating(), 3.5);
    }

    #[test]
    fn test_viewer_parsing_is_case_insensitive() {
        assert_eq!("carol".parse::<Viewer>().unwrap(), Viewer::Carol);
        assert_eq!("Dan".parse::<Viewer>().unwrap(), Viewer::Dan);
        assert!("eve".parse::<Viewer>().is_err());
    }
}
