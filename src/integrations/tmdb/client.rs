// src/integrations/tmdb/client.rs
//
// TMDB API Integration
//
// ARCHITECTURE:
// - REST client for the TMDB v3 API (`/search/tv`, `/tv/{id}`)
// - API key is passed as a query parameter on every request
// - Maps external data → provider DTOs (NO domain mutation)
// - Used by DramaService when a drama is added, and by the search endpoints
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Any transport error or non-success status is MetadataUnavailable
// - A non-numeric show id is rejected before any request is made
// - No retries: the caller decides what to do with a failure

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use std::time::Duration;

use crate::config::TmdbConfig;
use crate::domain::drama::validate_external_id;
use crate::error::{AppError, AppResult};
use crate::integrations::provider::{
    CastMember, MetadataProvider, SearchPage, ShowDetails, ShowSummary,
};

/// Cast members kept from the credits block
const MAX_CAST: usize = 6;

/// Search response from `/search/tv`
#[derive(Debug, Deserialize)]
struct SearchResponse {
    page: u32,
    results: Vec<TvShowData>,
    total_pages: u32,
    total_results: u32,
}

/// A show as it appears in search results
#[derive(Debug, Deserialize)]
struct TvShowData {
    id: i64,
    name: String,
    original_name: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    first_air_date: Option<String>,
    #[serde(default)]
    vote_average: f64,
    #[serde(default)]
    origin_country: Vec<String>,
}

/// Response from `/tv/{id}?append_to_response=credits`
#[derive(Debug, Deserialize)]
struct TvDetailsData {
    id: i64,
    name: String,
    overview: Option<String>,
    poster_path: Option<String>,
    first_air_date: Option<String>,
    #[serde(default)]
    vote_average: f64,
    number_of_episodes: Option<u32>,
    number_of_seasons: Option<u32>,
    status: Option<String>,
    tagline: Option<String>,
    #[serde(default)]
    genres: Vec<GenreData>,
    credits: Option<CreditsData>,
}

#[derive(Debug, Deserialize)]
struct GenreData {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CreditsData {
    #[serde(default)]
    cast: Vec<CastData>,
}

#[derive(Debug, Deserialize)]
struct CastData {
    name: String,
    character: Option<String>,
    profile_path: Option<String>,
}

/// TMDB API Client
pub struct TmdbClient {
    base_url: String,
    api_key: String,
    http_client: Client,
}

impl TmdbClient {
    /// Create a client from validated configuration
    pub fn new(config: &TmdbConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            http_client,
        })
    }

    // ========================================================================
    // INTERNAL: Request Execution
    // ========================================================================

    /// GET `path` with the API key and `params`, decoding a JSON body
    async fn get_json<T>(&self, path: &str, params: &[(&str, &str)]) -> AppResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("TMDB request: GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::MetadataUnavailable(format!("TMDB request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("TMDB returned {} for {}: {}", status, path, body);
            return Err(AppError::MetadataUnavailable(format!(
                "TMDB API returned status: {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::MetadataUnavailable(format!("Failed to parse TMDB response: {}", e)))
    }

    fn map_show(show: TvShowData) -> ShowSummary {
        ShowSummary {
            external_id: show.id.to_string(),
            name: show.name,
            original_name: show.original_name,
            poster_path: show.poster_path,
            first_air_date: show.first_air_date,
            vote_average: show.vote_average,
            overview: show.overview,
            origin_country: show.origin_country,
        }
    }

    fn map_details(details: TvDetailsData) -> ShowDetails {
        let cast = details
            .credits
            .map(|credits| {
                credits
                    .cast
                    .into_iter()
                    .take(MAX_CAST)
                    .map(|c| CastMember {
                        name: c.name,
                        character: c.character,
                        profile_path: c.profile_path,
                    })
                    .collect()
            })
            .unwrap_or_default();

        ShowDetails {
            external_id: details.id.to_string(),
            name: details.name,
            poster_path: details.poster_path,
            number_of_episodes: details.number_of_episodes.unwrap_or(0),
            number_of_seasons: details.number_of_seasons.unwrap_or(0),
            genres: details.genres.into_iter().map(|g| g.name).collect(),
            overview: details.overview,
            status: details.status,
            tagline: details.tagline,
            first_air_date: details.first_air_date,
            vote_average: details.vote_average,
            cast,
        }
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn search(&self, query: &str, language: &str) -> AppResult<SearchPage> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchPage::empty());
        }

        let response: SearchResponse = self
            .get_json(
                "/search/tv",
                &[
                    ("query", query),
                    ("language", language),
                    ("include_adult", "false"),
                ],
            )
            .await?;

        log::info!("TMDB search '{}' returned {} results", query, response.results.len());

        Ok(SearchPage {
            page: response.page,
            results: response.results.into_iter().map(Self::map_show).collect(),
            total_pages: response.total_pages,
            total_results: response.total_results,
        })
    }

    async fn get_details(&self, external_id: &str, language: &str) -> AppResult<ShowDetails> {
        validate_external_id(external_id)?;
        let path = format!("/tv/{}", external_id);
        let details: TvDetailsData = self
            .get_json(
                &path,
                &[("language", language), ("append_to_response", "credits")],
            )
            .await?;

        Ok(Self::map_details(details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TmdbClient {
        TmdbClient::new(&TmdbConfig {
            api_key: "test-key".to_string(),
            base_url: server.uri(),
            language: "pt-BR".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_maps_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/tv"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("query", "Goblin"))
            .and(query_param("language", "pt-BR"))
            .and(query_param("include_adult", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "results": [{
                    "id": 67915,
                    "name": "Goblin",
                    "original_name": "도깨비",
                    "overview": "A goblin seeks his bride.",
                    "poster_path": "/goblin.jpg",
                    "backdrop_path": null,
                    "first_air_date": "2016-12-02",
                    "vote_average": 8.6,
                    "vote_count": 1200,
                    "popularity": 40.1,
                    "origin_country": ["KR"],
                    "original_language": "ko",
                    "genre_ids": [18]
                }],
                "total_pages": 1,
                "total_results": 1
            })))
            .mount(&server)
            .await;

        let page = client_for(&server).search("Goblin", "pt-BR").await.unwrap();

        assert_eq!(page.total_results, 1);
        assert_eq!(page.results[0].external_id, "67915");
        assert_eq!(page.results[0].poster_path.as_deref(), Some("/goblin.jpg"));
        assert_eq!(page.results[0].origin_country, vec!["KR"]);
    }

    #[tokio::test]
    async fn test_blank_query_skips_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let page = client_for(&server).search("   ", "pt-BR").await.unwrap();
        assert_eq!(page, SearchPage::empty());
    }

    #[tokio::test]
    async fn test_details_with_missing_episode_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/200"))
            .and(query_param("append_to_response", "credits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 200,
                "name": "Upcoming Show",
                "overview": "",
                "poster_path": null,
                "number_of_episodes": null,
                "number_of_seasons": 1,
                "genres": [{"id": 18, "name": "Drama"}],
                "credits": {"cast": [
                    {"name": "A", "character": "a"}, {"name": "B"}, {"name": "C"},
                    {"name": "D"}, {"name": "E"}, {"name": "F"}, {"name": "G"}
                ]}
            })))
            .mount(&server)
            .await;

        let details = client_for(&server).get_details("200", "pt-BR").await.unwrap();

        assert_eq!(details.number_of_episodes, 0);
        assert_eq!(details.genres, vec!["Drama"]);
        assert_eq!(details.cast.len(), MAX_CAST);
        assert_eq!(details.cast[0].character.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn test_error_status_is_metadata_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/100"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let result = client_for(&server).get_details("100", "pt-BR").await;
        assert!(matches!(result, Err(AppError::MetadataUnavailable(_))));
    }

    #[tokio::test]
    async fn test_details_rejects_path_like_external_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/1/season/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1,
                "name": "Season 1",
                "number_of_episodes": 99
            })))
            .expect(0)
            .mount(&server)
            .await;

        let result = client_for(&server).get_details("1/season/1", "pt-BR").await;
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::InvalidExternalId(_)))
        ));
    }
}
