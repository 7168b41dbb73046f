// src/services/statistics_service.rs
use std::sync::Arc;

use crate::domain::statistics::DramaStatistics;
use crate::error::AppResult;
use crate::repositories::DramaRepository;

/// Derived numbers for the dashboard. Nothing is persisted.
pub struct StatisticsService {
    drama_repo: Arc<dyn DramaRepository>,
}

impl StatisticsService {
    pub fn new(drama_repo: Arc<dyn DramaRepository>) -> Self {
        Self { drama_repo }
    }

    pub fn calculate_statistics(&self) -> AppResult<DramaStatistics> {
        let dramas = self.drama_repo.list_recent()?;
        let stats = DramaStatistics::from_records(&dramas);

        log::debug!(
            "Statistics: {} dramas, {} episodes watched",
            stats.total,
            stats.episodes_watched
        );

        Ok(stats)
    }
}
