// src/repositories/drama_repository.rs
//
// Drama document persistence
//
// Each record is stored as one JSON document. Partial updates go through
// SQLite's json_set so untouched fields (including a sibling rating) are never
// rewritten.

use chrono::SecondsFormat;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::drama::{DramaDraft, DramaPatch, DramaRecord, WatchStatus};
use crate::error::{AppError, AppResult};

pub trait DramaRepository: Send + Sync {
    /// Persist a new record and return its assigned id
    fn create(&self, draft: &DramaDraft) -> AppResult<Uuid>;
    /// Write only the fields named by the patch
    fn update(&self, id: Uuid, patch: &DramaPatch) -> AppResult<()>;
    /// Remove a record. Unknown ids are a no-op.
    fn delete(&self, id: Uuid) -> AppResult<()>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<DramaRecord>>;
    /// All records, newest first
    fn list_recent(&self) -> AppResult<Vec<DramaRecord>>;
    /// Records on one shelf, newest first
    fn list_by_status(&self, status: WatchStatus) -> AppResult<Vec<DramaRecord>>;
}

pub struct SqliteDramaRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteDramaRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to DramaRecord - returns rusqlite::Error for query_map compatibility
    fn row_to_drama(row: &Row) -> Result<DramaRecord, rusqlite::Error> {
        let id_str: String = row.get("id")?;
        let id = Uuid::parse_str(&id_str)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e)))?;

        let document: String = row.get("document")?;
        let mut drama: DramaRecord = serde_json::from_str(&document)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e)))?;

        drama.id = id;
        Ok(drama)
    }

    /// JSON path / value pairs for a patch, in json_set argument order
    fn patch_assignments(patch: &DramaPatch) -> Vec<(String, Value)> {
        let mut assignments = Vec::new();

        if let Some(status) = patch.status {
            assignments.push(("$.status".to_string(), Value::Text(status.to_string())));
        }
        if let Some(viewer) = patch.chosen_by {
            assignments.push(("$.chosenBy".to_string(), Value::Text(viewer.to_string())));
        }
        if let Some(watched) = patch.watched_episodes {
            assignments.push((
                "$.watchedEpisodes".to_string(),
                Value::Integer(i64::from(watched)),
            ));
        }
        if let Some((viewer, rating)) = patch.rating {
            assignments.push((
                format!("$.ratings.{}", viewer.rating_key()),
                Value::Real(rating),
            ));
        }

        assignments
    }
}

impl DramaRepository for SqliteDramaRepository {
    fn create(&self, draft: &DramaDraft) -> AppResult<Uuid> {
        let conn = self.pool.get()?;

        let id = Uuid::new_v4();
        let record = DramaRecord::from_draft(id, draft.clone());
        let document = serde_json::to_string(&record)?;

        conn.execute(
            "INSERT INTO dramas (id, document, created_at) VALUES (?1, ?2, ?3)",
            params![
                id.to_string(),
                document,
                record.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            ],
        )?;

        Ok(id)
    }

    fn update(&self, id: Uuid, patch: &DramaPatch) -> AppResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let assignments = Self::patch_assignments(patch);

        let conn = self.pool.get()?;

        let placeholders: Vec<String> = (0..assignments.len())
            .map(|i| format!("?{}, ?{}", i * 2 + 1, i * 2 + 2))
            .collect();
        let sql = format!(
            "UPDATE dramas SET document = json_set(document, {}) WHERE id = ?{}",
            placeholders.join(", "),
            assignments.len() * 2 + 1
        );

        let mut values: Vec<Value> = Vec::with_capacity(assignments.len() * 2 + 1);
        for (path, value) in assignments {
            values.push(Value::Text(path));
            values.push(value);
        }
        values.push(Value::Text(id.to_string()));

        let rows_affected = conn.execute(&sql, params_from_iter(values))?;
        if rows_affected == 0 {
            return Err(AppError::RecordNotFound(id));
        }

        Ok(())
    }

    fn delete(&self, id: Uuid) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute("DELETE FROM dramas WHERE id = ?1", params![id.to_string()])?;
        if rows_affected == 0 {
            log::debug!("Delete of unknown drama {} ignored", id);
        }

        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<DramaRecord>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT id, document FROM dramas WHERE id = ?1")?;

        match stmt.query_row(params![id.to_string()], Self::row_to_drama) {
            Ok(drama) => Ok(Some(drama)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_recent(&self) -> AppResult<Vec<DramaRecord>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, document FROM dramas
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let dramas = stmt
            .query_map([], Self::row_to_drama)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(dramas)
    }

    fn list_by_status(&self, status: WatchStatus) -> AppResult<Vec<DramaRecord>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, document FROM dramas
             WHERE json_extract(document, '$.status') = ?1
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let dramas = stmt
            .query_map(params![status.to_string()], Self::row_to_drama)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(dramas)
    }
}
