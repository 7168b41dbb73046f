// src/db/test_support.rs
//
// Throwaway on-disk databases for unit tests. The TempDir must outlive the pool.

use std::sync::Arc;
use tempfile::TempDir;

use super::{create_connection_pool, initialize_database, ConnectionPool};

pub fn temp_pool() -> (TempDir, Arc<ConnectionPool>) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let pool = create_connection_pool(&dir.path().join("dramalog-test.db")).expect("create pool");
    {
        let conn = pool.get().expect("get connection");
        initialize_database(&conn).expect("initialize schema");
    }
    (dir, Arc::new(pool))
}
