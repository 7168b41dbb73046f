// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - Explicit SQL only

pub mod drama_repository;

pub use drama_repository::{DramaRepository, SqliteDramaRepository};
