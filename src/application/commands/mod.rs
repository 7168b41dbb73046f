// src/application/commands/mod.rs
//
// HTTP Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the UI and the services
// - Commands accept DTOs, return DTOs
// - Commands convert errors into ErrorResponse
// - Commands NEVER contain business logic

pub mod drama_commands;
pub mod search_commands;
pub mod statistics_commands;
pub mod stream_commands;

pub use drama_commands::*;
pub use search_commands::*;
pub use statistics_commands::*;
pub use stream_commands::*;
