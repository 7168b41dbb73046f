// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the HTTP UI and the services
// - Translates between DTOs and domain entities
// - Never holds business rules

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod router;
pub mod state;

pub use dto::*;
pub use error_handling::{CommandResult, ErrorResponse, ErrorType};
pub use router::{build_cors_layer, build_router};
pub use state::AppState;
