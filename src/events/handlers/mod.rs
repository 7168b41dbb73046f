// src/events/handlers/mod.rs
//
// Event Handlers
//
// Handlers use closure-based subscription via EventBus::subscribe.
// Only registration functions are exported.

pub mod feed_handler;

pub use feed_handler::register_feed_handlers;
