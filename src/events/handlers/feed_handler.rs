// src/events/handlers/feed_handler.rs
//
// Feed Event Handler
//
// Bridges the event bus and the FeedService: every drama mutation triggers a
// snapshot refresh.
//
// RULES:
// - Delegates all work to FeedService
// - A failed refresh is logged and leaves the previous snapshot in place

use std::sync::Arc;

use crate::events::{
    DomainEvent, DramaAdded, DramaProgressUpdated, DramaRated, DramaRemoved, DramaStatusChanged,
    EventBus,
};
use crate::services::FeedService;

/// Registers feed refresh handlers for every drama mutation event.
pub fn register_feed_handlers(bus: &EventBus, feed: Arc<FeedService>) {
    subscribe_refresh::<DramaAdded>(bus, &feed);
    subscribe_refresh::<DramaProgressUpdated>(bus, &feed);
    subscribe_refresh::<DramaStatusChanged>(bus, &feed);
    subscribe_refresh::<DramaRated>(bus, &feed);
    subscribe_refresh::<DramaRemoved>(bus, &feed);

    log::info!("[FEED] Handlers registered");
}

fn subscribe_refresh<E>(bus: &EventBus, feed: &Arc<FeedService>)
where
    E: DomainEvent + 'static,
{
    let feed = Arc::clone(feed);
    bus.subscribe::<E, _>(move |event| {
        if let Err(e) = feed.refresh() {
            log::error!(
                "[FEED] Refresh after {} ({}) failed: {}",
                event.event_type(),
                event.event_id(),
                e
            );
        }
    });
}
