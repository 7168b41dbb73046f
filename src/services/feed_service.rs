// src/services/feed_service.rs
//
// Live drama feed.
//
// Holds the latest full snapshot (newest first) in a watch channel. Handlers
// registered on the event bus refresh it after every mutation, so subscribers
// always see the complete ordered set and never a diff.

use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};
use uuid::Uuid;

use crate::domain::drama::DramaRecord;
use crate::error::AppResult;
use crate::repositories::DramaRepository;

pub type Snapshot = Arc<Vec<DramaRecord>>;

pub struct FeedService {
    drama_repo: Arc<dyn DramaRepository>,
    sender: watch::Sender<Snapshot>,
    /// Held across read and publish so an older read never overwrites a newer one
    refresh_lock: Mutex<()>,
}

impl FeedService {
    /// Create the feed primed with the current contents of the store
    pub fn new(drama_repo: Arc<dyn DramaRepository>) -> AppResult<Self> {
        let initial = drama_repo.list_recent()?;
        let (sender, _) = watch::channel(Arc::new(initial));
        Ok(Self {
            drama_repo,
            sender,
            refresh_lock: Mutex::new(()),
        })
    }

    /// Reload the snapshot from the store and publish it
    pub fn refresh(&self) -> AppResult<()> {
        let _guard = self
            .refresh_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let records = self.drama_repo.list_recent()?;
        log::debug!(
            "Feed refreshed: {} records, {} subscribers",
            records.len(),
            self.sender.receiver_count()
        );
        self.sender.send_replace(Arc::new(records));
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.sender.borrow().clone()
    }

    /// Receiver that observes the current snapshot and every later one
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.sender.subscribe()
    }

    /// Stream of full snapshots, starting with the current one
    pub fn stream(&self) -> impl Stream<Item = Snapshot> + Send + 'static {
        WatchStream::new(self.subscribe())
    }

    /// Stream of one record's state. Yields `None` once the record is gone.
    pub fn watch_drama(&self, drama_id: Uuid) -> impl Stream<Item = Option<DramaRecord>> + Send + 'static {
        self.stream()
            .map(move |snapshot| snapshot.iter().find(|r| r.id == drama_id).cloned())
    }
}
