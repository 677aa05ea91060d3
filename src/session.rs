// session.rs
// Guards the shared "current selection" against stale detail responses: only
// the most recently issued request may commit its record.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::DetailRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Committed(DetailRecord),
    /// A newer request was issued before this one finished.
    Superseded,
}

#[derive(Default)]
pub struct DetailSession {
    generation: AtomicU64,
    current: Mutex<Option<(RequestToken, DetailRecord)>>,
}

impl DetailSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a token newer than every token issued before it.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.0
    }

    pub fn commit(&self, token: RequestToken, record: DetailRecord) -> Selection {
        match self.current.lock() {
            Ok(mut current) => {
                // Checked under the lock so two commits cannot interleave.
                if !self.is_latest(token) {
                    tracing::debug!(
                        "Discarding detail for {} from superseded request {}",
                        record.id,
                        token.0
                    );
                    return Selection::Superseded;
                }
                *current = Some((token, record.clone()));
                tracing::debug!("Committed detail for {} (request {})", record.id, token.0);
                Selection::Committed(record)
            }
            Err(e) => {
                tracing::error!("Failed to acquire selection lock: {}", e);
                Selection::Superseded
            }
        }
    }

    pub fn current(&self) -> Option<DetailRecord> {
        match self.current.lock() {
            Ok(current) => current.as_ref().map(|(_, record)| record.clone()),
            Err(e) => {
                tracing::error!("Failed to acquire selection lock: {}", e);
                None
            }
        }
    }
}
