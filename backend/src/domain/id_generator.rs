use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Produces epoch-millisecond ids that never repeat within a process.
///
/// A call landing in the same millisecond as the previous one (or earlier,
/// if the wall clock stepped back) gets the previous value plus one.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator whose next id is strictly greater than `last`
    pub fn starting_after(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }

    pub fn next_id(&self) -> String {
        let now_millis = Utc::now().timestamp_millis().max(0) as u64;
        self.next_id_at(now_millis)
    }

    pub(crate) fn next_id_at(&self, now_millis: u64) -> String {
        let previous = match self.last.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now_millis.max(last.saturating_add(1)))
        }) {
            Ok(previous) | Err(previous) => previous,
        };

        now_millis.max(previous.saturating_add(1)).to_string()
    }
}
