// In memory implementation of the NotificationOutbox port.
//
// Responsibilities
// - Collect rows for assertion in tests.
// - Reject a second row for the same (booking, kind) pair; each lifecycle
//   event notifies at most once per recipient set.

use std::collections::HashSet;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::bookings::core::ports::{NotificationOutbox, NotificationRow, OutboxError};

#[derive(Default)]
pub struct InMemoryNotificationOutbox {
    pub rows: Mutex<Vec<NotificationRow>>,
    seen: Mutex<HashSet<(Uuid, String, Uuid)>>,
}

impl InMemoryNotificationOutbox {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl NotificationOutbox for InMemoryNotificationOutbox {
    async fn enqueue(&self, row: NotificationRow) -> Result<(), OutboxError> {
        let key = (row.booking_id, row.kind.clone(), row.recipient_id);
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(key) {
                return Err(OutboxError::Duplicate {
                    booking_id: row.booking_id,
                    kind: row.kind,
                });
            }
        }
        self.rows.lock().await.push(row);
        Ok(())
    }
}
