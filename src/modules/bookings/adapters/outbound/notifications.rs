// Translate domain notification intents into outbox rows and enqueue them.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::bookings::core::notifications::NotificationIntent;
use crate::modules::bookings::core::ports::{NotificationOutbox, NotificationRow, OutboxError};

pub async fn dispatch_notifications(
    outbox: &impl NotificationOutbox,
    booking_id: Uuid,
    occurred_at: DateTime<Utc>,
    intents: &[NotificationIntent],
) -> Result<(), OutboxError> {
    for intent in intents {
        outbox
            .enqueue(NotificationRow {
                recipient_id: intent.recipient_id,
                kind: intent.kind.as_str().to_string(),
                booking_id,
                occurred_at,
                payload: serde_json::json!({
                    "title": intent.title,
                    "body": intent.body,
                    "link": intent.link,
                }),
            })
            .await?;
    }
    Ok(())
}
