// Ports define what the core needs from the outside world, without
// implementing it.
//
// Responsibilities
// - Keep the core independent of any database, directory service or
//   notification broker by coding against traits.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in
//   the adapters layer; the durable booking record is owned by whichever
//   backend sits behind BookingStore.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value as Json;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::bookings::core::availability::AvailabilitySlot;
use crate::modules::bookings::core::booking::{Booking, StudentRef, SubjectRef, TutorRef};
use crate::modules::bookings::core::status::BookingStatus;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("status conflict on booking {id}: expected {expected}, actual {actual}")]
    StatusConflict {
        id: Uuid,
        expected: BookingStatus,
        actual: BookingStatus,
    },

    #[error("booking {0} not found")]
    NotFound(Uuid),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Persistence boundary for booking records. `update_if_status` is the
/// conditional write the transition flow relies on: the check against the
/// expected status and the write must be one atomic unit.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn insert(&self, booking: Booking) -> Result<(), StoreError>;
    async fn get(&self, id: Uuid) -> Result<Booking, StoreError>;
    async fn update_if_status(
        &self,
        expected: BookingStatus,
        booking: Booking,
    ) -> Result<(), StoreError>;
    async fn list_all(&self) -> Result<Vec<Booking>, StoreError>;
    async fn list_by_tutor(&self, tutor_id: Uuid) -> Result<Vec<Booking>, StoreError>;
    async fn remove(&self, id: Uuid) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
pub struct NotificationRow {
    pub recipient_id: Uuid,
    pub kind: String,
    pub booking_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub payload: Json,
}

#[derive(Debug, Error)]
pub enum OutboxError {
    #[error("duplicate notification for booking {booking_id} kind {kind}")]
    Duplicate { booking_id: Uuid, kind: String },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Fire-and-forget boundary to the external notification emitter.
#[async_trait]
pub trait NotificationOutbox: Send + Sync {
    async fn enqueue(&self, row: NotificationRow) -> Result<(), OutboxError>;
}

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("scheduler backend error: {0}")]
    Backend(String),
}

/// External scheduling collaborator that issues meeting links on
/// confirmation.
#[async_trait]
pub trait MeetingScheduler: Send + Sync {
    async fn create_meeting(&self, booking_id: Uuid) -> Result<String, SchedulerError>;
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct TutorProfile {
    pub tutor: TutorRef,
    pub weekly_slots: Vec<AvailabilitySlot>,
}

/// Read-only view of the identity provider's directory: party references
/// for embedding into bookings, plus the tutor's declared schedule.
#[async_trait]
pub trait PartyDirectory: Send + Sync {
    async fn student(&self, id: Uuid) -> Result<Option<StudentRef>, DirectoryError>;
    async fn tutor(&self, id: Uuid) -> Result<Option<TutorProfile>, DirectoryError>;
    async fn subject(&self, id: Uuid) -> Result<Option<SubjectRef>, DirectoryError>;
}
