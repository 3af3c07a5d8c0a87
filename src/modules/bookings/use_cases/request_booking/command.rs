use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::bookings::core::actor::Actor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBooking {
    pub student_id: Uuid,
    pub tutor_id: Uuid,
    pub subject_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub notes: Option<String>,
    pub actor: Actor,
}
