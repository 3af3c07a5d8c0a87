// Booking is the canonical domain record and the wire contract of the
// service: every operation reads or writes this shape.
//
// Boundaries
// - This file must not perform input or output.
// - Status changes go through `transitions`; nothing here mutates state.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::bookings::core::status::BookingStatus;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubjectRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StudentRef {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TutorRef {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub display_picture: Option<String>,
}

impl StudentRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl TutorRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub subject: SubjectRef,
    pub student: StudentRef,
    pub tutor: TutorRef,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub meeting_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// True when `actor_id` is the student on this booking.
    pub fn is_student(&self, actor_id: Uuid) -> bool {
        self.student.id == actor_id
    }

    /// True when `actor_id` is the tutor on this booking.
    pub fn is_tutor(&self, actor_id: Uuid) -> bool {
        self.tutor.id == actor_id
    }
}
