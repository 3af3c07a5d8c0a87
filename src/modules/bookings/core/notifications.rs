// Notification intents produced by the domain as part of an accepted
// decision. The outbound dispatcher translates these into outbox rows;
// delivery itself belongs to the external notification emitter.

use uuid::Uuid;

use crate::modules::bookings::core::booking::Booking;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    BookingRequest,
    BookingConfirmation,
    BookingCancellation,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BookingRequest => "BOOKING_REQUEST",
            Self::BookingConfirmation => "BOOKING_CONFIRMATION",
            Self::BookingCancellation => "BOOKING_CANCELLATION",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NotificationIntent {
    pub recipient_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub link: String,
}

pub fn booking_requested(booking: &Booking) -> NotificationIntent {
    NotificationIntent {
        recipient_id: booking.tutor.id,
        kind: NotificationKind::BookingRequest,
        title: "New Booking Request".to_string(),
        body: format!(
            "You have a new booking request from {}",
            booking.student.full_name()
        ),
        link: format!("/tutor/bookings/{}", booking.id),
    }
}

pub fn booking_confirmed(booking: &Booking) -> NotificationIntent {
    NotificationIntent {
        recipient_id: booking.student.id,
        kind: NotificationKind::BookingConfirmation,
        title: "Booking Confirmed".to_string(),
        body: format!(
            "Your booking with {} has been confirmed.",
            booking.tutor.full_name()
        ),
        link: format!("/student/bookings/{}", booking.id),
    }
}

pub fn booking_rejected(booking: &Booking) -> NotificationIntent {
    NotificationIntent {
        recipient_id: booking.student.id,
        kind: NotificationKind::BookingCancellation,
        title: "Booking Rejected".to_string(),
        body: format!(
            "Your booking with {} has been rejected.",
            booking.tutor.full_name()
        ),
        link: format!("/student/bookings/{}", booking.id),
    }
}

/// Cancellation notifies the counterpart of whoever cancelled; an
/// administrative cancellation notifies both parties.
pub fn cancelled_for_student(booking: &Booking) -> NotificationIntent {
    NotificationIntent {
        recipient_id: booking.student.id,
        kind: NotificationKind::BookingCancellation,
        title: "Booking Cancelled".to_string(),
        body: format!(
            "Your booking with {} has been cancelled.",
            booking.tutor.full_name()
        ),
        link: format!("/student/bookings/{}", booking.id),
    }
}

pub fn cancelled_for_tutor(booking: &Booking) -> NotificationIntent {
    NotificationIntent {
        recipient_id: booking.tutor.id,
        kind: NotificationKind::BookingCancellation,
        title: "Booking Cancelled".to_string(),
        body: format!(
            "Your booking with {} has been cancelled.",
            booking.student.full_name()
        ),
        link: format!("/tutor/bookings/{}", booking.id),
    }
}
