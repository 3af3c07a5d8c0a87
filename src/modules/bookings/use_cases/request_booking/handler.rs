// Booking request handler orchestrates the creation flow.
//
// Responsibilities
// - Validate the command, resolve the parties through the directory,
//   check the window against the tutor's schedule and existing bookings,
//   persist the PENDING record, and queue the request notification.
// - Notification failures are logged, not surfaced; delivery is
//   fire-and-forget.

use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::bookings::adapters::outbound::notifications::dispatch_notifications;
use crate::modules::bookings::core::availability::{self, SlotUnavailable};
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::notifications;
use crate::modules::bookings::core::ports::{
    BookingStore, DirectoryError, NotificationOutbox, PartyDirectory, StoreError,
};
use crate::modules::bookings::core::status::BookingStatus;
use crate::modules::bookings::use_cases::request_booking::command::RequestBooking;
use crate::modules::bookings::use_cases::request_booking::decide::{
    decide_request, RequestDecideError,
};

#[derive(Debug, Error)]
pub enum RequestBookingError {
    #[error(transparent)]
    Invalid(#[from] RequestDecideError),

    #[error("unknown student {0}")]
    UnknownStudent(Uuid),

    #[error("unknown tutor {0}")]
    UnknownTutor(Uuid),

    #[error("unknown subject {0}")]
    UnknownSubject(Uuid),

    #[error(transparent)]
    Slot(#[from] SlotUnavailable),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

pub struct RequestBookingHandler<TStore, TOutbox, TDirectory>
where
    TStore: BookingStore + 'static,
    TOutbox: NotificationOutbox + 'static,
    TDirectory: PartyDirectory + 'static,
{
    store: Arc<TStore>,
    outbox: Arc<TOutbox>,
    directory: Arc<TDirectory>,
}

impl<TStore, TOutbox, TDirectory> RequestBookingHandler<TStore, TOutbox, TDirectory>
where
    TStore: BookingStore + 'static,
    TOutbox: NotificationOutbox + 'static,
    TDirectory: PartyDirectory + 'static,
{
    pub fn new(store: Arc<TStore>, outbox: Arc<TOutbox>, directory: Arc<TDirectory>) -> Self {
        Self {
            store,
            outbox,
            directory,
        }
    }

    pub async fn handle(&self, command: RequestBooking) -> Result<Booking, RequestBookingError> {
        decide_request(&command)?;

        let student = self
            .directory
            .student(command.student_id)
            .await?
            .ok_or(RequestBookingError::UnknownStudent(command.student_id))?;
        let tutor = self
            .directory
            .tutor(command.tutor_id)
            .await?
            .ok_or(RequestBookingError::UnknownTutor(command.tutor_id))?;
        let subject = self
            .directory
            .subject(command.subject_id)
            .await?
            .ok_or(RequestBookingError::UnknownSubject(command.subject_id))?;

        let existing = self.store.list_by_tutor(command.tutor_id).await?;
        availability::check_window(
            &tutor.weekly_slots,
            &existing,
            command.start_time,
            command.end_time,
        )?;

        let now = Utc::now();
        let booking = Booking {
            id: Uuid::now_v7(),
            subject,
            student,
            tutor: tutor.tutor,
            start_time: command.start_time,
            end_time: command.end_time,
            status: BookingStatus::Pending,
            notes: command.notes,
            meeting_link: None,
            created_at: now,
            updated_at: None,
        };
        self.store.insert(booking.clone()).await?;
        tracing::info!(booking_id = %booking.id, tutor_id = %booking.tutor.id, "booking requested");

        let intents = [notifications::booking_requested(&booking)];
        if let Err(error) = dispatch_notifications(&*self.outbox, booking.id, now, &intents).await {
            tracing::warn!(booking_id = %booking.id, %error, "request notification dropped");
        }
        Ok(booking)
    }
}
