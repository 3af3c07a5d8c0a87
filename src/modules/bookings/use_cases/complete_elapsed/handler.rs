// Periodic sweep that completes CONFIRMED bookings whose end time has
// passed. Runs without an actor; losing a race against a concurrent
// cancellation is expected and skipped.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::modules::bookings::core::actor::Initiator;
use crate::modules::bookings::core::ports::{BookingStore, StoreError};
use crate::modules::bookings::core::status::BookingStatus;
use crate::modules::bookings::core::transitions::{decide_transition, TransitionKind};

pub struct CompleteElapsedHandler<TStore>
where
    TStore: BookingStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CompleteElapsedHandler<TStore>
where
    TStore: BookingStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// One sweep pass; returns how many bookings were completed.
    pub async fn run_once(&self, now: DateTime<Utc>) -> Result<usize, StoreError> {
        let candidates = self.store.list_all().await?;
        let mut completed = 0;
        for booking in candidates {
            if booking.status != BookingStatus::Confirmed || now < booking.end_time {
                continue;
            }
            let outcome = match decide_transition(
                &booking,
                TransitionKind::Complete,
                &Initiator::System,
                now,
            ) {
                Ok(outcome) => outcome,
                Err(_) => continue,
            };
            let mut updated = booking;
            updated.status = outcome.to;
            updated.updated_at = Some(now);
            match self.store.update_if_status(outcome.from, updated.clone()).await {
                Ok(()) => {
                    tracing::info!(booking_id = %updated.id, "booking completed by sweep");
                    completed += 1;
                }
                // Someone else moved the booking since we listed it.
                Err(StoreError::StatusConflict { .. }) | Err(StoreError::NotFound(_)) => continue,
                Err(error) => return Err(error),
            }
        }
        Ok(completed)
    }
}
