// Transition handler orchestrates the write flow for confirm, reject,
// cancel and complete.
//
// Responsibilities
// - Load the current record, consult the transition table, obtain a
//   meeting link when confirmation requires one, and apply the new status
//   with a conditional update keyed on the expected current status.
// - A lost race surfaces as StaleState; nothing is partially applied.
// - Queue notifications after the write; failures there are logged, not
//   surfaced.

use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::bookings::adapters::outbound::notifications::dispatch_notifications;
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::ports::{
    BookingStore, MeetingScheduler, NotificationOutbox, SchedulerError, StoreError,
};
use crate::modules::bookings::core::transitions::{decide_transition, TransitionError};
use crate::modules::bookings::use_cases::transition_booking::command::TransitionBooking;

#[derive(Debug, Error)]
pub enum TransitionFlowError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("booking {0} not found")]
    NotFound(Uuid),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for TransitionFlowError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::StatusConflict { actual, .. } => {
                Self::Transition(TransitionError::StaleState { actual })
            }
            StoreError::Backend(message) => Self::Backend(message),
        }
    }
}

pub struct TransitionBookingHandler<TStore, TOutbox, TScheduler>
where
    TStore: BookingStore + 'static,
    TOutbox: NotificationOutbox + 'static,
    TScheduler: MeetingScheduler + 'static,
{
    store: Arc<TStore>,
    outbox: Arc<TOutbox>,
    scheduler: Arc<TScheduler>,
}

impl<TStore, TOutbox, TScheduler> TransitionBookingHandler<TStore, TOutbox, TScheduler>
where
    TStore: BookingStore + 'static,
    TOutbox: NotificationOutbox + 'static,
    TScheduler: MeetingScheduler + 'static,
{
    pub fn new(store: Arc<TStore>, outbox: Arc<TOutbox>, scheduler: Arc<TScheduler>) -> Self {
        Self {
            store,
            outbox,
            scheduler,
        }
    }

    pub async fn handle(&self, command: TransitionBooking) -> Result<Booking, TransitionFlowError> {
        let booking = self.store.get(command.booking_id).await?;
        let now = Utc::now();
        let outcome = decide_transition(&booking, command.kind, &command.initiator, now)?;

        let mut updated = booking;
        updated.status = outcome.to;
        updated.updated_at = Some(now);
        if outcome.needs_meeting_link {
            updated.meeting_link = Some(self.scheduler.create_meeting(updated.id).await?);
        }

        self.store
            .update_if_status(outcome.from, updated.clone())
            .await?;

        if outcome.admin_override {
            tracing::warn!(
                booking_id = %updated.id,
                from = %outcome.from,
                to = %outcome.to,
                "administrative override applied"
            );
        } else {
            tracing::info!(
                booking_id = %updated.id,
                from = %outcome.from,
                to = %outcome.to,
                "booking transition applied"
            );
        }

        if let Err(error) =
            dispatch_notifications(&*self.outbox, updated.id, now, &outcome.notifications).await
        {
            tracing::warn!(booking_id = %updated.id, %error, "transition notification dropped");
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod transition_booking_handler_tests {
    use super::*;
    use crate::modules::bookings::adapters::in_memory::booking_store::InMemoryBookingStore;
    use crate::modules::bookings::adapters::in_memory::notification_outbox::InMemoryNotificationOutbox;
    use crate::modules::bookings::adapters::static_meeting_scheduler::StaticMeetingScheduler;
    use crate::modules::bookings::core::actor::{Actor, Initiator, Role};
    use crate::modules::bookings::core::status::BookingStatus;
    use crate::modules::bookings::core::transitions::TransitionKind;
    use crate::tests::fixtures::bookings::BookingBuilder;
    use chrono::{Duration, Utc};
    use rstest::rstest;
    use tokio::join;

    type Handler = TransitionBookingHandler<
        InMemoryBookingStore,
        InMemoryNotificationOutbox,
        StaticMeetingScheduler,
    >;

    struct World {
        handler: Handler,
        store: Arc<InMemoryBookingStore>,
        outbox: Arc<InMemoryNotificationOutbox>,
    }

    fn make_world() -> World {
        let store = Arc::new(InMemoryBookingStore::new());
        let outbox = Arc::new(InMemoryNotificationOutbox::new());
        let scheduler = Arc::new(StaticMeetingScheduler::new("https://meet.example.com/session"));
        let handler = TransitionBookingHandler::new(store.clone(), outbox.clone(), scheduler);
        World {
            handler,
            store,
            outbox,
        }
    }

    fn tutor_confirm(booking: &Booking) -> TransitionBooking {
        TransitionBooking {
            booking_id: booking.id,
            kind: TransitionKind::Confirm,
            initiator: Initiator::User(Actor {
                id: booking.tutor.id,
                role: Role::Tutor,
            }),
        }
    }

    fn student_cancel(booking: &Booking) -> TransitionBooking {
        TransitionBooking {
            booking_id: booking.id,
            kind: TransitionKind::Cancel,
            initiator: Initiator::User(Actor {
                id: booking.student.id,
                role: Role::Student,
            }),
        }
    }

    // Bookings whose session is still ahead of the wall clock, so
    // cancellation preconditions hold when the handler samples `now`.
    fn upcoming_pending() -> Booking {
        BookingBuilder::new()
            .start(Utc::now() + Duration::days(7))
            .duration_minutes(60)
            .build()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_confirm_and_populate_the_meeting_link() {
        let world = make_world();
        let booking = upcoming_pending();
        world.store.insert(booking.clone()).await.expect("insert failed");

        let updated = world
            .handler
            .handle(tutor_confirm(&booking))
            .await
            .expect("confirm failed");

        assert_eq!(updated.status, BookingStatus::Confirmed);
        assert_eq!(
            updated.meeting_link.as_deref(),
            Some(format!("https://meet.example.com/session/{}", booking.id).as_str())
        );
        assert!(updated.updated_at.is_some());

        let rows = world.outbox.rows.lock().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, "BOOKING_CONFIRMATION");
        assert_eq!(rows[0].recipient_id, booking.student.id);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_confirm_by_the_student() {
        let world = make_world();
        let booking = upcoming_pending();
        world.store.insert(booking.clone()).await.expect("insert failed");

        let mut command = tutor_confirm(&booking);
        command.initiator = Initiator::User(Actor {
            id: booking.student.id,
            role: Role::Student,
        });
        let result = world.handler.handle(command).await;
        assert!(matches!(
            result,
            Err(TransitionFlowError::Transition(TransitionError::Unauthorized))
        ));
        // State is untouched.
        let stored = world.store.get(booking.id).await.expect("get failed");
        assert_eq!(stored.status, BookingStatus::Pending);
        assert!(world.outbox.rows.lock().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_let_exactly_one_of_two_racing_transitions_win() {
        let world = make_world();
        let booking = upcoming_pending();
        world.store.insert(booking.clone()).await.expect("insert failed");

        let (confirm, cancel) = join!(
            world.handler.handle(tutor_confirm(&booking)),
            world.handler.handle(student_cancel(&booking))
        );
        assert!(
            confirm.is_ok() ^ cancel.is_ok(),
            "exactly one transition should win the race"
        );
        let stored = world.store.get(booking.id).await.expect("get failed");
        assert!(matches!(
            stored.status,
            BookingStatus::Confirmed | BookingStatus::Cancelled
        ));
        let loser = confirm.err().or(cancel.err()).unwrap();
        assert!(matches!(
            loser,
            TransitionFlowError::Transition(TransitionError::StaleState { .. })
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_stale_state_when_cancelling_twice() {
        let world = make_world();
        let booking = upcoming_pending();
        world.store.insert(booking.clone()).await.expect("insert failed");

        world
            .handler
            .handle(student_cancel(&booking))
            .await
            .expect("first cancel failed");
        let second = world.handler.handle(student_cancel(&booking)).await;
        assert!(matches!(
            second,
            Err(TransitionFlowError::Transition(TransitionError::StaleState {
                actual: BookingStatus::Cancelled
            }))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_not_found_for_an_unknown_booking() {
        let world = make_world();
        let booking = upcoming_pending();
        let result = world.handler.handle(tutor_confirm(&booking)).await;
        assert!(matches!(result, Err(TransitionFlowError::NotFound(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_complete_an_elapsed_confirmed_booking() {
        let world = make_world();
        let booking = BookingBuilder::new()
            .confirmed()
            .start(Utc::now() - Duration::hours(2))
            .duration_minutes(60)
            .build();
        world.store.insert(booking.clone()).await.expect("insert failed");

        let updated = world
            .handler
            .handle(TransitionBooking {
                booking_id: booking.id,
                kind: TransitionKind::Complete,
                initiator: Initiator::System,
            })
            .await
            .expect("complete failed");
        assert_eq!(updated.status, BookingStatus::Completed);
        assert!(world.outbox.rows.lock().await.is_empty());
    }
}
