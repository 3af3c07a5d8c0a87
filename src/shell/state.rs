use std::sync::Arc;

use crate::modules::bookings::adapters::in_memory::booking_store::InMemoryBookingStore;
use crate::modules::bookings::adapters::in_memory::notification_outbox::InMemoryNotificationOutbox;
use crate::modules::bookings::adapters::in_memory::party_directory::InMemoryPartyDirectory;
use crate::modules::bookings::adapters::static_meeting_scheduler::StaticMeetingScheduler;
use crate::modules::bookings::use_cases::list_bookings::handler::ListBookingsHandler;
use crate::modules::bookings::use_cases::remove_booking::handler::RemoveBookingHandler;
use crate::modules::bookings::use_cases::request_booking::handler::RequestBookingHandler;
use crate::modules::bookings::use_cases::transition_booking::handler::TransitionBookingHandler;

#[derive(Clone)]
pub struct AppState {
    pub request_handler: Arc<
        RequestBookingHandler<
            InMemoryBookingStore,
            InMemoryNotificationOutbox,
            InMemoryPartyDirectory,
        >,
    >,
    pub transition_handler: Arc<
        TransitionBookingHandler<
            InMemoryBookingStore,
            InMemoryNotificationOutbox,
            StaticMeetingScheduler,
        >,
    >,
    pub list_handler: Arc<ListBookingsHandler<InMemoryBookingStore>>,
    pub remove_handler: Arc<RemoveBookingHandler<InMemoryBookingStore>>,
    pub store: Arc<InMemoryBookingStore>,
    pub outbox: Arc<InMemoryNotificationOutbox>,
    pub directory: Arc<InMemoryPartyDirectory>,
}

impl AppState {
    pub fn new(
        store: Arc<InMemoryBookingStore>,
        outbox: Arc<InMemoryNotificationOutbox>,
        directory: Arc<InMemoryPartyDirectory>,
        scheduler: Arc<StaticMeetingScheduler>,
    ) -> Self {
        Self {
            request_handler: Arc::new(RequestBookingHandler::new(
                store.clone(),
                outbox.clone(),
                directory.clone(),
            )),
            transition_handler: Arc::new(TransitionBookingHandler::new(
                store.clone(),
                outbox.clone(),
                scheduler,
            )),
            list_handler: Arc::new(ListBookingsHandler::new(store.clone())),
            remove_handler: Arc::new(RemoveBookingHandler::new(store.clone())),
            store,
            outbox,
            directory,
        }
    }
}
