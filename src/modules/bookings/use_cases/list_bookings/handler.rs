// Read side: one query path shared by the student, tutor and admin views.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::modules::bookings::core::actor::Actor;
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::ports::{BookingStore, StoreError};
use crate::modules::bookings::use_cases::list_bookings::filters::{
    sort_bookings, BookingFilters, SortOrder,
};

pub struct ListBookingsHandler<TStore>
where
    TStore: BookingStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListBookingsHandler<TStore>
where
    TStore: BookingStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        caller: Actor,
        filters: BookingFilters,
        sort: Option<SortOrder>,
        now: DateTime<Utc>,
    ) -> Result<Vec<Booking>, StoreError> {
        let mut bookings: Vec<Booking> = self
            .store
            .list_all()
            .await?
            .into_iter()
            .filter(|booking| filters.matches(&caller, booking, now))
            .collect();
        if let Some(order) = sort {
            sort_bookings(&mut bookings, order);
        }
        Ok(bookings)
    }
}
