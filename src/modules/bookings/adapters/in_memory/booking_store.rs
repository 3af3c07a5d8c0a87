// In memory implementation of the BookingStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Store booking records keyed by id.
// - Apply `update_if_status` as one atomic check-and-write under the write
//   lock so racing transitions resolve to exactly one winner.

use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::ports::{BookingStore, StoreError};
use crate::modules::bookings::core::status::BookingStatus;

pub struct InMemoryBookingStore {
    inner: RwLock<HashMap<Uuid, Booking>>,
    offline: bool,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            offline: false,
        }
    }

    /// Flip the store into a failing state for error-path tests.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Backend("booking store offline".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn insert(&self, booking: Booking) -> Result<(), StoreError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        guard.insert(booking.id, booking);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Booking, StoreError> {
        self.check_online()?;
        let guard = self.inner.read().await;
        guard.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn update_if_status(
        &self,
        expected: BookingStatus,
        booking: Booking,
    ) -> Result<(), StoreError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        let current = guard
            .get(&booking.id)
            .ok_or(StoreError::NotFound(booking.id))?;
        if current.status != expected {
            return Err(StoreError::StatusConflict {
                id: booking.id,
                expected,
                actual: current.status,
            });
        }
        guard.insert(booking.id, booking);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Booking>, StoreError> {
        self.check_online()?;
        let guard = self.inner.read().await;
        Ok(guard.values().cloned().collect())
    }

    async fn list_by_tutor(&self, tutor_id: Uuid) -> Result<Vec<Booking>, StoreError> {
        self.check_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .values()
            .filter(|booking| booking.tutor.id == tutor_id)
            .cloned()
            .collect())
    }

    async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        self.check_online()?;
        let mut guard = self.inner.write().await;
        guard.remove(&id).map(|_| ()).ok_or(StoreError::NotFound(id))
    }
}
