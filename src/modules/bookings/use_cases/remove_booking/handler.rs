// Admin-only hard delete. Outside the lifecycle state machine; exists as
// an administrative override and is always logged.

use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::bookings::core::actor::{Actor, Role};
use crate::modules::bookings::core::ports::{BookingStore, StoreError};

#[derive(Debug, Error)]
pub enum RemoveBookingError {
    #[error("only an admin may hard-delete a booking")]
    Unauthorized,

    #[error("booking {0} not found")]
    NotFound(Uuid),

    #[error("backend error: {0}")]
    Backend(String),
}

pub struct RemoveBookingHandler<TStore>
where
    TStore: BookingStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RemoveBookingHandler<TStore>
where
    TStore: BookingStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, booking_id: Uuid, actor: Actor) -> Result<(), RemoveBookingError> {
        if actor.role != Role::Admin {
            return Err(RemoveBookingError::Unauthorized);
        }
        match self.store.remove(booking_id).await {
            Ok(()) => {
                tracing::warn!(%booking_id, admin_id = %actor.id, "booking hard-deleted");
                Ok(())
            }
            Err(StoreError::NotFound(id)) => Err(RemoveBookingError::NotFound(id)),
            Err(error) => Err(RemoveBookingError::Backend(error.to_string())),
        }
    }
}
