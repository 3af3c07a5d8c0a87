use uuid::Uuid;

use crate::modules::bookings::core::actor::Initiator;
use crate::modules::bookings::core::transitions::TransitionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionBooking {
    pub booking_id: Uuid,
    pub kind: TransitionKind,
    pub initiator: Initiator,
}
