// The single transition table of the booking lifecycle.
//
// Purpose
// - Decide, purely, whether an initiator may move a booking from its
//   current status along the requested edge, and what the accepted
//   transition entails (target status, meeting link, notifications).
//
// Responsibilities
// - Enforce the role gating for every edge in one place.
// - Report a status mismatch as StaleState so callers can refetch; the
//   store's conditional update turns a lost race into the same error.
// - Never perform input or output.

use chrono::{DateTime, Utc};

use crate::modules::bookings::core::actor::{Initiator, Role};
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::notifications::{
    self, NotificationIntent,
};
use crate::modules::bookings::core::status::BookingStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Confirm,
    Reject,
    Cancel,
    Complete,
}

impl TransitionKind {
    pub fn target(&self) -> BookingStatus {
        match self {
            Self::Confirm => BookingStatus::Confirmed,
            Self::Reject => BookingStatus::Rejected,
            Self::Cancel => BookingStatus::Cancelled,
            Self::Complete => BookingStatus::Completed,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("initiator is not permitted to apply this transition")]
    Unauthorized,

    #[error("booking is {actual}; transition no longer applicable")]
    StaleState { actual: BookingStatus },

    #[error("session has already started")]
    SessionStarted,

    #[error("session has not ended yet")]
    SessionNotEnded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    /// Status the booking must still hold when the store applies the update.
    pub from: BookingStatus,
    pub to: BookingStatus,
    pub needs_meeting_link: bool,
    /// Set when an admin takes an edge the regular table does not permit.
    pub admin_override: bool,
    pub notifications: Vec<NotificationIntent>,
}

/// Validate one transition request against the table. Checks run in a fixed
/// order: current-status legality first, then the initiator, then any time
/// precondition, so a stale caller always sees StaleState over Unauthorized.
pub fn decide_transition(
    booking: &Booking,
    kind: TransitionKind,
    initiator: &Initiator,
    now: DateTime<Utc>,
) -> Result<TransitionOutcome, TransitionError> {
    let current = booking.status;
    if current.is_terminal() {
        return Err(TransitionError::StaleState { actual: current });
    }

    if initiator.is_admin() {
        return Ok(admin_outcome(booking, kind, now));
    }

    match (kind, current) {
        (TransitionKind::Confirm, BookingStatus::Pending) => {
            require_tutor(booking, initiator)?;
            Ok(accepted(
                booking,
                current,
                kind,
                vec![notifications::booking_confirmed(booking)],
            ))
        }
        (TransitionKind::Reject, BookingStatus::Pending) => {
            require_tutor(booking, initiator)?;
            Ok(accepted(
                booking,
                current,
                kind,
                vec![notifications::booking_rejected(booking)],
            ))
        }
        (TransitionKind::Cancel, BookingStatus::Pending) => {
            require_student(booking, initiator)?;
            Ok(accepted(
                booking,
                current,
                kind,
                vec![notifications::cancelled_for_tutor(booking)],
            ))
        }
        (TransitionKind::Cancel, BookingStatus::Confirmed) => {
            let role = require_party(booking, initiator)?;
            if now >= booking.start_time {
                return Err(TransitionError::SessionStarted);
            }
            let counterpart = match role {
                Role::Student => notifications::cancelled_for_tutor(booking),
                _ => notifications::cancelled_for_student(booking),
            };
            Ok(accepted(booking, current, kind, vec![counterpart]))
        }
        (TransitionKind::Complete, BookingStatus::Confirmed) => {
            if !matches!(initiator, Initiator::System) {
                return Err(TransitionError::Unauthorized);
            }
            if now < booking.end_time {
                return Err(TransitionError::SessionNotEnded);
            }
            Ok(accepted(booking, current, kind, vec![]))
        }
        // The requested edge does not start at the booking's current status.
        (_, actual) => Err(TransitionError::StaleState { actual }),
    }
}

fn accepted(
    booking: &Booking,
    from: BookingStatus,
    kind: TransitionKind,
    notifications: Vec<NotificationIntent>,
) -> TransitionOutcome {
    TransitionOutcome {
        from,
        to: kind.target(),
        needs_meeting_link: kind == TransitionKind::Confirm && booking.meeting_link.is_none(),
        admin_override: false,
        notifications,
    }
}

/// Admins may take any edge out of a non-terminal status. Edges the regular
/// table also permits are not flagged as overrides.
fn admin_outcome(booking: &Booking, kind: TransitionKind, now: DateTime<Utc>) -> TransitionOutcome {
    let current = booking.status;
    let regular = match (kind, current) {
        (TransitionKind::Confirm, BookingStatus::Pending) => true,
        (TransitionKind::Reject, BookingStatus::Pending) => true,
        (TransitionKind::Cancel, BookingStatus::Pending) => true,
        (TransitionKind::Cancel, BookingStatus::Confirmed) => now < booking.start_time,
        (TransitionKind::Complete, BookingStatus::Confirmed) => now >= booking.end_time,
        _ => false,
    };
    let notifications = match kind {
        TransitionKind::Confirm => vec![notifications::booking_confirmed(booking)],
        TransitionKind::Reject => vec![notifications::booking_rejected(booking)],
        TransitionKind::Cancel => vec![
            notifications::cancelled_for_student(booking),
            notifications::cancelled_for_tutor(booking),
        ],
        TransitionKind::Complete => vec![],
    };
    TransitionOutcome {
        from: current,
        to: kind.target(),
        needs_meeting_link: kind == TransitionKind::Confirm && booking.meeting_link.is_none(),
        admin_override: !regular,
        notifications,
    }
}

fn require_tutor(booking: &Booking, initiator: &Initiator) -> Result<(), TransitionError> {
    match initiator.actor() {
        Some(actor) if actor.role == Role::Tutor && booking.is_tutor(actor.id) => Ok(()),
        _ => Err(TransitionError::Unauthorized),
    }
}

fn require_student(booking: &Booking, initiator: &Initiator) -> Result<(), TransitionError> {
    match initiator.actor() {
        Some(actor) if actor.role == Role::Student && booking.is_student(actor.id) => Ok(()),
        _ => Err(TransitionError::Unauthorized),
    }
}

/// Either party on the booking; returns which role matched.
fn require_party(booking: &Booking, initiator: &Initiator) -> Result<Role, TransitionError> {
    match initiator.actor() {
        Some(actor) if actor.role == Role::Student && booking.is_student(actor.id) => {
            Ok(Role::Student)
        }
        Some(actor) if actor.role == Role::Tutor && booking.is_tutor(actor.id) => Ok(Role::Tutor),
        _ => Err(TransitionError::Unauthorized),
    }
}
