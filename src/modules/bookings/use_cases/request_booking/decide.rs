// Pure validation of a booking request, before any collaborator is asked.
//
// Responsibilities
// - Enforce: only the student themselves may request, and the interval must
//   be non-empty. Availability is checked later against the tutor's schedule.
// - Never perform input or output.

use crate::modules::bookings::core::actor::Role;
use crate::modules::bookings::use_cases::request_booking::command::RequestBooking;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RequestDecideError {
    #[error("end time must be after start time")]
    InvalidInterval,

    #[error("only the requesting student may create a booking")]
    NotTheStudent,
}

pub fn decide_request(command: &RequestBooking) -> Result<(), RequestDecideError> {
    if command.actor.role != Role::Student || command.actor.id != command.student_id {
        return Err(RequestDecideError::NotTheStudent);
    }
    if command.end_time <= command.start_time {
        return Err(RequestDecideError::InvalidInterval);
    }
    Ok(())
}
