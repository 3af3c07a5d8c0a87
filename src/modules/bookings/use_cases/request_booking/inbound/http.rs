use axum::{
    extract::rejection::JsonRejection, extract::State, http::StatusCode,
    response::IntoResponse, Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::bookings::core::actor::{Actor, Role};
use crate::modules::bookings::use_cases::request_booking::command::RequestBooking;
use crate::modules::bookings::use_cases::request_booking::decide::RequestDecideError;
use crate::modules::bookings::use_cases::request_booking::handler::RequestBookingError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RequestBookingBody {
    pub student_id: Uuid,
    pub tutor_id: Uuid,
    pub subject_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub notes: Option<String>,
    pub actor_id: Uuid,
    pub actor_role: Role,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RequestBookingBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RequestBooking {
        student_id: body.student_id,
        tutor_id: body.tutor_id,
        subject_id: body.subject_id,
        start_time: body.start_time,
        end_time: body.end_time,
        notes: body.notes,
        actor: Actor {
            id: body.actor_id,
            role: body.actor_role,
        },
    };

    match state.request_handler.handle(command).await {
        Ok(booking) => (StatusCode::CREATED, Json(booking)).into_response(),
        Err(RequestBookingError::Invalid(error @ RequestDecideError::NotTheStudent)) => {
            (StatusCode::FORBIDDEN, error.to_string()).into_response()
        }
        Err(RequestBookingError::Invalid(error)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()).into_response()
        }
        Err(
            error @ (RequestBookingError::UnknownStudent(_)
            | RequestBookingError::UnknownTutor(_)
            | RequestBookingError::UnknownSubject(_)),
        ) => (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()).into_response(),
        Err(RequestBookingError::Slot(error)) => {
            (StatusCode::CONFLICT, error.to_string()).into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
