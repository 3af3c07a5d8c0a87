use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::bookings::core::actor::{Actor, Initiator, Role};
use crate::modules::bookings::core::transitions::{TransitionError, TransitionKind};
use crate::modules::bookings::use_cases::transition_booking::command::TransitionBooking;
use crate::modules::bookings::use_cases::transition_booking::handler::TransitionFlowError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TransitionBody {
    pub actor_id: Uuid,
    pub actor_role: Role,
}

pub async fn confirm(
    state: State<AppState>,
    path: Path<Uuid>,
    body: Result<Json<TransitionBody>, JsonRejection>,
) -> axum::response::Response {
    transition(state, path, body, TransitionKind::Confirm).await
}

pub async fn reject(
    state: State<AppState>,
    path: Path<Uuid>,
    body: Result<Json<TransitionBody>, JsonRejection>,
) -> axum::response::Response {
    transition(state, path, body, TransitionKind::Reject).await
}

pub async fn cancel(
    state: State<AppState>,
    path: Path<Uuid>,
    body: Result<Json<TransitionBody>, JsonRejection>,
) -> axum::response::Response {
    transition(state, path, body, TransitionKind::Cancel).await
}

async fn transition(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
    body: Result<Json<TransitionBody>, JsonRejection>,
    kind: TransitionKind,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let command = TransitionBooking {
        booking_id,
        kind,
        initiator: Initiator::User(Actor {
            id: body.actor_id,
            role: body.actor_role,
        }),
    };
    respond(state.transition_handler.handle(command).await)
}

/// Completion is system-triggered once the session has ended; an admin may
/// also trigger it explicitly by identifying themselves in the body.
pub async fn complete(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
    body: Result<Json<TransitionBody>, JsonRejection>,
) -> axum::response::Response {
    let initiator = match body {
        Ok(Json(body)) => Initiator::User(Actor {
            id: body.actor_id,
            role: body.actor_role,
        }),
        Err(_) => Initiator::System,
    };
    let command = TransitionBooking {
        booking_id,
        kind: TransitionKind::Complete,
        initiator,
    };
    respond(state.transition_handler.handle(command).await)
}

fn respond(
    result: Result<crate::modules::bookings::core::booking::Booking, TransitionFlowError>,
) -> axum::response::Response {
    match result {
        Ok(booking) => (StatusCode::OK, Json(booking)).into_response(),
        Err(TransitionFlowError::Transition(TransitionError::Unauthorized)) => {
            StatusCode::FORBIDDEN.into_response()
        }
        Err(TransitionFlowError::Transition(error @ TransitionError::StaleState { .. })) => {
            (StatusCode::CONFLICT, error.to_string()).into_response()
        }
        Err(TransitionFlowError::Transition(
            error @ (TransitionError::SessionStarted | TransitionError::SessionNotEnded),
        )) => (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()).into_response(),
        Err(TransitionFlowError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
