use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::bookings::core::actor::{Actor, Role};
use crate::modules::bookings::use_cases::remove_booking::handler::RemoveBookingError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RemoveBookingBody {
    pub actor_id: Uuid,
    pub actor_role: Role,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
    body: Result<Json<RemoveBookingBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let actor = Actor {
        id: body.actor_id,
        role: body.actor_role,
    };
    match state.remove_handler.handle(booking_id, actor).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(RemoveBookingError::Unauthorized) => StatusCode::FORBIDDEN.into_response(),
        Err(RemoveBookingError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
