use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::bookings::core::actor::{Actor, Role};
use crate::modules::bookings::core::status::BookingStatus;
use crate::modules::bookings::use_cases::list_bookings::filters::{
    BookingFilters, DateBucket, SortOrder,
};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListBookingsParams {
    pub actor_id: Uuid,
    pub actor_role: Role,
    /// One of the five statuses, or "all"/absent for no status filter.
    pub status: Option<String>,
    pub date_bucket: Option<DateBucket>,
    pub query: Option<String>,
    pub sort: Option<SortOrder>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListBookingsParams>,
) -> impl IntoResponse {
    let status = match params.status.as_deref() {
        None | Some("all") => None,
        Some(token) => match token.parse::<BookingStatus>() {
            Ok(status) => Some(status),
            Err(error) => return (StatusCode::BAD_REQUEST, error.to_string()).into_response(),
        },
    };
    let caller = Actor {
        id: params.actor_id,
        role: params.actor_role,
    };
    let filters = BookingFilters {
        status,
        date_bucket: params.date_bucket.unwrap_or_default(),
        query: params.query,
    };

    match state
        .list_handler
        .handle(caller, filters, params.sort, Utc::now())
        .await
    {
        Ok(bookings) => Json(bookings).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
