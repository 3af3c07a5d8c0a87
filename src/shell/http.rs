use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::bookings::use_cases::list_bookings::inbound::http as list_http;
use crate::modules::bookings::use_cases::remove_booking::inbound::http as remove_http;
use crate::modules::bookings::use_cases::request_booking::inbound::http as request_http;
use crate::modules::bookings::use_cases::transition_booking::inbound::http as transition_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/bookings", post(request_http::handle).get(list_http::handle))
        .route("/bookings/{id}/confirm", post(transition_http::confirm))
        .route("/bookings/{id}/reject", post(transition_http::reject))
        .route("/bookings/{id}/cancel", post(transition_http::cancel))
        .route("/bookings/{id}/complete", post(transition_http::complete))
        .route("/bookings/{id}", delete(remove_http::handle))
        .route("/health", get(|| async { "ok" }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
