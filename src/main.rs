use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing_subscriber::{fmt, EnvFilter};

use tutor_bookings::modules::bookings::adapters::in_memory::booking_store::InMemoryBookingStore;
use tutor_bookings::modules::bookings::adapters::in_memory::notification_outbox::InMemoryNotificationOutbox;
use tutor_bookings::modules::bookings::adapters::in_memory::party_directory::InMemoryPartyDirectory;
use tutor_bookings::modules::bookings::adapters::static_meeting_scheduler::StaticMeetingScheduler;
use tutor_bookings::modules::bookings::use_cases::complete_elapsed::handler::CompleteElapsedHandler;
use tutor_bookings::shared::config::Config;
use tutor_bookings::shell::http::router;
use tutor_bookings::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env();

    // In-memory deps for now; the durable record belongs to the external
    // persistence collaborator in a real deployment.
    let store = Arc::new(InMemoryBookingStore::new());
    let outbox = Arc::new(InMemoryNotificationOutbox::new());
    let directory = Arc::new(InMemoryPartyDirectory::new());
    let scheduler = Arc::new(StaticMeetingScheduler::new(config.meeting_base_url.clone()));

    let state = AppState::new(store.clone(), outbox, directory, scheduler);

    let sweep = CompleteElapsedHandler::new(store);
    let sweep_interval = Duration::from_secs(config.completion_sweep_secs);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_interval);
        loop {
            ticker.tick().await;
            match sweep.run_once(Utc::now()).await {
                Ok(0) => {}
                Ok(completed) => tracing::info!(completed, "completion sweep finished"),
                Err(error) => tracing::error!(%error, "completion sweep failed"),
            }
        }
    });

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("booking API listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
