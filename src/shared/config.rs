// Environment-driven configuration with local-development defaults.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub completion_sweep_secs: u64,
    pub meeting_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(8080),
            completion_sweep_secs: env::var("COMPLETION_SWEEP_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(30),
            meeting_base_url: env::var("MEETING_BASE_URL")
                .unwrap_or_else(|_| "https://meet.tutorconnect.example/session".to_string()),
        }
    }
}
