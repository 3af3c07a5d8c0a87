// Crate entry point. Re-export modules so tests and binaries can import them.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod shared {
    pub mod config;
}

pub mod modules {
    pub mod bookings {
        pub mod core {
            pub mod actor;
            pub mod availability;
            pub mod booking;
            pub mod notifications;
            pub mod ports;
            pub mod status;
            pub mod transitions;
        }
        pub mod use_cases {
            pub mod request_booking {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod transition_booking {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_bookings {
                pub mod filters;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_booking {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod complete_elapsed {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod in_memory {
                pub mod booking_store;
                pub mod notification_outbox;
                pub mod party_directory;
            }
            pub mod outbound {
                pub mod notifications;
            }
            pub mod static_meeting_scheduler;
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;
}
