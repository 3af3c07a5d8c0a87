// MeetingScheduler adapter that derives links from a base URL. The real
// scheduling collaborator is external; this is enough for development and
// for asserting that confirmation populates the link.

use uuid::Uuid;

use crate::modules::bookings::core::ports::{MeetingScheduler, SchedulerError};

pub struct StaticMeetingScheduler {
    base_url: String,
}

impl StaticMeetingScheduler {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl MeetingScheduler for StaticMeetingScheduler {
    async fn create_meeting(&self, booking_id: Uuid) -> Result<String, SchedulerError> {
        Ok(format!("{}/{}", self.base_url, booking_id))
    }
}

#[cfg(test)]
mod static_meeting_scheduler_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_derive_the_link_from_the_booking_id() {
        let scheduler = StaticMeetingScheduler::new("https://meet.example.com/session");
        let id = Uuid::from_u128(0xabc);
        let link = scheduler.create_meeting(id).await.expect("create failed");
        assert_eq!(link, format!("https://meet.example.com/session/{id}"));
    }
}
