// Shared test fixtures for booking records and tutor schedules.
//
// How it is used
// - Unit tests import the builder from `crate::tests::fixtures::bookings`
//   and override only the fields under test.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc, Weekday};
use uuid::Uuid;

use crate::modules::bookings::core::availability::AvailabilitySlot;
use crate::modules::bookings::core::booking::{Booking, StudentRef, SubjectRef, TutorRef};
use crate::modules::bookings::core::status::BookingStatus;

/// Monday 2024-06-10 09:00 UTC; the canonical session start used across
/// the test suite.
pub fn monday_9() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap()
}

pub fn monday_slot(start_hour: u32, end_hour: u32, available: bool) -> AvailabilitySlot {
    AvailabilitySlot {
        day_of_week: Weekday::Mon,
        start_time: NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end_hour, 0, 0).unwrap(),
        available,
    }
}

pub fn fixed_student() -> StudentRef {
    StudentRef {
        id: Uuid::from_u128(0x1001),
        first_name: "Sam".to_string(),
        last_name: "Okoye".to_string(),
    }
}

pub fn fixed_tutor() -> TutorRef {
    TutorRef {
        id: Uuid::from_u128(0x2001),
        first_name: "Tessa".to_string(),
        last_name: "Okafor".to_string(),
        display_picture: None,
    }
}

pub fn mathematics() -> SubjectRef {
    SubjectRef {
        id: Uuid::from_u128(0x3001),
        name: "Mathematics".to_string(),
    }
}

pub struct BookingBuilder {
    inner: Booking,
}

impl Default for BookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BookingBuilder {
    pub fn new() -> Self {
        let start = monday_9();
        Self {
            inner: Booking {
                id: Uuid::now_v7(),
                subject: mathematics(),
                student: fixed_student(),
                tutor: fixed_tutor(),
                start_time: start,
                end_time: start + Duration::hours(1),
                status: BookingStatus::Pending,
                notes: None,
                meeting_link: None,
                created_at: start - Duration::days(2),
                updated_at: None,
            },
        }
    }

    pub fn id(mut self, v: Uuid) -> Self {
        self.inner.id = v;
        self
    }

    pub fn subject(mut self, v: SubjectRef) -> Self {
        self.inner.subject = v;
        self
    }

    pub fn student(mut self, v: StudentRef) -> Self {
        self.inner.student = v;
        self
    }

    pub fn tutor(mut self, v: TutorRef) -> Self {
        self.inner.tutor = v;
        self
    }

    pub fn start(mut self, v: DateTime<Utc>) -> Self {
        let length = self.inner.end_time - self.inner.start_time;
        self.inner.start_time = v;
        self.inner.end_time = v + length;
        self
    }

    pub fn duration_minutes(mut self, minutes: i64) -> Self {
        self.inner.end_time = self.inner.start_time + Duration::minutes(minutes);
        self
    }

    pub fn status(mut self, v: BookingStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn confirmed(self) -> Self {
        self.status(BookingStatus::Confirmed)
    }

    pub fn cancelled(self) -> Self {
        self.status(BookingStatus::Cancelled)
    }

    pub fn rejected(self) -> Self {
        self.status(BookingStatus::Rejected)
    }

    pub fn completed(self) -> Self {
        self.status(BookingStatus::Completed)
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = Some(v.into());
        self
    }

    pub fn meeting_link(mut self, v: impl Into<String>) -> Self {
        self.inner.meeting_link = Some(v.into());
        self
    }

    pub fn created_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> Booking {
        self.inner
    }
}
