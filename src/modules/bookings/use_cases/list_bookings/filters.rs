// Filter and ordering semantics shared by the student, tutor and admin
// booking views.
//
// Responsibilities
// - Role scoping: students and tutors only see bookings they are party to.
// - AND-combined optional filters: status, date bucket (evaluated against
//   start_time and the caller's current time), and a case-insensitive text
//   query against the subject name and the counterpart's name.
// - No implicit order; callers request one of the two sort orders.

use chrono::{DateTime, Datelike, Days, NaiveTime, Utc, Weekday};

use crate::modules::bookings::core::actor::{Actor, Role};
use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::status::BookingStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateBucket {
    #[default]
    All,
    Today,
    ThisWeek,
    Upcoming,
    Past,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    StartTimeAsc,
    CreatedAtDesc,
}

#[derive(Debug, Clone, Default)]
pub struct BookingFilters {
    pub status: Option<BookingStatus>,
    pub date_bucket: DateBucket,
    pub query: Option<String>,
}

impl BookingFilters {
    pub fn matches(&self, caller: &Actor, booking: &Booking, now: DateTime<Utc>) -> bool {
        in_scope(caller, booking)
            && self.status.is_none_or(|status| booking.status == status)
            && in_bucket(self.date_bucket, booking.start_time, now)
            && self
                .query
                .as_deref()
                .is_none_or(|query| matches_query(caller, booking, query))
    }
}

fn in_scope(caller: &Actor, booking: &Booking) -> bool {
    match caller.role {
        Role::Student => booking.student.id == caller.id,
        Role::Tutor => booking.tutor.id == caller.id,
        Role::Admin => true,
    }
}

fn in_bucket(bucket: DateBucket, start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    match bucket {
        DateBucket::All => true,
        DateBucket::Today => {
            let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();
            let next_midnight = midnight + Days::new(1);
            midnight <= start_time && start_time < next_midnight
        }
        DateBucket::ThisWeek => {
            // Monday-anchored 7-day window containing today.
            let monday = now
                .date_naive()
                .week(Weekday::Mon)
                .first_day()
                .and_time(NaiveTime::MIN)
                .and_utc();
            let next_monday = monday + Days::new(7);
            monday <= start_time && start_time < next_monday
        }
        DateBucket::Upcoming => start_time >= now,
        DateBucket::Past => start_time < now,
    }
}

/// The counterpart is the other party relative to the caller; an admin
/// matches against both parties.
fn matches_query(caller: &Actor, booking: &Booking, query: &str) -> bool {
    let needle = query.to_lowercase();
    let subject = booking.subject.name.to_lowercase().contains(&needle);
    let student = contains_name(&booking.student.first_name, &booking.student.last_name, &needle);
    let tutor = contains_name(&booking.tutor.first_name, &booking.tutor.last_name, &needle);
    subject
        || match caller.role {
            Role::Student => tutor,
            Role::Tutor => student,
            Role::Admin => student || tutor,
        }
}

fn contains_name(first: &str, last: &str, needle: &str) -> bool {
    first.to_lowercase().contains(needle) || last.to_lowercase().contains(needle)
}

pub fn sort_bookings(bookings: &mut [Booking], order: SortOrder) {
    match order {
        SortOrder::StartTimeAsc => bookings.sort_by_key(|booking| booking.start_time),
        SortOrder::CreatedAtDesc => {
            bookings.sort_by_key(|booking| std::cmp::Reverse(booking.created_at))
        }
    }
}
