// Availability validator: a pure function of the tutor's declared weekly
// schedule, the tutor's existing bookings, and a candidate window.
//
// Rules
// - Some slot for the start's weekday must be available and fully contain
//   the requested window. Windows crossing midnight are inadmissible; the
//   weekday is derived from the start timestamp.
// - No existing PENDING or CONFIRMED booking of the tutor may overlap the
//   half-open window [start, end).

use chrono::{DateTime, Datelike, NaiveTime, Utc, Weekday};

use crate::modules::bookings::core::booking::Booking;
use crate::modules::bookings::core::status::BookingStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilitySlot {
    pub day_of_week: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub available: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SlotUnavailable {
    #[error("requested window falls outside the tutor's declared availability")]
    OutsideDeclaredHours,

    #[error("requested window overlaps an existing booking")]
    OverlapsExistingBooking,
}

/// Decide admissibility of `[start, end)` against the tutor's slots and
/// existing bookings. Interval validity (`end > start`) is checked upstream.
pub fn check_window(
    slots: &[AvailabilitySlot],
    existing: &[Booking],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<(), SlotUnavailable> {
    if !within_declared_hours(slots, start, end) {
        return Err(SlotUnavailable::OutsideDeclaredHours);
    }
    if existing.iter().any(|booking| blocks_window(booking, start, end)) {
        return Err(SlotUnavailable::OverlapsExistingBooking);
    }
    Ok(())
}

fn within_declared_hours(
    slots: &[AvailabilitySlot],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> bool {
    if start.date_naive() != end.date_naive() {
        return false;
    }
    let day = start.weekday();
    let requested_start = start.time();
    let requested_end = end.time();
    slots.iter().any(|slot| {
        slot.available
            && slot.day_of_week == day
            && slot.start_time <= requested_start
            && requested_end <= slot.end_time
    })
}

/// An existing booking blocks the window when it still occupies the tutor
/// (PENDING or CONFIRMED) and the half-open intervals overlap.
pub fn blocks_window(booking: &Booking, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    matches!(
        booking.status,
        BookingStatus::Pending | BookingStatus::Confirmed
    ) && booking.start_time < end
        && start < booking.end_time
}

#[cfg(test)]
mod availability_tests {
    use super::*;
    use crate::tests::fixtures::bookings::{monday_9, monday_slot, BookingBuilder};
    use chrono::{Duration, Weekday};
    use rstest::{fixture, rstest};

    #[fixture]
    fn slots() -> Vec<AvailabilitySlot> {
        // MONDAY 09:00-12:00, as declared by the tutor.
        vec![monday_slot(9, 12, true)]
    }

    #[rstest]
    fn it_should_admit_a_window_inside_a_declared_slot(slots: Vec<AvailabilitySlot>) {
        let start = monday_9();
        let end = start + Duration::hours(1);
        assert_eq!(check_window(&slots, &[], start, end), Ok(()));
    }

    #[rstest]
    fn it_should_admit_a_window_matching_the_slot_boundaries(slots: Vec<AvailabilitySlot>) {
        let start = monday_9();
        let end = start + Duration::hours(3);
        assert_eq!(check_window(&slots, &[], start, end), Ok(()));
    }

    #[rstest]
    fn it_should_reject_a_window_ending_past_the_slot(slots: Vec<AvailabilitySlot>) {
        let start = monday_9() + Duration::hours(2);
        let end = start + Duration::hours(2);
        assert_eq!(
            check_window(&slots, &[], start, end),
            Err(SlotUnavailable::OutsideDeclaredHours)
        );
    }

    #[rstest]
    fn it_should_reject_a_window_on_an_undeclared_day(slots: Vec<AvailabilitySlot>) {
        // Same clock time, but Tuesday.
        let start = monday_9() + Duration::days(1);
        let end = start + Duration::hours(1);
        assert_eq!(
            check_window(&slots, &[], start, end),
            Err(SlotUnavailable::OutsideDeclaredHours)
        );
    }

    #[rstest]
    fn it_should_reject_a_window_in_an_unavailable_slot() {
        let slots = vec![monday_slot(9, 12, false)];
        let start = monday_9();
        let end = start + Duration::hours(1);
        assert_eq!(
            check_window(&slots, &[], start, end),
            Err(SlotUnavailable::OutsideDeclaredHours)
        );
    }

    #[rstest]
    fn it_should_reject_a_window_crossing_midnight() {
        let slots = vec![AvailabilitySlot {
            day_of_week: Weekday::Mon,
            start_time: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(23, 59, 59).unwrap(),
            available: true,
        }];
        let start = monday_9() + Duration::hours(14); // Monday 23:00
        let end = start + Duration::hours(2); // Tuesday 01:00
        assert_eq!(
            check_window(&slots, &[], start, end),
            Err(SlotUnavailable::OutsideDeclaredHours)
        );
    }

    #[rstest]
    fn it_should_reject_a_window_overlapping_a_confirmed_booking(slots: Vec<AvailabilitySlot>) {
        let existing = BookingBuilder::new()
            .confirmed()
            .start(monday_9() + Duration::minutes(30))
            .duration_minutes(60)
            .build();
        let start = monday_9();
        let end = start + Duration::hours(1);
        assert_eq!(
            check_window(&slots, &[existing], start, end),
            Err(SlotUnavailable::OverlapsExistingBooking)
        );
    }

    #[rstest]
    fn it_should_reject_a_window_overlapping_a_pending_booking(slots: Vec<AvailabilitySlot>) {
        let existing = BookingBuilder::new()
            .start(monday_9())
            .duration_minutes(60)
            .build();
        let start = monday_9() + Duration::minutes(45);
        let end = start + Duration::hours(1);
        assert_eq!(
            check_window(&slots, &[existing], start, end),
            Err(SlotUnavailable::OverlapsExistingBooking)
        );
    }

    #[rstest]
    fn it_should_ignore_cancelled_and_rejected_bookings(slots: Vec<AvailabilitySlot>) {
        let cancelled = BookingBuilder::new()
            .cancelled()
            .start(monday_9())
            .duration_minutes(60)
            .build();
        let rejected = BookingBuilder::new()
            .rejected()
            .start(monday_9())
            .duration_minutes(60)
            .build();
        let start = monday_9();
        let end = start + Duration::hours(1);
        assert_eq!(check_window(&slots, &[cancelled, rejected], start, end), Ok(()));
    }

    #[rstest]
    fn it_should_admit_back_to_back_windows(slots: Vec<AvailabilitySlot>) {
        // [09:00, 10:00) then [10:00, 11:00) touch but do not overlap.
        let existing = BookingBuilder::new()
            .confirmed()
            .start(monday_9())
            .duration_minutes(60)
            .build();
        let start = monday_9() + Duration::hours(1);
        let end = start + Duration::hours(1);
        assert_eq!(check_window(&slots, &[existing], start, end), Ok(()));
    }
}
