use crate::models::{Appointment, AppointmentStatus};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

#[derive(Default, Clone, Debug)]
pub struct DayStats {
    pub booked: u32,
    pub cancelled: u32,
}

#[derive(Default, Clone, Debug)]
pub struct StatusTotals {
    pub pending: u32,
    pub confirmed: u32,
    pub completed: u32,
    pub cancelled: u32,
    pub declined: u32,
}

#[derive(Default, Debug)]
pub struct BookingStats {
    pub daily: BTreeMap<NaiveDate, DayStats>,
    pub totals: StatusTotals,
    pub upcoming: u32,
    pub past: u32,
}

impl BookingStats {
    /// The day with the most non-cancelled bookings.
    pub fn busiest_day(&self) -> Option<(NaiveDate, u32)> {
        self.daily
            .iter()
            .max_by_key(|(_, stats)| stats.booked)
            .filter(|(_, stats)| stats.booked > 0)
            .map(|(date, stats)| (*date, stats.booked))
    }
}

pub fn calculate_stats(appointments: &[Appointment], now: DateTime<Utc>) -> BookingStats {
    let mut stats = BookingStats::default();

    for appointment in appointments {
        let day = stats
            .daily
            .entry(appointment.date_range.start.date_naive())
            .or_default();
        if appointment.status.is_blocking() {
            day.booked += 1;
        } else {
            day.cancelled += 1;
        }

        match appointment.status {
            AppointmentStatus::Pending => stats.totals.pending += 1,
            AppointmentStatus::Confirmed => stats.totals.confirmed += 1,
            AppointmentStatus::Completed => stats.totals.completed += 1,
            AppointmentStatus::Cancelled => stats.totals.cancelled += 1,
            AppointmentStatus::Declined => stats.totals.declined += 1,
        }

        if appointment.status.is_blocking() {
            if appointment.date_range.start >= now {
                stats.upcoming += 1;
            } else {
                stats.past += 1;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateRange;
    use chrono::{Duration, TimeZone};

    fn appointment(y: i32, m: u32, d: u32, h: u32, status: AppointmentStatus) -> Appointment {
        let start = Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap();
        Appointment {
            id: format!("appt_{}_{}", d, h),
            owner_id: "user_owner_01".into(),
            pet_id: "pet_01".into(),
            provider_id: "provider_01".into(),
            service: "Checkup".into(),
            status,
            owner_notes: None,
            provider_notes: None,
            date_range: DateRange {
                start,
                end: start + Duration::minutes(30),
            },
        }
    }

    #[test]
    fn test_calculate_stats_empty() {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        let stats = calculate_stats(&[], now);
        assert!(stats.daily.is_empty());
        assert_eq!(stats.totals.confirmed, 0);
        assert!(stats.busiest_day().is_none());
    }

    #[test]
    fn test_calculate_stats_buckets_and_totals() {
        let now = Utc.with_ymd_and_hms(2024, 7, 2, 0, 0, 0).unwrap();
        let appointments = vec![
            appointment(2024, 7, 1, 9, AppointmentStatus::Completed),
            appointment(2024, 7, 1, 10, AppointmentStatus::Cancelled),
            appointment(2024, 7, 3, 9, AppointmentStatus::Confirmed),
            appointment(2024, 7, 3, 10, AppointmentStatus::Confirmed),
            appointment(2024, 7, 3, 11, AppointmentStatus::Pending),
        ];

        let stats = calculate_stats(&appointments, now);

        let july1 = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let july3 = NaiveDate::from_ymd_opt(2024, 7, 3).unwrap();
        assert_eq!(stats.daily[&july1].booked, 1);
        assert_eq!(stats.daily[&july1].cancelled, 1);
        assert_eq!(stats.daily[&july3].booked, 3);

        assert_eq!(stats.totals.confirmed, 2);
        assert_eq!(stats.totals.pending, 1);
        assert_eq!(stats.totals.completed, 1);
        assert_eq!(stats.totals.cancelled, 1);

        // Cancelled bookings never count as upcoming or past.
        assert_eq!(stats.upcoming, 3);
        assert_eq!(stats.past, 1);

        assert_eq!(stats.busiest_day(), Some((july3, 3)));
    }
}
