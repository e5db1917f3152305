use crate::error::{AppError, Result};
use crate::models::{
    Appointment, AppointmentStatus, DateRange, ServiceProvider,
};
use crate::utils::{combine, new_id};
use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use std::collections::HashSet;

fn daycare_check_in() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("valid check-in time")
}

fn daycare_check_out() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).expect("valid check-out time")
}

/// Drop seconds and sub-seconds so stored timestamps and enumerated
/// slot starts compare at the same precision.
fn to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

/// Bookable start times for one provider on one day, ascending.
///
/// Lazy and restartable: cloning the iterator restarts the walk.
#[derive(Debug, Clone)]
pub struct Slots {
    cursor: Option<NaiveTime>,
    end: NaiveTime,
    step: Duration,
    occupied: HashSet<NaiveTime>,
}

impl Iterator for Slots {
    type Item = NaiveTime;

    fn next(&mut self) -> Option<NaiveTime> {
        loop {
            let at = self.cursor?;
            // A slot must start strictly before closing time.
            if at >= self.end {
                self.cursor = None;
                return None;
            }
            let (next, wrapped_secs) = at.overflowing_add_signed(self.step);
            // Wall-clock wrap past midnight ends the walk.
            self.cursor = if wrapped_secs != 0 { None } else { Some(next) };
            if !self.occupied.contains(&at) {
                return Some(at);
            }
        }
    }
}

/// Enumerate the open slots for `provider` on `date`.
///
/// A slot is occupied when any appointment for this provider starts at
/// that wall-clock time on the same calendar day and is not Cancelled
/// or Declined. Daycare providers are range-booked and have no slots.
pub fn available_slots(
    provider: &ServiceProvider,
    appointments: &[Appointment],
    date: NaiveDate,
) -> Result<Slots> {
    if !provider.service_type.is_slot_based() {
        return Err(AppError::Validation(format!(
            "{} takes date-range bookings, not time slots",
            provider.name
        )));
    }
    if provider.slot_duration_mins <= 0 {
        return Err(AppError::InvalidConfiguration(format!(
            "Slot duration must be positive, got {} minutes",
            provider.slot_duration_mins
        )));
    }

    let occupied: HashSet<NaiveTime> = appointments
        .iter()
        .filter(|a| a.provider_id == provider.id)
        .filter(|a| a.status.is_blocking())
        .filter(|a| a.date_range.start.date_naive() == date)
        .map(|a| to_minute(a.date_range.start.time()))
        .collect();

    Ok(Slots {
        cursor: Some(provider.working_hours.start),
        end: provider.working_hours.end,
        step: Duration::minutes(provider.slot_duration_mins),
        occupied,
    })
}

#[derive(Debug, Clone)]
pub enum Schedule {
    /// One fixed-duration slot on a single day.
    Slot { date: NaiveDate, time: NaiveTime },
    /// A daycare stay; a missing end date means a single-day stay.
    Range {
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    },
}

#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub owner_id: String,
    pub pet_id: String,
    pub provider_id: String,
    pub service: String,
    pub owner_notes: Option<String>,
    pub schedule: Schedule,
}

/// Validate a booking request and produce the appointment record.
///
/// Bookings are confirmed immediately; there is no approval workflow.
/// Availability is NOT re-checked here; it is computed once when slots
/// are listed, and the last write wins.
pub fn build_appointment(
    provider: &ServiceProvider,
    request: &BookingRequest,
) -> Result<Appointment> {
    if request.provider_id.trim().is_empty() {
        return Err(AppError::Validation("A provider must be selected".into()));
    }
    if request.service.trim().is_empty() {
        return Err(AppError::Validation("A service must be selected".into()));
    }

    let date_range = match &request.schedule {
        Schedule::Slot { date, time } => {
            if !provider.service_type.is_slot_based() {
                return Err(AppError::Validation(format!(
                    "{} requires a start and end date",
                    provider.name
                )));
            }
            if provider.slot_duration_mins <= 0 {
                return Err(AppError::InvalidConfiguration(format!(
                    "Slot duration must be positive, got {} minutes",
                    provider.slot_duration_mins
                )));
            }
            let start = combine(*date, *time);
            DateRange {
                start,
                end: start + Duration::minutes(provider.slot_duration_mins),
            }
        }
        Schedule::Range {
            start_date,
            end_date,
        } => {
            if provider.service_type.is_slot_based() {
                return Err(AppError::Validation(format!(
                    "{} requires a date and a time slot",
                    provider.name
                )));
            }
            let start = combine(*start_date, daycare_check_in());
            let mut end = combine(end_date.unwrap_or(*start_date), daycare_check_out());
            // An end date before the start date collapses to a
            // single-day stay.
            if end < start {
                end = combine(*start_date, daycare_check_out());
            }
            DateRange { start, end }
        }
    };

    Ok(Appointment {
        id: new_id("appt"),
        owner_id: request.owner_id.clone(),
        pet_id: request.pet_id.clone(),
        provider_id: request.provider_id.clone(),
        service: request.service.clone(),
        status: AppointmentStatus::Confirmed,
        owner_notes: request.owner_notes.clone(),
        provider_notes: None,
        date_range,
    })
}
