use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use shared_database::{AppState, Database, DbError};

use crate::models::{strip_title, AvailableDoctor, Doctor, DoctorAvailability, SlotAvailability};
use crate::services::calendar::{iso_date, weekday_name};
use crate::services::schedule::WeeklySchedule;

/// Computes a doctor's free slots for `target_date` from the raw schedule
/// columns and the time tokens already booked on that date.
pub fn compute_availability(
    available_days: &str,
    available_times: &str,
    booked_times: &[String],
    target_date: NaiveDate,
) -> SlotAvailability {
    slots_for(
        &WeeklySchedule::parse(available_days, available_times),
        booked_times,
        target_date,
    )
}

/// Slots are compared to bookings by exact string equality. A doctor who does
/// not work on the target weekday has no free slots whatever the bookings.
pub fn slots_for(
    schedule: &WeeklySchedule,
    booked_times: &[String],
    target_date: NaiveDate,
) -> SlotAvailability {
    let available = schedule.works_on(weekday_name(target_date.weekday()));

    let available_times = if available {
        let booked: HashSet<&str> = booked_times.iter().map(String::as_str).collect();
        schedule
            .slots
            .iter()
            .filter(|slot| !booked.contains(slot.as_str()))
            .cloned()
            .collect()
    } else {
        Vec::new()
    };

    SlotAvailability {
        available,
        available_times,
        booked_times: booked_times.to_vec(),
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BookedSlot {
    doctor_id: i64,
    appointment_time: String,
}

pub struct AvailabilityService {
    db: Database,
}

impl AvailabilityService {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
        }
    }

    /// Distinct scheduled time tokens per doctor on `date`.
    pub async fn booked_times_on(&self, date: NaiveDate) -> Result<HashMap<i64, Vec<String>>, DbError> {
        let rows = sqlx::query_as::<_, BookedSlot>(
            r#"SELECT d.id AS doctor_id, a.appointment_time
               FROM appointments a
               JOIN doctors d ON d.id = a.doctor_id
               WHERE a.appointment_date = ? AND a.status = 'scheduled'
               ORDER BY a.appointment_time, a.id"#,
        )
        .bind(iso_date(date))
        .fetch_all(self.db.pool())
        .await?;

        let mut booked: HashMap<i64, Vec<String>> = HashMap::new();
        for row in rows {
            let times = booked.entry(row.doctor_id).or_default();
            if !times.contains(&row.appointment_time) {
                times.push(row.appointment_time);
            }
        }
        Ok(booked)
    }

    /// Availability on `date` of every doctor whose name or specialization
    /// contains `name`.
    pub async fn search(&self, name: &str, date: NaiveDate) -> Result<Vec<DoctorAvailability>, DbError> {
        debug!("Searching availability for {:?} on {}", name, date);

        let pattern = format!("%{}%", name);
        let doctors = sqlx::query_as::<_, Doctor>(
            r#"SELECT id, name, specialization, department_id, available_days, available_times
               FROM doctors
               WHERE name LIKE ? OR specialization LIKE ?
               ORDER BY id"#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(self.db.pool())
        .await?;

        if doctors.is_empty() {
            return Ok(Vec::new());
        }

        let mut booked = self.booked_times_on(date).await?;

        Ok(doctors
            .into_iter()
            .map(|doctor| {
                let booked_times = booked.remove(&doctor.id).unwrap_or_default();
                let slots = compute_availability(
                    &doctor.available_days,
                    &doctor.available_times,
                    &booked_times,
                    date,
                );
                DoctorAvailability::from_slots(doctor, slots)
            })
            .collect())
    }

    /// Doctors working on `date` who still have at least one free slot.
    pub async fn available_on(&self, date: NaiveDate) -> Result<Vec<AvailableDoctor>, DbError> {
        debug!("Listing doctors with free slots on {}", date);

        let doctors = sqlx::query_as::<_, Doctor>(
            r#"SELECT id, name, specialization, department_id, available_days, available_times
               FROM doctors
               ORDER BY id"#,
        )
        .fetch_all(self.db.pool())
        .await?;

        let mut booked = self.booked_times_on(date).await?;

        Ok(doctors
            .into_iter()
            .filter_map(|doctor| {
                let booked_times = booked.remove(&doctor.id).unwrap_or_default();
                let slots = compute_availability(
                    &doctor.available_days,
                    &doctor.available_times,
                    &booked_times,
                    date,
                );
                if !slots.available || slots.available_times.is_empty() {
                    return None;
                }
                Some(AvailableDoctor {
                    id: doctor.id,
                    name: strip_title(&doctor.name),
                    specialization: doctor.specialization,
                    available_times: slots.available_times,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn booked(times: &[&str]) -> Vec<String> {
        times.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn booked_slot_is_removed_on_working_day() {
        let result = compute_availability("Monday, Wednesday", "9:00,10:00", &booked(&["9:00"]), monday());
        assert!(result.available);
        assert_eq!(result.available_times, vec!["10:00"]);
        assert_eq!(result.booked_times, vec!["9:00"]);
    }

    #[test]
    fn non_working_day_has_no_slots() {
        let result = compute_availability("Monday, Wednesday", "9:00,10:00", &[], tuesday());
        assert!(!result.available);
        assert!(result.available_times.is_empty());
    }

    #[test]
    fn non_working_day_ignores_bookings() {
        let result = compute_availability("Monday", "9:00,10:00", &booked(&["9:00"]), tuesday());
        assert!(!result.available);
        assert!(result.available_times.is_empty());
        assert_eq!(result.booked_times, vec!["9:00"]);
    }

    #[test]
    fn empty_times_give_no_slots() {
        let result = compute_availability("Monday", "", &[], monday());
        assert!(result.available);
        assert!(result.available_times.is_empty());
    }

    #[test]
    fn bookings_match_exact_tokens_only() {
        let result = compute_availability(
            "monday",
            "09:00-09:30, 09:30-10:00",
            &booked(&["09:00", "09:30-10:00 "]),
            monday(),
        );
        assert_eq!(result.available_times, vec!["09:00-09:30", "09:30-10:00"]);
    }

    #[test]
    fn duplicate_slots_are_kept() {
        let result = compute_availability("MONDAY", "9:00, 9:00, 11:00", &[], monday());
        assert_eq!(result.available_times, vec!["9:00", "9:00", "11:00"]);
    }

    #[test]
    fn day_match_is_case_insensitive_substring() {
        let result = compute_availability("every Monday morning", "9:00", &[], monday());
        assert!(result.available);

        let result = compute_availability("mon, tue", "9:00", &[], monday());
        assert!(!result.available);
    }

    #[test]
    fn fully_booked_day_is_available_but_empty() {
        let result = compute_availability("Monday", "9:00,10:00", &booked(&["9:00", "10:00"]), monday());
        assert!(result.available);
        assert!(result.available_times.is_empty());
    }
}
