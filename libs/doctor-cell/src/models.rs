use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub department_id: Option<i64>,
    pub available_days: String,
    pub available_times: String,
}

/// Raw schedule columns of a doctor, returned as stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DoctorSchedule {
    pub available_days: String,
    pub available_times: String,
}

/// Free and booked slots of one doctor for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAvailability {
    pub available: bool,
    pub available_times: Vec<String>,
    pub booked_times: Vec<String>,
}

// Response DTO for the name/specialization availability search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorAvailability {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub available: bool,
    pub available_times: Vec<String>,
    pub available_days: String,
    pub booked_times: Vec<String>,
}

impl DoctorAvailability {
    pub fn from_slots(doctor: Doctor, slots: SlotAvailability) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
            specialization: doctor.specialization,
            available: slots.available,
            available_times: slots.available_times,
            available_days: doctor.available_days,
            booked_times: slots.booked_times,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableDoctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub available_times: Vec<String>,
}

/// Removes the first "Dr. " and then the first "Dr " from a stored name,
/// since the chat client adds its own title.
pub fn strip_title(name: &str) -> String {
    name.replacen("Dr. ", "", 1).replacen("Dr ", "", 1)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Invalid day specified: {0}")]
    InvalidDay(String),
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::InvalidDay(_) => AppError::BadRequest("Invalid day specified".to_string()),
        }
    }
}
