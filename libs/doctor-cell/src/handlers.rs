use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::{AvailableDoctor, Department, Doctor, DoctorAvailability, DoctorSchedule};
use crate::services::{
    availability::AvailabilityService,
    calendar::resolve_day,
    department::DepartmentService,
    doctor::DoctorService,
};

#[derive(Debug, Deserialize)]
pub struct DoctorListQuery {
    pub specialization: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilitySearchQuery {
    pub name: Option<String>,
    pub day: Option<String>,
}

// Ids are taken as text so a malformed id reads as an unknown doctor.
fn parse_doctor_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::NotFound("Doctor not found".to_string()))
}

#[axum::debug_handler]
pub async fn list_departments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Department>>, AppError> {
    let departments = DepartmentService::new(&state).list_departments().await?;
    Ok(Json(departments))
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DoctorListQuery>,
) -> Result<Json<Vec<Doctor>>, AppError> {
    let specialization = query.specialization.as_deref().filter(|s| !s.is_empty());
    let doctors = DoctorService::new(&state).list_doctors(specialization).await?;
    Ok(Json(doctors))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Doctor>, AppError> {
    let doctor_id = parse_doctor_id(&doctor_id)?;

    DoctorService::new(&state)
        .get_doctor(doctor_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))
}

#[axum::debug_handler]
pub async fn get_doctor_schedule(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<DoctorSchedule>, AppError> {
    let doctor_id = parse_doctor_id(&doctor_id)?;

    DoctorService::new(&state)
        .get_schedule(doctor_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))
}

/// Free slots of matching doctors on "today", "tomorrow" or the next given weekday.
#[axum::debug_handler]
pub async fn search_doctor_availability(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailabilitySearchQuery>,
) -> Result<Json<Vec<DoctorAvailability>>, AppError> {
    let date = resolve_day(query.day.as_deref().unwrap_or_default(), Utc::now().date_naive())?;
    let name = query.name.as_deref().unwrap_or_default();

    let results = AvailabilityService::new(&state).search(name, date).await?;
    if results.is_empty() {
        return Err(AppError::NotFound("No matching doctors found".to_string()));
    }

    Ok(Json(results))
}

#[axum::debug_handler]
pub async fn get_doctors_available_today(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AvailableDoctor>>, AppError> {
    let doctors = AvailabilityService::new(&state)
        .available_on(Utc::now().date_naive())
        .await?;
    Ok(Json(doctors))
}
