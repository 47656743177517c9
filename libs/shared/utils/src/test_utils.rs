use std::sync::Arc;

use axum::response::Response;
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;

use shared_config::AppConfig;
use shared_database::{AppState, Database};

pub struct TestConfig {
    pub database_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            database_url: self.database_url.clone(),
            database_max_connections: 1,
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            seed_demo_data: false,
        }
    }
}

/// Migrated in-memory database. Every pooled connection to `:memory:` opens a
/// fresh database, so the pool is pinned to a single long-lived connection.
pub async fn test_database() -> Database {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    let db = Database::from_pool(pool);
    db.migrate().await.expect("migrations");
    db
}

pub async fn test_state() -> Arc<AppState> {
    let db = test_database().await;
    Arc::new(AppState::new(TestConfig::default().to_app_config(), db))
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub async fn read_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    serde_json::from_slice(&body).expect("json body")
}

pub struct TestDoctor {
    pub name: String,
    pub specialization: String,
    pub department_id: Option<i64>,
    pub available_days: String,
    pub available_times: String,
}

impl Default for TestDoctor {
    fn default() -> Self {
        Self {
            name: "Dr. Test Doctor".to_string(),
            specialization: "General Physician".to_string(),
            department_id: None,
            available_days: "Monday, Wednesday".to_string(),
            available_times: "9:00,10:00".to_string(),
        }
    }
}

impl TestDoctor {
    pub fn new(name: &str, specialization: &str) -> Self {
        Self {
            name: name.to_string(),
            specialization: specialization.to_string(),
            ..Self::default()
        }
    }

    pub fn schedule(mut self, available_days: &str, available_times: &str) -> Self {
        self.available_days = available_days.to_string();
        self.available_times = available_times.to_string();
        self
    }

    pub fn department(mut self, department_id: i64) -> Self {
        self.department_id = Some(department_id);
        self
    }
}

pub async fn insert_doctor(db: &Database, doctor: &TestDoctor) -> i64 {
    sqlx::query(
        "INSERT INTO doctors (name, specialization, department_id, available_days, available_times) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&doctor.name)
    .bind(&doctor.specialization)
    .bind(doctor.department_id)
    .bind(&doctor.available_days)
    .bind(&doctor.available_times)
    .execute(db.pool())
    .await
    .expect("insert doctor")
    .last_insert_rowid()
}

pub struct TestAppointment {
    pub patient_name: String,
    pub patient_email: String,
    pub doctor_id: i64,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: String,
}

impl TestAppointment {
    pub fn scheduled(doctor_id: i64, date: &str, time: &str) -> Self {
        Self {
            patient_name: "Kamal Bandara".to_string(),
            patient_email: "kamal@example.com".to_string(),
            doctor_id,
            appointment_date: date.to_string(),
            appointment_time: time.to_string(),
            status: "scheduled".to_string(),
        }
    }

    pub fn patient(mut self, name: &str, email: &str) -> Self {
        self.patient_name = name.to_string();
        self.patient_email = email.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }
}

pub async fn insert_appointment(db: &Database, appointment: &TestAppointment) -> i64 {
    sqlx::query(
        "INSERT INTO appointments (patient_name, patient_email, patient_phone, doctor_id, appointment_date, appointment_time, status) VALUES (?, ?, '0770000000', ?, ?, ?, ?)",
    )
    .bind(&appointment.patient_name)
    .bind(&appointment.patient_email)
    .bind(appointment.doctor_id)
    .bind(&appointment.appointment_date)
    .bind(&appointment.appointment_time)
    .bind(&appointment.status)
    .execute(db.pool())
    .await
    .expect("insert appointment")
    .last_insert_rowid()
}

pub async fn insert_department(db: &Database, name: &str, description: &str) -> i64 {
    sqlx::query("INSERT INTO departments (name, description) VALUES (?, ?)")
        .bind(name)
        .bind(description)
        .execute(db.pool())
        .await
        .expect("insert department")
        .last_insert_rowid()
}

pub async fn insert_faq(db: &Database, category: &str, question: &str, answer: &str) -> i64 {
    sqlx::query("INSERT INTO faqs (category, question, answer) VALUES (?, ?, ?)")
        .bind(category)
        .bind(question)
        .bind(answer)
        .execute(db.pool())
        .await
        .expect("insert faq")
        .last_insert_rowid()
}
