pub mod schedule;
pub mod calendar;
pub mod availability;
pub mod doctor;
pub mod department;

pub use availability::{compute_availability, AvailabilityService};
pub use calendar::{iso_date, resolve_day, weekday_name};
pub use department::DepartmentService;
pub use doctor::DoctorService;
pub use schedule::WeeklySchedule;
