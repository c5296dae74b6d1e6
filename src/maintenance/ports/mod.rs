//! Port contracts for maintenance schedule persistence.

mod repository;

pub use repository::{ScheduleRepository, ScheduleRepositoryError, ScheduleRepositoryResult};
