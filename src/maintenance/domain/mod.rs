//! Domain model for maintenance schedules.

mod error;
mod frequency;
mod ids;
mod schedule;

pub use error::{
    MaintenanceDomainError, ParseFrequencyTypeError, ParseMaintenanceTypeError,
};
pub use frequency::{FrequencyInterval, FrequencyType};
pub use ids::ScheduleId;
pub use schedule::{DueState, MaintenanceSchedule, MaintenanceType, ScheduleDetails};
