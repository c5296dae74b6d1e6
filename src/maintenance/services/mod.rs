//! Orchestration services for the maintenance scheduler.

mod scheduler;

pub use scheduler::{
    MaintenanceError, MaintenanceResult, MaintenanceService, ScheduleMaintenanceRequest,
    ScheduleReport,
};
