//! Orchestration services for the assignment module.

mod manager;

pub use manager::{
    AssignTaskRequest, AssignmentCompletion, AssignmentError, AssignmentResult,
    AssignmentService,
};
