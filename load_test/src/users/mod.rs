// Virtual user definitions

pub mod payloads;
pub mod student;

pub use payloads::{AssignmentSubmission, Credentials};
pub use student::student_scenario;
