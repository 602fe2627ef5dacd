// Scenarios module
// Contains load test scenario implementations

pub mod student_load;
