// End-of-run reporting on top of the framework's metrics

pub mod collector;
pub mod reporter;
pub mod types;

pub use types::{EndpointSummary, TaskMix};
