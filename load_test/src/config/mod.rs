// Runtime configuration: client attack profiles and mock server settings

pub mod attack_profiles;
pub mod server;

pub use attack_profiles::{get_attack_profile, AttackProfile};
pub use server::{AssignmentConfig, ExamConfig, IdentityConfig, ServerConfig};
