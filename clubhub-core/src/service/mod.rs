pub mod access;
pub mod export;
pub mod lifecycle;
pub mod stats;

pub use lifecycle::{ApprovalEngine, ClubTransition};
pub use stats::DashboardStats;
