pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod service;
pub mod validation;

pub use config::{Config, LoggingConfig, PolicyConfig};
pub use error::{Error, Result};
pub use service::{ApprovalEngine, ClubTransition, DashboardStats};
