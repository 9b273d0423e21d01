//! Service Health Monitor Library

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod report;
pub mod services;

pub use config::schema::MonitorConfig;
pub use lifecycle::{Monitor, MonitorError, Shutdown};
pub use services::ServiceRegistry;
