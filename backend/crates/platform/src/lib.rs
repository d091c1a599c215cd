//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Environment variable lookup and `.env` loading
//! - Process-wide logger configuration on top of `tracing`
//!
//! Failures surface as [`kernel::InfrastructureError`].

pub mod config;
pub mod logging;

pub use config::{get_env_var, load_dotenv};
pub use logging::{LogConfig, Logger, get_logger, init_logging};
