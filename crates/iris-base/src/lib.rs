//! Shared infrastructure for the iris workspace.

pub mod logging;

pub use logging::{StdoutLogger, format_timestamp, init_stdout_logger};

// Re-export log crate so downstream crates can use iris_base::log::*
pub use log;
