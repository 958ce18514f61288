//! Shared plumbing for signrep tools
//!
//! - configuration loading (`figment`)
//! - logging setup (`tracing-subscriber`)

pub mod config;
pub mod error;
pub mod logging;

pub use config::{load_config, OutputFormat, SignrepConfig};
pub use error::{Error, Result};
