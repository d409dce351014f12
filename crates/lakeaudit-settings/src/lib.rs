//! Run-mode configuration.
//!
//! Resolution is IO-free: [`AuditorConfig::from_lookup`] takes any variable lookup, and
//! [`AuditorConfig::from_env`] is a thin wrapper over the process environment.

#![forbid(unsafe_code)]

mod model;

pub use model::{
    AuditorConfig, DEFAULT_TIMEOUT_SECONDS, ENV_FIXTURES_DIR, ENV_HOST, ENV_TIMEOUT_SECONDS,
    ENV_TOKEN,
};
