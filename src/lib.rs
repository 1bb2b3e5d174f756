//! moltenv Library
//!
//! Translates worker bindings (AI gateway credentials, provider API keys,
//! messaging bot tokens, feature flags) into the environment of the bot
//! container process, and launches that process with it.

pub mod commands;
pub mod common;
pub mod error;
pub mod launcher;
pub mod provider;
pub mod utils;

// Re-export commonly used types for convenience
pub use error::{ErrorCategory, MoltenvError, MoltenvResult};
pub use provider::{build_env_vars, EnvInjector, EnvVars, GatewayBindings};
