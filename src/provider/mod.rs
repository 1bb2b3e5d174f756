//! Gateway bindings and container environment
//!
//! This module reads the worker bindings, translates them into the
//! environment expected by the bot container and injects that environment
//! when launching the process.

pub mod bindings;
pub mod env_builder;
pub mod env_injector;
pub mod env_mapping;

// Re-export commonly used types
pub use bindings::GatewayBindings;
pub use env_builder::{build_env_vars, EnvVars};
pub use env_injector::EnvInjector;
