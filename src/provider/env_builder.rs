//! Build the environment for the bot container process
//!
//! Precedence:
//! 1. the AI gateway key maps to `OPENAI_API_KEY` or `ANTHROPIC_API_KEY`
//!    depending on whether the gateway URL ends with `/openai`
//! 2. direct provider keys only fill what the gateway left unset
//! 3. the gateway URL (trailing slashes removed) wins over `ANTHROPIC_BASE_URL`
//! 4. everything in [`PASSTHROUGH`] is copied as-is, two entries renamed

use super::bindings::GatewayBindings;
pub use super::env_mapping::{output_keys, PASSTHROUGH};
use crate::common::constants::vars;
use std::collections::HashMap;

/// Environment variables handed to the spawned process
pub type EnvVars = HashMap<String, String>;

/// Strip every trailing `/` from a base URL
pub fn normalize_base_url(url: &str) -> &str {
    url.trim_end_matches('/')
}

/// Whether a normalized gateway URL points at the OpenAI-compatible endpoint
pub fn is_openai_gateway(normalized_url: &str) -> bool {
    normalized_url.ends_with(vars::OPENAI_GATEWAY_SUFFIX)
}

/// Translate bindings into the container environment.
///
/// Pure: absent or empty bindings are skipped, nothing is validated.
pub fn build_env_vars(bindings: &GatewayBindings) -> EnvVars {
    let mut env_vars = EnvVars::new();

    let base_url = bindings
        .get(vars::AI_GATEWAY_BASE_URL)
        .map(normalize_base_url)
        .unwrap_or_default();
    let openai_gateway = is_openai_gateway(base_url);

    // Gateway key takes precedence
    if let Some(gateway_key) = bindings.get(vars::AI_GATEWAY_API_KEY) {
        let key = if openai_gateway {
            vars::OPENAI_API_KEY
        } else {
            vars::ANTHROPIC_API_KEY
        };
        env_vars.insert(key.to_string(), gateway_key.to_string());
    }

    for key in [vars::ANTHROPIC_API_KEY, vars::OPENAI_API_KEY] {
        if env_vars.contains_key(key) {
            continue;
        }
        if let Some(value) = bindings.get(key) {
            env_vars.insert(key.to_string(), value.to_string());
        }
    }

    if !base_url.is_empty() {
        env_vars.insert(vars::AI_GATEWAY_BASE_URL.to_string(), base_url.to_string());
        let key = if openai_gateway {
            vars::OPENAI_BASE_URL
        } else {
            vars::ANTHROPIC_BASE_URL
        };
        env_vars.insert(key.to_string(), base_url.to_string());
    } else if let Some(anthropic_url) = bindings.get(vars::ANTHROPIC_BASE_URL) {
        env_vars.insert(vars::ANTHROPIC_BASE_URL.to_string(), anthropic_url.to_string());
    }

    for mapping in PASSTHROUGH {
        if let Some(value) = bindings.get(mapping.binding) {
            env_vars.insert(mapping.key.to_string(), value.to_string());
        }
    }

    env_vars
}
