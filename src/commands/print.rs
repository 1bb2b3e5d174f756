//! `print` and `keys` commands

use super::parser::OutputFormat;
use crate::provider::env_mapping::{self, EnvVarMapping};
use crate::provider::EnvVars;
use std::collections::BTreeMap;

/// Render the environment sorted by key
pub fn render_env(env_vars: &EnvVars, format: OutputFormat) -> String {
    let sorted: BTreeMap<&str, &str> = env_vars
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    match format {
        OutputFormat::Env => sorted
            .iter()
            .map(|(k, v)| format!("{}={}\n", k, v))
            .collect(),
        OutputFormat::Shell => sorted
            .iter()
            .map(|(k, v)| format!("export {}={}\n", k, shell_quote(v)))
            .collect(),
        OutputFormat::Json => {
            // BTreeMap<&str, &str> always serializes
            let mut json = serde_json::to_string_pretty(&sorted).unwrap_or_default();
            json.push('\n');
            json
        }
    }
}

/// Single-quote a value for POSIX shells
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Render the binding → variable table
pub fn render_keys() -> String {
    let width = env_mapping::all_mappings()
        .map(|m| m.binding.len())
        .max()
        .unwrap_or(0);

    let line = |m: &EnvVarMapping| {
        format!(
            "{:<width$}  ->  {:<24}  {}\n",
            m.binding,
            m.key,
            m.description,
            width = width
        )
    };

    let mut out = String::from("Gateway rules:\n");
    out.extend(env_mapping::GATEWAY_DERIVED.iter().map(line));
    out.push_str("\nPass-through:\n");
    out.extend(env_mapping::PASSTHROUGH.iter().map(line));
    out
}
