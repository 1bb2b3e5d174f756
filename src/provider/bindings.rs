//! Worker environment bindings
//!
//! `GatewayBindings` is the input record of the environment builder: one
//! optional string per binding name the bot container understands. Serde
//! field names are the exact environment variable names, so the same
//! struct reads a JSON / TOML bindings file or the process environment.

use crate::error::{MoltenvError, MoltenvResult};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use tracing::warn;

/// Returns the value only when it is set and non-empty.
///
/// Empty bindings are treated exactly like missing ones.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

macro_rules! gateway_bindings {
    ($($(#[$meta:meta])* $field:ident => $name:literal,)+) => {
        /// Incoming bindings (API keys, gateway URLs, provider tokens, flags)
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct GatewayBindings {
            $(
                $(#[$meta])*
                #[serde(rename = $name, skip_serializing_if = "Option::is_none")]
                pub $field: Option<String>,
            )+
        }

        impl GatewayBindings {
            /// Every binding name this record knows about
            pub const BINDING_NAMES: &'static [&'static str] = &[$($name),+];

            /// Look up a binding by its environment variable name.
            ///
            /// Returns `None` for unknown names, unset fields and empty values.
            pub fn get(&self, name: &str) -> Option<&str> {
                match name {
                    $($name => present(&self.$field),)+
                    _ => None,
                }
            }

            /// Set a binding by name. Returns false when the name is unknown.
            pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
                match name {
                    $($name => {
                        self.$field = Some(value.into());
                        true
                    })+
                    _ => false,
                }
            }

            /// Field-wise merge; present values in `other` win.
            pub fn merge(mut self, other: GatewayBindings) -> GatewayBindings {
                $(
                    if present(&other.$field).is_some() {
                        self.$field = other.$field;
                    }
                )+
                self
            }
        }
    };
}

gateway_bindings! {
    /// AI gateway key; becomes the OpenAI or Anthropic key
    ai_gateway_api_key => "AI_GATEWAY_API_KEY",
    /// AI gateway endpoint; a `/openai` suffix selects the OpenAI flavour
    ai_gateway_base_url => "AI_GATEWAY_BASE_URL",
    anthropic_api_key => "ANTHROPIC_API_KEY",
    anthropic_base_url => "ANTHROPIC_BASE_URL",
    openai_api_key => "OPENAI_API_KEY",

    // Additional model providers
    google_api_key => "GOOGLE_API_KEY",
    groq_api_key => "GROQ_API_KEY",
    mistral_api_key => "MISTRAL_API_KEY",
    cohere_api_key => "COHERE_API_KEY",
    perplexity_api_key => "PERPLEXITY_API_KEY",
    together_api_key => "TOGETHER_API_KEY",
    fireworks_api_key => "FIREWORKS_API_KEY",
    deepseek_api_key => "DEEPSEEK_API_KEY",
    xai_api_key => "XAI_API_KEY",
    replicate_api_token => "REPLICATE_API_TOKEN",
    azure_openai_api_key => "AZURE_OPENAI_API_KEY",
    azure_openai_endpoint => "AZURE_OPENAI_ENDPOINT",

    // Cloud and tool credentials
    aws_access_key_id => "AWS_ACCESS_KEY_ID",
    aws_secret_access_key => "AWS_SECRET_ACCESS_KEY",
    aws_region => "AWS_REGION",
    elevenlabs_api_key => "ELEVENLABS_API_KEY",
    brave_api_key => "BRAVE_API_KEY",
    github_token => "GITHUB_TOKEN",
    notion_token => "NOTION_TOKEN",

    /// Gateway token, exposed to the container as CLAWDBOT_GATEWAY_TOKEN
    moltbot_gateway_token => "MOLTBOT_GATEWAY_TOKEN",
    /// Dev mode flag, exposed to the container as CLAWDBOT_DEV_MODE
    dev_mode => "DEV_MODE",
    clawdbot_bind_mode => "CLAWDBOT_BIND_MODE",

    // Messaging platforms
    telegram_bot_token => "TELEGRAM_BOT_TOKEN",
    telegram_dm_policy => "TELEGRAM_DM_POLICY",
    discord_bot_token => "DISCORD_BOT_TOKEN",
    discord_dm_policy => "DISCORD_DM_POLICY",
    slack_bot_token => "SLACK_BOT_TOKEN",
    slack_app_token => "SLACK_APP_TOKEN",

    cdp_secret => "CDP_SECRET",
    worker_url => "WORKER_URL",
}

/// Supported bindings file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingsFormat {
    Json,
    Toml,
}

impl BindingsFormat {
    /// Detect the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(BindingsFormat::Json),
            "toml" => Some(BindingsFormat::Toml),
            _ => None,
        }
    }
}

impl fmt::Display for BindingsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingsFormat::Json => f.write_str("JSON"),
            BindingsFormat::Toml => f.write_str("TOML"),
        }
    }
}

/// Convert a raw process-environment value, skipping non-UTF-8 values with a warning.
///
/// Only the variable name is logged, never the value.
fn utf8_env_value(name: &str, raw: Option<OsString>) -> Option<String> {
    match raw?.into_string() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key = name, "Ignoring binding with non UTF-8 value");
            None
        }
    }
}

impl GatewayBindings {
    /// Build bindings by asking `lookup` for every known name
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bindings = Self::default();
        for name in Self::BINDING_NAMES {
            if let Some(value) = lookup(name) {
                bindings.set(name, value);
            }
        }
        bindings
    }

    /// Read every known binding from the current process environment
    pub fn from_process_env() -> Self {
        Self::from_lookup(|name| utf8_env_value(name, std::env::var_os(name)))
    }

    /// Parse bindings from a string in the given format
    pub fn parse(
        content: &str,
        format: BindingsFormat,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let bindings: Self = match format {
            BindingsFormat::Json => serde_json::from_str(content)?,
            BindingsFormat::Toml => toml::from_str(content)?,
        };
        Ok(bindings)
    }

    /// Load bindings from a JSON or TOML file
    pub fn from_file(path: &Path) -> MoltenvResult<Self> {
        let format = BindingsFormat::from_path(path).ok_or_else(|| {
            MoltenvError::config(
                "unsupported bindings format (expected .json or .toml)",
                Some(path.to_path_buf()),
            )
        })?;

        let content = std::fs::read_to_string(path)
            .map_err(|e| MoltenvError::filesystem("Failed to read bindings file", path, e))?;

        Self::parse(&content, format).map_err(|e| {
            MoltenvError::config_with_source(
                format!("invalid {} bindings", format),
                Some(path.to_path_buf()),
                e,
            )
        })
    }

    /// Names of all present (set and non-empty) bindings, in declaration order
    pub fn present_names(&self) -> Vec<&'static str> {
        Self::BINDING_NAMES
            .iter()
            .copied()
            .filter(|name| self.get(name).is_some())
            .collect()
    }

    /// True when no binding is present
    pub fn is_empty(&self) -> bool {
        self.present_names().is_empty()
    }
}
