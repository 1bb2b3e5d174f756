//! Environment variable mapping from bindings to container variables

use crate::common::constants::vars;

/// Environment variable mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvVarMapping {
    /// Binding name read from the input record
    pub binding: &'static str,
    /// Environment variable key handed to the container
    pub key: &'static str,
    /// Description
    pub description: &'static str,
}

impl EnvVarMapping {
    const fn same(name: &'static str, description: &'static str) -> Self {
        Self {
            binding: name,
            key: name,
            description,
        }
    }

    const fn renamed(binding: &'static str, key: &'static str, description: &'static str) -> Self {
        Self {
            binding,
            key,
            description,
        }
    }

    /// Whether the container sees this binding under a different name
    pub fn is_renamed(&self) -> bool {
        self.binding != self.key
    }
}

/// Bindings copied verbatim when present, after the gateway rules ran
pub const PASSTHROUGH: &[EnvVarMapping] = &[
    EnvVarMapping::same("GOOGLE_API_KEY", "Google API Key"),
    EnvVarMapping::same("GROQ_API_KEY", "Groq API Key"),
    EnvVarMapping::same("MISTRAL_API_KEY", "Mistral API Key"),
    EnvVarMapping::same("COHERE_API_KEY", "Cohere API Key"),
    EnvVarMapping::same("PERPLEXITY_API_KEY", "Perplexity API Key"),
    EnvVarMapping::same("TOGETHER_API_KEY", "Together AI API Key"),
    EnvVarMapping::same("FIREWORKS_API_KEY", "Fireworks API Key"),
    EnvVarMapping::same("DEEPSEEK_API_KEY", "DeepSeek API Key"),
    EnvVarMapping::same("XAI_API_KEY", "xAI API Key"),
    EnvVarMapping::same("REPLICATE_API_TOKEN", "Replicate API Token"),
    EnvVarMapping::same("AZURE_OPENAI_API_KEY", "Azure OpenAI API Key"),
    EnvVarMapping::same("AZURE_OPENAI_ENDPOINT", "Azure OpenAI endpoint"),
    EnvVarMapping::same("AWS_ACCESS_KEY_ID", "AWS access key ID"),
    EnvVarMapping::same("AWS_SECRET_ACCESS_KEY", "AWS secret access key"),
    EnvVarMapping::same("AWS_REGION", "AWS region"),
    EnvVarMapping::same("ELEVENLABS_API_KEY", "ElevenLabs API Key"),
    EnvVarMapping::same("BRAVE_API_KEY", "Brave Search API Key"),
    EnvVarMapping::same("GITHUB_TOKEN", "GitHub token"),
    EnvVarMapping::same("NOTION_TOKEN", "Notion token"),
    // container expects the CLAWDBOT_ prefix for these two
    EnvVarMapping::renamed("MOLTBOT_GATEWAY_TOKEN", "CLAWDBOT_GATEWAY_TOKEN", "Gateway token"),
    EnvVarMapping::renamed("DEV_MODE", "CLAWDBOT_DEV_MODE", "Dev mode flag"),
    EnvVarMapping::same("CLAWDBOT_BIND_MODE", "Gateway bind mode"),
    EnvVarMapping::same("TELEGRAM_BOT_TOKEN", "Telegram bot token"),
    EnvVarMapping::same("TELEGRAM_DM_POLICY", "Telegram DM policy"),
    EnvVarMapping::same("DISCORD_BOT_TOKEN", "Discord bot token"),
    EnvVarMapping::same("DISCORD_DM_POLICY", "Discord DM policy"),
    EnvVarMapping::same("SLACK_BOT_TOKEN", "Slack bot token"),
    EnvVarMapping::same("SLACK_APP_TOKEN", "Slack app token"),
    EnvVarMapping::same("CDP_SECRET", "Chrome DevTools Protocol secret"),
    EnvVarMapping::same("WORKER_URL", "Public worker URL"),
];

/// Mappings decided by the gateway rules rather than copied 1:1.
///
/// Several entries share a key: the builder picks one per the precedence
/// of gateway key over direct key.
pub const GATEWAY_DERIVED: &[EnvVarMapping] = &[
    EnvVarMapping::renamed(
        vars::AI_GATEWAY_API_KEY,
        vars::ANTHROPIC_API_KEY,
        "Gateway key (non-OpenAI gateway)",
    ),
    EnvVarMapping::renamed(
        vars::AI_GATEWAY_API_KEY,
        vars::OPENAI_API_KEY,
        "Gateway key (gateway URL ends with /openai)",
    ),
    EnvVarMapping::same(vars::ANTHROPIC_API_KEY, "Anthropic API Key (fallback)"),
    EnvVarMapping::same(vars::OPENAI_API_KEY, "OpenAI API Key (fallback)"),
    EnvVarMapping::same(vars::AI_GATEWAY_BASE_URL, "Gateway URL, trailing slashes removed"),
    EnvVarMapping::renamed(
        vars::AI_GATEWAY_BASE_URL,
        vars::ANTHROPIC_BASE_URL,
        "Gateway URL (non-OpenAI gateway)",
    ),
    EnvVarMapping::renamed(
        vars::AI_GATEWAY_BASE_URL,
        vars::OPENAI_BASE_URL,
        "Gateway URL (ends with /openai)",
    ),
    EnvVarMapping::same(vars::ANTHROPIC_BASE_URL, "Anthropic endpoint when no gateway URL"),
];

/// Every mapping, gateway rules first
pub fn all_mappings() -> impl Iterator<Item = &'static EnvVarMapping> {
    GATEWAY_DERIVED.iter().chain(PASSTHROUGH.iter())
}

/// Every variable name the builder can ever emit, sorted and deduplicated
pub fn output_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = all_mappings().map(|m| m.key).collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}
