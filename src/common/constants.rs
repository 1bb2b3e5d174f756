//! Common constants used across the project

/// Environment variable names with special handling in the builder
pub mod vars {
    /// Gateway API key, routed to OpenAI or Anthropic depending on the gateway URL
    pub const AI_GATEWAY_API_KEY: &str = "AI_GATEWAY_API_KEY";
    /// Gateway base URL
    pub const AI_GATEWAY_BASE_URL: &str = "AI_GATEWAY_BASE_URL";

    pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
    pub const ANTHROPIC_BASE_URL: &str = "ANTHROPIC_BASE_URL";
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";

    /// Path suffix marking an OpenAI-compatible gateway endpoint
    pub const OPENAI_GATEWAY_SUFFIX: &str = "/openai";
}

/// Common file names and paths
pub mod files {
    /// Persistent configuration directory under $HOME
    pub const CONFIG_DIRECTORY: &str = ".moltenv";
    /// Default bindings file name
    pub const BINDINGS_JSON: &str = "bindings.json";
    /// Log file name
    pub const LOG_FILE: &str = "moltenv.log";
}

/// Logging defaults
pub mod logging {
    /// Filter used when neither --log-level nor RUST_LOG is set
    pub const DEFAULT_FILTER: &str = "warn,moltenv=info";
}
