//! Environment variable injection for the bot container process

use super::bindings::GatewayBindings;
use super::env_builder::EnvVars;
use super::env_mapping::output_keys;

/// Handles environment variable injection into child process commands
pub struct EnvInjector;

impl EnvInjector {
    /// Inject environment variables into a std command
    pub fn inject(cmd: &mut std::process::Command, env_vars: &EnvVars) {
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
    }

    /// Inject environment variables into a tokio command
    pub fn inject_tokio(cmd: &mut tokio::process::Command, env_vars: &EnvVars) {
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
    }

    /// Known binding and output names that are not part of `env_vars`.
    ///
    /// These must not reach the child through inheritance: a raw `DEV_MODE`
    /// next to `CLAWDBOT_DEV_MODE`, or a stale `ANTHROPIC_BASE_URL` next to an
    /// OpenAI gateway URL.
    pub fn stale_keys(env_vars: &EnvVars) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = GatewayBindings::BINDING_NAMES
            .iter()
            .copied()
            .chain(output_keys())
            .filter(|key| !env_vars.contains_key(*key))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Remove every stale key from a tokio command's inherited environment
    pub fn remove_stale_tokio(cmd: &mut tokio::process::Command, env_vars: &EnvVars) {
        for key in Self::stale_keys(env_vars) {
            cmd.env_remove(key);
        }
    }

    /// Injected key names, sorted. Values never leave this module through logs.
    pub fn key_names(env_vars: &EnvVars) -> Vec<&str> {
        let mut keys: Vec<&str> = env_vars.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_inject_std_command() {
        let mut env_vars = EnvVars::new();
        env_vars.insert("TELEGRAM_BOT_TOKEN".to_string(), "tg".to_string());
        env_vars.insert("CLAWDBOT_DEV_MODE".to_string(), "true".to_string());

        let mut cmd = std::process::Command::new("true");
        EnvInjector::inject(&mut cmd, &env_vars);

        let mut injected: Vec<(&OsStr, Option<&OsStr>)> = cmd.get_envs().collect();
        injected.sort();
        assert_eq!(
            injected,
            vec![
                (OsStr::new("CLAWDBOT_DEV_MODE"), Some(OsStr::new("true"))),
                (OsStr::new("TELEGRAM_BOT_TOKEN"), Some(OsStr::new("tg"))),
            ]
        );
    }

    #[test]
    fn test_stale_keys_exclude_injected() {
        let mut env_vars = EnvVars::new();
        env_vars.insert("OPENAI_BASE_URL".to_string(), "https://x/openai".to_string());
        env_vars.insert("CLAWDBOT_DEV_MODE".to_string(), "true".to_string());

        let stale = EnvInjector::stale_keys(&env_vars);
        assert!(stale.contains(&"ANTHROPIC_BASE_URL"));
        assert!(stale.contains(&"DEV_MODE"));
        assert!(stale.contains(&"MOLTBOT_GATEWAY_TOKEN"));
        assert!(stale.contains(&"CLAWDBOT_GATEWAY_TOKEN"));
        assert!(!stale.contains(&"OPENAI_BASE_URL"));
        assert!(!stale.contains(&"CLAWDBOT_DEV_MODE"));
        assert!(!stale.contains(&"PATH"));
    }

    #[test]
    fn test_key_names_sorted() {
        let env_vars: EnvVars = [("b", "1"), ("a", "2")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(EnvInjector::key_names(&env_vars), vec!["a", "b"]);
    }
}
