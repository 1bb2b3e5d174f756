//! 环境变量构建的行为测试
//!
//! 覆盖网关优先级、URL 规范化以及任意输入下的不变量

use moltenv::provider::env_builder::normalize_base_url;
use moltenv::provider::env_mapping::output_keys;
use moltenv::{build_env_vars, EnvVars, GatewayBindings};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use test_case::test_case;

fn bindings(pairs: &[(&str, &str)]) -> GatewayBindings {
    let mut bindings = GatewayBindings::default();
    for (name, value) in pairs {
        assert!(bindings.set(name, *value), "unknown binding {}", name);
    }
    bindings
}

fn env(pairs: &[(&str, &str)]) -> EnvVars {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn openai_gateway_url_is_trimmed_and_routed() {
    let result = build_env_vars(&bindings(&[("AI_GATEWAY_BASE_URL", "https://x/openai///")]));

    assert_eq!(result.get("AI_GATEWAY_BASE_URL").map(String::as_str), Some("https://x/openai"));
    assert_eq!(result.get("OPENAI_BASE_URL").map(String::as_str), Some("https://x/openai"));
    assert!(!result.contains_key("ANTHROPIC_BASE_URL"));
}

#[test]
fn gateway_key_beats_direct_anthropic_key() {
    let result = build_env_vars(&bindings(&[
        ("AI_GATEWAY_API_KEY", "gateway"),
        ("ANTHROPIC_API_KEY", "direct"),
    ]));
    assert_eq!(result, env(&[("ANTHROPIC_API_KEY", "gateway")]));
}

#[test]
fn telegram_token_alone() {
    let result = build_env_vars(&bindings(&[("TELEGRAM_BOT_TOKEN", "123:abc")]));
    assert_eq!(result, env(&[("TELEGRAM_BOT_TOKEN", "123:abc")]));
}

#[test_case("https://gw.example/v1/acct/openai", "OPENAI_BASE_URL", "ANTHROPIC_BASE_URL" ; "openai endpoint")]
#[test_case("https://gw.example/v1/acct/openai/", "OPENAI_BASE_URL", "ANTHROPIC_BASE_URL" ; "openai endpoint with slash")]
#[test_case("https://gw.example/v1/acct/anthropic", "ANTHROPIC_BASE_URL", "OPENAI_BASE_URL" ; "anthropic endpoint")]
#[test_case("https://gw.example/openai/v1", "ANTHROPIC_BASE_URL", "OPENAI_BASE_URL" ; "openai not a suffix")]
fn gateway_url_picks_provider(url: &str, expected: &str, absent: &str) {
    let result = build_env_vars(&bindings(&[
        ("AI_GATEWAY_BASE_URL", url),
        ("AI_GATEWAY_API_KEY", "gw"),
    ]));

    let trimmed = normalize_base_url(url);
    assert_eq!(result.get(expected).map(String::as_str), Some(trimmed));
    assert!(!result.contains_key(absent));

    let key_var = if expected == "OPENAI_BASE_URL" {
        "OPENAI_API_KEY"
    } else {
        "ANTHROPIC_API_KEY"
    };
    assert_eq!(result.get(key_var).map(String::as_str), Some("gw"));
}

#[test_case("MOLTBOT_GATEWAY_TOKEN", "CLAWDBOT_GATEWAY_TOKEN" ; "gateway token")]
#[test_case("DEV_MODE", "CLAWDBOT_DEV_MODE" ; "dev mode")]
#[test_case("AZURE_OPENAI_ENDPOINT", "AZURE_OPENAI_ENDPOINT" ; "azure endpoint")]
#[test_case("SLACK_APP_TOKEN", "SLACK_APP_TOKEN" ; "slack app token")]
#[test_case("WORKER_URL", "WORKER_URL" ; "worker url")]
fn passthrough_names(binding: &str, key: &str) {
    let result = build_env_vars(&bindings(&[(binding, "value")]));
    assert_eq!(result, env(&[(key, "value")]));
}

#[test]
fn full_deployment_bindings() {
    let result = build_env_vars(&bindings(&[
        ("AI_GATEWAY_API_KEY", "cf-gw-key"),
        ("AI_GATEWAY_BASE_URL", "https://gateway.ai.cloudflare.com/v1/acct/gw/anthropic/"),
        ("ANTHROPIC_API_KEY", "sk-ant"),
        ("OPENAI_API_KEY", "sk-openai"),
        ("MOLTBOT_GATEWAY_TOKEN", "tok"),
        ("DEV_MODE", "false"),
        ("DISCORD_BOT_TOKEN", "discord"),
        ("DISCORD_DM_POLICY", "open"),
        ("CDP_SECRET", ""),
    ]));

    assert_eq!(
        result,
        env(&[
            ("ANTHROPIC_API_KEY", "cf-gw-key"),
            ("OPENAI_API_KEY", "sk-openai"),
            (
                "AI_GATEWAY_BASE_URL",
                "https://gateway.ai.cloudflare.com/v1/acct/gw/anthropic"
            ),
            (
                "ANTHROPIC_BASE_URL",
                "https://gateway.ai.cloudflare.com/v1/acct/gw/anthropic"
            ),
            ("CLAWDBOT_GATEWAY_TOKEN", "tok"),
            ("CLAWDBOT_DEV_MODE", "false"),
            ("DISCORD_BOT_TOKEN", "discord"),
            ("DISCORD_DM_POLICY", "open"),
        ])
    );
}

fn arb_bindings() -> impl Strategy<Value = GatewayBindings> {
    let value = prop_oneof![
        "[a-zA-Z0-9_-]{0,12}",
        "https://[a-z]{1,6}(/[a-z]{1,6}){0,2}(/openai)?/{0,3}",
    ];
    proptest::collection::vec(
        proptest::option::of(value),
        GatewayBindings::BINDING_NAMES.len(),
    )
    .prop_map(|values| {
        let mut bindings = GatewayBindings::default();
        for (name, value) in GatewayBindings::BINDING_NAMES.iter().zip(values) {
            if let Some(value) = value {
                bindings.set(name, value);
            }
        }
        bindings
    })
}

proptest! {
    #[test]
    fn output_values_come_from_input(input in arb_bindings()) {
        let result = build_env_vars(&input);
        let gateway_url = input.get("AI_GATEWAY_BASE_URL").map(normalize_base_url);
        let known_keys = output_keys();

        for (key, value) in &result {
            prop_assert!(!value.is_empty(), "{} is empty", key);
            prop_assert!(known_keys.contains(&key.as_str()), "{} is not a known output", key);
            let verbatim = GatewayBindings::BINDING_NAMES
                .iter()
                .any(|name| input.get(name) == Some(value.as_str()));
            prop_assert!(verbatim || gateway_url == Some(value.as_str()));
        }
    }

    #[test]
    fn without_gateway_key_direct_keys_pass_through(input in arb_bindings()) {
        let mut input = input;
        input.ai_gateway_api_key = None;
        let result = build_env_vars(&input);

        for name in ["OPENAI_API_KEY", "ANTHROPIC_API_KEY"] {
            prop_assert_eq!(result.get(name).map(String::as_str), input.get(name));
        }
    }

    #[test]
    fn gateway_url_selects_exactly_one_base_url(input in arb_bindings()) {
        let result = build_env_vars(&input);
        if let Some(url) = input.get("AI_GATEWAY_BASE_URL").map(normalize_base_url) {
            if !url.is_empty() {
                let openai = url.ends_with("/openai");
                prop_assert_eq!(result.contains_key("OPENAI_BASE_URL"), openai);
                if openai {
                    prop_assert!(!result.contains_key("ANTHROPIC_BASE_URL"));
                } else {
                    prop_assert_eq!(result.get("ANTHROPIC_BASE_URL").map(String::as_str), Some(url));
                }
            }
        }
    }

    #[test]
    fn building_twice_is_identical(input in arb_bindings()) {
        prop_assert_eq!(build_env_vars(&input), build_env_vars(&input));
    }
}
