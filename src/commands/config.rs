//! Configuration commands for managing popcorn settings.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print a single value
//! - `config set`: Set a configuration value
//! - `config path`: Print the config file location

use owo_colors::OwoColorize;
use serde_json::json;

use super::print_output;
use crate::config::{API_KEY_ENV, Config};
use crate::error::{PopcornError, Result};

/// Mask a sensitive value by showing only the first 2 and last 2 characters
pub fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

/// Where the effective API key comes from
fn api_key_source(config: &Config) -> Option<&'static str> {
    if std::env::var(API_KEY_ENV).is_ok_and(|v| !v.is_empty()) {
        Some("env")
    } else if config.api_key.as_deref().is_some_and(|k| !k.is_empty()) {
        Some("file")
    } else {
        None
    }
}

/// Show current configuration
pub fn cmd_config_show(as_json: bool) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path();
    let source = api_key_source(&config);
    let masked_key = config.api_key().map(|k| mask_sensitive_value(&k));

    let json_output = json!({
        "api_key": {
            "configured": masked_key.is_some(),
            "source": source,
            "value": masked_key,
        },
        "api_url": config.api_url,
        "request_timeout": config.request_timeout,
        "max_rating": config.max_rating,
        "default_rating": config.default_rating,
        "rating_messages": config.rating_messages,
        "config_file": path.to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    let key_status = match (&masked_key, source) {
        (Some(masked), Some(source)) => format!("{} ({source})", masked.green()),
        _ => "not configured".dimmed().to_string(),
    };
    text_output.push_str(&format!("{}: {key_status}\n", "api_key".cyan()));
    text_output.push_str(&format!("{}: {}\n", "api_url".cyan(), config.api_url));
    text_output.push_str(&format!(
        "{}: {}s\n",
        "request_timeout".cyan(),
        config.request_timeout
    ));
    text_output.push_str(&format!("{}: {}\n", "max_rating".cyan(), config.max_rating));
    text_output.push_str(&format!(
        "{}: {}\n",
        "default_rating".cyan(),
        config.default_rating
    ));
    let messages = if config.rating_messages.is_empty() {
        "not set".dimmed().to_string()
    } else {
        config.rating_messages.join(", ")
    };
    text_output.push_str(&format!("{}: {messages}\n", "rating_messages".cyan()));

    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", path.display()).dimmed()
    ));

    print_output(as_json, json_output, text_output)
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str, as_json: bool) -> Result<()> {
    let config = Config::load()?;

    let (json_output, text_output) = if key == "api_key" {
        let Some(api_key) = config.api_key() else {
            return Err(PopcornError::MissingApiKey);
        };
        let masked = mask_sensitive_value(&api_key);
        let json = json!({
            "key": key,
            "value": masked,
            "masked": true,
        });
        let text = format!("{masked} (masked - showing first 2 and last 2 characters)");
        (json, text)
    } else {
        let value = config
            .get(key)?
            .ok_or_else(|| PopcornError::Config(format!("{key} not set")))?;
        (json!({ "key": key, "value": value }), value)
    };

    print_output(as_json, json_output, text_output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, as_json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    tracing::info!("config key {} updated", key);

    let shown = if key == "api_key" {
        mask_sensitive_value(value)
    } else {
        value.to_string()
    };
    let json_output = json!({
        "action": "config_set",
        "key": key,
        "value": shown,
        "success": true,
    });
    let text_output = format!("Set {} = {}", key.cyan(), shown);

    print_output(as_json, json_output, text_output)
}

/// Print the config file location
pub fn cmd_config_path(as_json: bool) -> Result<()> {
    let path = Config::config_path();
    print_output(
        as_json,
        json!({ "config_file": path.to_string_lossy() }),
        path.display().to_string(),
    )
}
