//! CLI command implementations

mod browse;
mod config;

pub use browse::{BrowseOptions, cmd_browse};
pub use config::{
    cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show, mask_sensitive_value,
};

use crate::error::Result;

/// Print either the JSON or the text rendering of a command's output
pub fn print_output(as_json: bool, json: serde_json::Value, text: String) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{text}");
    }
    Ok(())
}
