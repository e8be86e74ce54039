//! Configuration loading and parsing for logcascade.
//!
//! This module handles:
//! - TOML config file parsing
//! - Directory cascade discovery
//! - Template merging with source tracking

pub mod discovery;
pub mod parser;
pub mod types;

pub use discovery::{
	CONFIG_FILE_NAME, NO_USER_CONFIG_ENV_VAR, discover_configs, load_merged_config,
	load_templates, merge_configs, templates_from_merged, user_config_path,
};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, LoadedConfig, MergedConfig, TemplateWithSource};
