use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, MergedConfig, TemplateWithSource};
use crate::error::{CascadeError, Result};
use crate::templates::ContextTemplates;
use std::path::{Path, PathBuf};

/// File name looked up in each directory.
pub const CONFIG_FILE_NAME: &str = ".logcascade.toml";

/// Environment variable that, if truthy, skips ~/.logcascade.toml.
pub const NO_USER_CONFIG_ENV_VAR: &str = "LOGCASCADE_NO_USER_CONFIG";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.logcascade.toml`
/// 2. If found and `root = true`, stop walking up
/// 3. Otherwise, continue up the directory tree
/// 4. Finally, check ~/.logcascade.toml (unless disabled)
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = start_dir.to_path_buf();

	loop {
		let config_path = current_dir.join(CONFIG_FILE_NAME);

		if config_path.exists() {
			let config = parse_config_file(&config_path)?;
			tracing::debug!(path = %config_path.display(), root = config.root, "found config file");

			let is_root = config.root;
			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if is_root {
				break;
			}
		}

		match current_dir.parent() {
			Some(parent) => current_dir = parent.to_path_buf(),
			None => break,
		}
	}

	if let Some(user_config) = load_user_config(&configs)? {
		configs.push(user_config);
	}

	Ok(configs)
}

/// Load the user's ~/.logcascade.toml if it exists and isn't disabled.
fn load_user_config(existing_configs: &[LoadedConfig]) -> Result<Option<LoadedConfig>> {
	if is_env_truthy(NO_USER_CONFIG_ENV_VAR) {
		return Ok(None);
	}

	let user_config_path = user_config_path()?;

	// The walk up from a directory under $HOME may already have found it.
	if existing_configs
		.iter()
		.any(|loaded| loaded.path == user_config_path)
	{
		return Ok(None);
	}

	if user_config_path.exists() {
		let config = parse_config_file(&user_config_path)?;
		Ok(Some(LoadedConfig {
			config,
			path: user_config_path,
		}))
	} else {
		Ok(None)
	}
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Merge multiple configs into a single effective config.
///
/// `configs` is in cascade order, so the first file defining a key wins.
pub fn merge_configs(configs: &[LoadedConfig]) -> MergedConfig {
	let mut merged = MergedConfig::default();

	for loaded in configs.iter().rev() {
		for (key, template) in &loaded.config.templates {
			merged.templates.insert(
				key.clone(),
				TemplateWithSource {
					template: template.clone(),
					source: loaded.path.clone(),
				},
			);
		}
	}

	merged
}

/// Convenience function to discover and merge configs from a directory.
pub fn load_merged_config(start_dir: &Path) -> Result<MergedConfig> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Build the template catalog for `start_dir`.
///
/// Falls back to the built-in templates when no config file defines any.
pub fn load_templates(start_dir: &Path) -> Result<ContextTemplates> {
	templates_from_merged(&load_merged_config(start_dir)?)
}

/// Build the template catalog from an already merged config.
pub fn templates_from_merged(merged: &MergedConfig) -> Result<ContextTemplates> {
	if merged.templates.is_empty() {
		tracing::debug!("no templates configured, using defaults");
	}
	ContextTemplates::new(merged.template_map())
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(CascadeError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
