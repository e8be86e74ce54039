use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level configuration from a `.logcascade.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop the directory walk here and only add ~/.logcascade.toml.
	#[serde(default)]
	pub root: bool,

	/// Template overrides keyed by template key, e.g. `"function.start.DEBUG"`.
	#[serde(default)]
	pub templates: BTreeMap<String, String>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Templates merged from every config file in the cascade.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	/// Effective template per key; the most specific file wins.
	pub templates: BTreeMap<String, TemplateWithSource>,
}

/// A template with the config file that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateWithSource {
	/// The template text.
	pub template: String,

	/// The config file this template came from.
	pub source: PathBuf,
}

impl MergedConfig {
	/// Plain key to template mapping, without sources.
	pub fn template_map(&self) -> BTreeMap<String, String> {
		self.templates
			.iter()
			.map(|(key, tws)| (key.clone(), tws.template.clone()))
			.collect()
	}
}
