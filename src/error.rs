use std::path::PathBuf;

/// Library-level structured errors for logcascade.
///
/// A key with no applicable value is not an error; lookups return `None`.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum CascadeError {
	#[error("Key {key:?} must be in configuration")]
	MissingRequiredKey { key: String },

	#[error("Key {key:?} is not a known key: {}", .known.join(", "))]
	UnknownKey { key: String, known: Vec<String> },

	#[error("Unknown severity: {name}")]
	UnknownSeverity { name: String },

	#[error("Invalid template key: {key}")]
	InvalidTemplateKey { key: String },

	#[error("Unknown placeholder {{{name}}} in template: {template}")]
	UnknownPlaceholder { name: String, template: String },

	#[error("Unbalanced brace in template: {template}")]
	UnbalancedBrace { template: String },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using CascadeError.
pub type Result<T> = std::result::Result<T, CascadeError>;
