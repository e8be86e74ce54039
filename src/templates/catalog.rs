use crate::cascade::{CascadeGraph, CascadingConfig, ConfigStore, Fallback};
use crate::error::{CascadeError, Result};
use crate::templates::keys::{ContextKind, Severity, Stage, TemplateKey};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Built-in templates used when no configuration supplies any.
pub const DEFAULT_TEMPLATES: [(&str, &str); 2] =
	[("start", "Start {label}"), ("finish", "Finish {label}")];

/// Keys every template mapping must define directly.
pub const REQUIRED_KEYS: [&str; 2] = ["start", "finish"];

/// Build the fixed fallback graph for the start/finish template namespace.
///
/// For every stage `s`, kind `k` and severity `L`: `s.L -> s`, `k.s -> s` and
/// `k.s.L -> [s.L, k.s]`.
pub fn build_cascade_graph() -> CascadeGraph {
	TemplateKey::all()
		.filter_map(|key| {
			let fallbacks: Vec<String> = key.fallbacks().iter().map(|k| k.to_string()).collect();
			match fallbacks.len() {
				0 => None,
				1 => Some((key.to_string(), Fallback::from(fallbacks[0].clone()))),
				_ => Some((key.to_string(), Fallback::Many(fallbacks))),
			}
		})
		.collect()
}

/// Start/finish message templates for logged contexts and functions.
///
/// Lookups walk the fixed graph from [`build_cascade_graph`], so a mapping
/// with only `start` and `finish` answers every key in the namespace.
#[derive(Debug, Clone)]
pub struct ContextTemplates {
	config: CascadingConfig<String>,
	unrecognized: Vec<String>,
}

impl ContextTemplates {
	/// Build the catalog from a key to template mapping.
	///
	/// An empty mapping yields the built-in [`DEFAULT_TEMPLATES`]. Otherwise
	/// fails if `start` or `finish` is missing. Keys outside the template
	/// namespace are kept but logged as warnings.
	pub fn new<I, K, T>(templates: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, T)>,
		K: Into<String>,
		T: Into<String>,
	{
		let templates: HashMap<String, String> = templates
			.into_iter()
			.map(|(k, t)| (k.into(), t.into()))
			.collect();
		if templates.is_empty() {
			return Ok(ContextTemplates::default());
		}

		for key in REQUIRED_KEYS {
			if !templates.contains_key(key) {
				return Err(CascadeError::MissingRequiredKey {
					key: key.to_string(),
				});
			}
		}

		let graph = build_cascade_graph();
		let mut unrecognized: Vec<String> = templates
			.keys()
			.filter(|key| !REQUIRED_KEYS.contains(&key.as_str()) && !graph.contains(key))
			.cloned()
			.collect();
		unrecognized.sort();
		for key in &unrecognized {
			tracing::warn!(key = %key, "unrecognized template key");
		}

		Ok(ContextTemplates {
			config: CascadingConfig::new(templates.into_iter().collect::<ConfigStore<_>>(), graph),
			unrecognized,
		})
	}

	/// Template for `key`, following the cascade.
	///
	/// A key outside the namespace that was not supplied directly is an
	/// [`CascadeError::UnknownKey`] error.
	pub fn resolve_template(&self, key: &str) -> Result<&str> {
		self.config
			.get(key)
			.map(String::as_str)
			.ok_or_else(|| CascadeError::UnknownKey {
				key: key.to_string(),
				known: self.known_keys(),
			})
	}

	/// Template for a typed key.
	pub fn template_for(
		&self,
		kind: ContextKind,
		stage: Stage,
		severity: Severity,
	) -> Result<&str> {
		let key = TemplateKey::new(Some(kind), stage, Some(severity)).to_string();
		self.resolve_template(&key)
	}

	/// Rebuild with `overrides` layered over the current templates.
	///
	/// The current catalog is not modified.
	pub fn with_overrides<I, K, T>(&self, overrides: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, T)>,
		K: Into<String>,
		T: Into<String>,
	{
		let mut templates = self.templates();
		templates.extend(overrides.into_iter().map(|(k, t)| (k.into(), t.into())));
		ContextTemplates::new(templates)
	}

	/// Every key this catalog recognizes: the namespace plus supplied keys, sorted.
	pub fn known_keys(&self) -> Vec<String> {
		let keys: BTreeSet<&str> = REQUIRED_KEYS
			.into_iter()
			.chain(self.config.graph().keys())
			.chain(self.config.store().keys())
			.collect();
		keys.into_iter().map(str::to_string).collect()
	}

	/// Supplied keys that are not part of the namespace, sorted.
	pub fn unrecognized_keys(&self) -> &[String] {
		&self.unrecognized
	}

	/// Copy of the directly supplied templates.
	pub fn templates(&self) -> BTreeMap<String, String> {
		let store = self.config.store();
		store
			.keys()
			.filter_map(|key| store.get_raw(key).map(|t| (key.to_string(), t.clone())))
			.collect()
	}

	/// The underlying resolver, for path and source queries.
	pub fn cascade(&self) -> &CascadingConfig<String> {
		&self.config
	}
}

impl Default for ContextTemplates {
	fn default() -> Self {
		let templates = DEFAULT_TEMPLATES
			.into_iter()
			.map(|(k, t)| (k.to_string(), t.to_string()))
			.collect::<ConfigStore<_>>();
		ContextTemplates {
			config: CascadingConfig::new(templates, build_cascade_graph()),
			unrecognized: Vec::new(),
		}
	}
}
