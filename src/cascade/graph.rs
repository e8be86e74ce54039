use serde::Deserialize;
use std::collections::HashMap;

/// Declared fallback target(s) for one key.
///
/// In TOML a single string deserializes to `One` and an array to `Many`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Fallback {
	/// Fall back to exactly one key.
	One(String),

	/// Fall back to several keys, tried in declared order.
	Many(Vec<String>),
}

impl Fallback {
	/// The fallback targets as an ordered slice.
	pub fn as_slice(&self) -> &[String] {
		match self {
			Fallback::One(key) => std::slice::from_ref(key),
			Fallback::Many(keys) => keys,
		}
	}
}

impl From<&str> for Fallback {
	fn from(key: &str) -> Self {
		Fallback::One(key.to_string())
	}
}

impl From<String> for Fallback {
	fn from(key: String) -> Self {
		Fallback::One(key)
	}
}

impl<S: Into<String>> From<Vec<S>> for Fallback {
	fn from(keys: Vec<S>) -> Self {
		Fallback::Many(keys.into_iter().map(Into::into).collect())
	}
}

/// Directed fallback graph over configuration keys.
///
/// Targets are not checked against any store: a dangling target simply never
/// yields a value. Cycles are allowed here and handled by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeGraph {
	edges: HashMap<String, Fallback>,
}

impl CascadeGraph {
	/// Ordered fallbacks declared for `key`; empty when none are declared.
	pub fn fallbacks_of(&self, key: &str) -> &[String] {
		self.edges.get(key).map(Fallback::as_slice).unwrap_or(&[])
	}

	/// Whether `key` has a declared edge.
	pub fn contains(&self, key: &str) -> bool {
		self.edges.contains_key(key)
	}

	/// Iterate over every key that has a declared edge.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.edges.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.edges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}

	/// Return a new graph with `key`'s edge replaced by `fallback`.
	pub fn with_edge(&self, key: impl Into<String>, fallback: impl Into<Fallback>) -> Self {
		let mut edges = self.edges.clone();
		edges.insert(key.into(), fallback.into());
		CascadeGraph { edges }
	}
}

impl<K, F> FromIterator<(K, F)> for CascadeGraph
where
	K: Into<String>,
	F: Into<Fallback>,
{
	fn from_iter<I: IntoIterator<Item = (K, F)>>(iter: I) -> Self {
		CascadeGraph {
			edges: iter
				.into_iter()
				.map(|(k, f)| (k.into(), f.into()))
				.collect(),
		}
	}
}
