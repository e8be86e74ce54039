use crate::cascade::graph::{CascadeGraph, Fallback};
use crate::cascade::store::ConfigStore;
use std::collections::{HashSet, VecDeque};

/// Configuration values with declared fallbacks between keys.
///
/// Looking up a key that has no value continues breadth-first through the
/// cascade graph, so the closest stored ancestor wins and equally distant
/// ancestors are tried in the order their edges were declared. Each key is
/// visited at most once, which makes cycles terminate instead of erroring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadingConfig<V> {
	store: ConfigStore<V>,
	graph: CascadeGraph,
}

/// A successful lookup together with how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a, V> {
	/// The value found.
	pub value: &'a V,

	/// The key that holds `value`.
	pub source: &'a str,

	/// Keys visited in order, from the requested key up to and including `source`.
	pub path: Vec<&'a str>,
}

impl<V> CascadingConfig<V> {
	pub fn new(store: ConfigStore<V>, graph: CascadeGraph) -> Self {
		CascadingConfig { store, graph }
	}

	pub fn store(&self) -> &ConfigStore<V> {
		&self.store
	}

	pub fn graph(&self) -> &CascadeGraph {
		&self.graph
	}

	/// Resolve `key`, giving `explicit_default` precedence over everything.
	///
	/// Without a default, returns the value of the closest stored key
	/// reachable from `key` (including `key` itself), or `None`.
	pub fn resolve<'a>(&'a self, key: &str, explicit_default: Option<&'a V>) -> Option<&'a V> {
		if explicit_default.is_some() {
			return explicit_default;
		}
		if let Some(value) = self.store.get_raw(key) {
			return Some(value);
		}
		Walk::new(&self.graph, key).find_map(|candidate| self.store.get_raw(candidate))
	}

	/// Best matching value for `key`, or `None` if nothing reachable is stored.
	pub fn get(&self, key: &str) -> Option<&V> {
		self.resolve(key, None)
	}

	/// Resolve `key` and report which key supplied the value.
	pub fn resolve_with_source<'a>(&'a self, key: &'a str) -> Option<Resolved<'a, V>> {
		let mut path = Vec::new();
		for candidate in self.walk(key) {
			path.push(candidate);
			if let Some(value) = self.store.get_raw(candidate) {
				tracing::debug!(key, source = candidate, "resolved cascade");
				return Some(Resolved {
					value,
					source: candidate,
					path,
				});
			}
		}
		tracing::debug!(key, visited = path.len(), "cascade exhausted without a value");
		None
	}

	/// Every key reachable from `key`, in breadth-first order, each once.
	///
	/// Independent of what is stored.
	pub fn cascade_list<'a>(&'a self, key: &'a str) -> Vec<&'a str> {
		self.walk(key).collect()
	}

	/// [`cascade_list`](Self::cascade_list) joined with `" -> "`.
	pub fn cascade_path(&self, key: &str) -> String {
		self.cascade_list(key).join(" -> ")
	}

	fn walk<'a>(&'a self, key: &'a str) -> Walk<'a> {
		Walk::new(&self.graph, key)
	}
}

impl<V: Clone> CascadingConfig<V> {
	/// Build a new config whose graph has `key`'s edge replaced.
	///
	/// `self` is left untouched, so readers sharing it never observe a change.
	pub fn with_cascade(&self, key: impl Into<String>, fallback: impl Into<Fallback>) -> Self {
		CascadingConfig {
			store: self.store.clone(),
			graph: self.graph.with_edge(key, fallback),
		}
	}
}

/// Breadth-first traversal of a cascade graph.
///
/// A key is marked when it is first queued, so nothing is queued twice.
struct Walk<'a> {
	graph: &'a CascadeGraph,
	queue: VecDeque<&'a str>,
	seen: HashSet<&'a str>,
}

impl<'a> Walk<'a> {
	fn new(graph: &'a CascadeGraph, start: &'a str) -> Self {
		Walk {
			graph,
			queue: VecDeque::from([start]),
			seen: HashSet::from([start]),
		}
	}
}

impl<'a> Iterator for Walk<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<&'a str> {
		let key = self.queue.pop_front()?;
		let graph = self.graph;
		for fallback in graph.fallbacks_of(key) {
			if self.seen.insert(fallback.as_str()) {
				self.queue.push_back(fallback.as_str());
			}
		}
		Some(key)
	}
}
