use std::collections::HashMap;

/// Immutable mapping from configuration key to configured value.
///
/// The store copies whatever it is built from and offers no way to add,
/// remove, or reassign a key afterwards. Absence is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore<V> {
	values: HashMap<String, V>,
}

impl<V> ConfigStore<V> {
	/// Create an empty store.
	pub fn empty() -> Self {
		ConfigStore {
			values: HashMap::new(),
		}
	}

	/// Whether `key` has a value.
	pub fn contains(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	/// The value stored under `key`, if any.
	pub fn get_raw(&self, key: &str) -> Option<&V> {
		self.values.get(key)
	}

	/// Iterate over the stored keys in arbitrary order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.values.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl<V> Default for ConfigStore<V> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<K, V> FromIterator<(K, V)> for ConfigStore<V>
where
	K: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		ConfigStore {
			values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
		}
	}
}
