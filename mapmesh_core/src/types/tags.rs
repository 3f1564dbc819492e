use serde::{Deserialize, Serialize};
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// String to string attribute mapping attached to every map entity.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(BTreeMap<String, String>);

impl Tags {
	pub fn new() -> Tags {
		Tags(BTreeMap::new())
	}

	pub fn insert(&mut self, key: &str, value: &str) {
		self.0.insert(key.to_string(), value.to_string());
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
		self.0.iter()
	}

	/// Parses a tag as a finite float. Missing or unparseable values yield `None`.
	pub fn parse_f64(&self, key: &str) -> Option<f64> {
		self
			.get(key)?
			.trim()
			.parse::<f64>()
			.ok()
			.filter(|value| value.is_finite())
	}

	/// Parses a tag as an integer. `"2.5"` or `"two"` yield `None`.
	pub fn parse_i64(&self, key: &str) -> Option<i64> {
		self.get(key)?.trim().parse::<i64>().ok()
	}
}

impl From<Vec<(&str, &str)>> for Tags {
	fn from(value: Vec<(&str, &str)>) -> Self {
		Tags(value.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
	}
}

impl<const N: usize> From<[(&str, &str); N]> for Tags {
	fn from(value: [(&str, &str); N]) -> Self {
		Tags(value.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
	}
}

impl FromIterator<(String, String)> for Tags {
	fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
		Tags(BTreeMap::from_iter(iter))
	}
}

impl IntoIterator for Tags {
	type Item = (String, String);
	type IntoIter = btree_map::IntoIter<String, String>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl Debug for Tags {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.0.iter()).finish()
	}
}
