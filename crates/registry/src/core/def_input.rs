//! Ordered label-to-entry definitions consumed by the registry builder.

use std::borrow::Cow;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Label naming one entry of a [`Definition`].
pub type Label = Cow<'static, str>;

/// Ordered mapping from labels to entries.
///
/// Labels only organise the definition; the built registry indexes entries by their
/// own key and forgets the labels. Re-inserting a label replaces its entry in place,
/// keeping the original position.
pub struct Definition<V> {
	entries: IndexMap<Label, Arc<V>, FxBuildHasher>,
}

impl<V> Definition<V> {
	/// Creates an empty definition.
	pub fn new() -> Self {
		Self {
			entries: IndexMap::default(),
		}
	}

	/// Adds an entry under `label`, returning the definition for chaining.
	pub fn with(mut self, label: impl Into<Label>, entry: impl Into<Arc<V>>) -> Self {
		self.insert(label, entry);
		self
	}

	/// Adds an entry under `label`, returning the entry it replaced.
	pub fn insert(&mut self, label: impl Into<Label>, entry: impl Into<Arc<V>>) -> Option<Arc<V>> {
		self.entries.insert(label.into(), entry.into())
	}

	/// Returns the entry stored under `label`.
	pub fn get(&self, label: &str) -> Option<&Arc<V>> {
		self.entries.get(label)
	}

	/// Returns the labels in definition order.
	pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
		self.entries.keys().map(|label| label.as_ref())
	}

	/// Returns the number of labelled entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no entries have been added.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<V> Default for Definition<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> Clone for Definition<V> {
	fn clone(&self) -> Self {
		Self {
			entries: self.entries.clone(),
		}
	}
}

impl<V, L, E> FromIterator<(L, E)> for Definition<V>
where
	L: Into<Label>,
	E: Into<Arc<V>>,
{
	fn from_iter<I: IntoIterator<Item = (L, E)>>(iter: I) -> Self {
		let mut def = Self::new();
		for (label, entry) in iter {
			def.insert(label, entry);
		}
		def
	}
}

impl<V> IntoIterator for Definition<V> {
	type Item = (Label, Arc<V>);
	type IntoIter = indexmap::map::IntoIter<Label, Arc<V>>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}
