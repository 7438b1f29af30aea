use std::sync::Arc;

use indexmap::map::Entry;
use rustc_hash::{FxBuildHasher, FxHashMap};

use super::types::{EnumLike, Map};
use crate::core::{BuildError, Definition, EnumLikeEntry};

/// Builder for constructing an [`EnumLike`] registry.
pub struct EnumLikeBuilder<V>
where
	V: EnumLikeEntry,
{
	label: &'static str,
	defs: Vec<Arc<V>>,
}

impl<V> EnumLikeBuilder<V>
where
	V: EnumLikeEntry,
{
	/// Creates a new builder with the given label for errors and diagnostics.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			defs: Vec::new(),
		}
	}

	/// Returns the number of entries pushed so far.
	pub fn len(&self) -> usize {
		self.defs.len()
	}

	/// Returns true if no entries have been pushed.
	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}

	/// Adds a single entry.
	pub fn push(&mut self, def: impl Into<Arc<V>>) {
		self.defs.push(def.into());
	}

	/// Adds entries in iteration order.
	pub fn extend<I, E>(&mut self, defs: I)
	where
		I: IntoIterator<Item = E>,
		E: Into<Arc<V>>,
	{
		self.defs.extend(defs.into_iter().map(Into::into));
	}

	/// Indexes the entries by key, rejecting the first repeated key.
	///
	/// Keys are compared by spelling as well as by `Eq`, so two key values that spell
	/// the same string are duplicates.
	pub fn build(self) -> Result<EnumLike<V>, BuildError> {
		let label = self.label;
		let mut by_key: Map<V::Key, Arc<V>> =
			Map::with_capacity_and_hasher(self.defs.len(), FxBuildHasher);
		let mut by_spelling: FxHashMap<String, usize> =
			FxHashMap::with_capacity_and_hasher(self.defs.len(), FxBuildHasher);

		for (ordinal, def) in self.defs.into_iter().enumerate() {
			let spelling = def.key().as_ref().to_owned();
			if let Some(&first) = by_spelling.get(&spelling) {
				return Err(duplicate_key(label, spelling, first, ordinal));
			}

			match by_key.entry(def.key().clone()) {
				Entry::Occupied(slot) => {
					return Err(duplicate_key(label, spelling, slot.index(), ordinal));
				}
				Entry::Vacant(slot) => {
					slot.insert(def);
				}
			}
			by_spelling.insert(spelling, ordinal);
		}

		tracing::debug!(registry = label, entries = by_key.len(), "enum-like registry built");

		Ok(EnumLike {
			label,
			by_key: Arc::new(by_key),
		})
	}
}

fn duplicate_key(label: &'static str, key: String, first: usize, duplicate: usize) -> BuildError {
	tracing::warn!(registry = label, key = %key, first, duplicate, "duplicate enum-like key");
	BuildError::DuplicateKey {
		registry: label,
		key,
		first,
		duplicate,
	}
}

impl<V> EnumLike<V>
where
	V: EnumLikeEntry,
{
	/// Label used when a registry is built without one.
	pub const DEFAULT_LABEL: &'static str = "enum_like";

	/// Returns a builder for a registry named `label`.
	pub fn builder(label: &'static str) -> EnumLikeBuilder<V> {
		EnumLikeBuilder::new(label)
	}

	/// Builds a registry from `(label, entry)` pairs under [`Self::DEFAULT_LABEL`].
	///
	/// Definition labels are discarded; entries are indexed by their own key in
	/// definition order.
	pub fn build<I, L, E>(definition: I) -> Result<Self, BuildError>
	where
		I: IntoIterator<Item = (L, E)>,
		E: Into<Arc<V>>,
	{
		Self::new(Self::DEFAULT_LABEL, definition)
	}

	/// Builds a registry named `label` from `(label, entry)` pairs.
	pub fn new<I, L, E>(label: &'static str, definition: I) -> Result<Self, BuildError>
	where
		I: IntoIterator<Item = (L, E)>,
		E: Into<Arc<V>>,
	{
		let mut builder = Self::builder(label);
		builder.extend(definition.into_iter().map(|(_, def)| def));
		builder.build()
	}
}

impl<V> TryFrom<Definition<V>> for EnumLike<V>
where
	V: EnumLikeEntry,
{
	type Error = BuildError;

	fn try_from(definition: Definition<V>) -> Result<Self, Self::Error> {
		Self::build(definition)
	}
}
