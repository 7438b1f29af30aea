use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::core::EnumLikeEntry;

pub(super) type Map<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Immutable keyed set of entries with lookup, search and ordered enumeration.
///
/// Entries are held as `Arc<V>` and every query hands back the caller's original
/// allocation. Cloning shares the index.
pub struct EnumLike<V>
where
	V: EnumLikeEntry,
{
	pub(crate) label: &'static str,
	pub(crate) by_key: Arc<Map<V::Key, Arc<V>>>,
}

impl<V> Clone for EnumLike<V>
where
	V: EnumLikeEntry,
{
	fn clone(&self) -> Self {
		Self {
			label: self.label,
			by_key: self.by_key.clone(),
		}
	}
}

impl<V> fmt::Debug for EnumLike<V>
where
	V: EnumLikeEntry,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EnumLike")
			.field("label", &self.label)
			.field("keys", &self.by_key.keys().collect::<Vec<_>>())
			.finish()
	}
}

impl<'a, V> IntoIterator for &'a EnumLike<V>
where
	V: EnumLikeEntry,
{
	type Item = &'a Arc<V>;
	type IntoIter = indexmap::map::Values<'a, V::Key, Arc<V>>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
