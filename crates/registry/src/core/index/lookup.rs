//! Read-only queries over a built registry.
//!
//! Known-valid keys go through [`EnumLike::get`], which reports a miss as an
//! [`InternalError`]. Untrusted strings go through [`EnumLike::parse_key`] and its
//! override forms, which report a [`LookupError`] or the caller's own error.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

use super::types::EnumLike;
use crate::core::{EnumLikeEntry, InternalError, LookupError};

impl<V> EnumLike<V>
where
	V: EnumLikeEntry,
{
	/// Returns the label this registry reports in errors and logs.
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the entry for a key the caller knows is registered.
	///
	/// A miss means the calling code is out of sync with the registry and is reported
	/// as [`InternalError`].
	pub fn get<Q>(&self, key: &Q) -> Result<&Arc<V>, InternalError>
	where
		V::Key: Borrow<Q>,
		Q: Hash + Eq + AsRef<str> + ?Sized,
	{
		self.by_key.get(key).ok_or_else(|| {
			tracing::error!(
				registry = self.label,
				key = key.as_ref(),
				"lookup of unregistered enum-like key"
			);
			InternalError {
				registry: self.label,
				key: key.as_ref().to_owned(),
			}
		})
	}

	/// Returns the entry whose key is spelled `raw`.
	///
	/// For keys taken from external input. Every entry is compared by spelling, so
	/// `raw` need not be the registry's key type.
	pub fn parse_key(&self, raw: &str) -> Result<&Arc<V>, LookupError> {
		self.parse_key_or_else(raw, || {
			tracing::trace!(registry = self.label, key = raw, "unknown enum-like key");
			LookupError::UnknownKey {
				registry: self.label,
				key: raw.to_owned(),
			}
		})
	}

	/// Like [`Self::parse_key`], but fails with `error` on a miss.
	pub fn parse_key_or<E>(&self, raw: &str, error: E) -> Result<&Arc<V>, E> {
		self.scan_key(raw).ok_or(error)
	}

	/// Like [`Self::parse_key`], but fails with the error produced by `f` on a miss.
	pub fn parse_key_or_else<E, F>(&self, raw: &str, f: F) -> Result<&Arc<V>, E>
	where
		F: FnOnce() -> E,
	{
		self.scan_key(raw).ok_or_else(f)
	}

	fn scan_key(&self, raw: &str) -> Option<&Arc<V>> {
		self.by_key
			.iter()
			.find(|(key, _)| AsRef::<str>::as_ref(*key) == raw)
			.map(|(_, def)| def)
	}

	/// Returns the first entry, in definition order, matching `predicate`.
	pub fn find<P>(&self, mut predicate: P) -> Option<&Arc<V>>
	where
		P: FnMut(&V) -> bool,
	{
		self.by_key.values().find(|def| predicate(def))
	}

	/// Like [`Self::find`], but a miss is a [`LookupError::NoMatch`].
	pub fn find_or_err<P>(&self, predicate: P) -> Result<&Arc<V>, LookupError>
	where
		P: FnMut(&V) -> bool,
	{
		self.find_or_else(predicate, || {
			tracing::trace!(registry = self.label, "no enum-like entry matched");
			LookupError::NoMatch {
				registry: self.label,
			}
		})
	}

	/// Like [`Self::find`], but fails with `error` on a miss.
	pub fn find_or<P, E>(&self, predicate: P, error: E) -> Result<&Arc<V>, E>
	where
		P: FnMut(&V) -> bool,
	{
		self.find(predicate).ok_or(error)
	}

	/// Like [`Self::find`], but fails with the error produced by `f` on a miss.
	pub fn find_or_else<P, E, F>(&self, predicate: P, f: F) -> Result<&Arc<V>, E>
	where
		P: FnMut(&V) -> bool,
		F: FnOnce() -> E,
	{
		self.find(predicate).ok_or_else(f)
	}

	/// Returns true if an entry is registered under `key`.
	#[inline]
	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where
		V::Key: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.by_key.contains_key(key)
	}

	/// Returns the definition position of `key`.
	#[inline]
	pub fn position<Q>(&self, key: &Q) -> Option<usize>
	where
		V::Key: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.by_key.get_index_of(key)
	}

	/// Returns every key in definition order.
	///
	/// The vector is a fresh copy; changing it does not touch the registry.
	pub fn keys(&self) -> Vec<V::Key> {
		self.by_key.keys().cloned().collect()
	}

	/// Returns every entry in definition order.
	///
	/// The vector is fresh but its handles point at the original entries.
	pub fn values(&self) -> Vec<Arc<V>> {
		self.by_key.values().cloned().collect()
	}

	/// Returns an iterator over entries in definition order.
	#[inline]
	pub fn iter(&self) -> indexmap::map::Values<'_, V::Key, Arc<V>> {
		self.by_key.values()
	}

	/// Returns the number of entries.
	#[inline]
	pub fn len(&self) -> usize {
		self.by_key.len()
	}

	/// Returns true if the registry holds no entries.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.by_key.is_empty()
	}
}
