//! Error types raised by enum-like registries.
//!
//! Build failures, known-key misses and untrusted-key misses are separate types so
//! call sites branch on how much they trust the key, not only on success.

/// Fatal errors raised while building a registry from its definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
	/// Two entries in the definition share a key.
	#[error("enum-like {registry}: duplicate key {key:?} (entries #{first} and #{duplicate})")]
	DuplicateKey {
		registry: &'static str,
		key: String,
		/// Definition position of the entry that claimed the key first.
		first: usize,
		/// Definition position of the rejected entry.
		duplicate: usize,
	},
}

impl BuildError {
	/// Returns the key that caused the failure.
	pub fn key(&self) -> &str {
		match self {
			Self::DuplicateKey { key, .. } => key,
		}
	}
}

/// A key the caller treats as known-valid has no entry.
///
/// Returned by [`EnumLike::get`](crate::EnumLike::get). Correct code never sees this; it
/// means the calling code disagrees with the registry about its own key set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("enum-like {registry}: internal lookup of unregistered key {key:?}")]
pub struct InternalError {
	pub registry: &'static str,
	pub key: String,
}

/// Recoverable lookup miss for untrusted keys or predicate searches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
	/// No entry has the parsed key.
	#[error("enum-like {registry}: entry not found: {key:?}")]
	UnknownKey { registry: &'static str, key: String },
	/// No entry satisfied the predicate.
	#[error("enum-like {registry}: no entry matched")]
	NoMatch { registry: &'static str },
}

/// Any registry error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Build(#[from] BuildError),

	#[error(transparent)]
	Internal(#[from] InternalError),

	#[error(transparent)]
	Lookup(#[from] LookupError),
}
