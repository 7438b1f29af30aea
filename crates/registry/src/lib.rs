//! Enum-like registries: fixed, immutable sets of keyed entries.
//!
//! An [`EnumLike`] is built once from an ordered definition of `(label, entry)` pairs.
//! Each entry carries a unique string-like key (see [`EnumLikeEntry`]) plus whatever
//! data the caller attaches. After construction the registry answers:
//!
//! - [`EnumLike::get`]: lookup of a key the caller knows is registered.
//! - [`EnumLike::parse_key`]: lookup of an untrusted key, with override forms.
//! - [`EnumLike::find`] / [`EnumLike::find_or_err`]: first entry matching a predicate.
//! - [`EnumLike::keys`] / [`EnumLike::values`]: ordered enumeration.
//!
//! Entries are stored as `Arc<V>` and returned by handle, so identity with the
//! caller's original allocation holds for every query.
//!
//! ```
//! use std::sync::Arc;
//!
//! use enumlike_registry::{EnumLike, impl_enum_like_entry};
//!
//! #[derive(Debug)]
//! struct Level {
//! 	key: &'static str,
//! 	value: u8,
//! }
//!
//! impl_enum_like_entry!(Level, &'static str);
//!
//! let y = Arc::new(Level { key: "y", value: 2 });
//! let levels: EnumLike<Level> = EnumLike::build([
//! 	("A", Arc::new(Level { key: "x", value: 1 })),
//! 	("B", y.clone()),
//! ])
//! .unwrap();
//!
//! assert_eq!(levels.keys(), ["x", "y"]);
//! assert!(Arc::ptr_eq(levels.get("y").unwrap(), &y));
//! assert!(levels.parse_key("z").is_err());
//! assert!(levels.find(|level| level.value == 9).is_none());
//! ```

pub mod core;

pub use crate::core::{
	BuildError, Definition, EnumLike, EnumLikeBuilder, EnumLikeEntry, Error, InternalError, Label,
	LookupError,
};
