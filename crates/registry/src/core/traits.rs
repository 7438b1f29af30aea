use std::fmt::Debug;
use std::hash::Hash;

/// Trait for values stored in an [`EnumLike`](crate::EnumLike) registry.
///
/// The key is the only field the registry reads; everything else on the entry is
/// opaque payload handed back to callers untouched.
pub trait EnumLikeEntry {
	/// String-like key type, unique within one registry.
	type Key: AsRef<str> + Clone + Eq + Hash + Debug;

	/// Returns the key this entry is indexed under.
	fn key(&self) -> &Self::Key;
}

/// Implements [`EnumLikeEntry`] for a struct holding its key in a field.
///
/// The field defaults to `key`:
///
/// ```
/// use enumlike_registry::impl_enum_like_entry;
///
/// struct Color {
/// 	key: &'static str,
/// 	hex: u32,
/// }
///
/// struct Shape {
/// 	id: String,
/// }
///
/// impl_enum_like_entry!(Color, &'static str);
/// impl_enum_like_entry!(Shape, String, id);
/// ```
#[macro_export]
macro_rules! impl_enum_like_entry {
	($type:ty, $key:ty) => {
		$crate::impl_enum_like_entry!($type, $key, key);
	};
	($type:ty, $key:ty, $field:ident) => {
		impl $crate::EnumLikeEntry for $type {
			type Key = $key;

			#[inline]
			fn key(&self) -> &Self::Key {
				&self.$field
			}
		}
	};
}
