//! Closed key sets for registries.

/// Declares a closed key enum for a registry.
///
/// Each variant maps to the string spelling stored in the registry. Using the
/// generated type as an entry's `Key` confines [`EnumLike::get`](crate::EnumLike::get)
/// to keys the compiler knows about, while untrusted strings still go through
/// [`EnumLike::parse_key`](crate::EnumLike::parse_key).
///
/// ```
/// use enumlike_registry::enum_like_keys;
///
/// enum_like_keys! {
/// 	pub enum Channel {
/// 		Stable => "stable",
/// 		Nightly => "nightly",
/// 	}
/// }
///
/// assert_eq!(Channel::Nightly.as_str(), "nightly");
/// assert_eq!(Channel::ALL, &[Channel::Stable, Channel::Nightly]);
/// assert_eq!(Channel::from_key("stable"), Some(Channel::Stable));
/// ```
#[macro_export]
macro_rules! enum_like_keys {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$(
				$(#[$vmeta:meta])*
				$variant:ident => $spelling:literal
			),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
		$vis enum $name {
			$(
				$(#[$vmeta])*
				$variant,
			)+
		}

		impl $name {
			/// Every key, in declaration order.
			pub const ALL: &'static [$name] = &[$($name::$variant),+];

			/// Returns the registry spelling of this key.
			pub const fn as_str(self) -> &'static str {
				match self {
					$($name::$variant => $spelling,)+
				}
			}

			/// Returns the key spelled `raw`, if any.
			pub fn from_key(raw: &str) -> ::core::option::Option<Self> {
				Self::ALL.iter().copied().find(|key| key.as_str() == raw)
			}
		}

		impl ::core::convert::AsRef<str> for $name {
			#[inline]
			fn as_ref(&self) -> &str {
				self.as_str()
			}
		}

		impl ::core::fmt::Display for $name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.write_str(self.as_str())
			}
		}
	};
}
