//! Keyed index behind [`EnumLike`].
//!
//! # Mental Model
//!
//! 1. **Build:** [`EnumLikeBuilder`] ingests entries in definition order and rejects the
//!    first repeated key with [`crate::BuildError::DuplicateKey`].
//! 2. **Query:** the built [`EnumLike`] is frozen. Lookups by key are O(1), searches by
//!    spelling or predicate walk the entries in definition order.
//!
//! # Invariants
//!
//! - Keys are unique and never change after build.
//!   - Enforced in: [`EnumLikeBuilder::build`] (by value and by spelling).
//!   - Tested by: `tests::duplicate_keys_fail_build`, `tests::keys_with_equal_spelling_are_duplicates`.
//! - Iteration order equals definition order.
//!   - Enforced in: the insertion-ordered index map.
//!   - Tested by: `tests::keys_and_values_follow_definition_order`.
//! - Queries return the caller's own `Arc`, never a copy.
//!   - Tested by: `tests::get_and_parse_key_return_original_entries`.

mod build;
mod lookup;
mod types;

pub use build::EnumLikeBuilder;
pub use types::EnumLike;

#[cfg(test)]
pub(crate) mod test_fixtures;
