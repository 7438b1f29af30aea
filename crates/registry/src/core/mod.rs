//! Shared registry infrastructure.

pub mod def_input;
pub mod error;
pub mod index;
pub mod key;
pub mod traits;

pub use def_input::{Definition, Label};
pub use error::{BuildError, Error, InternalError, LookupError};
pub use index::{EnumLike, EnumLikeBuilder};
pub use traits::EnumLikeEntry;
