//! Types and byte classes shared by the linear grouper crates.
//!
//! - [`character`] -- Byte predicates usable as transition filters
//! - [`token`] -- Owned, state-tagged chunks of text

pub mod character;
pub mod token;

pub use character::{ByteClass, byte_class};
pub use token::Token;
