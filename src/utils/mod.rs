//! Shared utilities

pub mod encoding;
pub mod list;

pub use encoding::{decode_bytes, resolve_encoding};
pub use list::{one_or_many, to_list, OneOrMany};
