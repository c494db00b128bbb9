//! Attribute keys and values for create parameters.
//!
//! ## Key Types
//!
//! - `AttrKey`: closed enumeration of keys the engine recognizes
//! - `AttrValue`: untyped integer/string value at the store boundary
//! - `Attr`: typed key/value pair, one variant per key
//! - `ErrorLevel`: accepted values of the `error_level` key

pub mod attr;
pub mod key;

pub use attr::{Attr, ErrorLevel};
pub use key::{AttrKey, AttrValue, ValueKind};
