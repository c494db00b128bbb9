//! Building create parameters.
//!
//! - `CreateParam`: owns one store handle and exposes a typed setter for
//!   every recognized key
//! - `CreateOptions`: the optional arguments accepted at construction

pub mod create_param;
pub mod options;

pub use create_param::CreateParam;
pub use options::CreateOptions;
