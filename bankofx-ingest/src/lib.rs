//! bankofx-ingest: turns a bank CSV export into a sorted, typed transaction set.

pub mod builder;
pub mod coerce;
pub mod normalizer;
pub mod sanitize;

pub use builder::TransactionBuilder;
pub use normalizer::{NormalizerOptions, normalize, normalize_path};
pub use sanitize::strip_inc_suffix;
