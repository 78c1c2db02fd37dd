//! bankofx-core: shared types for the CSV-to-OFX converter

pub mod error;
pub mod mapping;
pub mod time;
pub mod transaction;

pub use error::{ConvertError, Result};
pub use mapping::{ColumnMapping, SemanticField, normalize_header};
pub use transaction::{Transaction, TransactionSet};
