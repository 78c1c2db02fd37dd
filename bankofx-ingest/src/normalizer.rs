//! CSV export → [`TransactionSet`].
//!
//! Expected export shape (header names are configurable, see [`ColumnMapping`]):
//!   Posted Date,Transaction ID,Description,Amount,Debit/Credit
//!   03/04/2016,2016030401,|Bob's "Shop", Inc|,$42.10,D

use std::collections::{HashMap, HashSet};
use std::path::Path;

use bankofx_core::{
    ColumnMapping, ConvertError, Result, SemanticField, Transaction, TransactionSet,
    normalize_header,
};
use csv::StringRecord;
use tracing::{debug, info, warn};

use crate::builder::TransactionBuilder;
use crate::sanitize::strip_inc_suffix;

/// How to read an export: which headers to use and which quote character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerOptions {
    pub columns: ColumnMapping,
    /// Payees may contain `"`, so the vendor quotes with `|` instead.
    pub quote: u8,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            columns: ColumnMapping::default(),
            quote: b'|',
        }
    }
}

/// Read and normalize a CSV file.
pub fn normalize_path(path: impl AsRef<Path>, opts: &NormalizerOptions) -> Result<TransactionSet> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConvertError::InputIo {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read input");
    normalize(&text, opts)
}

/// Normalize raw CSV text into transactions sorted by posting date.
///
/// Any invalid or missing cell fails the whole run; no rows are skipped.
pub fn normalize(text: &str, opts: &NormalizerOptions) -> Result<TransactionSet> {
    let text = strip_inc_suffix(text);

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quote(opts.quote)
        .from_reader(text.as_bytes());

    let positions = resolve_columns(rdr.headers()?, &opts.columns);

    let mut txns = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        txns.push(build_row(i + 1, &record, &positions, &opts.columns)?);
    }

    warn_duplicate_ids(&txns);
    info!(count = txns.len(), "normalized transactions");

    Ok(TransactionSet::from_unsorted(txns))
}

/// Column position of every semantic field, `None` when the header is absent.
fn resolve_columns(
    headers: &StringRecord,
    columns: &ColumnMapping,
) -> Vec<(SemanticField, Option<usize>)> {
    let mut by_name: HashMap<String, usize> = HashMap::new();
    for (pos, header) in headers.iter().enumerate() {
        by_name.entry(normalize_header(header)).or_insert(pos);
    }

    SemanticField::ALL
        .iter()
        .map(|&field| {
            let key = normalize_header(columns.header(field));
            let pos = by_name.get(&key).copied();
            debug!(%field, header = %key, ?pos, "resolved column");
            (field, pos)
        })
        .collect()
}

fn build_row(
    row: usize,
    record: &StringRecord,
    positions: &[(SemanticField, Option<usize>)],
    columns: &ColumnMapping,
) -> Result<Transaction> {
    let mut builder = TransactionBuilder::new(row, columns);
    for &(field, pos) in positions {
        if let Some(raw) = pos.and_then(|p| record.get(p)) {
            builder = builder.cell(field, raw);
        }
    }
    builder.build()
}

fn warn_duplicate_ids(txns: &[Transaction]) {
    let mut seen = HashSet::new();
    for txn in txns {
        if !seen.insert(txn.unique_id.as_str()) {
            warn!(fitid = %txn.unique_id, "duplicate transaction id; importers may drop one of them");
        }
    }
}
