//! Column mapping: which CSV header feeds which transaction field.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of fields a CSV row is mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticField {
    Payee,
    Amount,
    PostedDate,
    UniqueId,
    DebitFlag,
}

impl SemanticField {
    pub const ALL: [SemanticField; 5] = [
        SemanticField::Payee,
        SemanticField::Amount,
        SemanticField::PostedDate,
        SemanticField::UniqueId,
        SemanticField::DebitFlag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticField::Payee => "payee",
            SemanticField::Amount => "amount",
            SemanticField::PostedDate => "posted_date",
            SemanticField::UniqueId => "unique_id",
            SemanticField::DebitFlag => "debit_flag",
        }
    }
}

impl fmt::Display for SemanticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source header name for each [`SemanticField`].
///
/// Header names are matched after [`normalize_header`], so `"Posted Date"`,
/// `"posted date"` and `"POSTED_DATE"` all select the same column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub payee: String,
    pub amount: String,
    pub posted_date: String,
    pub unique_id: String,
    pub debit_flag: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            payee: "Description".to_string(),
            amount: "Amount".to_string(),
            posted_date: "Posted Date".to_string(),
            unique_id: "Transaction ID".to_string(),
            debit_flag: "Debit/Credit".to_string(),
        }
    }
}

impl ColumnMapping {
    /// Configured source header for `field`, as written in the config.
    pub fn header(&self, field: SemanticField) -> &str {
        match field {
            SemanticField::Payee => &self.payee,
            SemanticField::Amount => &self.amount,
            SemanticField::PostedDate => &self.posted_date,
            SemanticField::UniqueId => &self.unique_id,
            SemanticField::DebitFlag => &self.debit_flag,
        }
    }
}

/// Canonical token form of a header: lowercase, runs of non-alphanumerics
/// collapsed to one `_`, no leading or trailing `_`.
pub fn normalize_header(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;

    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_sep = true;
        }
    }

    out
}
