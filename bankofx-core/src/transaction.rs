//! Normalized transaction records and the date-ordered set handed to the renderer

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One normalized statement line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Free-form merchant description
    pub payee: String,
    /// Signed amount; debits are never positive
    pub amount: Decimal,
    pub posted_date: NaiveDate,
    /// Source-provided identifier, emitted as the OFX FITID
    pub unique_id: String,
    pub is_debit: bool,
}

/// Transactions ordered by posting date, same-day rows in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TransactionSet(Vec<Transaction>);

impl TransactionSet {
    /// Stable-sort `txns` by posting date and freeze them.
    pub fn from_unsorted(mut txns: Vec<Transaction>) -> Self {
        txns.sort_by_key(|t| t.posted_date);
        Self(txns)
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Transaction> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Transaction> {
        self.0.last()
    }

    /// Earliest and latest posting dates, `None` for an empty set.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.first()?.posted_date, self.last()?.posted_date))
    }
}

impl<'a> IntoIterator for &'a TransactionSet {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
