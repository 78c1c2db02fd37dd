//! Validating builder that turns the mapped cells of one row into a [`Transaction`].

use bankofx_core::{ColumnMapping, ConvertError, Result, SemanticField, Transaction};

use crate::coerce::{self, CoerceError};

/// Collects the raw cells of one CSV row, keyed by [`SemanticField`], then
/// coerces them all in [`TransactionBuilder::build`].
#[derive(Debug, Clone)]
pub struct TransactionBuilder<'a> {
    row: usize,
    columns: &'a ColumnMapping,
    cells: [Option<&'a str>; 5],
}

impl<'a> TransactionBuilder<'a> {
    /// `row` is the 1-based data row number used in error messages.
    pub fn new(row: usize, columns: &'a ColumnMapping) -> Self {
        Self {
            row,
            columns,
            cells: [None; 5],
        }
    }

    pub fn cell(mut self, field: SemanticField, raw: &'a str) -> Self {
        self.cells[slot(field)] = Some(raw);
        self
    }

    /// Coerce every field and assemble the record, failing on the first
    /// missing or invalid cell.
    pub fn build(self) -> Result<Transaction> {
        let is_debit = coerce::parse_debit_flag(self.require(SemanticField::DebitFlag)?);

        let raw = self.require(SemanticField::Amount)?;
        let amount = coerce::parse_amount(raw, is_debit)
            .map_err(|e| self.parse_error(SemanticField::Amount, raw, e))?;

        let raw = self.require(SemanticField::PostedDate)?;
        let posted_date = coerce::parse_posted_date(raw)
            .map_err(|e| self.parse_error(SemanticField::PostedDate, raw, e))?;

        let unique_id = coerce::clean_unique_id(self.require(SemanticField::UniqueId)?);
        let payee = self.require(SemanticField::Payee)?.to_string();

        Ok(Transaction {
            payee,
            amount,
            posted_date,
            unique_id,
            is_debit,
        })
    }

    fn require(&self, field: SemanticField) -> Result<&'a str> {
        self.cells[slot(field)].ok_or_else(|| ConvertError::MissingField {
            row: self.row,
            column: self.columns.header(field).to_string(),
        })
    }

    fn parse_error(&self, field: SemanticField, raw: &str, err: CoerceError) -> ConvertError {
        ConvertError::Parse {
            row: self.row,
            field,
            value: raw.to_string(),
            reason: err.to_string(),
        }
    }
}

fn slot(field: SemanticField) -> usize {
    match field {
        SemanticField::Payee => 0,
        SemanticField::Amount => 1,
        SemanticField::PostedDate => 2,
        SemanticField::UniqueId => 3,
        SemanticField::DebitFlag => 4,
    }
}
