//! Serialize a [`TransactionSet`] into an OFX 1.02 SGML bank statement.
//!
//! Layout follows the checking-account statement response:
//!   OFX > SIGNONMSGSRSV1 > SONRS
//!   OFX > BANKMSGSRSV1 > STMTTRNRS > STMTRS > BANKTRANLIST > STMTTRN*
//! Values are written verbatim; the SGML dialect needs no entity escaping.

use std::fmt;

use bankofx_core::time::{DEFAULT_TZ_LABEL, format_ofx_date_at, format_ofx_timestamp};
use bankofx_core::{ConvertError, Result, Transaction, TransactionSet};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// Placeholder routing number; importers only key on ACCTID.
pub const DEFAULT_BANK_ID: &str = "000000000";

/// Time of day for DTSTART.
const START_OF_DAY: &str = "000000";
/// Time of day for DTEND and DTPOSTED. Midday keeps importers that shift
/// timestamps into local time from moving a posting onto the previous day.
const POSTING_TIME: &str = "130000";

const OFX_HEADER: &str = "\
OFXHEADER:100
DATA:OFXSGML
VERSION:102
SECURITY:NONE
ENCODING:USASCII
CHARSET:1252
COMPRESSION:NONE
OLDFILEUID:NONE
NEWFILEUID:NONE
";

const STATUS_OK: &str = "\
<STATUS>
<CODE>0
<SEVERITY>INFO
<MESSAGE>OK
</STATUS>
";

/// Everything the statement needs besides the transactions themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementContext {
    pub account_id: String,
    pub bank_id: String,
    /// "Now", used for DTSERVER and the ledger balance DTASOF
    pub generated_at: NaiveDateTime,
    /// Offset label written inside `[...]` after timestamps
    pub tz_label: String,
}

impl StatementContext {
    pub fn new(account_id: impl Into<String>, generated_at: NaiveDateTime) -> Self {
        Self {
            account_id: account_id.into(),
            bank_id: DEFAULT_BANK_ID.to_string(),
            generated_at,
            tz_label: DEFAULT_TZ_LABEL.to_string(),
        }
    }

    fn timestamp(&self) -> String {
        format_ofx_timestamp(self.generated_at, &self.tz_label)
    }
}

/// Render the full OFX document.
///
/// Fails with [`ConvertError::EmptyInput`] when there is nothing to derive
/// the statement date range from.
pub fn render_statement(txns: &TransactionSet, ctx: &StatementContext) -> Result<String> {
    let (start, end) = txns.date_range().ok_or(ConvertError::EmptyInput)?;
    debug!(count = txns.len(), %start, %end, "rendering statement");

    let doc = OfxDocument {
        txns,
        ctx,
        start,
        end,
    };
    Ok(doc.to_string())
}

/// Fixed-point amount with exactly two fractional digits, e.g. `-42.10`.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.to_string()
}

struct OfxDocument<'a> {
    txns: &'a TransactionSet,
    ctx: &'a StatementContext,
    start: NaiveDate,
    end: NaiveDate,
}

impl fmt::Display for OfxDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let now = self.ctx.timestamp();

        writeln!(f, "{OFX_HEADER}")?;
        writeln!(f, "<OFX>")?;

        writeln!(f, "<SIGNONMSGSRSV1>")?;
        writeln!(f, "<SONRS>")?;
        f.write_str(STATUS_OK)?;
        writeln!(f, "<DTSERVER>{now}")?;
        writeln!(f, "<LANGUAGE>ENG")?;
        writeln!(f, "</SONRS>")?;
        writeln!(f, "</SIGNONMSGSRSV1>")?;

        writeln!(f, "<BANKMSGSRSV1>")?;
        writeln!(f, "<STMTTRNRS>")?;
        writeln!(f, "<TRNUID>1")?;
        f.write_str(STATUS_OK)?;
        writeln!(f, "<STMTRS>")?;
        writeln!(f, "<CURDEF>USD")?;
        writeln!(f, "<BANKACCTFROM>")?;
        writeln!(f, "<BANKID>{}", self.ctx.bank_id)?;
        writeln!(f, "<ACCTID>{}", self.ctx.account_id)?;
        writeln!(f, "<ACCTTYPE>CHECKING")?;
        writeln!(f, "</BANKACCTFROM>")?;

        writeln!(f, "<BANKTRANLIST>")?;
        writeln!(f, "<DTSTART>{}", format_ofx_date_at(self.start, START_OF_DAY))?;
        writeln!(f, "<DTEND>{}", format_ofx_date_at(self.end, POSTING_TIME))?;
        for txn in self.txns {
            write_transaction(f, txn)?;
        }
        writeln!(f, "</BANKTRANLIST>")?;

        writeln!(f, "<LEDGERBAL>")?;
        writeln!(f, "<BALAMT>0.00")?;
        writeln!(f, "<DTASOF>{now}")?;
        writeln!(f, "</LEDGERBAL>")?;

        writeln!(f, "</STMTRS>")?;
        writeln!(f, "</STMTTRNRS>")?;
        writeln!(f, "</BANKMSGSRSV1>")?;
        writeln!(f, "</OFX>")
    }
}

fn write_transaction(f: &mut fmt::Formatter<'_>, txn: &Transaction) -> fmt::Result {
    let trn_type = if txn.is_debit { "DEBIT" } else { "CREDIT" };

    writeln!(f, "<STMTTRN>")?;
    writeln!(f, "<TRNTYPE>{trn_type}")?;
    writeln!(f, "<DTPOSTED>{}", format_ofx_date_at(txn.posted_date, POSTING_TIME))?;
    writeln!(f, "<TRNAMT>{}", format_amount(txn.amount))?;
    writeln!(f, "<FITID>{}", txn.unique_id)?;
    writeln!(f, "<NAME>{}", txn.payee)?;
    writeln!(f, "</STMTTRN>")
}
