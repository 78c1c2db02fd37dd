use bankofx_core::{ConvertError, SemanticField};
use bankofx_ingest::{NormalizerOptions, normalize};
use bankofx_ofx::{StatementContext, render_statement};
use chrono::NaiveDate;

const EXPORT: &str = "\
Posted Date,Transaction ID,Description,Amount,Debit/Credit
03/10/2016, \"20160310-01\" ,PAYROLL ACME,|$1,234.56|,
03/04/2016,20160304-01,|Bob's \"Shop\", Inc|,$42.10,D
03/04/2016,20160304-02,CORNER CAFE,$15.00,
03/07/2016,20160307-01,REFUND,(42.10),
";

fn ctx() -> StatementContext {
    let now = NaiveDate::from_ymd_opt(2016, 3, 12)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    StatementContext::new("987654321", now)
}

/// Pull `(TRNTYPE, TRNAMT, FITID, NAME)` out of each STMTTRN block.
fn blocks(ofx: &str) -> Vec<(String, String, String, String)> {
    ofx.split("<STMTTRN>\n")
        .skip(1)
        .map(|block| {
            let value = |tag: &str| {
                block
                    .lines()
                    .find_map(|l| l.strip_prefix(tag))
                    .unwrap_or_default()
                    .to_string()
            };
            (
                value("<TRNTYPE>"),
                value("<TRNAMT>"),
                value("<FITID>"),
                value("<NAME>"),
            )
        })
        .collect()
}

/// End to end: CSV text → normalized set → OFX blocks in date order.
#[test]
fn test_statement_from_export() {
    let set = normalize(EXPORT, &NormalizerOptions::default()).unwrap();
    let ofx = render_statement(&set, &ctx()).unwrap();

    assert!(ofx.contains("<DTSTART>20160304000000\n"));
    assert!(ofx.contains("<DTEND>20160310130000\n"));
    assert!(ofx.contains("<ACCTID>987654321\n"));

    let got = blocks(&ofx);
    let expected = [
        ("DEBIT", "-42.10", "20160304-01", "Bob's \"Shop\""),
        ("CREDIT", "15.00", "20160304-02", "CORNER CAFE"),
        ("CREDIT", "42.10", "20160307-01", "REFUND"),
        ("CREDIT", "1234.56", "20160310-01", "PAYROLL ACME"),
    ];
    assert_eq!(got.len(), expected.len());
    for (g, e) in got.iter().zip(expected) {
        assert_eq!((g.0.as_str(), g.1.as_str(), g.2.as_str(), g.3.as_str()), e);
    }
}

/// Every debit renders as DEBIT with a negative amount, everything else as CREDIT.
#[test]
fn test_sign_invariant() {
    let set = normalize(EXPORT, &NormalizerOptions::default()).unwrap();
    let ofx = render_statement(&set, &ctx()).unwrap();

    for (trn_type, amount, _, _) in blocks(&ofx) {
        match trn_type.as_str() {
            "DEBIT" => assert!(amount.starts_with('-'), "debit amount {amount}"),
            "CREDIT" => assert!(!amount.starts_with('-'), "credit amount {amount}"),
            other => panic!("unexpected TRNTYPE {other}"),
        }
        let (_, frac) = amount.split_once('.').unwrap();
        assert_eq!(frac.len(), 2);
    }
}

#[test]
fn test_header_only_export_cannot_render() {
    let header = EXPORT.lines().next().unwrap();
    let set = normalize(header, &NormalizerOptions::default()).unwrap();
    let err = render_statement(&set, &ctx()).unwrap_err();
    assert!(matches!(err, ConvertError::EmptyInput));
}

#[test]
fn test_bad_amount_never_reaches_renderer() {
    let text = EXPORT.replace("$15.00", "N/A");
    let err = normalize(&text, &NormalizerOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Parse { row: 3, field: SemanticField::Amount, .. }
    ));
}
