//! Pre-parse cleanup of the raw export text.
//!
//! The vendor writes company suffixes unquoted, e.g.
//!   03/04/2016,ACME WIDGETS, Inc,$15.00,...
//! which shifts every following column by one. Dropping the ", Inc" part
//! before the CSV reader sees the text keeps the columns aligned.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static INC_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i),[ \t]*inc").expect("inc suffix pattern is valid"));

/// Remove every `, Inc` (any case, optional blanks after the comma).
///
/// Longer words lose the same prefix: `ACME, Incorporated` becomes
/// `ACMEorporated`, which still keeps the row's columns aligned.
pub fn strip_inc_suffix(text: &str) -> Cow<'_, str> {
    INC_SUFFIX_RE.replace_all(text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_suffix_variants() {
        assert_eq!(strip_inc_suffix("XYZ, Inc,15.00"), "XYZ,15.00");
        assert_eq!(strip_inc_suffix("XYZ,INC,15.00"), "XYZ,15.00");
        assert_eq!(strip_inc_suffix("XYZ,\tinc.,15.00"), "XYZ.,15.00");
        assert_eq!(strip_inc_suffix("A, inc,B,  Inc"), "A,B");
    }

    #[test]
    fn test_strips_prefix_of_longer_words() {
        assert_eq!(strip_inc_suffix("ACME, Incorporated,15.00"), "ACMEorporated,15.00");
        assert_eq!(strip_inc_suffix("a,Income,b"), "aome,b");
    }

    #[test]
    fn test_leaves_other_text_alone() {
        let text = "date,Transfer Inc,Zinc Corp,i nc";
        assert_eq!(strip_inc_suffix(text), text);
        assert!(matches!(strip_inc_suffix("no suffix here"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_does_not_join_lines() {
        let text = "a,b,\nInc Corp,c";
        assert_eq!(strip_inc_suffix(text), text);
    }
}
