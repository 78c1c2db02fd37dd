//! Time utilities: OFX date/timestamp formatting and zone-aware "now".

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, Offset, Utc};
use chrono_tz::Tz;

/// Offset label used when no zone is configured.
pub const DEFAULT_TZ_LABEL: &str = "-6";

/// `YYYYMMDD`
pub fn format_ofx_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// `YYYYMMDD` followed by a fixed `hhmmss` time of day, e.g. `20160304130000`.
pub fn format_ofx_date_at(date: NaiveDate, hhmmss: &str) -> String {
    format!("{}{}", format_ofx_date(date), hhmmss)
}

/// `YYYYMMDDhhmmss.000[label]`, e.g. `20160304093000.000[-6]`.
pub fn format_ofx_timestamp(dt: NaiveDateTime, tz_label: &str) -> String {
    format!("{}.000[{}]", dt.format("%Y%m%d%H%M%S"), tz_label)
}

/// Current wall-clock time in an IANA zone like "America/Chicago", together
/// with that zone's current UTC offset as an OFX label ("-6", "0", "5.5").
pub fn now_in_zone(tz: &str) -> Result<(NaiveDateTime, String)> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;

    let now = Utc::now().with_timezone(&tz);
    let offset_secs = now.offset().fix().local_minus_utc();
    Ok((now.naive_local(), offset_label(offset_secs)))
}

/// Render a UTC offset in seconds as an OFX offset label.
pub fn offset_label(offset_secs: i32) -> String {
    let sign = if offset_secs < 0 { "-" } else { "" };
    let abs = offset_secs.unsigned_abs();
    let hours = abs / 3600;
    let minutes = abs % 3600 / 60;
    if minutes == 0 {
        return format!("{sign}{hours}");
    }

    // hours as a decimal, trailing zero dropped: 5h30m -> "5.5"
    let hundredths = minutes * 100 / 60;
    let frac = format!("{hundredths:02}");
    format!("{sign}{hours}.{}", frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ofx_date() {
        let d = NaiveDate::from_ymd_opt(2016, 3, 4).unwrap();
        assert_eq!(format_ofx_date(d), "20160304");
        assert_eq!(format_ofx_date_at(d, "130000"), "20160304130000");
    }

    #[test]
    fn test_format_ofx_timestamp() {
        let dt = NaiveDate::from_ymd_opt(2016, 3, 4)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap();
        assert_eq!(format_ofx_timestamp(dt, "-6"), "20160304093005.000[-6]");
        assert_eq!(format_ofx_timestamp(dt, "0"), "20160304093005.000[0]");
    }

    #[test]
    fn test_offset_label() {
        assert_eq!(offset_label(-6 * 3600), "-6");
        assert_eq!(offset_label(0), "0");
        assert_eq!(offset_label(3600), "1");
        assert_eq!(offset_label(5 * 3600 + 1800), "5.5");
        assert_eq!(offset_label(-(3 * 3600 + 1800)), "-3.5");
        assert_eq!(offset_label(5 * 3600 + 45 * 60), "5.75");
        assert_eq!(offset_label(-1800), "-0.5");
    }

    #[test]
    fn test_now_in_zone() {
        let (_, label) = now_in_zone("UTC").unwrap();
        assert_eq!(label, "0");
        assert!(now_in_zone("Mars/Olympus_Mons").is_err());
    }
}
