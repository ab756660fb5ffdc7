//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into RFC 1123 http date: `Mon, 15 Aug 2022 16:50:12 GMT`
///
/// This is the value carried by the `Date` header and the timestamp field
/// of every string to sign.
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse http date like `Mon, 15 Aug 2022 16:50:12 GMT` into datetime.
pub fn parse_http_date(s: &str) -> crate::Result<DateTime> {
    let t = chrono::DateTime::parse_from_rfc2822(s).map_err(|e| {
        crate::Error::unexpected(format!("parse http date {s}")).with_source(e)
    })?;
    Ok(t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_http_date() {
        let t = Utc.with_ymd_and_hms(2022, 8, 15, 16, 50, 12).unwrap();
        assert_eq!("Mon, 15 Aug 2022 16:50:12 GMT", format_http_date(t));
    }

    #[test]
    fn test_format_pads_single_digit_day() {
        let t = Utc.with_ymd_and_hms(2022, 3, 1, 7, 5, 9).unwrap();
        assert_eq!("Tue, 01 Mar 2022 07:05:09 GMT", format_http_date(t));
    }

    #[test]
    fn test_parse_http_date() {
        let t = parse_http_date("Mon, 15 Aug 2022 16:50:12 GMT").unwrap();
        assert_eq!(Utc.with_ymd_and_hms(2022, 8, 15, 16, 50, 12).unwrap(), t);
        assert!(parse_http_date("yesterday").is_err());
    }
}
