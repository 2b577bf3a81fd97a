//! Parsing of the ISO-8601 timestamps found in CPE dictionaries.

use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime,
};

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (`2007-09-14T17:36:49.090Z`), a date-time without an offset, which is taken
/// as UTC, and a plain date (`2010-01-01`), which is taken as midnight UTC.
pub fn parse_datetime(value: &str) -> Result<OffsetDateTime, time::error::Parse> {
    let value = value.trim();

    if let Ok(result) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(result);
    }

    if let Ok(result) = PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"),
    ) {
        return Ok(result.assume_utc());
    }

    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map(|date| date.midnight().assume_utc())
}

/// The current time, formatted as RFC 3339.
pub fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::datetime;

    #[test_log::test(rstest::rstest)]
    #[case("2007-09-14T17:36:49.090Z", datetime!(2007-09-14 17:36:49.090 UTC))]
    #[case("2013-03-04T05:00:00+01:00", datetime!(2013-03-04 05:00:00 +01:00))]
    #[case("2010-12-01T12:30:00", datetime!(2010-12-01 12:30:00 UTC))]
    #[case("2010-12-01T12:30:00.5", datetime!(2010-12-01 12:30:00.5 UTC))]
    #[case("2010-01-01", datetime!(2010-01-01 00:00:00 UTC))]
    #[case(" 2010-01-01 ", datetime!(2010-01-01 00:00:00 UTC))]
    fn parses(#[case] input: &str, #[case] output: OffsetDateTime) {
        assert_eq!(parse_datetime(input).ok(), Some(output));
    }

    #[test_log::test(rstest::rstest)]
    #[case("")]
    #[case("yesterday")]
    #[case("2010-13-01")]
    #[case("01/01/2010")]
    fn rejects(#[case] input: &str) {
        assert!(parse_datetime(input).is_err());
    }

    #[test]
    fn now_is_parsable() {
        assert!(parse_datetime(&now_rfc3339()).is_ok());
    }
}
