//! Timestamp conversion used for ordering results.

use crate::error::TimestampError;

/// Convert a `HH:MM:SS` or `MM:SS` timestamp into a total second count.
///
/// Parts are trimmed and must be unsigned integers. Any other shape is rejected.
pub fn parse_timestamp(value: &str) -> Result<u64, TimestampError> {
    let invalid = || TimestampError::InvalidTimestamp(value.to_string());

    let parts = value
        .split(':')
        .map(|part| part.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    match parts.as_slice() {
        [h, m, s] => Ok(h
            .saturating_mul(3600)
            .saturating_add(m.saturating_mul(60))
            .saturating_add(*s)),
        [m, s] => Ok(m.saturating_mul(60).saturating_add(*s)),
        _ => Err(invalid()),
    }
}

/// Sort key for a result's start time. Malformed timestamps sort as zero.
pub(crate) fn sort_seconds(value: &str) -> u64 {
    parse_timestamp(value).unwrap_or_else(|err| {
        tracing::warn!("{}; ordering as 0 seconds", err);
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rstest::rstest;

    #[rstest]
    #[case("00:00:05", 5)]
    #[case("00:10:00", 600)]
    #[case("01:02:03", 3723)]
    #[case("10:00", 600)]
    #[case("03:07", 187)]
    #[case("90:30", 5430)]
    #[case(" 00 : 01 ", 1)]
    fn test_parse_timestamp(#[case] input: &str, #[case] expected: u64) {
        let_assert!(Ok(seconds) = parse_timestamp(input));
        check!(seconds == expected);
    }

    #[rstest]
    #[case("")]
    #[case("42")]
    #[case("1:2:3:4")]
    #[case("aa:bb")]
    #[case("00:05.500")]
    #[case("-1:00")]
    fn test_parse_timestamp_rejects_malformed(#[case] input: &str) {
        let_assert!(Err(TimestampError::InvalidTimestamp(raw)) = parse_timestamp(input));
        check!(raw == input);
    }

    #[test]
    fn test_sort_seconds_treats_malformed_as_zero() {
        check!(sort_seconds("garbage") == 0);
        check!(sort_seconds("00:01:00") == 60);
    }
}
