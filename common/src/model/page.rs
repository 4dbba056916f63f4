//! Data the ingesting page embeds on its container element.

use crate::config::Timing;

/// Job identity and work estimates read from the `#ingesting-page` container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestPageData {
    pub job_id: String,
    pub assignment_units: i64,
    pub mark_scheme_units: i64,
}

impl IngestPageData {
    /// Builds the page data from the raw `data-*` attribute values.
    ///
    /// Returns `None` without a job id, since nothing can be polled. Unit
    /// counts fall back to `timing.default_units` when missing, zero or not a
    /// number; negative counts are kept and later clamped by the duration
    /// estimate.
    pub fn from_attributes(
        job_id: Option<String>,
        assignment_units: Option<&str>,
        mark_scheme_units: Option<&str>,
        timing: &Timing,
    ) -> Option<Self> {
        let job_id = job_id?;
        let units = |raw: Option<&str>| {
            raw.and_then(parse_leading_int)
                .filter(|n| *n != 0)
                .unwrap_or(timing.default_units)
        };
        Some(Self {
            job_id,
            assignment_units: units(assignment_units),
            mark_scheme_units: units(mark_scheme_units),
        })
    }
}

/// Integer prefix of `raw`: optional leading whitespace and sign, then as
/// many decimal digits as follow. `"12 pages"` is 12, `"x12"` is nothing.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let mut value: i64 = 0;
    for b in rest[..digits].bytes() {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(a: Option<&str>, m: Option<&str>) -> IngestPageData {
        IngestPageData::from_attributes(Some("job42".to_string()), a, m, &Timing::default())
            .unwrap()
    }

    #[test]
    fn valid_counts_are_kept() {
        let data = page(Some("10"), Some("3"));
        assert_eq!(data.assignment_units, 10);
        assert_eq!(data.mark_scheme_units, 3);
    }

    #[test]
    fn invalid_or_missing_counts_default_to_five() {
        for raw in [None, Some(""), Some("abc"), Some("0"), Some("-"), Some("  ")] {
            let data = page(raw, raw);
            assert_eq!(data.assignment_units, 5, "{raw:?}");
            assert_eq!(data.mark_scheme_units, 5, "{raw:?}");
        }
    }

    #[test]
    fn negative_counts_survive_parsing() {
        assert_eq!(page(Some("-3"), None).assignment_units, -3);
    }

    #[test]
    fn leading_integer_prefix() {
        assert_eq!(parse_leading_int(" 12 pages"), Some(12));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("4.9"), Some(4));
        assert_eq!(parse_leading_int("x12"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn job_id_is_required() {
        let data = IngestPageData::from_attributes(None, Some("4"), Some("4"), &Timing::default());
        assert!(data.is_none());
    }

    #[test]
    fn duration_estimates_from_page_data() {
        let timing = Timing::default();
        for raw in [None, Some("abc"), Some("0"), Some("-8"), Some("1"), Some("10")] {
            let data = page(raw, raw);
            assert!(timing.estimate_duration_ms(data.assignment_units) >= 1000, "{raw:?}");
        }
        let data = page(Some("nope"), None);
        assert_eq!(timing.estimate_duration_ms(data.assignment_units), 2500);
        assert_eq!(timing.estimate_duration_ms(data.mark_scheme_units), 2500);
    }
}
