/// A time label input: either text typed by an author or a number of seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeValue<'a> {
    Text(&'a str),
    Seconds(f64),
}

impl<'a> From<&'a str> for TimeValue<'a> {
    fn from(value: &'a str) -> Self {
        TimeValue::Text(value)
    }
}

impl<'a> From<&'a String> for TimeValue<'a> {
    fn from(value: &'a String) -> Self {
        TimeValue::Text(value.as_str())
    }
}

impl From<f64> for TimeValue<'_> {
    fn from(value: f64) -> Self {
        TimeValue::Seconds(value)
    }
}

macro_rules! seconds_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for TimeValue<'_> {
                fn from(value: $ty) -> Self {
                    TimeValue::Seconds(value as f64)
                }
            }
        )*
    };
}

seconds_from_int!(i32, i64, u32, u64);

const FALLBACK_TIME: &str = "0:00";

/// Formats a video length as `H:MM:SS` (one hour or more) or `M:SS`.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Formats a key-moment timestamp as `M:SS`.
///
/// Text that already contains a `:` is treated as formatted and returned
/// as-is. Anything that cannot be read as a finite number of seconds gives
/// `"0:00"`.
pub fn format_time<'a>(value: impl Into<TimeValue<'a>>) -> String {
    let seconds = match value.into() {
        TimeValue::Text(text) if text.contains(':') => return text.to_string(),
        TimeValue::Text(text) => match parse_int_prefix(text) {
            Some(n) => n as f64,
            None => return FALLBACK_TIME.to_string(),
        },
        TimeValue::Seconds(n) => n,
    };

    // u64::MAX as f64 rounds up, so anything at or above it would saturate.
    if !seconds.is_finite() || seconds < 0.0 || seconds >= u64::MAX as f64 {
        return FALLBACK_TIME.to_string();
    }

    let whole = seconds.trunc() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// Reads a timestamp label (`SS`, `M:SS` or `H:MM:SS`) back into seconds.
pub fn parse_time_label(label: &str) -> Option<u64> {
    let parts: Vec<&str> = label.trim().split(':').collect();
    if parts.len() > 3 {
        return None;
    }
    parts.iter().try_fold(0u64, |total, part| {
        let part = part.trim();
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        total.checked_mul(60)?.checked_add(part.parse().ok()?)
    })
}

/// Reads a leading integer the way a lenient form field would: surrounding
/// whitespace, an optional sign, then digits up to the first non-digit.
fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0:00")]
    #[case(45, "0:45")]
    #[case(60, "1:00")]
    #[case(599, "9:59")]
    #[case(3599, "59:59")]
    #[case(3600, "1:00:00")]
    #[case(3661, "1:01:01")]
    #[case(36000, "10:00:00")]
    fn duration_labels(#[case] seconds: u64, #[case] expected: &str) {
        assert_eq!(format_duration(seconds), expected);
    }

    #[rstest]
    #[case("1:30", "1:30")]
    #[case("12:34:56", "12:34:56")]
    #[case("not:a:time", "not:a:time")]
    #[case("90", "1:30")]
    #[case("  75", "1:15")]
    #[case("90s", "1:30")]
    #[case("not-a-number", "0:00")]
    #[case("", "0:00")]
    #[case("-30", "0:00")]
    fn time_labels_from_text(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_time(input), expected);
    }

    #[test]
    fn time_labels_from_numbers() {
        assert_eq!(format_time(90_u64), "1:30");
        assert_eq!(format_time(5_i32), "0:05");
        assert_eq!(format_time(3600_i64), "60:00");
        assert_eq!(format_time(61.9_f64), "1:01");
    }

    #[test]
    fn non_finite_numbers_fall_back() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn out_of_range_numbers_fall_back() {
        assert_eq!(format_time(1e300_f64), "0:00");
        assert_eq!(format_time(u64::MAX), "0:00");
        assert_eq!(format_time(1e15_f64), "16666666666666:40");
    }

    #[rstest]
    #[case("45", Some(45))]
    #[case("1:30", Some(90))]
    #[case("1:01:01", Some(3661))]
    #[case(" 2:05 ", Some(125))]
    #[case("1:xx", None)]
    #[case("1::2", None)]
    #[case("1:2:3:4", None)]
    #[case("", None)]
    fn time_labels_back_to_seconds(#[case] label: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_time_label(label), expected);
    }

    #[test]
    fn parse_int_prefix_reads_leading_digits() {
        assert_eq!(parse_int_prefix("42abc"), Some(42));
        assert_eq!(parse_int_prefix("+7"), Some(7));
        assert_eq!(parse_int_prefix("-7"), Some(-7));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
    }
}
