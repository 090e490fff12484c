//! Shorten backend timestamps into compact chart labels.

use chrono::{DateTime, NaiveDateTime};

/// Display format for hourly steps, e.g. "01.01. 00:00".
const LABEL_FORMAT: &str = "%d.%m. %H:%M";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a timestamp in RFC 2822 (`Fri, 01 Jan 2021 00:00:00 GMT`),
/// RFC 3339, or naive ISO form and format it as a chart label.
///
/// Anything unrecognised is returned unchanged.
pub fn format_time_label(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return dt.naive_utc().format(LABEL_FORMAT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.naive_local().format(LABEL_FORMAT).to_string();
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format(LABEL_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_time_labels(raw: &[String]) -> Vec<String> {
    raw.iter().map(|s| format_time_label(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc2822_from_flask() {
        assert_eq!(
            format_time_label("Fri, 01 Jan 2021 13:00:00 GMT"),
            "01.01. 13:00"
        );
    }

    #[test]
    fn iso_forms() {
        assert_eq!(format_time_label("2021-03-15T06:00:00"), "15.03. 06:00");
        assert_eq!(format_time_label("2021-03-15 06:00:00"), "15.03. 06:00");
        assert_eq!(format_time_label("2021-12-31T23:00:00+01:00"), "31.12. 23:00");
    }

    #[test]
    fn unknown_passes_through() {
        assert_eq!(format_time_label("1609462800000"), "1609462800000");
        assert_eq!(format_time_label("Stunde 5"), "Stunde 5");
    }
}
