//! Lenient timestamp checks
//!
//! Timestamps are handed to FFmpeg untouched. These helpers only produce
//! warnings for values FFmpeg is likely to reject or that describe an empty range.

/// Lenient parser for FFmpeg-style duration strings
pub struct TimestampCheck;

impl TimestampCheck {
    /// Parse `HH:MM:SS[.fff]`, `MM:SS[.fff]` or plain seconds into seconds
    pub fn parse_seconds(time_str: &str) -> Option<f64> {
        let time_str = time_str.trim();
        if time_str.is_empty() {
            return None;
        }

        let parts: Vec<&str> = time_str.split(':').collect();
        let seconds = match parts.as_slice() {
            [secs] => parse_component(secs)?,
            [mins, secs] => parse_component(mins)? * 60.0 + parse_bounded(secs)?,
            [hours, mins, secs] => {
                parse_component(hours)? * 3600.0 + parse_bounded(mins)? * 60.0 + parse_bounded(secs)?
            }
            _ => return None,
        };

        Some(seconds)
    }

    /// Warnings for a start/end pair. Never rejects anything.
    pub fn range_warnings(start: &str, end: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        let start_seconds = Self::parse_seconds(start);
        let end_seconds = Self::parse_seconds(end);

        if start_seconds.is_none() {
            warnings.push(format!("Start time '{}' does not look like HH:MM:SS", start));
        }
        if end_seconds.is_none() {
            warnings.push(format!("End time '{}' does not look like HH:MM:SS", end));
        }
        if let (Some(s), Some(e)) = (start_seconds, end_seconds) {
            if e <= s {
                warnings.push(format!(
                    "End time '{}' is not after start time '{}'; the clip will be empty",
                    end, start
                ));
            }
        }

        warnings
    }
}

fn parse_component(part: &str) -> Option<f64> {
    let value: f64 = part.parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

fn parse_bounded(part: &str) -> Option<f64> {
    parse_component(part).filter(|value| *value < 60.0)
}
