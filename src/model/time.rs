// File: ./src/model/time.rs
use crate::error::{FormatError, FormatResult};
use chrono::NaiveTime;

/// Parses a 12h clock token such as `"9:00 a.m."` or `"2:30 PM |"`.
///
/// The token is lower-cased and stripped of periods and pipes before being
/// matched against `h:mm am|pm`.
pub fn parse_time_of_day(raw: &str) -> FormatResult<NaiveTime> {
    let normalized = normalize(raw);
    parse_12h(&normalized).ok_or_else(|| FormatError::Time(raw.trim().to_string()))
}

fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| *c != '.' && *c != '|')
        .collect::<String>()
        .trim()
        .to_string()
}

fn parse_12h(s: &str) -> Option<NaiveTime> {
    let (clock, is_pm) = if let Some(stripped) = s.strip_suffix("am") {
        (stripped.trim_end(), false)
    } else if let Some(stripped) = s.strip_suffix("pm") {
        (stripped.trim_end(), true)
    } else {
        return None;
    };

    let (h_str, m_str) = clock.split_once(':')?;
    if h_str.is_empty() || h_str.len() > 2 || m_str.len() != 2 {
        return None;
    }
    if !h_str.bytes().chain(m_str.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let h = h_str.parse::<u32>().ok()?;
    let m = m_str.parse::<u32>().ok()?;
    if !(1..=12).contains(&h) || m > 59 {
        return None;
    }
    let h_24 = if h == 12 {
        if is_pm { 12 } else { 0 }
    } else if is_pm {
        h + 12
    } else {
        h
    };
    NaiveTime::from_hms_opt(h_24, m, 0)
}

/// Inverse of [`parse_time_of_day`], e.g. `9:05 am`.
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format("%-I:%M %P").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_dotted_designators() {
        assert_eq!(parse_time_of_day("9:00 a.m.").unwrap(), t(9, 0));
        assert_eq!(parse_time_of_day("10:20 p.m.").unwrap(), t(22, 20));
    }

    #[test]
    fn test_pipe_noise_and_case() {
        assert_eq!(parse_time_of_day("2:30 PM |").unwrap(), t(14, 30));
        assert_eq!(parse_time_of_day("  11:05AM ").unwrap(), t(11, 5));
    }

    #[test]
    fn test_noon_and_midnight() {
        assert_eq!(parse_time_of_day("12:00 p.m.").unwrap(), t(12, 0));
        assert_eq!(parse_time_of_day("12:15 a.m.").unwrap(), t(0, 15));
    }

    #[test]
    fn test_rejects_non_12h() {
        for bad in ["14:00", "9 am", "13:00 pm", "9:60 am", "9:0 am", "noon", ""] {
            assert!(
                matches!(parse_time_of_day(bad), Err(FormatError::Time(_))),
                "'{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_format_reparses() {
        for time in [t(0, 0), t(9, 5), t(12, 30), t(23, 59)] {
            assert_eq!(parse_time_of_day(&format_time_of_day(time)).unwrap(), time);
        }
    }
}
