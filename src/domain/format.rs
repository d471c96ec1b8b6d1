use thiserror::Error;

/// Format seconds as "Hh Mm Ss", dropping the hours when there are none
pub fn format_spent(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else {
        format!("{}m {}s", minutes, secs)
    }
}

/// Format seconds as a countdown clock "MM:SS" (minutes can exceed 59)
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("duration is empty")]
    Empty,
    #[error("invalid number in duration: {0}")]
    InvalidNumber(String),
    #[error("unknown duration unit '{0}' (use h, m or s)")]
    UnknownUnit(char),
    #[error("duration is too large")]
    Overflow,
}

/// Parse a human duration into seconds.
///
/// Accepts bare seconds ("90") or unit groups in any order ("1h30m", "25m",
/// "1h 5m 10s").
pub fn parse_duration(input: &str) -> Result<u64, DurationParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::Empty);
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return trimmed
            .parse::<u64>()
            .map_err(|_| DurationParseError::Overflow);
    }

    let mut total: u64 = 0;
    let mut number = String::new();

    for c in trimmed.chars() {
        if c.is_ascii_digit() {
            number.push(c);
            continue;
        }
        if c.is_whitespace() {
            continue;
        }

        let multiplier = match c.to_ascii_lowercase() {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            other => return Err(DurationParseError::UnknownUnit(other)),
        };

        if number.is_empty() {
            return Err(DurationParseError::InvalidNumber(c.to_string()));
        }
        let value: u64 = number
            .parse()
            .map_err(|_| DurationParseError::Overflow)?;
        number.clear();

        total = value
            .checked_mul(multiplier)
            .and_then(|v| total.checked_add(v))
            .ok_or(DurationParseError::Overflow)?;
    }

    // Trailing digits without a unit
    if !number.is_empty() {
        return Err(DurationParseError::InvalidNumber(number));
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_spent() {
        assert_eq!(format_spent(0), "0m 0s");
        assert_eq!(format_spent(59), "0m 59s");
        assert_eq!(format_spent(1500), "25m 0s");
        assert_eq!(format_spent(3661), "1h 1m 1s");
        assert_eq!(format_spent(7200), "2h 0m 0s");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(7200), "120:00");
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("90"), Ok(90));
        assert_eq!(parse_duration("90s"), Ok(90));
        assert_eq!(parse_duration("25m"), Ok(1500));
        assert_eq!(parse_duration("1h30m"), Ok(5400));
        assert_eq!(parse_duration("1h 5m 10s"), Ok(3910));
        assert_eq!(parse_duration("2H"), Ok(7200));
    }

    #[test]
    fn test_parse_duration_errors() {
        assert_eq!(parse_duration("  "), Err(DurationParseError::Empty));
        assert_eq!(parse_duration("5d"), Err(DurationParseError::UnknownUnit('d')));
        assert_eq!(
            parse_duration("1h30"),
            Err(DurationParseError::InvalidNumber("30".to_string()))
        );
        assert_eq!(
            parse_duration("m"),
            Err(DurationParseError::InvalidNumber("m".to_string()))
        );
    }
}
