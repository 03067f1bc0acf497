//! Human-readable byte sizes (`512K`, `1.5M`, `1GB`).

use thiserror::Error;

const KIB: f64 = 1024.0;

/// Failure to interpret a size string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeParseError {
    #[error("invalid size '{input}': expected a number with an optional B/K/M/G suffix")]
    InvalidNumber { input: String },

    #[error("unknown size suffix '{suffix}' in '{input}'")]
    UnknownSuffix { input: String, suffix: String },
}

/// Parse a size string into a byte count.
///
/// Suffixes `B`, `K`/`KB`, `M`/`MB`, `G`/`GB` are case-insensitive and use
/// powers of 1024. Fractional values are truncated to whole bytes. Empty input
/// and `0` both yield `0`, which callers treat as unlimited.
///
/// # Errors
/// Returns [`SizeParseError`] for a missing/unparseable number or an unknown suffix.
pub fn parse_size(input: &str) -> Result<u64, SizeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "0" {
        return Ok(0);
    }

    let split = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(trimmed.len());
    let (number, suffix) = trimmed.split_at(split);
    let suffix = suffix.trim().to_ascii_uppercase();

    let value: f64 = number
        .parse()
        .map_err(|_| SizeParseError::InvalidNumber {
            input: input.to_string(),
        })?;

    let multiplier = match suffix.as_str() {
        "" | "B" => 1.0,
        "K" | "KB" => KIB,
        "M" | "MB" => KIB * KIB,
        "G" | "GB" => KIB * KIB * KIB,
        _ => {
            return Err(SizeParseError::UnknownSuffix {
                input: input.to_string(),
                suffix,
            })
        }
    };

    Ok((value * multiplier) as u64)
}

/// Render a byte ceiling for logs and help output.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [(&str, u64); 3] = [("G", 1 << 30), ("M", 1 << 20), ("K", 1 << 10)];
    if bytes == 0 {
        return "unlimited".to_string();
    }
    for (unit, scale) in UNITS {
        if bytes >= scale && bytes % scale == 0 {
            return format!("{}{}", bytes / scale, unit);
        }
    }
    format!("{}B", bytes)
}

#[cfg(test)]
mod tests {
    use super::{format_size, parse_size, SizeParseError};

    #[test]
    fn parse_size_accepts_supported_forms() {
        let cases = [
            ("0", 0),
            ("", 0),
            ("   ", 0),
            ("100", 100),
            ("100B", 100),
            ("100b", 100),
            ("1K", 1024),
            ("1KB", 1024),
            ("1k", 1024),
            ("1M", 1024 * 1024),
            ("1MB", 1024 * 1024),
            ("1m", 1024 * 1024),
            ("1G", 1024 * 1024 * 1024),
            ("1gb", 1024 * 1024 * 1024),
            ("10M", 10 * 1024 * 1024),
            ("1.5M", (1.5 * 1024.0 * 1024.0) as u64),
            ("512K", 512 * 1024),
            (" 2 KB ", 2048),
        ];

        for (input, expected) in cases {
            assert_eq!(parse_size(input), Ok(expected), "input: {:?}", input);
        }
    }

    #[test]
    fn parse_size_truncates_fractional_bytes() {
        assert_eq!(parse_size("1.5"), Ok(1));
        assert_eq!(parse_size("0.5K"), Ok(512));
    }

    #[test]
    fn parse_size_rejects_unknown_suffixes() {
        for input in ["1X", "1TB", "5 KiB"] {
            let err = parse_size(input).expect_err("suffix should be rejected");
            assert!(
                matches!(err, SizeParseError::UnknownSuffix { .. }),
                "input: {:?}, err: {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn parse_size_rejects_missing_number() {
        for input in ["abc", "K", "1.2.3M"] {
            assert!(parse_size(input).is_err(), "input: {:?}", input);
        }
    }

    #[test]
    fn format_size_uses_largest_exact_unit() {
        assert_eq!(format_size(0), "unlimited");
        assert_eq!(format_size(15), "15B");
        assert_eq!(format_size(2048), "2K");
        assert_eq!(format_size(1536), "1536B");
        assert_eq!(format_size(10 * 1024 * 1024), "10M");
        assert_eq!(format_size(1 << 30), "1G");
    }
}
