//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

/// Format a value as a quoted, right-aligned field.
///
/// Values longer than `width` are never truncated.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Human readable address count, e.g. `8192` or `1M`.
pub fn format_count(count: u64) -> String {
    match count {
        c if c >= 1 << 20 && c % (1 << 20) == 0 => format!("{}M", c >> 20),
        c if c >= 1 << 16 && c % (1 << 10) == 0 => format!("{}K", c >> 10),
        c => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("nat-0", 10), "   \"nat-0\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("us-east-1-bos-1a", 5), "\"us-east-1-bos-1a\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(256), "256");
        assert_eq!(format_count(8192), "8192");
        assert_eq!(format_count(65536), "64K");
        assert_eq!(format_count(1 << 24), "16M");
    }
}
