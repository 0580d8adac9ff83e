//! Formatting helpers shared by the report and the diagnostics

/// Binary unit prefixes tried in order before falling back to `Yi`
const UNITS: [&str; 8] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi"];

/// Formatting utilities
pub struct FormatUtils;

impl FormatUtils {
    /// Format a byte count with binary units and one decimal digit, e.g. `1.5MiB`.
    ///
    /// Negative values keep their sign. Magnitudes of `1024^8` and above are
    /// reported in `YiB`.
    pub fn human_size(bytes: i64) -> String {
        Self::human_size_f64(bytes as f64)
    }

    /// Same ladder as [`FormatUtils::human_size`] for quantities beyond `i64`
    pub fn human_size_f64(mut value: f64) -> String {
        for unit in UNITS {
            if value.abs() < 1024.0 {
                return format!("{:.1}{}B", value, unit);
            }
            value /= 1024.0;
        }
        format!("{:.1}YiB", value)
    }
}

/// Shorthand for [`FormatUtils::human_size`]
pub fn human_size(bytes: i64) -> String {
    FormatUtils::human_size(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size_small_values() {
        assert_eq!(human_size(0), "0.0B");
        assert_eq!(human_size(1), "1.0B");
        assert_eq!(human_size(1023), "1023.0B");
    }

    #[test]
    fn test_human_size_binary_units() {
        assert_eq!(human_size(1024), "1.0KiB");
        assert_eq!(human_size(1536), "1.5KiB");
        assert_eq!(human_size(1_572_864), "1.5MiB");
        assert_eq!(human_size(1_073_741_824), "1.0GiB");
        assert_eq!(human_size(3_221_225_472), "3.0GiB");
        assert_eq!(human_size(1 << 40), "1.0TiB");
    }

    #[test]
    fn test_human_size_largest_units() {
        assert_eq!(human_size(1 << 60), "1.0EiB");
        assert_eq!(human_size(i64::MAX), "8.0EiB");
        assert_eq!(FormatUtils::human_size_f64(1024f64.powi(7)), "1.0ZiB");
    }

    #[test]
    fn test_human_size_falls_back_to_yobibytes() {
        assert_eq!(FormatUtils::human_size_f64(1024f64.powi(8)), "1.0YiB");
        assert_eq!(FormatUtils::human_size_f64(2048.0 * 1024f64.powi(8)), "2048.0YiB");
    }

    #[test]
    fn test_human_size_negative() {
        assert_eq!(human_size(-1536), "-1.5KiB");
        assert_eq!(human_size(-5), "-5.0B");
    }
}
