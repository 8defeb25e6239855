//! # Shared Utility Functions
//!
//! Display helpers used by renderers and the transport layer.
//!
//! ```rust
//! use shared::utils::short_xp;
//!
//! assert_eq!(short_xp(1_250_000.0), "1.25 MB");
//! assert_eq!(short_xp(1_500.0), "1.5 kB");
//! assert_eq!(short_xp(999.0), "999");
//! ```

/// Compact XP amount: megabytes above a million, kilobytes above a thousand,
/// the plain number otherwise.
pub fn short_xp(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.2} MB", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1} kB", value / 1_000.0)
    } else {
        format!("{}", value)
    }
}

/// First `max_chars` characters of `text`. Never splits a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_xp_thresholds() {
        assert_eq!(short_xp(0.0), "0");
        assert_eq!(short_xp(999.0), "999");
        assert_eq!(short_xp(1_000.0), "1.0 kB");
        assert_eq!(short_xp(12_345.0), "12.3 kB");
        assert_eq!(short_xp(1_000_000.0), "1.00 MB");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("ééé", 2), "éé");
        assert_eq!(truncate_chars("", 2), "");
    }
}
