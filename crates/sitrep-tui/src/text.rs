//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds max_width (unicode-aware).
///
/// Card descriptions and titles come from the config file, so they can be
/// arbitrarily long and contain wide characters (CJK, emoji). Width is
/// measured in terminal columns, not chars.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }

    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        // Leave one column for the ellipsis
        if used + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        used += ch_width;
    }
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_with_ellipsis("CDN Network", 20), "CDN Network");
    }

    #[test]
    fn test_exact_fit_unchanged() {
        assert_eq!(truncate_with_ellipsis("Email", 5), "Email");
    }

    #[test]
    fn test_long_text_truncated() {
        assert_eq!(
            truncate_with_ellipsis("Primary PostgreSQL cluster", 12),
            "Primary Pos…"
        );
    }

    #[test]
    fn test_tiny_width_is_just_the_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Authentication Service", 1), "…");
    }

    /// Wide characters count as two columns.
    #[test]
    fn test_wide_characters() {
        assert_eq!(truncate_with_ellipsis("主要集群", 8), "主要集群");
        assert_eq!(truncate_with_ellipsis("主要集群", 6), "主要…");
        assert_eq!(truncate_with_ellipsis("主要集群", 5), "主要…");
    }
}
