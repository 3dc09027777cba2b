//! HTML escaping.

/// Escape text for interpolation into HTML element content or a quoted
/// attribute value.
pub fn esc_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape an optional field, rendering `None` as the empty string.
pub fn esc_opt(s: Option<&str>) -> String {
    s.map(esc_html).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_five_characters() {
        assert_eq!(
            esc_html(r#"<a href="x" title='y'>&</a>"#),
            "&lt;a href=&quot;x&quot; title=&#39;y&#39;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_ampersand_is_escaped_once() {
        assert_eq!(esc_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(esc_html("Knee pain — 2 weeks"), "Knee pain — 2 weeks");
    }

    #[test]
    fn test_optional() {
        assert_eq!(esc_opt(None), "");
        assert_eq!(esc_opt(Some("a<b")), "a&lt;b");
    }
}
