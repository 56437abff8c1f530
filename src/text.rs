//! Text helpers shared by the form and the result cards.

const ELLIPSIS: &str = "...";

/// Replace the five markup-significant characters with their entities.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escaped lyrics excerpt for a result card.
///
/// Truncation happens on the raw text, before escaping, and counts
/// characters rather than bytes. Lyrics no longer than `limit` are kept
/// whole without an ellipsis.
pub fn lyrics_preview(lyrics: &str, limit: usize) -> String {
    match lyrics.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut excerpt = String::with_capacity(cut + ELLIPSIS.len());
            excerpt.push_str(&lyrics[..cut]);
            excerpt.push_str(ELLIPSIS);
            escape_html(&excerpt)
        }
        None => escape_html(lyrics),
    }
}

/// Leading-integer parse of the quantity field.
///
/// Leading whitespace and an optional sign are accepted, trailing garbage
/// is ignored, and no range check is applied. `None` when no digit leads.
pub fn parse_quantity(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_unchanged() {
        let text = "Verse one, walking slow; no markup here 123";
        assert_eq!(escape_html(text), text);
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_neutralizes_script() {
        let escaped = escape_html("<script>");
        assert_eq!(escaped, "&lt;script&gt;");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
    }

    #[test]
    fn test_escape_all_five() {
        assert_eq!(
            escape_html(r#"a & b < c > d " e ' f"#),
            "a &amp; b &lt; c &gt; d &quot; e &#039; f"
        );
        // Existing entities are escaped again, not recognised.
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_length_grows_with_special_chars() {
        let one = escape_html("<");
        let two = escape_html("<<");
        assert!(two.len() > one.len());
        assert_eq!(two.len() - one.len(), "&lt;".len());
    }

    #[test]
    fn test_short_lyrics_kept_whole() {
        let lyrics = "la ".repeat(100);
        assert_eq!(lyrics.chars().count(), 300);
        assert_eq!(lyrics_preview(&lyrics, 300), lyrics);
        assert_eq!(lyrics_preview("short", 300), "short");
    }

    #[test]
    fn test_long_lyrics_truncated_with_ellipsis() {
        let lyrics = "x".repeat(301);
        let preview = lyrics_preview(&lyrics, 300);
        assert_eq!(preview.len(), 303);
        assert!(preview.ends_with("..."));
        assert_eq!(&preview[..300], &lyrics[..300]);
    }

    #[test]
    fn test_truncate_before_escape() {
        let lyrics = format!("{}<b>", "y".repeat(299));
        let preview = lyrics_preview(&lyrics, 300);
        assert_eq!(preview, format!("{}&lt;...", "y".repeat(299)));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let lyrics = "é".repeat(310);
        let preview = lyrics_preview(&lyrics, 300);
        assert_eq!(preview.chars().count(), 303);
        assert!(preview.starts_with("éé"));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity("  12 "), Some(12));
        assert_eq!(parse_quantity("7items"), Some(7));
        assert_eq!(parse_quantity("-2"), Some(-2));
        assert_eq!(parse_quantity("+5"), Some(5));
        assert_eq!(parse_quantity("0"), Some(0));
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity("-"), None);
    }
}
