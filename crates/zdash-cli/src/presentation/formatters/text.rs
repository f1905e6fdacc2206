/// Shown in place of absent values
pub const PLACEHOLDER: &str = "-";

pub fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => PLACEHOLDER,
    }
}

/// Cut to `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(max - 1).collect();
    format!("{}…", kept)
}

/// Left-align in `width` character cells
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(None), "-");
        assert_eq!(or_placeholder(Some("  ")), "-");
        assert_eq!(or_placeholder(Some("Done")), "Done");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Café Menu", 20), "Café Menu");
        assert_eq!(truncate("Café Menu", 5), "Café…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_pad_multibyte() {
        assert_eq!(pad("é", 3), "é  ");
        assert_eq!(pad("long", 2), "long");
    }
}
