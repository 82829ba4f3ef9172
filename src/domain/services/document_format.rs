use chrono::{DateTime, Utc};

/// Texto añadido a los resúmenes truncados
pub const ELLIPSIS: &str = "...";

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Idiomas con bandera conocida
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
}

impl Language {
    /// Create from a language code, ignoring case and any region suffix (`en-US`, `pt_BR`)
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match primary.as_str() {
            "en" => Some(Language::English),
            "es" => Some(Language::Spanish),
            "fr" => Some(Language::French),
            "de" => Some(Language::German),
            "it" => Some(Language::Italian),
            "pt" => Some(Language::Portuguese),
            _ => None,
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::English => "🇬🇧",
            Language::Spanish => "🇪🇸",
            Language::French => "🇫🇷",
            Language::German => "🇩🇪",
            Language::Italian => "🇮🇹",
            Language::Portuguese => "🇵🇹",
        }
    }
}

/// Glyph shown for languages without a known flag
pub const UNKNOWN_LANGUAGE_FLAG: &str = "🌐";

pub fn language_flag(code: &str) -> &'static str {
    Language::from_code(code)
        .map(|lang| lang.flag())
        .unwrap_or(UNKNOWN_LANGUAGE_FLAG)
}

/// Uppercase of the first three characters of the type tag
pub fn type_badge(doc_type: &str) -> String {
    doc_type.chars().take(3).collect::<String>().to_uppercase()
}

/// Truncates to `max_chars` characters, appending `...` when anything was cut.
pub fn truncate_summary(summary: &str, max_chars: usize) -> String {
    match summary.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &summary[..byte_idx], ELLIPSIS),
        None => summary.to_string(),
    }
}

/// Human readable size in binary units (`0 B`, `512 B`, `1.5 KB`, `2 MB`).
pub fn format_size(size_bytes: u64) -> String {
    if size_bytes < 1024 {
        return format!("{} B", size_bytes);
    }

    let mut value = size_bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// `Deleted on Jan 3, 2025`
pub fn format_deleted_on(deleted_at: &DateTime<Utc>) -> String {
    format!("Deleted on {}", deleted_at.format("%b %-d, %Y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_type_badge_uses_first_three_chars() {
        assert_eq!(type_badge("pdf"), "PDF");
        assert_eq!(type_badge("markdown"), "MAR");
        assert_eq!(type_badge("tx"), "TX");
        assert_eq!(type_badge(""), "");
    }

    #[test]
    fn test_truncate_summary_boundary() {
        let exact = "a".repeat(100);
        assert_eq!(truncate_summary(&exact, 100), exact);

        let long = "b".repeat(101);
        let truncated = truncate_summary(&long, 100);
        assert_eq!(truncated, format!("{}...", "b".repeat(100)));
    }

    #[test]
    fn test_truncate_summary_counts_chars_not_bytes() {
        let summary = "é".repeat(120);
        let truncated = truncate_summary(&summary, 100);

        assert_eq!(truncated.chars().count(), 103);
        assert!(truncated.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn test_format_deleted_on() {
        let at = Utc.with_ymd_and_hms(2025, 1, 3, 18, 30, 0).unwrap();
        assert_eq!(format_deleted_on(&at), "Deleted on Jan 3, 2025");
    }

    #[test]
    fn test_language_flag() {
        assert_eq!(language_flag("en"), "🇬🇧");
        assert_eq!(language_flag("ES"), "🇪🇸");
        assert_eq!(language_flag("en-US"), "🇬🇧");
        assert_eq!(language_flag("pt_BR"), "🇵🇹");
        assert_eq!(language_flag("xx"), UNKNOWN_LANGUAGE_FLAG);
        assert_eq!(language_flag(""), UNKNOWN_LANGUAGE_FLAG);
    }
}
