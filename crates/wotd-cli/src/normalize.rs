use unicode_normalization::UnicodeNormalization;
use wotd_types::DictionaryEntry;

/// Trim and NFC-normalize user-entered text
pub fn normalize_text(text: &str) -> String {
    text.trim().nfc().collect()
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.map(|v| normalize_text(&v)).filter(|v| !v.is_empty())
}

pub fn normalize_entry(entry: DictionaryEntry) -> DictionaryEntry {
    DictionaryEntry {
        text: normalize_text(&entry.text),
        meaning: normalize_text(&entry.meaning),
        link: normalize_optional(entry.link),
        image_ref: normalize_optional(entry.image_ref),
        image_attribution: normalize_optional(entry.image_attribution),
        ..entry
    }
}
