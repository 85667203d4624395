//! Language tag mapping between application codes and DeepL codes
//!
//! The application speaks BCP-47-like tags (possibly with a region
//! subtag, e.g. `en-US`); DeepL speaks its own uppercase vocabulary
//! that is coarser on the source side and dialect-aware on the target
//! side. These two tables are the single translation boundary.

/// Application tag → DeepL source language code.
///
/// DeepL auto-detects dialects on input, so every English region
/// variant collapses to `EN`, every Chinese script variant to `ZH`,
/// and every Portuguese variant to `PT`.
pub const SOURCE_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "AR"),
    ("bg", "BG"),
    ("cs", "CS"),
    ("da", "DA"),
    ("de", "DE"),
    ("el", "EL"),
    ("en", "EN"),
    ("en-US", "EN"),
    ("en-GB", "EN"),
    ("en-CA", "EN"),
    ("en-AU", "EN"),
    ("es", "ES"),
    ("et", "ET"),
    ("fi", "FI"),
    ("fr", "FR"),
    ("hu", "HU"),
    ("id", "ID"),
    ("it", "IT"),
    ("ja", "JA"),
    ("ko", "KO"),
    ("lt", "LT"),
    ("lv", "LV"),
    ("nb", "NB"),
    ("nl", "NL"),
    ("pl", "PL"),
    ("pt", "PT"),
    ("pt-BR", "PT"),
    ("pt-PT", "PT"),
    ("ro", "RO"),
    ("ru", "RU"),
    ("sk", "SK"),
    ("sl", "SL"),
    ("sv", "SV"),
    ("tr", "TR"),
    ("uk", "UK"),
    ("zh", "ZH"),
    ("zh-CN", "ZH"),
    ("zh-TW", "ZH"),
    ("zh-Hans", "ZH"),
    ("zh-Hant", "ZH"),
];

/// Application tag → DeepL target language code.
///
/// The target side is the authority for output dialects: generic
/// English is rendered American, `en-GB` stays British, generic
/// Portuguese is European and `pt-BR` Brazilian.
pub const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "AR"),
    ("bg", "BG"),
    ("cs", "CS"),
    ("da", "DA"),
    ("de", "DE"),
    ("el", "EL"),
    ("en", "EN-US"),
    ("en-US", "EN-US"),
    ("en-CA", "EN-US"),
    ("en-AU", "EN-US"),
    ("en-GB", "EN-GB"),
    ("es", "ES"),
    ("et", "ET"),
    ("fi", "FI"),
    ("fr", "FR"),
    ("hu", "HU"),
    ("id", "ID"),
    ("it", "IT"),
    ("ja", "JA"),
    ("ko", "KO"),
    ("lt", "LT"),
    ("lv", "LV"),
    ("nb", "NB"),
    ("nl", "NL"),
    ("pl", "PL"),
    ("pt", "PT-PT"),
    ("pt-PT", "PT-PT"),
    ("pt-BR", "PT-BR"),
    ("ro", "RO"),
    ("ru", "RU"),
    ("sk", "SK"),
    ("sl", "SL"),
    ("sv", "SV"),
    ("tr", "TR"),
    ("uk", "UK"),
    ("zh", "ZH"),
    ("zh-CN", "ZH"),
    ("zh-TW", "ZH"),
    ("zh-Hans", "ZH"),
    ("zh-Hant", "ZH"),
];

/// Map an application language tag to a DeepL code using `table`.
///
/// Exact match wins. Otherwise the region subtag is stripped at the
/// first `-` and the lookup is retried once, so `de-AT` resolves via
/// `de`. No further fallback: an unknown tag is `None`, and deciding
/// whether that matters is the caller's job.
pub fn map_language(
    table: &[(&'static str, &'static str)],
    tag: Option<&str>,
) -> Option<&'static str> {
    let tag = tag?;
    if tag.is_empty() {
        return None;
    }

    if let Some(code) = lookup(table, tag) {
        return Some(code);
    }

    let base = tag.split('-').next().unwrap_or(tag);
    if base == tag {
        return None;
    }
    lookup(table, base)
}

/// Map a tag to a DeepL source language code
pub fn source_lang_code(tag: Option<&str>) -> Option<&'static str> {
    map_language(SOURCE_LANGUAGES, tag)
}

/// Map a tag to a DeepL target language code
pub fn target_lang_code(tag: Option<&str>) -> Option<&'static str> {
    map_language(TARGET_LANGUAGES, tag)
}

/// Exact table lookup
fn lookup(table: &[(&'static str, &'static str)], tag: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == tag).map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_exact_matches() {
        assert_eq!(source_lang_code(Some("ja")), Some("JA"));
        assert_eq!(source_lang_code(Some("de")), Some("DE"));
        assert_eq!(source_lang_code(Some("uk")), Some("UK"));
    }

    #[test]
    fn test_source_collapses_english_variants() {
        for tag in ["en", "en-US", "en-GB", "en-CA", "en-AU"] {
            assert_eq!(source_lang_code(Some(tag)), Some("EN"), "tag: {}", tag);
        }
    }

    #[test]
    fn test_source_collapses_chinese_variants() {
        for tag in ["zh", "zh-CN", "zh-TW", "zh-Hans", "zh-Hant"] {
            assert_eq!(source_lang_code(Some(tag)), Some("ZH"), "tag: {}", tag);
        }
    }

    #[test]
    fn test_target_english_dialects() {
        assert_eq!(target_lang_code(Some("en")), Some("EN-US"));
        assert_eq!(target_lang_code(Some("en-US")), Some("EN-US"));
        assert_eq!(target_lang_code(Some("en-CA")), Some("EN-US"));
        assert_eq!(target_lang_code(Some("en-AU")), Some("EN-US"));
        assert_eq!(target_lang_code(Some("en-GB")), Some("EN-GB"));
    }

    #[test]
    fn test_target_portuguese_dialects() {
        assert_eq!(target_lang_code(Some("pt")), Some("PT-PT"));
        assert_eq!(target_lang_code(Some("pt-PT")), Some("PT-PT"));
        assert_eq!(target_lang_code(Some("pt-BR")), Some("PT-BR"));
    }

    #[test]
    fn test_region_subtag_falls_back_to_base() {
        // de-AT is not enumerated; the base tag carries it
        assert_eq!(source_lang_code(Some("de-AT")), Some("DE"));
        assert_eq!(target_lang_code(Some("de-AT")), Some("DE"));
        assert_eq!(source_lang_code(Some("fr-BE")), Some("FR"));
    }

    #[test]
    fn test_absent_or_empty_tag() {
        assert_eq!(source_lang_code(None), None);
        assert_eq!(source_lang_code(Some("")), None);
        assert_eq!(target_lang_code(None), None);
        assert_eq!(target_lang_code(Some("")), None);
    }

    #[test]
    fn test_unsupported_tag() {
        assert_eq!(source_lang_code(Some("xx-unsupported")), None);
        assert_eq!(target_lang_code(Some("xx")), None);
        assert_eq!(target_lang_code(Some("tlh")), None);
    }

    #[test]
    fn test_every_source_entry_resolves() {
        for (tag, code) in SOURCE_LANGUAGES {
            assert_eq!(source_lang_code(Some(tag)), Some(*code));
        }
    }

    #[test]
    fn test_every_target_entry_resolves() {
        for (tag, code) in TARGET_LANGUAGES {
            assert_eq!(target_lang_code(Some(tag)), Some(*code));
        }
    }
}
