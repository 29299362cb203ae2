use chrono::Locale;

/// Maps a BCP-47 tag such as `fr-CA` onto the locale used for weekday and
/// month names. Unknown tags render in US English.
pub fn resolve_locale(tag: &str) -> Locale {
    let normalized = tag.trim().replace('-', "_");
    let mut parts = normalized.split('_');
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let region = parts.next().map(str::to_ascii_uppercase);

    match (language.as_str(), region.as_deref()) {
        ("en", Some("CA")) => Locale::en_CA,
        ("en", Some("GB")) => Locale::en_GB,
        ("en", Some("AU")) => Locale::en_AU,
        ("en", _) => Locale::en_US,
        ("fr", Some("CA")) => Locale::fr_CA,
        ("fr", _) => Locale::fr_FR,
        ("es", Some("MX")) => Locale::es_MX,
        ("es", _) => Locale::es_ES,
        ("de", _) => Locale::de_DE,
        ("it", _) => Locale::it_IT,
        ("pt", Some("PT")) => Locale::pt_PT,
        ("pt", _) => Locale::pt_BR,
        ("nl", _) => Locale::nl_NL,
        _ => Locale::en_US,
    }
}
