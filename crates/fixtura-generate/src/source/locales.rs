use std::fmt;

/// Locale selecting the regional data tables of the fake-data provider.
///
/// The supported set is the intersection of the locales the entity catalog
/// documents and the locales fake-rs ships data for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocaleKey {
    En,
    De,
    Fr,
    It,
    PtBr,
    Ja,
    ZhCn,
    Ar,
}

impl LocaleKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            "fr" => Some(Self::Fr),
            "it" => Some(Self::It),
            "pt_BR" => Some(Self::PtBr),
            "ja" => Some(Self::Ja),
            "zh_CN" => Some(Self::ZhCn),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Resolve a caller-supplied locale code.
    ///
    /// Exact match first, then the base code before the first `_`
    /// (`de_AT` -> `de`); anything else degrades to the default.
    pub fn resolve(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::En;
        };
        if let Some(locale) = Self::parse(value) {
            return locale;
        }
        let base = value.split('_').next().unwrap_or(value);
        Self::parse(base).unwrap_or(Self::En)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Fr => "fr",
            Self::It => "it",
            Self::PtBr => "pt_BR",
            Self::Ja => "ja",
            Self::ZhCn => "zh_CN",
            Self::Ar => "ar",
        }
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        assert_eq!(LocaleKey::resolve(Some("pt_BR")), LocaleKey::PtBr);
        assert_eq!(LocaleKey::resolve(Some("ja")), LocaleKey::Ja);
    }

    #[test]
    fn base_locale_fallback() {
        assert_eq!(LocaleKey::resolve(Some("de_AT")), LocaleKey::De);
        assert_eq!(LocaleKey::resolve(Some("fr_CA")), LocaleKey::Fr);
    }

    #[test]
    fn unknown_locale_degrades_to_default() {
        assert_eq!(LocaleKey::resolve(Some("xx")), LocaleKey::En);
        assert_eq!(LocaleKey::resolve(Some("pt_PT")), LocaleKey::En);
        assert_eq!(LocaleKey::resolve(None), LocaleKey::En);
    }
}
