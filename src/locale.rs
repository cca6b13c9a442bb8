//! Locale resolution: likely-minimal canonicalization of a requested tag and
//! the base-locale determination used to distinguish base-language files from
//! regional variants.

use unic_langid::LanguageIdentifier;

/// A locale resolved eagerly at file-instance construction.
///
/// The requested tag is expanded to its likely full form and then minimized,
/// which collapses redundant script/region subtags implied by the language
/// (e.g. `ko-KR` becomes `ko`, while `en-GB` stays `en-GB`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    spec: String,
    language: String,
    is_base: bool,
}

impl ResolvedLocale {
    /// Resolves a requested locale tag. An unparseable tag is kept verbatim
    /// and treated as a non-base locale.
    pub fn resolve(tag: &str) -> Self {
        match tag.parse::<LanguageIdentifier>() {
            Ok(mut id) => {
                id.maximize();
                id.minimize();
                let spec = id.to_string();
                let language = id.language.as_str().to_string();

                // The locale is the base for its language when the likely
                // minimal form of the bare language equals this locale.
                let mut base: LanguageIdentifier =
                    language.parse().unwrap_or_default();
                base.maximize();
                base.minimize();
                let is_base = base.to_string() == spec;

                ResolvedLocale {
                    spec,
                    language,
                    is_base,
                }
            }
            Err(_) => ResolvedLocale {
                spec: tag.to_string(),
                language: tag.to_string(),
                is_base: false,
            },
        }
    }

    /// The likely minimal canonical form of the locale.
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// The bare language subtag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether this locale equals the default locale for its base language.
    pub fn is_base_locale(&self) -> bool {
        self.is_base
    }
}
