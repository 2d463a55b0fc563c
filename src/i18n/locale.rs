//! UI locale: which strings to show and how to order language labels.

use anyhow::{bail, Result};

use super::strings::{UiStrings, ENGLISH_STRINGS, TURKISH_STRINGS};
use crate::catalog::Collation;

/// A supported interface locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiLocale {
    /// Default interface language
    #[default]
    Turkish,
    English,
}

impl UiLocale {
    /// Parse a locale tag such as `tr`, `tr-TR` or `en_US`.
    ///
    /// # Returns
    /// * `Ok(UiLocale)` for Turkish or English tags
    /// * `Err` for any other language
    pub fn from_tag(tag: &str) -> Result<UiLocale> {
        let language = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "tr" => Ok(UiLocale::Turkish),
            "en" => Ok(UiLocale::English),
            _ => bail!("Unsupported UI locale: '{}'", tag),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            UiLocale::Turkish => "tr",
            UiLocale::English => "en",
        }
    }

    pub fn strings(&self) -> &'static UiStrings {
        match self {
            UiLocale::Turkish => &TURKISH_STRINGS,
            UiLocale::English => &ENGLISH_STRINGS,
        }
    }

    /// Collation used to order language labels in the pickers.
    pub fn collation(&self) -> Collation {
        Collation::for_locale(self.tag())
    }
}
