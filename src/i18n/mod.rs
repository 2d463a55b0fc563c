//! Internationalization (i18n) of the interface itself.
//!
//! Language *data* for the translation models lives in `crate::catalog`; this
//! module only covers the strings the interface shows to the user.
//!
//! - `locale`: the `UiLocale` type (Turkish by default, or English)
//! - `strings`: localized notice, label and terminal texts

mod locale;
mod strings;

pub use locale::UiLocale;
pub use strings::{UiStrings, ENGLISH_STRINGS, TURKISH_STRINGS};
