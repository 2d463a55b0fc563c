//! Model registry: single source of truth for the translation models and the
//! languages each of them supports.
//!
//! The registry is built once on first access (`OnceLock`) from the static
//! tables in `tables.rs` and is immutable afterwards.

use std::sync::OnceLock;

use serde::Serialize;

use super::collation::Collation;
use super::tables;

/// One entry of a language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    /// Model-specific language code sent to the backend (e.g. "tur_Latn")
    pub code: &'static str,

    /// Display label (e.g. "Türkçe")
    pub label: &'static str,
}

/// Which side of the language pair a picker selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Source,
    Target,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Source => "source",
            Side::Target => "target",
        }
    }
}

/// Configuration for a translation model.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Route segment on the backend (`/translate/{code}`)
    pub code: &'static str,

    /// Display label shown in the model picker
    pub label: &'static str,

    /// Languages offered in the "translate from" picker
    pub source_languages: &'static [LanguageOption],

    /// Languages offered in the "translate to" picker
    pub target_languages: &'static [LanguageOption],

    /// Whether this model is selected when a page opens (only one should be true)
    pub is_default: bool,
}

impl ModelConfig {
    /// The raw, unsorted language table for one side.
    pub fn languages(&self, side: Side) -> &'static [LanguageOption] {
        match side {
            Side::Source => self.source_languages,
            Side::Target => self.target_languages,
        }
    }

    /// Find a language on one side. Codes compare case-insensitively.
    pub fn find_language(&self, side: Side, code: &str) -> Option<&'static LanguageOption> {
        self.languages(side)
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
    }

    /// The language table for one side, ordered by label.
    pub fn sorted_languages(&self, side: Side, collation: Collation) -> Vec<LanguageOption> {
        let mut languages = self.languages(side).to_vec();
        languages.sort_by(|a, b| collation.compare(a.label, b.label));
        languages
    }
}

/// Global model registry singleton.
pub struct ModelRegistry {
    models: Vec<ModelConfig>,
}

static REGISTRY: OnceLock<ModelRegistry> = OnceLock::new();

impl ModelRegistry {
    /// Get the global registry, initializing it on first call.
    pub fn get() -> &'static ModelRegistry {
        REGISTRY.get_or_init(|| ModelRegistry {
            models: default_models(),
        })
    }

    /// Look up a model by its code (case-insensitive).
    pub fn get_by_code(&self, code: &str) -> Option<&ModelConfig> {
        self.models
            .iter()
            .find(|model| model.code.eq_ignore_ascii_case(code))
    }

    /// All models, in picker order.
    pub fn list_all(&self) -> Vec<&ModelConfig> {
        self.models.iter().collect()
    }

    /// The model a fresh page starts with.
    ///
    /// # Panics
    /// Panics if the static model table defines no default model.
    pub fn default_model(&self) -> &ModelConfig {
        self.models
            .iter()
            .find(|model| model.is_default)
            .unwrap_or_else(|| panic!("No default model found in registry"))
    }
}

fn default_models() -> Vec<ModelConfig> {
    vec![
        ModelConfig {
            code: "nllb",
            label: "NLLB (Mul-Mul) / 202 Dil",
            source_languages: tables::NLLB_LANGUAGES,
            target_languages: tables::NLLB_LANGUAGES,
            is_default: true,
        },
        ModelConfig {
            code: "m2m100",
            label: "M2M100 (Mul-Mul) / 100 Dil",
            source_languages: tables::M2M100_LANGUAGES,
            target_languages: tables::M2M100_LANGUAGES,
            is_default: false,
        },
        ModelConfig {
            code: "mbart50",
            label: "mBART50 (Mul-Mul) / 52 Dil",
            source_languages: tables::MBART50_LANGUAGES,
            target_languages: tables::MBART50_LANGUAGES,
            is_default: false,
        },
        ModelConfig {
            code: "helsinkinlp",
            label: "Opus MT (Mul-İng) 103 Dil",
            source_languages: tables::OPUS_MT_SOURCE_LANGUAGES,
            target_languages: tables::OPUS_MT_TARGET_LANGUAGES,
            is_default: false,
        },
    ]
}
