//! Model type: a translation model validated against the registry.

use std::fmt;
use std::str::FromStr;

use super::{CatalogError, LanguageOption, ModelConfig, ModelRegistry, Side};
use super::collation::Collation;

/// A validated translation model.
///
/// Only codes present in the registry can be turned into a `Model`, so every
/// `Model` maps to a backend route and a pair of language tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Model {
    code: &'static str,
}

impl Model {
    pub const NLLB: Model = Model { code: "nllb" };
    pub const M2M100: Model = Model { code: "m2m100" };
    pub const MBART50: Model = Model { code: "mbart50" };
    /// Opus MT `mul-en`, routed as `helsinkinlp`.
    pub const HELSINKI_NLP: Model = Model {
        code: "helsinkinlp",
    };

    /// Create a Model from its code.
    ///
    /// # Example
    /// ```ignore
    /// let model = Model::from_code("m2m100")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Model, CatalogError> {
        ModelRegistry::get()
            .get_by_code(code)
            .map(|config| Model { code: config.code })
            .ok_or_else(|| CatalogError::UnknownModel(code.to_string()))
    }

    /// The model a fresh page starts with.
    pub fn default_model() -> Model {
        Model {
            code: ModelRegistry::get().default_model().code,
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen for
    /// a `Model` built through `from_code` or the constants.
    pub fn config(&self) -> &'static ModelConfig {
        ModelRegistry::get()
            .get_by_code(self.code)
            .unwrap_or_else(|| panic!("Model code '{}' missing from registry", self.code))
    }

    pub fn label(&self) -> &'static str {
        self.config().label
    }

    /// Languages offered for one side, ordered by label.
    pub fn available_languages(&self, side: Side, collation: Collation) -> Vec<LanguageOption> {
        self.config().sorted_languages(side, collation)
    }

    /// Resolve a language code on one side of this model.
    pub fn language(&self, side: Side, code: &str) -> Result<&'static LanguageOption, CatalogError> {
        self.config()
            .find_language(side, code)
            .ok_or_else(|| CatalogError::UnknownLanguage {
                model: self.code,
                side: side.as_str(),
                code: code.to_string(),
            })
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::default_model()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Model {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::from_code(s)
    }
}
