//! Translation model catalog.
//!
//! Everything the pickers need to know lives here: which models exist, which
//! languages each model accepts on each side, and how labels are ordered.
//!
//! - `registry`: the static model table and the `ModelRegistry` singleton
//! - `model`: the validated `Model` type
//! - `collation`: locale-aware label ordering
//! - `tables`: the language tables themselves
//!
//! # Example
//!
//! ```rust,ignore
//! use tercuman::catalog::{Collation, Model, Side};
//!
//! let model = Model::from_code("nllb")?;
//! let targets = model.available_languages(Side::Target, Collation::Turkish);
//! ```

mod collation;
mod model;
mod registry;
mod tables;

pub use collation::Collation;
pub use model::Model;
pub use registry::{LanguageOption, ModelConfig, ModelRegistry, Side};

use thiserror::Error;

/// Lookup failures against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown model code: '{0}'")]
    UnknownModel(String),

    #[error("Language '{code}' is not offered as a {side} language by model '{model}'")]
    UnknownLanguage {
        model: &'static str,
        side: &'static str,
        code: String,
    },
}
