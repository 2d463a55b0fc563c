use std::time::Duration;

use anyhow::{Context, Result};

use crate::catalog::Model;
use crate::client::TranslationClient;
use crate::i18n::UiLocale;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct Config {
    // Backend
    pub api_url: String,
    pub request_timeout: Option<Duration>,

    // Page defaults
    pub default_model: Model,
    pub locale: UiLocale,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_model = std::env::var("TERCUMAN_DEFAULT_MODEL")
            .unwrap_or_else(|_| Model::default_model().code().to_string());
        let locale = std::env::var("TERCUMAN_LOCALE").unwrap_or_else(|_| "tr".to_string());

        let request_timeout = match std::env::var("TERCUMAN_REQUEST_TIMEOUT_SECS") {
            Ok(secs) => Some(Duration::from_secs(
                secs.trim()
                    .parse()
                    .context("TERCUMAN_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            )),
            Err(_) => None,
        };

        Ok(Self {
            // Backend
            api_url: std::env::var("TERCUMAN_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            request_timeout,

            // Page defaults
            default_model: Model::from_code(&default_model)
                .context("TERCUMAN_DEFAULT_MODEL is not a known model")?,
            locale: UiLocale::from_tag(&locale).context("TERCUMAN_LOCALE is not supported")?,
        })
    }

    /// Backend client honouring the configured timeout.
    pub fn client(&self) -> Result<TranslationClient> {
        match self.request_timeout {
            Some(timeout) => TranslationClient::with_timeout(&self.api_url, timeout)
                .context("Failed to build HTTP client"),
            None => Ok(TranslationClient::new(&self.api_url)),
        }
    }
}
