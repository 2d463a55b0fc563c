//! Translation page controller.
//!
//! `TranslationSession` owns everything one open translation page holds: the
//! selected model and language pair, the input and output text, and the
//! on-screen keyboard state. Every change goes through the methods below so
//! the selection invariants hold:
//!
//! - a selected language is always a code offered by the current model on
//!   that side, and switching model clears both selections;
//! - a request is only sent when source, target and input text are all set.
//!
//! Operations never fail the session. Problems are reported twice: as a
//! `Result` for the caller and as a `Notice` queued for display.

use thiserror::Error;
use tracing::{debug, error, info};

use crate::catalog::{CatalogError, LanguageOption, Model, Side};
use crate::client::{ClientError, TranslationClient, TranslationRequest};
use crate::clipboard::{Clipboard, ClipboardError};
use crate::i18n::{UiLocale, UiStrings};
use crate::keyboard::{delete_last_grapheme, KeyAction, KeyboardLayout};
use crate::metrics::SessionMetrics;
use crate::route;

/// Severity of a notice, as a toast would colour it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A user-facing notification produced by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MissingSourceLanguage,
    MissingTargetLanguage,
    MissingInputText,
    TranslationFailed,
    NothingToCopy,
    Copied,
    CopyFailed,
    CopyUnsupported,
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::Copied => NoticeLevel::Success,
            _ => NoticeLevel::Error,
        }
    }

    pub fn message(&self, strings: &UiStrings) -> &'static str {
        match self {
            Notice::MissingSourceLanguage => strings.missing_source_language,
            Notice::MissingTargetLanguage => strings.missing_target_language,
            Notice::MissingInputText => strings.missing_input_text,
            Notice::TranslationFailed => strings.translation_failed,
            Notice::NothingToCopy => strings.nothing_to_copy,
            Notice::Copied => strings.copied,
            Notice::CopyFailed => strings.copy_failed,
            Notice::CopyUnsupported => strings.copy_unsupported,
        }
    }
}

/// Why a submission was stopped before sending. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No source language selected")]
    MissingSourceLanguage,

    #[error("No target language selected")]
    MissingTargetLanguage,

    #[error("No input text")]
    MissingInputText,
}

impl ValidationError {
    pub fn notice(&self) -> Notice {
        match self {
            ValidationError::MissingSourceLanguage => Notice::MissingSourceLanguage,
            ValidationError::MissingTargetLanguage => Notice::MissingTargetLanguage,
            ValidationError::MissingInputText => Notice::MissingInputText,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Backend(#[from] ClientError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    #[error("Nothing to copy")]
    NothingToCopy,

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Everything a translation page displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub selected_model: Model,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub input_text: String,
    pub translated_text: String,
    pub keyboard_visible: bool,
    pub keyboard_layout: KeyboardLayout,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            selected_model: Model::default_model(),
            source_language: None,
            target_language: None,
            input_text: String::new(),
            translated_text: String::new(),
            keyboard_visible: false,
            keyboard_layout: KeyboardLayout::default(),
        }
    }
}

impl SessionState {
    pub fn language(&self, side: Side) -> Option<&str> {
        match side {
            Side::Source => self.source_language.as_deref(),
            Side::Target => self.target_language.as_deref(),
        }
    }

    fn language_mut(&mut self, side: Side) -> &mut Option<String> {
        match side {
            Side::Source => &mut self.source_language,
            Side::Target => &mut self.target_language,
        }
    }

    /// First missing field, in the order the page checks them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.source_language.as_deref().unwrap_or_default().is_empty() {
            return Err(ValidationError::MissingSourceLanguage);
        }
        if self.target_language.as_deref().unwrap_or_default().is_empty() {
            return Err(ValidationError::MissingTargetLanguage);
        }
        if self.input_text.is_empty() {
            return Err(ValidationError::MissingInputText);
        }
        Ok(())
    }
}

/// Controller for one translation page.
pub struct TranslationSession {
    state: SessionState,
    client: TranslationClient,
    locale: UiLocale,
    notices: Vec<Notice>,
    metrics: SessionMetrics,
}

impl TranslationSession {
    /// A fresh page on the default model with nothing selected.
    pub fn new(client: TranslationClient, locale: UiLocale) -> Self {
        Self::with_state(client, locale, SessionState::default())
    }

    /// A page restored from existing state.
    ///
    /// Language codes the state's model does not offer on their side are
    /// dropped, and the rest are normalised to the table's spelling.
    pub fn with_state(client: TranslationClient, locale: UiLocale, mut state: SessionState) -> Self {
        let model = state.selected_model;
        for side in [Side::Source, Side::Target] {
            let slot = state.language_mut(side);
            *slot = slot.take().and_then(|code| match model.language(side, &code) {
                Ok(language) => Some(language.code.to_string()),
                Err(e) => {
                    debug!("Dropping restored {} language: {}", side.as_str(), e);
                    None
                }
            });
        }

        Self {
            state,
            client,
            locale,
            notices: Vec::new(),
            metrics: SessionMetrics::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn locale(&self) -> UiLocale {
        self.locale
    }

    pub fn strings(&self) -> &'static UiStrings {
        self.locale.strings()
    }

    pub fn client(&self) -> &TranslationClient {
        &self.client
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Notices queued since the last call, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    fn notify(&mut self, notice: Notice) {
        debug!("Notice: {:?}", notice);
        self.notices.push(notice);
    }

    // ==================== Selection ====================

    /// Switch model by code. Both language selections are cleared because the
    /// offered languages change with the model.
    pub fn select_model(&mut self, code: &str) -> Result<Model, CatalogError> {
        let model = Model::from_code(code)?;
        self.set_model(model);
        Ok(model)
    }

    pub fn set_model(&mut self, model: Model) {
        info!("Selected model {}", model);
        self.state.selected_model = model;
        self.state.source_language = None;
        self.state.target_language = None;
    }

    pub fn select_source_language(&mut self, code: &str) -> Result<(), CatalogError> {
        self.select_language(Side::Source, code)
    }

    pub fn select_target_language(&mut self, code: &str) -> Result<(), CatalogError> {
        self.select_language(Side::Target, code)
    }

    fn select_language(&mut self, side: Side, code: &str) -> Result<(), CatalogError> {
        let language = self.state.selected_model.language(side, code)?;
        debug!("Selected {} language {}", side.as_str(), language.code);
        *self.state.language_mut(side) = Some(language.code.to_string());
        Ok(())
    }

    /// Languages the picker for `side` offers, ordered for the UI locale.
    pub fn available_languages(&self, side: Side) -> Vec<LanguageOption> {
        self.state
            .selected_model
            .available_languages(side, self.locale.collation())
    }

    /// Display label of the current selection on one side.
    pub fn selected_label(&self, side: Side) -> Option<&'static str> {
        let code = self.state.language(side)?;
        self.state
            .selected_model
            .language(side, code)
            .ok()
            .map(|lang| lang.label)
    }

    /// Exchange source and target, moving the translation into the input box.
    ///
    /// On a model whose sides offer different languages, a code that the other
    /// side does not offer is cleared rather than carried over.
    pub fn swap_languages(&mut self) {
        let model = self.state.selected_model;
        let new_source = self.state.target_language.take();
        let new_target = self.state.source_language.take();

        let keep_if_offered = |side: Side, code: Option<String>| {
            code.filter(|c| model.language(side, c).is_ok())
        };
        self.state.source_language = keep_if_offered(Side::Source, new_source);
        self.state.target_language = keep_if_offered(Side::Target, new_target);

        self.state.input_text = std::mem::take(&mut self.state.translated_text);
        self.state.keyboard_visible = false;
    }

    // ==================== Text ====================

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.state.input_text = text.into();
    }

    /// Validate and send the current input to the backend.
    ///
    /// On success the translation replaces `translated_text` and is returned.
    /// On failure `translated_text` is left as it was and a notice is queued.
    pub async fn submit_translation(&mut self) -> Result<String, SubmitError> {
        if let Err(e) = self.state.validate() {
            self.metrics.record_validation_rejection();
            self.notify(e.notice());
            return Err(e.into());
        }

        let request = TranslationRequest {
            text: self.state.input_text.clone(),
            src_lang: self.state.source_language.clone().unwrap_or_default(),
            tgt_lang: self.state.target_language.clone().unwrap_or_default(),
        };
        let model = self.state.selected_model;

        self.metrics.record_request_sent();
        match self.client.translate(model, &request).await {
            Ok(translation) => {
                info!(
                    "Translated {} chars with {} ({} -> {})",
                    request.text.chars().count(),
                    model,
                    request.src_lang,
                    request.tgt_lang
                );
                self.state.translated_text = translation.clone();
                Ok(translation)
            }
            Err(e) => {
                error!("Error translating text with {}: {}", model, e);
                self.metrics.record_backend_failure();
                self.notify(Notice::TranslationFailed);
                Err(e.into())
            }
        }
    }

    /// Copy the translation to the clipboard.
    pub fn copy_result(&mut self, clipboard: &mut dyn Clipboard) -> Result<(), CopyError> {
        if self.state.translated_text.is_empty() {
            self.notify(Notice::NothingToCopy);
            return Err(CopyError::NothingToCopy);
        }

        match clipboard.write_text(&self.state.translated_text) {
            Ok(()) => {
                self.metrics.record_copy();
                self.notify(Notice::Copied);
                Ok(())
            }
            Err(e) => {
                let notice = match e {
                    ClipboardError::Unsupported(_) => Notice::CopyUnsupported,
                    ClipboardError::Failed(_) => Notice::CopyFailed,
                };
                self.notify(notice);
                Err(e.into())
            }
        }
    }

    // ==================== Virtual Keyboard ====================

    /// Show or hide the on-screen keyboard; returns the new visibility.
    pub fn toggle_keyboard(&mut self) -> bool {
        self.state.keyboard_visible = !self.state.keyboard_visible;
        self.state.keyboard_visible
    }

    /// The keyboard reports its whole buffer, which replaces the input.
    pub fn on_keyboard_input(&mut self, input: &str) {
        self.state.input_text = input.to_string();
    }

    pub fn on_key_press(&mut self, button: &str) {
        match KeyAction::from_button(button) {
            KeyAction::Space => self.state.input_text.push(' '),
            KeyAction::NextLayout => {
                self.state.keyboard_layout = self.state.keyboard_layout.next();
                debug!("Keyboard layout: {}", self.state.keyboard_layout);
            }
            KeyAction::Backspace => delete_last_grapheme(&mut self.state.input_text),
            KeyAction::Insert(text) => self.state.input_text.push_str(text),
        }
    }

    // ==================== Page Path ====================

    /// Path mirroring the current language pair.
    pub fn page_path(&self) -> String {
        route::page_path(
            self.state.source_language.as_deref(),
            self.state.target_language.as_deref(),
        )
    }

    /// Pre-populate the language pair from a page path. Codes the current
    /// model does not offer are ignored.
    pub fn apply_page_path(&mut self, path: &str) {
        let selection = route::parse_page_path(path);

        if let Some(code) = selection.source_language {
            if let Err(e) = self.select_source_language(&code) {
                debug!("Ignoring source language from path {}: {}", path, e);
            }
        }
        if let Some(code) = selection.target_language {
            if let Err(e) = self.select_target_language(&code) {
                debug!("Ignoring target language from path {}: {}", path, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardChain;
    use proptest::prelude::*;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== Helper Functions ====================

    /// Session whose client points at nothing; for tests that never send.
    fn offline_session() -> TranslationSession {
        TranslationSession::new(TranslationClient::new("http://127.0.0.1:9"), UiLocale::Turkish)
    }

    fn ready_state(model: Model, src: &str, tgt: &str, text: &str) -> SessionState {
        SessionState {
            selected_model: model,
            source_language: Some(src.to_string()),
            target_language: Some(tgt.to_string()),
            input_text: text.to_string(),
            ..SessionState::default()
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        written: Vec<String>,
        fail_with: Option<ClipboardError>,
    }

    impl Clipboard for RecordingClipboard {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.written.push(text.to_string());
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    // ==================== Default State Tests ====================

    #[test]
    fn test_new_session_defaults() {
        let session = offline_session();
        let state = session.state();

        assert_eq!(state.selected_model, Model::NLLB);
        assert_eq!(state.source_language, None);
        assert_eq!(state.target_language, None);
        assert!(state.input_text.is_empty());
        assert!(state.translated_text.is_empty());
        assert!(!state.keyboard_visible);
        assert_eq!(state.keyboard_layout, KeyboardLayout::Default);
        assert!(session.notices().is_empty());
    }

    // ==================== Model Selection Tests ====================

    #[test]
    fn test_select_model_resets_languages() {
        let mut session = offline_session();
        session.select_source_language("tur_Latn").unwrap();
        session.select_target_language("eng_Latn").unwrap();

        let model = session.select_model("m2m100").unwrap();

        assert_eq!(model, Model::M2M100);
        assert_eq!(session.state().selected_model, Model::M2M100);
        assert_eq!(session.state().source_language, None);
        assert_eq!(session.state().target_language, None);
    }

    #[test]
    fn test_available_languages_equal_model_table_after_switch() {
        let mut session = offline_session();

        for code in ["nllb", "m2m100", "mbart50", "helsinkinlp"] {
            session.select_model(code).unwrap();
            let config = session.state().selected_model.config();

            for side in [Side::Source, Side::Target] {
                let mut offered = session.available_languages(side);
                let mut table = config.languages(side).to_vec();
                offered.sort_by_key(|lang| lang.code);
                table.sort_by_key(|lang| lang.code);
                assert_eq!(offered, table, "{} {}", code, side.as_str());
            }
        }
    }

    #[test]
    fn test_available_languages_sorted_by_label() {
        let session = offline_session();
        let languages = session.available_languages(Side::Source);
        let collation = session.locale().collation();

        for pair in languages.windows(2) {
            assert!(collation.compare(pair[0].label, pair[1].label).is_le());
        }
    }

    #[test]
    fn test_select_unknown_model_keeps_state() {
        let mut session = offline_session();
        session.select_source_language("tur_Latn").unwrap();

        let result = session.select_model("opus_mt");

        assert!(matches!(result, Err(CatalogError::UnknownModel(_))));
        assert_eq!(session.state().selected_model, Model::NLLB);
        assert_eq!(session.state().source_language.as_deref(), Some("tur_Latn"));
    }

    // ==================== Language Selection Tests ====================

    #[test]
    fn test_select_language_stores_table_code() {
        let mut session = offline_session();
        session.select_source_language("TUR_LATN").unwrap();
        assert_eq!(session.state().source_language.as_deref(), Some("tur_Latn"));
        assert_eq!(session.selected_label(Side::Source), Some("Türkçe"));
    }

    #[test]
    fn test_select_language_not_offered_is_rejected() {
        let mut session = offline_session();
        let result = session.select_target_language("en");

        assert!(matches!(result, Err(CatalogError::UnknownLanguage { .. })));
        assert_eq!(session.state().target_language, None);
    }

    #[test]
    fn test_opus_mt_target_is_english_only() {
        let mut session = offline_session();
        session.select_model("helsinkinlp").unwrap();

        assert!(session.select_source_language("tr").is_ok());
        assert!(session.select_target_language("en").is_ok());
        assert!(session.select_target_language("tr").is_err());
        assert_eq!(session.available_languages(Side::Target).len(), 1);
    }

    // ==================== Swap Tests ====================

    #[test]
    fn test_swap_moves_translation_into_input() {
        let mut state = ready_state(Model::NLLB, "tur_Latn", "eng_Latn", "Merhaba");
        state.translated_text = "Hello".to_string();
        state.keyboard_visible = true;
        let mut session =
            TranslationSession::with_state(TranslationClient::new("http://127.0.0.1:9"), UiLocale::Turkish, state);

        session.swap_languages();

        let state = session.state();
        assert_eq!(state.source_language.as_deref(), Some("eng_Latn"));
        assert_eq!(state.target_language.as_deref(), Some("tur_Latn"));
        assert_eq!(state.input_text, "Hello");
        assert!(state.translated_text.is_empty());
        assert!(!state.keyboard_visible);
    }

    #[test]
    fn test_swap_with_one_side_empty() {
        let mut session = offline_session();
        session.select_source_language("tur_Latn").unwrap();

        session.swap_languages();

        assert_eq!(session.state().source_language, None);
        assert_eq!(session.state().target_language.as_deref(), Some("tur_Latn"));
    }

    #[test]
    fn test_swap_on_opus_mt_clears_codes_the_other_side_lacks() {
        let mut session = offline_session();
        session.select_model("helsinkinlp").unwrap();
        session.select_source_language("tr").unwrap();
        session.select_target_language("en").unwrap();

        session.swap_languages();

        assert_eq!(session.state().source_language, None);
        assert_eq!(session.state().target_language, None);
    }

    proptest! {
        #[test]
        fn prop_swap_twice_restores_languages(
            src in proptest::option::of(0usize..202),
            tgt in proptest::option::of(0usize..202),
            input in ".{0,20}",
        ) {
            let table = Model::NLLB.config().languages(Side::Source);
            let mut session = offline_session();
            if let Some(i) = src {
                session.select_source_language(table[i].code).unwrap();
            }
            if let Some(i) = tgt {
                session.select_target_language(table[i].code).unwrap();
            }
            session.set_input_text(input);
            let before = session.state().clone();

            session.swap_languages();
            session.swap_languages();

            prop_assert_eq!(&session.state().source_language, &before.source_language);
            prop_assert_eq!(&session.state().target_language, &before.target_language);
        }
    }

    // ==================== Validation Tests ====================

    #[tokio::test]
    async fn test_submit_validation_order_sends_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let cases = [
            (SessionState::default(), ValidationError::MissingSourceLanguage),
            (
                SessionState {
                    input_text: "Merhaba".to_string(),
                    target_language: Some("eng_Latn".to_string()),
                    ..SessionState::default()
                },
                ValidationError::MissingSourceLanguage,
            ),
            (
                SessionState {
                    source_language: Some("tur_Latn".to_string()),
                    ..SessionState::default()
                },
                ValidationError::MissingTargetLanguage,
            ),
            (
                ready_state(Model::NLLB, "tur_Latn", "eng_Latn", ""),
                ValidationError::MissingInputText,
            ),
        ];

        for (state, expected) in cases {
            let mut session = TranslationSession::with_state(
                TranslationClient::new(mock_server.uri()),
                UiLocale::Turkish,
                state,
            );

            let result = session.submit_translation().await;

            assert!(matches!(result, Err(SubmitError::Validation(e)) if e == expected));
            assert_eq!(session.take_notices(), vec![expected.notice()]);
            assert!(session.state().translated_text.is_empty());
            assert_eq!(session.metrics().validation_rejections(), 1);
            assert_eq!(session.metrics().requests_sent(), 0);
        }
    }

    #[test]
    fn test_validation_notices_have_distinct_messages() {
        let strings = UiLocale::Turkish.strings();
        let messages: Vec<_> = [
            ValidationError::MissingSourceLanguage,
            ValidationError::MissingTargetLanguage,
            ValidationError::MissingInputText,
        ]
        .iter()
        .map(|e| e.notice().message(strings))
        .collect();

        assert_eq!(messages[0], "Lütfen çevrilmek istenen dilinizi seçin.");
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
    }

    // ==================== Submit Tests ====================

    #[tokio::test]
    async fn test_submit_success_sets_translation() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate/nllb"))
            .and(body_json(serde_json::json!({
                "text": "Merhaba",
                "src_lang": "tur_Latn",
                "tgt_lang": "eng_Latn"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "translation": "Hello" })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut session = TranslationSession::new(
            TranslationClient::new(mock_server.uri()),
            UiLocale::Turkish,
        );
        session.select_source_language("tur_Latn").unwrap();
        session.select_target_language("eng_Latn").unwrap();
        session.set_input_text("Merhaba");

        let result = session.submit_translation().await.expect("Should succeed");

        assert_eq!(result, "Hello");
        assert_eq!(session.state().translated_text, "Hello");
        assert!(session.take_notices().is_empty());
        assert_eq!(session.metrics().requests_sent(), 1);
    }

    #[tokio::test]
    async fn test_submit_uses_selected_model_route() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate/mbart50"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "translation": "Bonjour" })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut session = TranslationSession::with_state(
            TranslationClient::new(mock_server.uri()),
            UiLocale::English,
            ready_state(Model::MBART50, "tr_TR", "fr_XX", "Merhaba"),
        );

        session.submit_translation().await.expect("Should succeed");
        assert_eq!(session.state().translated_text, "Bonjour");
    }

    #[tokio::test]
    async fn test_submit_backend_error_keeps_previous_translation() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate/nllb"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut state = ready_state(Model::NLLB, "tur_Latn", "eng_Latn", "Günaydın");
        state.translated_text = "Hello".to_string();
        let mut session = TranslationSession::with_state(
            TranslationClient::new(mock_server.uri()),
            UiLocale::Turkish,
            state,
        );

        let result = session.submit_translation().await;

        assert!(matches!(result, Err(SubmitError::Backend(_))));
        assert_eq!(session.state().translated_text, "Hello");
        assert_eq!(session.take_notices(), vec![Notice::TranslationFailed]);
        assert_eq!(session.metrics().backend_failures(), 1);
    }

    #[tokio::test]
    async fn test_submit_network_error_is_one_generic_notice() {
        let mut session = TranslationSession::with_state(
            TranslationClient::new("http://127.0.0.1:9"),
            UiLocale::Turkish,
            ready_state(Model::NLLB, "tur_Latn", "eng_Latn", "Merhaba"),
        );

        let result = session.submit_translation().await;

        assert!(matches!(result, Err(SubmitError::Backend(ClientError::Network(_)))));
        assert_eq!(session.take_notices(), vec![Notice::TranslationFailed]);
        assert!(session.state().translated_text.is_empty());
    }

    // ==================== Copy Tests ====================

    #[test]
    fn test_copy_with_empty_translation_never_touches_clipboard() {
        let mut session = offline_session();
        let mut clipboard = RecordingClipboard::default();

        let result = session.copy_result(&mut clipboard);

        assert_eq!(result, Err(CopyError::NothingToCopy));
        assert!(clipboard.written.is_empty());
        assert_eq!(session.take_notices(), vec![Notice::NothingToCopy]);
    }

    #[test]
    fn test_copy_success() {
        let mut state = SessionState::default();
        state.translated_text = "Hello".to_string();
        let mut session =
            TranslationSession::with_state(TranslationClient::new("http://127.0.0.1:9"), UiLocale::Turkish, state);
        let mut clipboard = RecordingClipboard::default();

        session.copy_result(&mut clipboard).expect("Should succeed");

        assert_eq!(clipboard.written, vec!["Hello".to_string()]);
        assert_eq!(session.take_notices(), vec![Notice::Copied]);
        assert_eq!(Notice::Copied.level(), NoticeLevel::Success);
        assert_eq!(session.metrics().copies(), 1);
    }

    #[test]
    fn test_copy_failures_map_to_distinct_notices() {
        let cases = [
            (ClipboardError::Failed("denied".to_string()), Notice::CopyFailed),
            (ClipboardError::Unsupported("no tty".to_string()), Notice::CopyUnsupported),
        ];

        for (error, expected) in cases {
            let mut state = SessionState::default();
            state.translated_text = "Hello".to_string();
            let mut session = TranslationSession::with_state(
                TranslationClient::new("http://127.0.0.1:9"),
                UiLocale::Turkish,
                state,
            );
            let mut clipboard = RecordingClipboard {
                fail_with: Some(error.clone()),
                ..RecordingClipboard::default()
            };

            let result = session.copy_result(&mut clipboard);

            assert_eq!(result, Err(CopyError::Clipboard(error)));
            assert_eq!(session.take_notices(), vec![expected]);
            assert_eq!(expected.level(), NoticeLevel::Error);
        }
    }

    #[test]
    fn test_copy_refused_by_system_clipboard_is_failure_not_unsupported() {
        let mut state = SessionState::default();
        state.translated_text = "Hello".to_string();
        let mut session = TranslationSession::with_state(
            TranslationClient::new("http://127.0.0.1:9"),
            UiLocale::Turkish,
            state,
        );
        let clipboards: Vec<Box<dyn Clipboard + Send>> = vec![
            Box::new(RecordingClipboard {
                fail_with: Some(ClipboardError::Failed("denied".to_string())),
                ..RecordingClipboard::default()
            }),
            Box::new(RecordingClipboard {
                fail_with: Some(ClipboardError::Unsupported("no tty".to_string())),
                ..RecordingClipboard::default()
            }),
        ];
        let mut chain = ClipboardChain::new(clipboards);

        let result = session.copy_result(&mut chain);

        assert!(matches!(result, Err(CopyError::Clipboard(ClipboardError::Failed(_)))));
        assert_eq!(session.take_notices(), vec![Notice::CopyFailed]);
        assert_eq!(
            Notice::CopyFailed.message(session.strings()),
            "Kopyalama başarısız!"
        );
    }

    // ==================== Restored State Tests ====================

    #[test]
    fn test_with_state_drops_codes_the_model_does_not_offer() {
        let state = SessionState {
            selected_model: Model::NLLB,
            source_language: Some("en".to_string()),
            target_language: Some("TUR_LATN".to_string()),
            ..SessionState::default()
        };

        let session = TranslationSession::with_state(
            TranslationClient::new("http://127.0.0.1:9"),
            UiLocale::Turkish,
            state,
        );

        assert_eq!(session.state().source_language, None);
        assert_eq!(session.state().target_language.as_deref(), Some("tur_Latn"));
    }

    #[test]
    fn test_with_state_respects_opus_mt_sides() {
        let session = TranslationSession::with_state(
            TranslationClient::new("http://127.0.0.1:9"),
            UiLocale::Turkish,
            ready_state(Model::HELSINKI_NLP, "en", "en", "Hello"),
        );

        assert_eq!(session.state().source_language, None);
        assert_eq!(session.state().target_language.as_deref(), Some("en"));
        assert_eq!(session.state().input_text, "Hello");
    }

    // ==================== Keyboard Tests ====================

    #[test]
    fn test_toggle_keyboard() {
        let mut session = offline_session();
        assert!(session.toggle_keyboard());
        assert!(session.state().keyboard_visible);
        assert!(!session.toggle_keyboard());
    }

    #[test]
    fn test_keyboard_input_replaces_text() {
        let mut session = offline_session();
        session.set_input_text("eski");
        session.on_keyboard_input("yeni");
        assert_eq!(session.state().input_text, "yeni");
    }

    #[test]
    fn test_key_presses_edit_text() {
        let mut session = offline_session();
        for button in ["m", "e", "r", "h", "a", "b", "a", "{space}", "ş", "{bksp}"] {
            session.on_key_press(button);
        }
        assert_eq!(session.state().input_text, "merhaba ");
    }

    #[test]
    fn test_language_key_cycles_layout() {
        let mut session = offline_session();
        session.on_key_press("{language}");
        assert_eq!(session.state().keyboard_layout, KeyboardLayout::Arabic);
        for _ in 0..5 {
            session.on_key_press("{language}");
        }
        assert_eq!(session.state().keyboard_layout, KeyboardLayout::Default);
        assert!(session.state().input_text.is_empty());
    }

    // ==================== Page Path Tests ====================

    #[test]
    fn test_page_path_mirrors_selection() {
        let mut session = offline_session();
        assert_eq!(session.page_path(), "/translate");

        session.select_source_language("tur_Latn").unwrap();
        assert_eq!(session.page_path(), "/translate");

        session.select_target_language("eng_Latn").unwrap();
        assert_eq!(session.page_path(), "/translate/tur_Latn/eng_Latn");

        session.select_model("m2m100").unwrap();
        assert_eq!(session.page_path(), "/translate");
    }

    #[test]
    fn test_apply_page_path_prepopulates() {
        let mut session = offline_session();
        session.apply_page_path("/translate/tur_Latn/eng_Latn");

        assert_eq!(session.state().source_language.as_deref(), Some("tur_Latn"));
        assert_eq!(session.state().target_language.as_deref(), Some("eng_Latn"));
    }

    #[test]
    fn test_apply_page_path_ignores_unknown_codes() {
        let mut session = offline_session();
        session.apply_page_path("/translate/tr/eng_Latn");

        assert_eq!(session.state().source_language, None);
        assert_eq!(session.state().target_language.as_deref(), Some("eng_Latn"));
    }
}
