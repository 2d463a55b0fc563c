/// All localized user-facing strings for one UI locale
#[derive(Debug, Clone)]
pub struct UiStrings {
    // ==================== Picker Labels ====================
    /// Label of the model picker
    pub model_label: &'static str,

    /// Label of the "translate from" picker
    pub source_label: &'static str,

    /// Label of the "translate to" picker
    pub target_label: &'static str,

    /// Label of the input text box
    pub input_label: &'static str,

    /// Shown in place of a language when nothing is selected
    pub not_selected: &'static str,

    // ==================== Validation Notices ====================
    /// No source language selected
    pub missing_source_language: &'static str,

    /// No target language selected
    pub missing_target_language: &'static str,

    /// Input text box is empty
    pub missing_input_text: &'static str,

    // ==================== Backend Notices ====================
    /// Generic failure for any network or backend error
    pub translation_failed: &'static str,

    // ==================== Clipboard Notices ====================
    /// Copy requested while there is no translation
    pub nothing_to_copy: &'static str,

    /// Translation copied
    pub copied: &'static str,

    /// Clipboard refused the write
    pub copy_failed: &'static str,

    /// No clipboard mechanism available at all
    pub copy_unsupported: &'static str,

    // ==================== Terminal Messages ====================
    /// Command summary printed by `:help`
    pub help: &'static str,

    /// Unknown `:command`
    /// Placeholders: {command}
    pub unknown_command: &'static str,

    /// Rejected `:model`, `:from` or `:to` argument
    /// Placeholders: {error}
    pub invalid_selection: &'static str,
}

// ==================== Turkish Strings ====================

/// Turkish strings (default UI locale)
pub const TURKISH_STRINGS: UiStrings = UiStrings {
    // Picker labels
    model_label: "Tercüme Modeli",
    source_label: "Dilinden Çevir",
    target_label: "Diline Çevir",
    input_label: "Metin girin",
    not_selected: "(seçilmedi)",

    // Validation
    missing_source_language: "Lütfen çevrilmek istenen dilinizi seçin.",
    missing_target_language: "Lütfen çevrilecek dilinizi seçin.",
    missing_input_text: "Lütfen çevrilecek metni girin.",

    // Backend
    translation_failed: "Çeviri sırasında bir hata oluştu. Ayrıntılar için kayıtlara bakın.",

    // Clipboard
    nothing_to_copy: "Kopyalanacak içerik bulunamadı!",
    copied: "Kopyalandı!",
    copy_failed: "Kopyalama başarısız!",
    copy_unsupported: "Bu terminalde kopyalama yapılamamaktadır!",

    // Terminal
    help: "Komutlar:\n\
:models              - Modelleri listele\n\
:model <kod>         - Model seç\n\
:langs [source|target] - Dilleri listele\n\
:from <kod>          - Kaynak dili seç\n\
:to <kod>            - Hedef dili seç\n\
:swap                - Dilleri değiştir\n\
:text <metin>        - Metni ayarla\n\
:translate           - Çevir\n\
:copy                - Çeviriyi kopyala\n\
:kbd                 - Sanal klavyeyi aç/kapat\n\
:key <tuş>           - Sanal klavye tuşuna bas\n\
:state               - Durumu göster\n\
:health              - Sunucu durumunu göster\n\
:stats               - İstatistikleri göster\n\
:quit                - Çık\n\
Komut olmayan bir satır metni ayarlar ve çevirir.",
    unknown_command: "Bilinmeyen komut: {command}. Komutlar için :help yazın.",
    invalid_selection: "Geçersiz seçim: {error}",
};

// ==================== English Strings ====================

/// English strings
pub const ENGLISH_STRINGS: UiStrings = UiStrings {
    // Picker labels
    model_label: "Translation Model",
    source_label: "Translate From",
    target_label: "Translate To",
    input_label: "Enter text",
    not_selected: "(not selected)",

    // Validation
    missing_source_language: "Please select the language to translate from.",
    missing_target_language: "Please select the language to translate to.",
    missing_input_text: "Please enter the text to translate.",

    // Backend
    translation_failed: "An error occurred while translating. Check the logs for details.",

    // Clipboard
    nothing_to_copy: "Nothing to copy!",
    copied: "Copied!",
    copy_failed: "Copy failed!",
    copy_unsupported: "Copying is not supported in this terminal!",

    // Terminal
    help: "Commands:\n\
:models              - List models\n\
:model <code>        - Select a model\n\
:langs [source|target] - List languages\n\
:from <code>         - Select the source language\n\
:to <code>           - Select the target language\n\
:swap                - Switch languages\n\
:text <text>         - Set the input text\n\
:translate           - Translate\n\
:copy                - Copy the translation\n\
:kbd                 - Toggle the virtual keyboard\n\
:key <button>        - Press a virtual keyboard button\n\
:state               - Show the current state\n\
:health              - Show backend health\n\
:stats               - Show statistics\n\
:quit                - Quit\n\
A line that is not a command sets the input text and translates it.",
    unknown_command: "Unknown command: {command}. Type :help for the command list.",
    invalid_selection: "Invalid selection: {error}",
};
