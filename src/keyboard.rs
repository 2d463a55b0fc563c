//! On-screen keyboard: an alternate way to type into the input box.
//!
//! Buttons are either characters or one of the control buttons `{space}`,
//! `{language}` and `{bksp}`. `{language}` cycles through the layouts in a
//! fixed order and wraps back to the default one.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use unicode_segmentation::UnicodeSegmentation;

/// Control button that appends a space.
pub const SPACE: &str = "{space}";
/// Control button that switches to the next layout.
pub const LANGUAGE: &str = "{language}";
/// Control button that deletes the last character.
pub const BACKSPACE: &str = "{bksp}";

/// Character layouts, in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyboardLayout {
    /// Turkish-flavoured Latin QWERTY
    #[default]
    Default,
    Arabic,
    Japanese,
    Korean,
    Chinese,
    Russian,
}

impl KeyboardLayout {
    pub const ALL: [KeyboardLayout; 6] = [
        KeyboardLayout::Default,
        KeyboardLayout::Arabic,
        KeyboardLayout::Japanese,
        KeyboardLayout::Korean,
        KeyboardLayout::Chinese,
        KeyboardLayout::Russian,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            KeyboardLayout::Default => "default",
            KeyboardLayout::Arabic => "arabic",
            KeyboardLayout::Japanese => "japanese",
            KeyboardLayout::Korean => "korean",
            KeyboardLayout::Chinese => "chinese",
            KeyboardLayout::Russian => "russian",
        }
    }

    /// The layout after this one, wrapping around.
    pub fn next(&self) -> KeyboardLayout {
        let index = Self::ALL
            .iter()
            .position(|layout| layout == self)
            .unwrap_or_default();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Button rows, each a space-separated list of buttons.
    pub fn rows(&self) -> &'static [&'static str] {
        match self {
            KeyboardLayout::Default => &[
                "q w e r t y u ı o p ğ ü",
                "a s d f g h j k l ş i ä",
                "z x c v b n m ö ç ß {bksp}",
                "{space} {language}",
            ],
            KeyboardLayout::Arabic => &[
                "ض ص ث ق ف غ ع ه خ ح ج د",
                "ش س ي ب ل ا ت ن م ك ط",
                "ئ ء ؤ ر ى ة و ز ظ {bksp}",
                "{space} {language}",
            ],
            KeyboardLayout::Japanese => &[
                "あ い う え お か き く け",
                "こ さ し す せ そ た ち つ",
                "て と な に ぬ ね の {bksp}",
                "{space} {language}",
            ],
            KeyboardLayout::Korean => &[
                "ㅂ ㅈ ㄷ ㄱ ㅅ ㅛ ㅕ ㅑ ㅐ ㅔ",
                "ㅁ ㄴ ㅇ ㄹ ㅎ ㅗ ㅓ ㅏ ㅣ",
                "ㅋ ㅌ ㅊ ㅍ ㅠ ㅜ ㅡ {bksp}",
                "{space} {language}",
            ],
            KeyboardLayout::Chinese => &[
                "我 是 中 国 人 你 好",
                "天 气 很 好 今 天 快 乐",
                "学 习 汉 字 非 常 有 意 思 {bksp}",
                "{space} {language}",
            ],
            KeyboardLayout::Russian => &[
                "й ц у к е н г ш щ з х ъ",
                "ф ы в а п р о л д ж э",
                "я ч с м и т ь б ю {bksp}",
                "{space} {language}",
            ],
        }
    }

    /// Whether a button appears on this layout.
    pub fn has_button(&self, button: &str) -> bool {
        self.rows()
            .iter()
            .any(|row| row.split(' ').any(|b| b == button))
    }

    /// Rows with control buttons replaced by their display glyphs.
    pub fn display_rows(&self) -> Vec<String> {
        self.rows()
            .iter()
            .map(|row| {
                row.split(' ')
                    .map(display_glyph)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

fn display_glyph(button: &str) -> &str {
    match button {
        BACKSPACE => "⌫",
        SPACE => "␣",
        LANGUAGE => "🌐",
        other => other,
    }
}

impl fmt::Display for KeyboardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyboardLayout {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::ALL.iter().find(|layout| layout.name() == s) {
            Some(layout) => Ok(*layout),
            None => bail!("Unknown keyboard layout: '{}'", s),
        }
    }
}

/// What a button press means for the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction<'a> {
    Space,
    NextLayout,
    Backspace,
    Insert(&'a str),
}

impl<'a> KeyAction<'a> {
    pub fn from_button(button: &'a str) -> KeyAction<'a> {
        match button {
            SPACE => KeyAction::Space,
            LANGUAGE => KeyAction::NextLayout,
            BACKSPACE => KeyAction::Backspace,
            other => KeyAction::Insert(other),
        }
    }
}

/// Remove the last user-perceived character (grapheme cluster).
pub fn delete_last_grapheme(text: &mut String) {
    if let Some((index, _)) = text.grapheme_indices(true).next_back() {
        text.truncate(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Layout Cycling Tests ====================

    #[test]
    fn test_next_cycles_in_order() {
        let mut layout = KeyboardLayout::default();
        let mut seen = vec![layout.name()];
        for _ in 0..5 {
            layout = layout.next();
            seen.push(layout.name());
        }
        assert_eq!(
            seen,
            vec!["default", "arabic", "japanese", "korean", "chinese", "russian"]
        );
    }

    #[test]
    fn test_next_wraps_to_default() {
        assert_eq!(KeyboardLayout::Russian.next(), KeyboardLayout::Default);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for start in KeyboardLayout::ALL {
            let mut layout = start;
            for _ in 0..KeyboardLayout::ALL.len() {
                layout = layout.next();
            }
            assert_eq!(layout, start);
        }
    }

    // ==================== Layout Content Tests ====================

    #[test]
    fn test_every_layout_has_control_buttons() {
        for layout in KeyboardLayout::ALL {
            assert!(layout.has_button(SPACE), "{} lacks space", layout);
            assert!(layout.has_button(LANGUAGE), "{} lacks language", layout);
            assert!(layout.has_button(BACKSPACE), "{} lacks backspace", layout);
        }
    }

    #[test]
    fn test_default_layout_has_turkish_letters() {
        for letter in ["ı", "ğ", "ş", "ö", "ç", "ü"] {
            assert!(KeyboardLayout::Default.has_button(letter));
        }
        assert!(!KeyboardLayout::Default.has_button("й"));
        assert!(KeyboardLayout::Russian.has_button("й"));
    }

    #[test]
    fn test_display_rows_use_glyphs() {
        let rows = KeyboardLayout::Default.display_rows();
        assert_eq!(rows.len(), 4);
        assert!(rows[2].ends_with("⌫"));
        assert_eq!(rows[3], "␣ 🌐");
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("korean".parse::<KeyboardLayout>().unwrap(), KeyboardLayout::Korean);
        assert!("klingon".parse::<KeyboardLayout>().is_err());
    }

    // ==================== Key Action Tests ====================

    #[test]
    fn test_key_action_from_button() {
        assert_eq!(KeyAction::from_button("{space}"), KeyAction::Space);
        assert_eq!(KeyAction::from_button("{language}"), KeyAction::NextLayout);
        assert_eq!(KeyAction::from_button("{bksp}"), KeyAction::Backspace);
        assert_eq!(KeyAction::from_button("ş"), KeyAction::Insert("ş"));
    }

    // ==================== Backspace Tests ====================

    #[test]
    fn test_delete_last_grapheme_removes_whole_cluster() {
        let mut text = String::from("Merhaba 👋🏽");
        delete_last_grapheme(&mut text);
        assert_eq!(text, "Merhaba ");
    }

    #[test]
    fn test_delete_last_grapheme_multibyte_letter() {
        let mut text = String::from("çğ");
        delete_last_grapheme(&mut text);
        assert_eq!(text, "ç");
    }

    #[test]
    fn test_delete_last_grapheme_on_empty_is_noop() {
        let mut text = String::new();
        delete_last_grapheme(&mut text);
        assert!(text.is_empty());
    }
}
