//! Locale-aware ordering for language labels.
//!
//! The pickers list languages alphabetically by their display label, and the
//! labels are Turkish (`Çekçe`, `İngilizce`, `Hırvatça`), so plain code point
//! order puts every dotted or cedilla letter after `Z`. A collation here builds
//! a three-level sort key: folded base letters, then the lowercased text
//! (accents), then the original text (case).

use std::cmp::Ordering;

/// Turkish alphabet, with the letters Turkish borrows (q, w, x) in their
/// customary positions.
const TURKISH_ALPHABET: &str = "abcçdefgğhıijklmnoöpqrsştuüvwxyz";

const ROOT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

const LETTER_BASE: u32 = 0x1000;
const DIGIT_BASE: u32 = 0x0800;
const OTHER_SCRIPT_BASE: u32 = 0x10000;

/// Ordering rules for display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collation {
    /// Turkish alphabet order: `ç`, `ğ`, `ı`, `ö`, `ş`, `ü` are letters of
    /// their own and `I`/`İ` lowercase to `ı`/`i`.
    #[default]
    Turkish,
    /// Language-neutral order: Latin diacritics are folded onto their base
    /// letter and only break ties.
    Root,
}

impl Collation {
    /// Pick the collation for a BCP 47 style locale tag (`tr`, `tr-TR`, `en_US`).
    pub fn for_locale(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        if language == "tr" {
            Collation::Turkish
        } else {
            Collation::Root
        }
    }

    /// Compare two labels under this collation.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.primary_key(a)
            .cmp(&self.primary_key(b))
            .then_with(|| self.lowercase(a).cmp(&self.lowercase(b)))
            .then_with(|| a.cmp(b))
    }

    fn lowercase(&self, text: &str) -> Vec<char> {
        let mut out = Vec::with_capacity(text.len());
        for c in text.chars() {
            match (self, c) {
                (Collation::Turkish, 'I') => out.push('ı'),
                (Collation::Turkish, 'İ') => out.push('i'),
                _ => out.extend(c.to_lowercase().filter(|l| !is_combining_mark(*l))),
            }
        }
        out
    }

    fn primary_key(&self, text: &str) -> Vec<u32> {
        self.lowercase(text)
            .into_iter()
            .map(|c| self.weight(c))
            .collect()
    }

    fn weight(&self, c: char) -> u32 {
        let alphabet = match self {
            Collation::Turkish => TURKISH_ALPHABET,
            Collation::Root => ROOT_ALPHABET,
        };

        let letter = if alphabet.contains(c) {
            c
        } else {
            fold_latin(c)
        };

        if let Some(position) = alphabet.chars().position(|a| a == letter) {
            return LETTER_BASE + position as u32 * 0x10;
        }
        if let Some(digit) = c.to_digit(10) {
            return DIGIT_BASE + digit;
        }
        if c.is_alphabetic() {
            return OTHER_SCRIPT_BASE + c as u32;
        }
        // Whitespace and punctuation sort before every letter.
        c as u32
    }
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Strip the diacritic from a lowercase Latin letter.
fn fold_latin(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' | 'ĉ' => 'c',
        'ď' | 'đ' => 'd',
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ğ' | 'ĝ' => 'g',
        'í' | 'ì' | 'î' | 'ï' | 'ī' | 'ı' | 'į' => 'i',
        'ł' | 'ľ' | 'ĺ' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' | 'ŕ' => 'r',
        'ş' | 'ś' | 'š' | 'ș' => 's',
        'ţ' | 'ť' | 'ț' => 't',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}
