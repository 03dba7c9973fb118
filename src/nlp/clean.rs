//! Text normalization used as the lexicon-miss fallback
//!
//! Lowercases, tags emoji, folds diacritics to ASCII, replaces URLs and
//! anonymized mentions/hashtags with placeholder words, and strips
//! punctuation, brackets and operators.

use regex::Regex;
use std::sync::LazyLock;

static EMOJI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{1F000}-\x{E007F}]").unwrap());
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\d{0,3}\.)\S+|\b[a-z0-9.\-]+\.[a-z]{2,4}/\S*").unwrap()
});
static SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"[_~#$,;:!"'`{}\[\]()<>?|/\-+*=^%&]"##).unwrap());
static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?\s+").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize `text`; `None` when nothing but whitespace remains.
pub fn clean_text(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    let tagged = EMOJI.replace_all(&lower, "emoji");
    let folded = fold_diacritics(&tagged);
    let out = URL.replace_all(&folded, "url");
    let out = out.replace("#user#", "user").replace("#hashtag#", "hashtag");
    let out = SPECIAL.replace_all(&out, "");
    let out = NUMBER.replace_all(&out, "");
    let out = WHITESPACE.replace_all(&out, " ");
    let out = out.trim();

    if out.is_empty() {
        None
    } else {
        Some(out.to_string())
    }
}

/// Map accented Latin letters (Latin-1 and Latin Extended-A) to their
/// base letter and drop any other non-ASCII character. Letters with no
/// decomposition, such as `ł`, `ø` or `ß`, are dropped.
pub fn fold_diacritics(text: &str) -> String {
    text.chars()
        .filter_map(|c| {
            if c.is_ascii() {
                return Some(c);
            }
            c.to_lowercase().next().and_then(fold_letter)
        })
        .collect()
}

fn fold_letter(c: char) -> Option<char> {
    let base = match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' => 'd',
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' => 'h',
        'í' | 'ì' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' => 't',
        'ú' | 'ù' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return None,
    };
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_full() {
        let cleaned =
            clean_text("¡Excelente SERVICIO!! visita https://x.com/a #user# 123 veces").unwrap();
        assert_eq!(cleaned, "excelente servicio visita url user veces");
    }

    #[test]
    fn test_clean_text_hyphen_and_accents() {
        assert_eq!(clean_text("Excelente-Atención!!").unwrap(), "excelenteatencion");
        assert_eq!(clean_text("Niño pequeño").unwrap(), "nino pequeno");
    }

    #[test]
    fn test_fold_extended_latin() {
        assert_eq!(fold_diacritics("Śląsk Győr Čeština"), "slask Gyor cestina");
        assert_eq!(fold_diacritics("Ñandú ÅSE"), "nandu aSE");
        assert_eq!(fold_diacritics("łódź straße"), "odz strae");
    }

    #[test]
    fn test_clean_text_emoji() {
        assert_eq!(clean_text("me encanta 😀").unwrap(), "me encanta emoji");
    }

    #[test]
    fn test_clean_text_hashtag_placeholder() {
        assert_eq!(clean_text("#hashtag# genial").unwrap(), "hashtag genial");
    }

    #[test]
    fn test_clean_text_empty() {
        assert_eq!(clean_text(""), None);
        assert_eq!(clean_text("  ¡¿!? "), None);
    }

    #[test]
    fn test_clean_text_idempotent() {
        let once = clean_text("Muy, muy BUENO (de verdad)").unwrap();
        assert_eq!(once, "muy muy bueno de verdad");
        assert_eq!(clean_text(&once).unwrap(), once);
    }
}
