//! Chinese text to pinyin.
//!
//! The conversion itself is delegated to the `pinyin` crate; this crate only
//! fixes the output shape: one inner list of readings per Han character, in
//! input order, with characters that have no reading left out.

mod style;

use pinyin::{ToPinyin, ToPinyinMulti};
use serde::{Deserialize, Serialize};

pub use style::{ParseStyleError, ToneStyle};

/// Readings per character, outer index follows the input.
pub type Readings = Vec<Vec<String>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    pub style: ToneStyle,
    /// Return every known reading instead of only the primary one.
    #[serde(default)]
    pub heteronym: bool,
}

impl ConversionConfig {
    pub fn new(style: ToneStyle) -> Self {
        Self { style, heteronym: false }
    }

    pub fn with_heteronym(mut self, heteronym: bool) -> Self {
        self.heteronym = heteronym;
        self
    }
}

/// Anything that can turn text into readings. Conversion is total: any
/// input, including the empty string, yields a (possibly empty) result.
pub trait Transliterate: Send + Sync {
    fn convert(&self, text: &str, config: &ConversionConfig) -> Readings;
}

/// [`Transliterate`] backed by the `pinyin` crate's bundled dictionary.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinyinEngine;

impl Transliterate for PinyinEngine {
    fn convert(&self, text: &str, config: &ConversionConfig) -> Readings {
        let style = config.style;
        if config.heteronym {
            text.to_pinyin_multi()
                .flatten()
                .map(|multi| {
                    let mut readings: Vec<String> = Vec::new();
                    for reading in multi {
                        let rendered = style.render(reading);
                        // plain/initials styles collapse distinct tones
                        if !readings.iter().any(|r| r == rendered) {
                            readings.push(rendered.to_string());
                        }
                    }
                    readings
                })
                .collect()
        } else {
            text.to_pinyin()
                .flatten()
                .map(|reading| vec![style.render(reading).to_string()])
                .collect()
        }
    }
}

/// First reading of the first character, or `""` when there is none.
pub fn first_reading(readings: &[Vec<String>]) -> String {
    readings
        .first()
        .and_then(|candidates| candidates.first())
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(text: &str, config: ConversionConfig) -> Readings {
        PinyinEngine.convert(text, &config)
    }

    fn owned(rows: &[&[&str]]) -> Readings {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_diacritic_sentence() {
        let out = convert("我来了", ConversionConfig::new(ToneStyle::Tone));
        assert_eq!(out, owned(&[&["wǒ"], &["lái"], &["le"]]));
    }

    #[test]
    fn test_empty_input() {
        assert!(convert("", ConversionConfig::default()).is_empty());
        assert!(convert("", ConversionConfig::default().with_heteronym(true)).is_empty());
    }

    #[test]
    fn test_non_han_is_dropped() {
        let config = ConversionConfig::default();
        assert!(convert("abc 123, !?", config).is_empty());
        assert_eq!(convert("a中b国!", config), owned(&[&["zhōng"], &["guó"]]));
    }

    #[test]
    fn test_styles() {
        let cases = [
            (ToneStyle::Normal, "zhong"),
            (ToneStyle::Tone, "zhōng"),
            (ToneStyle::Tone2, "zho1ng"),
            (ToneStyle::Tone3, "zhong1"),
            (ToneStyle::Initials, "zh"),
            (ToneStyle::FirstLetter, "z"),
        ];
        for (style, expected) in cases {
            let out = convert("中", ConversionConfig::new(style));
            assert_eq!(out, owned(&[&[expected]]), "style {style}");
        }
    }

    #[test]
    fn test_initials_style() {
        let config = ConversionConfig::new(ToneStyle::Initials);
        assert_eq!(convert("中国是我", config), owned(&[&["zh"], &["g"], &["sh"], &[""]]));
    }

    #[test]
    fn test_heteronym_lists_all_readings() {
        let out = convert("中", ConversionConfig::new(ToneStyle::Tone).with_heteronym(true));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0][0], "zhōng");
        assert!(out[0].iter().any(|r| r == "zhòng"));
    }

    #[test]
    fn test_heteronym_primary_matches_single() {
        let text = "银行行长说了好几遍";
        let single = convert(text, ConversionConfig::default());
        let multi = convert(text, ConversionConfig::default().with_heteronym(true));
        assert_eq!(single.len(), multi.len());
        for (one, all) in single.iter().zip(&multi) {
            assert_eq!(one[0], all[0]);
        }
    }

    #[test]
    fn test_heteronym_dedups_rendered_readings() {
        let out = convert("中", ConversionConfig::new(ToneStyle::Normal).with_heteronym(true));
        assert_eq!(out, owned(&[&["zhong"]]));
    }

    #[test]
    fn test_deterministic() {
        let config = ConversionConfig::default().with_heteronym(true);
        assert_eq!(convert("长城很长", config), convert("长城很长", config));
    }

    #[test]
    fn test_first_reading() {
        assert_eq!(first_reading(&[]), "");
        assert_eq!(first_reading(&[vec![]]), "");
        assert_eq!(first_reading(&owned(&[&["wǒ", "x"], &["lái"]])), "wǒ");
    }
}
