use std::fmt;
use std::str::FromStr;

use pinyin::Pinyin;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a single reading is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToneStyle {
    /// `zhong`
    Normal,
    /// `zhōng`
    #[default]
    Tone,
    /// `zho1ng`
    Tone2,
    /// `zhong1`
    Tone3,
    /// `zh`, empty for syllables without an initial
    Initials,
    /// `z`
    FirstLetter,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tone style `{0}` (expected normal, tone, tone2, tone3, initials or first-letter)")]
pub struct ParseStyleError(pub String);

impl ToneStyle {
    pub const ALL: [ToneStyle; 6] = [
        ToneStyle::Normal,
        ToneStyle::Tone,
        ToneStyle::Tone2,
        ToneStyle::Tone3,
        ToneStyle::Initials,
        ToneStyle::FirstLetter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToneStyle::Normal => "normal",
            ToneStyle::Tone => "tone",
            ToneStyle::Tone2 => "tone2",
            ToneStyle::Tone3 => "tone3",
            ToneStyle::Initials => "initials",
            ToneStyle::FirstLetter => "first-letter",
        }
    }

    pub(crate) fn render(self, reading: Pinyin) -> &'static str {
        match self {
            ToneStyle::Normal => reading.plain(),
            ToneStyle::Tone => reading.with_tone(),
            ToneStyle::Tone2 => reading.with_tone_num(),
            ToneStyle::Tone3 => reading.with_tone_num_end(),
            ToneStyle::Initials => initial_of(reading.plain()),
            ToneStyle::FirstLetter => reading.first_letter(),
        }
    }
}

/// Two-letter initials come first so `zh` wins over `z`. `y` and `w` are
/// not initials.
const INITIALS: [&str; 21] = [
    "zh", "ch", "sh", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "r",
    "z", "c", "s",
];

/// Initial consonant of a toneless syllable, `""` when it has none.
fn initial_of(plain: &'static str) -> &'static str {
    INITIALS
        .iter()
        .find(|initial| plain.starts_with(*initial))
        .map_or("", |initial| &plain[..initial.len()])
}

impl fmt::Display for ToneStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToneStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ToneStyle::ALL
            .into_iter()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}
