//! Languages of the symbolic source form and their meow tokens.

use std::fmt::{self, Display};
use std::str::FromStr;

/// A language the symbolic form can be written in. Each language contributes one token to the synonym set
/// recognized by the symbolic parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Chinese,
    Japanese,
    Korean,
    French,
    German,
    Russian,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 7] = [
        Language::English,
        Language::Chinese,
        Language::Japanese,
        Language::Korean,
        Language::French,
        Language::German,
        Language::Russian,
    ];

    /// Short language code, e.g. `en`.
    pub fn code(self: Self) -> &'static str {
        match self {
            Language::English   => "en",
            Language::Chinese   => "zh",
            Language::Japanese  => "ja",
            Language::Korean    => "ko",
            Language::French    => "fr",
            Language::German    => "de",
            Language::Russian   => "ru",
        }
    }

    /// The meow token of this language.
    pub fn token(self: Self) -> &'static str {
        match self {
            Language::English   => "meow",
            Language::Chinese   => "喵",
            Language::Japanese  => "にゃー",
            Language::Korean    => "야옹",
            Language::French    => "miaou",
            Language::German    => "miau",
            Language::Russian   => "мяу",
        }
    }

    /// Looks up a language by its code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Language> {
        Self::ALL.iter().copied().find(|language| language.code().eq_ignore_ascii_case(code))
    }

    /// Tokens of all languages, longest first so that no token can shadow a longer one sharing its prefix.
    pub fn tokens() -> Vec<&'static str> {
        let mut tokens: Vec<_> = Self::ALL.iter().map(|language| language.token()).collect();
        tokens.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        tokens
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl Display for Language {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when parsing an unknown language code.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("unknown language \"{0}\", expected one of en, zh, ja, ko, fr, de, ru")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Language::from_code(code).ok_or_else(|| UnknownLanguage(code.to_string()))
    }
}
