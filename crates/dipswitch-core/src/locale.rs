//! Supported conversation languages.

use std::fmt;

/// Language of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Ukrainian, code `ua`. Used until the user picks a language.
    #[default]
    Ukrainian,
    /// Czech, code `cz`.
    Czech,
}

impl Language {
    /// All languages in the order they are offered.
    pub const ALL: [Self; 2] = [Self::Ukrainian, Self::Czech];

    /// Short code used in callback payloads.
    pub fn code(self) -> &'static str {
        match self {
            Self::Ukrainian => "ua",
            Self::Czech => "cz",
        }
    }

    /// Look up a language by its code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }

    /// Button label, in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Ukrainian => "Українська 🇺🇦",
            Self::Czech => "Čeština 🇨🇿",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("en"), None);
        assert_eq!(Language::from_code("UA"), None);
    }
}
