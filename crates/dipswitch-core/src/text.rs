//! Localized bot messages.

use crate::locale::Language;

/// A message the bot can send, independent of language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    /// Bilingual language prompt shown before any language is known.
    ChooseLanguage,
    /// Prompt for the number of switches.
    ChooseBits,
    /// Instruction to send an address in `0..=max`.
    SendAddress {
        /// Largest accepted address.
        max: u64,
    },
    /// Address text was not an integer.
    InvalidNumber,
    /// Address was negative.
    NegativeNumber,
    /// Address exceeded the selected width.
    TooLarge {
        /// Largest accepted address.
        max: u64,
    },
    /// Anything else went wrong while handling an address.
    InvalidInput,
}

impl Text {
    /// Render the message in `language`.
    pub fn localize(self, language: Language) -> String {
        match (self, language) {
            (Self::ChooseLanguage, _) => "Виберіть мову / Zvolte jazyk:".to_owned(),

            (Self::ChooseBits, Language::Ukrainian) => "Оберіть кількість бітів:".to_owned(),
            (Self::ChooseBits, Language::Czech) => "Zvolte počet bitů:".to_owned(),

            (Self::SendAddress { max }, Language::Ukrainian) => {
                format!("Надішліть число адреси від 0 до {max}, і я згенерую DIP Switch.")
            },
            (Self::SendAddress { max }, Language::Czech) => {
                format!("Pošlete mi číslo adresy od 0 do {max} a vygeneruji DIP Switch.")
            },

            (Self::InvalidNumber, Language::Ukrainian) => {
                "Будь ласка, введіть правильне число.".to_owned()
            },
            (Self::InvalidNumber, Language::Czech) => "Zadejte platné číslo.".to_owned(),

            (Self::NegativeNumber, Language::Ukrainian) => {
                "Число не може бути від'ємним.".to_owned()
            },
            (Self::NegativeNumber, Language::Czech) => "Číslo nemůže být záporné.".to_owned(),

            (Self::TooLarge { max }, Language::Ukrainian) => {
                format!("Число занадто велике. Максимум: {max}.")
            },
            (Self::TooLarge { max }, Language::Czech) => {
                format!("Číslo je příliš velké. Maximum: {max}.")
            },

            (Self::InvalidInput, Language::Ukrainian) => {
                "Некоректне введення. Спробуйте ще раз.".to_owned()
            },
            (Self::InvalidInput, Language::Czech) => "Neplatný vstup. Zkuste to znovu.".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn language_prompt_is_bilingual() {
        assert_eq!(
            Text::ChooseLanguage.localize(Language::Ukrainian),
            Text::ChooseLanguage.localize(Language::Czech)
        );
    }

    #[test]
    fn address_prompt_states_range() {
        assert_snapshot!(
            Text::SendAddress { max: 255 }.localize(Language::Ukrainian),
            @"Надішліть число адреси від 0 до 255, і я згенерую DIP Switch."
        );
        assert_snapshot!(
            Text::SendAddress { max: 4095 }.localize(Language::Czech),
            @"Pošlete mi číslo adresy od 0 do 4095 a vygeneruji DIP Switch."
        );
    }

    #[test]
    fn too_large_states_maximum() {
        assert_snapshot!(
            Text::TooLarge { max: 63 }.localize(Language::Czech),
            @"Číslo je příliš velké. Maximum: 63."
        );
    }

    #[test]
    fn every_message_differs_by_language() {
        let texts = [
            Text::ChooseBits,
            Text::SendAddress { max: 1 },
            Text::InvalidNumber,
            Text::NegativeNumber,
            Text::TooLarge { max: 1 },
            Text::InvalidInput,
        ];
        for text in texts {
            assert_ne!(text.localize(Language::Ukrainian), text.localize(Language::Czech));
        }
    }
}
