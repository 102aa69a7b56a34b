//! Name languages offered by the quiz (Natural Earth `NAME_XX` columns)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BorderpathError;

macro_rules! languages {
    ($($variant:ident => $column:literal, $label:literal;)+) => {
        /// Language of a localized country name
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum Language {
            $(
                #[serde(rename = $column)]
                #[doc = $label]
                $variant,
            )+
        }

        impl Language {
            /// Every supported language, in column order
            pub const ALL: &'static [Language] = &[$(Language::$variant),+];

            /// Dataset property holding names in this language
            pub fn column(&self) -> &'static str {
                match self {
                    $(Language::$variant => $column,)+
                }
            }

            /// English display label
            pub fn label(&self) -> &'static str {
                match self {
                    $(Language::$variant => $label,)+
                }
            }
        }
    };
}

languages! {
    Ar => "NAME_AR", "Arabic";
    Bn => "NAME_BN", "Bengali";
    De => "NAME_DE", "German";
    El => "NAME_EL", "Greek";
    En => "NAME_EN", "English";
    Es => "NAME_ES", "Spanish";
    Fa => "NAME_FA", "Persian";
    Fr => "NAME_FR", "French";
    He => "NAME_HE", "Hebrew";
    Hi => "NAME_HI", "Hindi";
    Hu => "NAME_HU", "Hungarian";
    Id => "NAME_ID", "Indonesian";
    It => "NAME_IT", "Italian";
    Ja => "NAME_JA", "Japanese";
    Ko => "NAME_KO", "Korean";
    Nl => "NAME_NL", "Dutch";
    Pl => "NAME_PL", "Polish";
    Pt => "NAME_PT", "Portuguese";
    Ru => "NAME_RU", "Russian";
    Sv => "NAME_SV", "Swedish";
    Tr => "NAME_TR", "Turkish";
    Uk => "NAME_UK", "Ukrainian";
    Ur => "NAME_UR", "Urdu";
    Vi => "NAME_VI", "Vietnamese";
    Zh => "NAME_ZH", "Chinese (Simplified)";
    Zht => "NAME_ZHT", "Chinese (Traditional)";
}

impl Language {
    /// Look up by column name (`NAME_DE`); case-insensitive
    pub fn from_column(column: &str) -> Option<Language> {
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.column().eq_ignore_ascii_case(column))
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl FromStr for Language {
    type Err = BorderpathError;

    /// Accepts either the column name (`NAME_DE`) or the bare code (`de`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let has_prefix = s
            .get(..5)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("NAME_"));
        let column = if has_prefix {
            s.to_string()
        } else {
            format!("NAME_{}", s)
        };
        Language::from_column(&column).ok_or_else(|| BorderpathError::invalid_value("language", s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
