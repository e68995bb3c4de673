//! Output languages the verification service can answer in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::WireError;

/// Output language requested for the verdict text.
///
/// `Auto` leaves the answer in the language the service detects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Auto,
    En,
    Hi,
    Gu,
    Bn,
    Mr,
    Ta,
    Te,
    Pa,
    Kn,
}

impl Language {
    /// Every selectable language, in menu order.
    pub const ALL: [Self; 10] = [
        Self::Auto,
        Self::En,
        Self::Hi,
        Self::Gu,
        Self::Bn,
        Self::Mr,
        Self::Ta,
        Self::Te,
        Self::Pa,
        Self::Kn,
    ];

    /// Wire code sent as `target_lang`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::En => "en",
            Self::Hi => "hi",
            Self::Gu => "gu",
            Self::Bn => "bn",
            Self::Mr => "mr",
            Self::Ta => "ta",
            Self::Te => "te",
            Self::Pa => "pa",
            Self::Kn => "kn",
        }
    }

    /// Menu label, native script first.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::En => "English",
            Self::Hi => "हिंदी (Hindi)",
            Self::Gu => "ગુજરાતી (Gujarati)",
            Self::Bn => "বাংলা (Bengali)",
            Self::Mr => "मराठी (Marathi)",
            Self::Ta => "தமிழ் (Tamil)",
            Self::Te => "తెలుగు (Telugu)",
            Self::Pa => "ਪੰਜਾਬੀ (Punjabi)",
            Self::Kn => "ಕನ್ನಡ (Kannada)",
        }
    }
}

impl FromStr for Language {
    type Err = WireError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let code = raw.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| WireError::UnknownLanguage(code.to_owned()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
#[path = "language_test.rs"]
mod tests;
