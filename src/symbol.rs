//! Dreidel symbols.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSymbolError;

/// The face a dreidel lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// Nothing happens.
    #[serde(alias = "nothing")]
    Nun,
    /// The player takes the whole pot.
    #[serde(alias = "take-all")]
    Gimmel,
    /// The player takes half the pot, rounded up.
    #[serde(alias = "take-half")]
    Hay,
    /// The player puts one point into the pot.
    #[serde(alias = "give-one")]
    Shin,
}

/// All four faces, in the order they appear on a dreidel.
pub const SYMBOLS: [Symbol; 4] = [Symbol::Nun, Symbol::Gimmel, Symbol::Hay, Symbol::Shin];

impl Symbol {
    /// Returns the Hebrew letter name of the face.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nun => "Nun",
            Self::Gimmel => "Gimmel",
            Self::Hay => "Hay",
            Self::Shin => "Shin",
        }
    }

    /// Returns the descriptive name of the outcome.
    #[must_use]
    pub const fn outcome(self) -> &'static str {
        match self {
            Self::Nun => "nothing",
            Self::Gimmel => "take-all",
            Self::Hay => "take-half",
            Self::Shin => "give-one",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbol {
    type Err = ParseSymbolError;

    /// Parses either the letter name or the outcome name, ignoring case.
    ///
    /// ```
    /// use dreidel::Symbol;
    ///
    /// assert_eq!("gimmel".parse(), Ok(Symbol::Gimmel));
    /// assert_eq!("Take-Half".parse(), Ok(Symbol::Hay));
    /// assert!("dalet".parse::<Symbol>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SYMBOLS
            .into_iter()
            .find(|symbol| {
                s.eq_ignore_ascii_case(symbol.name()) || s.eq_ignore_ascii_case(symbol.outcome())
            })
            .ok_or(ParseSymbolError)
    }
}
