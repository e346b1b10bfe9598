//! Three-letter ISO currency codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency as Stripe writes it on the wire (lowercase ISO 4217).
///
/// Codes without a named variant are kept verbatim in [`Currency::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
    /// Canadian dollar.
    Cad,
    /// Australian dollar.
    Aud,
    /// Japanese yen.
    Jpy,
    /// Any other currency code, lowercased.
    Other(String),
}

impl Currency {
    /// Return the lowercase code sent to the API.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Usd => "usd",
            Self::Eur => "eur",
            Self::Gbp => "gbp",
            Self::Cad => "cad",
            Self::Aud => "aud",
            Self::Jpy => "jpy",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for Currency {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "usd" => Self::Usd,
            "eur" => Self::Eur,
            "gbp" => Self::Gbp,
            "cad" => Self::Cad,
            "aud" => Self::Aud,
            "jpy" => Self::Jpy,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<&str> for Currency {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.as_str().to_string()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
