// src/ticker.rs

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// An exchange-qualified ticker symbol, e.g. `PETR4.SA`.
///
/// The qualification happens once, at universe discovery; every later stage
/// sees the symbol as an opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(symbol: impl Into<String>) -> Self {
        Ticker(symbol.into())
    }

    /// Qualifies a bare exchange symbol with a market suffix.
    pub fn qualified(base: &str, suffix: &str) -> Self {
        Ticker(format!("{base}{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
