// src/universe.rs

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{MARKET_SUFFIX, UNIVERSE_URL};
use crate::error::FetchError;
use crate::session::HttpSession;
use crate::ticker::Ticker;

/// Supplies the full list of candidate tickers for one exchange.
#[async_trait]
pub trait UniverseSource {
    async fn fetch(&self) -> Result<Vec<Ticker>, FetchError>;
}

/// Discovers the B3 universe through the brapi.dev listing endpoint.
pub struct BrapiUniverse {
    session: HttpSession,
    suffix: &'static str,
}

impl BrapiUniverse {
    pub fn new(session: HttpSession) -> Self {
        BrapiUniverse {
            session,
            suffix: MARKET_SUFFIX,
        }
    }
}

#[async_trait]
impl UniverseSource for BrapiUniverse {
    async fn fetch(&self) -> Result<Vec<Ticker>, FetchError> {
        let payload: AvailablePayload = self.session.get_json(UNIVERSE_URL).await?;
        Ok(payload
            .stocks
            .iter()
            .map(|base| Ticker::qualified(base, self.suffix))
            .collect())
    }
}

#[derive(Deserialize)]
struct AvailablePayload {
    #[serde(default)]
    stocks: Vec<String>,
}
