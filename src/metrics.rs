// src/metrics.rs

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::METRICS_URL;
use crate::error::FetchError;
use crate::session::HttpSession;
use crate::ticker::Ticker;

/// Point-in-time dividend metrics for one ticker.
///
/// A `None` field means the provider has no figure for it. That is not the
/// same as a figure of zero; the filter treats the two differently.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinancialSnapshot {
    pub dividend_yield: Option<f64>,
    pub price_earnings_ratio: Option<f64>,
    pub payout_ratio: Option<f64>,
}

/// Supplies a [`FinancialSnapshot`] per ticker.
#[async_trait]
pub trait MetricsSource {
    async fn fetch(&self, ticker: &Ticker) -> Result<FinancialSnapshot, FetchError>;
}

/// Reads dividend metrics from the quote-summary endpoint.
pub struct YahooMetrics {
    session: HttpSession,
}

impl YahooMetrics {
    pub fn new(session: HttpSession) -> Self {
        YahooMetrics { session }
    }
}

#[async_trait]
impl MetricsSource for YahooMetrics {
    async fn fetch(&self, ticker: &Ticker) -> Result<FinancialSnapshot, FetchError> {
        let url = METRICS_URL.replace("{ticker}", ticker.as_str());
        let payload: QuoteSummaryPayload = self.session.get_json(&url).await?;
        normalize_summary(ticker, payload)
    }
}

#[derive(Deserialize)]
struct QuoteSummaryPayload {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummary,
}

#[derive(Deserialize)]
struct QuoteSummary {
    #[serde(default)]
    result: Option<Vec<SummaryResult>>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct SummaryResult {
    #[serde(rename = "summaryDetail", default)]
    summary_detail: Option<SummaryDetail>,
}

#[derive(Deserialize, Default)]
struct SummaryDetail {
    #[serde(rename = "trailingAnnualDividendYield", default)]
    trailing_annual_dividend_yield: Option<NumericField>,
    #[serde(rename = "trailingPE", default)]
    trailing_pe: Option<NumericField>,
    #[serde(rename = "payoutRatio", default)]
    payout_ratio: Option<NumericField>,
}

/// The provider wraps every numeric as `{"raw": 0.08, "fmt": "8.00%"}` and
/// sends an empty object when the figure is unavailable.
#[derive(Deserialize)]
struct NumericField {
    #[serde(default)]
    raw: Option<f64>,
}

fn normalize_summary(
    ticker: &Ticker,
    payload: QuoteSummaryPayload,
) -> Result<FinancialSnapshot, FetchError> {
    let summary = payload.quote_summary;
    if let Some(error) = summary.error {
        return Err(FetchError::Malformed(format!(
            "provider error for {ticker}: {error}"
        )));
    }

    let detail = summary
        .result
        .and_then(|results| results.into_iter().next())
        .and_then(|result| result.summary_detail)
        .ok_or_else(|| FetchError::Malformed(format!("no summary detail for {ticker}")))?;

    Ok(FinancialSnapshot {
        dividend_yield: detail.trailing_annual_dividend_yield.and_then(|f| f.raw),
        price_earnings_ratio: detail.trailing_pe.and_then(|f| f.raw),
        payout_ratio: detail.payout_ratio.and_then(|f| f.raw),
    })
}
