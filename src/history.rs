// src/history.rs

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use crate::config::HISTORY_URL;
use crate::error::FetchError;
use crate::session::HttpSession;
use crate::ticker::Ticker;

/// One historical dividend payment.
#[derive(Debug, Clone, PartialEq)]
pub struct DividendRecord {
    pub ticker: Ticker,
    pub date: NaiveDate,
    pub amount: f64,
}

/// Supplies the chronological dividend payment history per ticker.
#[async_trait]
pub trait HistorySource {
    async fn fetch(&self, ticker: &Ticker) -> Result<Vec<DividendRecord>, FetchError>;
}

/// Reads dividend events from the chart endpoint.
pub struct YahooDividends {
    session: HttpSession,
}

impl YahooDividends {
    pub fn new(session: HttpSession) -> Self {
        YahooDividends { session }
    }
}

#[async_trait]
impl HistorySource for YahooDividends {
    async fn fetch(&self, ticker: &Ticker) -> Result<Vec<DividendRecord>, FetchError> {
        let url = HISTORY_URL.replace("{ticker}", ticker.as_str());
        let payload: ChartPayload = self.session.get_json(&url).await?;
        normalize_chart(ticker, payload)
    }
}

#[derive(Deserialize)]
struct ChartPayload {
    chart: Chart,
}

#[derive(Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ChartResult {
    #[serde(default)]
    events: Option<ChartEvents>,
}

#[derive(Deserialize, Default)]
struct ChartEvents {
    #[serde(default)]
    dividends: Option<HashMap<String, DividendEvent>>,
}

#[derive(Deserialize)]
struct DividendEvent {
    amount: f64,
    date: i64,
}

fn normalize_chart(
    ticker: &Ticker,
    payload: ChartPayload,
) -> Result<Vec<DividendRecord>, FetchError> {
    let chart = payload.chart;
    if let Some(error) = chart.error {
        return Err(FetchError::Malformed(format!(
            "provider error for {ticker}: {error}"
        )));
    }

    let result = chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| FetchError::Malformed(format!("no chart result for {ticker}")))?;

    // A missing events block means the ticker has never paid a dividend.
    let Some(dividends) = result.events.and_then(|events| events.dividends) else {
        return Ok(Vec::new());
    };

    // The provider keys events by epoch second; sorting restores the
    // chronological order of the payment series.
    let mut events: Vec<DividendEvent> = dividends.into_values().collect();
    events.sort_by_key(|event| event.date);

    events
        .into_iter()
        .map(|event| {
            let date = DateTime::from_timestamp(event.date, 0)
                .ok_or_else(|| {
                    FetchError::Malformed(format!(
                        "bad event timestamp {} for {ticker}",
                        event.date
                    ))
                })?
                .date_naive();
            Ok(DividendRecord {
                ticker: ticker.clone(),
                date,
                amount: event.amount,
            })
        })
        .collect()
}
