// tests/filter_tests.rs

use std::collections::HashMap;

use async_trait::async_trait;
use divscreen::{
    FetchError, FilterCriteria, FinancialSnapshot, MetricsFilter, MetricsSource, Ticker,
};

struct FakeMetrics {
    snapshots: HashMap<String, FinancialSnapshot>,
    failing: Vec<&'static str>,
}

impl FakeMetrics {
    fn new(entries: &[(&str, FinancialSnapshot)]) -> Self {
        FakeMetrics {
            snapshots: entries
                .iter()
                .map(|(ticker, snapshot)| (ticker.to_string(), *snapshot))
                .collect(),
            failing: Vec::new(),
        }
    }

    fn failing_for(mut self, ticker: &'static str) -> Self {
        self.failing.push(ticker);
        self
    }
}

#[async_trait]
impl MetricsSource for FakeMetrics {
    async fn fetch(&self, ticker: &Ticker) -> Result<FinancialSnapshot, FetchError> {
        if self.failing.iter().any(|t| *t == ticker.as_str()) {
            return Err(FetchError::Malformed(format!("lookup blew up for {ticker}")));
        }
        self.snapshots
            .get(ticker.as_str())
            .copied()
            .ok_or_else(|| FetchError::Malformed(format!("no snapshot for {ticker}")))
    }
}

fn tickers(symbols: &[&str]) -> Vec<Ticker> {
    symbols.iter().map(|s| Ticker::new(*s)).collect()
}

fn symbols(selected: &[Ticker]) -> Vec<&str> {
    selected.iter().map(Ticker::as_str).collect()
}

fn yield_only(dy: f64) -> FinancialSnapshot {
    FinancialSnapshot {
        dividend_yield: Some(dy),
        ..Default::default()
    }
}

#[tokio::test]
async fn scenario_a_min_yield_filters_universe() {
    let source = FakeMetrics::new(&[
        ("A", yield_only(0.08)),
        ("B", yield_only(0.03)),
        ("C", yield_only(0.07)),
    ]);
    let universe = tickers(&["A", "B", "C"]);

    let selected = MetricsFilter::new(&source)
        .select(&universe, &FilterCriteria::new(0.06))
        .await;

    assert_eq!(symbols(&selected), ["A", "C"]);
}

#[tokio::test]
async fn absent_yield_is_always_excluded() {
    let source = FakeMetrics::new(&[(
        "A",
        FinancialSnapshot {
            dividend_yield: None,
            price_earnings_ratio: Some(8.0),
            payout_ratio: Some(0.4),
        },
    )]);
    let universe = tickers(&["A"]);

    // Even a zero threshold cannot admit a ticker without a yield figure.
    let selected = MetricsFilter::new(&source)
        .select(&universe, &FilterCriteria::new(0.0))
        .await;

    assert!(selected.is_empty());
}

#[tokio::test]
async fn zero_yield_is_a_real_value_not_missing_data() {
    let source = FakeMetrics::new(&[("A", yield_only(0.0))]);
    let universe = tickers(&["A"]);

    let selected = MetricsFilter::new(&source)
        .select(&universe, &FilterCriteria::new(0.0))
        .await;

    assert_eq!(symbols(&selected), ["A"]);
}

#[tokio::test]
async fn scenario_d_missing_pe_under_active_cap_excludes() {
    let source = FakeMetrics::new(&[(
        "D",
        FinancialSnapshot {
            dividend_yield: Some(0.09),
            price_earnings_ratio: None,
            payout_ratio: Some(0.3),
        },
    )]);
    let universe = tickers(&["D"]);
    let criteria = FilterCriteria {
        min_yield: 0.06,
        max_pe: Some(15.0),
        max_payout: None,
    };

    let selected = MetricsFilter::new(&source).select(&universe, &criteria).await;

    assert!(selected.is_empty());
}

#[tokio::test]
async fn unset_caps_are_never_evaluated() {
    // PE and payout absent or extreme, but no cap is active on either.
    let source = FakeMetrics::new(&[
        (
            "A",
            FinancialSnapshot {
                dividend_yield: Some(0.08),
                price_earnings_ratio: None,
                payout_ratio: None,
            },
        ),
        (
            "B",
            FinancialSnapshot {
                dividend_yield: Some(0.07),
                price_earnings_ratio: Some(900.0),
                payout_ratio: Some(5.0),
            },
        ),
    ]);
    let universe = tickers(&["A", "B"]);

    let selected = MetricsFilter::new(&source)
        .select(&universe, &FilterCriteria::new(0.06))
        .await;

    assert_eq!(symbols(&selected), ["A", "B"]);
}

#[tokio::test]
async fn payout_cap_is_enforced_when_set() {
    let source = FakeMetrics::new(&[
        (
            "A",
            FinancialSnapshot {
                dividend_yield: Some(0.08),
                price_earnings_ratio: Some(10.0),
                payout_ratio: Some(0.5),
            },
        ),
        (
            "B",
            FinancialSnapshot {
                dividend_yield: Some(0.08),
                price_earnings_ratio: Some(10.0),
                payout_ratio: Some(0.95),
            },
        ),
    ]);
    let universe = tickers(&["A", "B"]);
    let criteria = FilterCriteria {
        min_yield: 0.06,
        max_pe: Some(15.0),
        max_payout: Some(0.8),
    };

    let selected = MetricsFilter::new(&source).select(&universe, &criteria).await;

    assert_eq!(symbols(&selected), ["A"]);
}

#[tokio::test]
async fn lookup_failure_drops_only_that_ticker() {
    let source = FakeMetrics::new(&[
        ("A", yield_only(0.08)),
        ("B", yield_only(0.09)),
        ("C", yield_only(0.07)),
    ])
    .failing_for("B");
    let universe = tickers(&["A", "B", "C"]);

    let selected = MetricsFilter::new(&source)
        .select(&universe, &FilterCriteria::new(0.06))
        .await;

    assert_eq!(symbols(&selected), ["A", "C"]);
}

#[tokio::test]
async fn selection_preserves_universe_order() {
    let source = FakeMetrics::new(&[
        ("Z", yield_only(0.08)),
        ("M", yield_only(0.08)),
        ("A", yield_only(0.08)),
    ]);
    let universe = tickers(&["Z", "M", "A"]);

    let selected = MetricsFilter::new(&source)
        .select(&universe, &FilterCriteria::new(0.06))
        .await;

    assert_eq!(symbols(&selected), ["Z", "M", "A"]);
}

#[tokio::test]
async fn empty_universe_selects_nothing() {
    let source = FakeMetrics::new(&[]);

    let selected = MetricsFilter::new(&source)
        .select(&[], &FilterCriteria::new(0.06))
        .await;

    assert!(selected.is_empty());
}

#[tokio::test]
async fn concurrent_selection_matches_sequential() {
    let entries: Vec<(String, FinancialSnapshot)> = (0..20)
        .map(|i| (format!("T{i}"), yield_only(if i % 3 == 0 { 0.09 } else { 0.02 })))
        .collect();
    let borrowed: Vec<(&str, FinancialSnapshot)> = entries
        .iter()
        .map(|(ticker, snapshot)| (ticker.as_str(), *snapshot))
        .collect();
    let source = FakeMetrics::new(&borrowed);
    let universe: Vec<Ticker> = entries.iter().map(|(t, _)| Ticker::new(t.clone())).collect();
    let criteria = FilterCriteria::new(0.06);

    let sequential = MetricsFilter::new(&source).select(&universe, &criteria).await;
    let concurrent = MetricsFilter::new(&source)
        .with_concurrency(8)
        .select(&universe, &criteria)
        .await;

    assert_eq!(sequential, concurrent);
}

#[tokio::test]
async fn criteria_boundaries_are_inclusive() {
    let snapshot = FinancialSnapshot {
        dividend_yield: Some(0.06),
        price_earnings_ratio: Some(15.0),
        payout_ratio: Some(0.8),
    };
    let criteria = FilterCriteria {
        min_yield: 0.06,
        max_pe: Some(15.0),
        max_payout: Some(0.8),
    };

    assert!(criteria.matches(&snapshot));

    let just_under = FinancialSnapshot {
        dividend_yield: Some(0.059),
        ..snapshot
    };
    assert!(!criteria.matches(&just_under));
}
