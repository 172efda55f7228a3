// src/config.rs

use std::time::Duration;

/// Listing endpoint returning every tradable B3 symbol.
pub const UNIVERSE_URL: &str = "https://brapi.dev/api/available";

/// Quote-summary endpoint carrying the dividend metrics for one ticker.
pub const METRICS_URL: &str =
    "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{ticker}?modules=summaryDetail";

/// Chart endpoint returning the full dividend payment history for one ticker.
pub const HISTORY_URL: &str =
    "https://query1.finance.yahoo.com/v8/finance/chart/{ticker}?range=max&interval=1d&events=div";

/// Suffix qualifying a bare B3 symbol for the quote provider.
pub const MARKET_SUFFIX: &str = ".SA";

/// Default minimum trailing dividend yield (0.06 = 6%).
pub const DEFAULT_MIN_YIELD: f64 = 0.06;

/// Upper bound on any single provider request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
