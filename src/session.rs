// src/session.rs

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::REQUEST_TIMEOUT;
use crate::error::FetchError;

/// HTTP handle passed explicitly to every provider.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference-counted,
/// so all clones share one connection pool.
#[derive(Clone)]
pub struct HttpSession {
    client: Client,
}

impl HttpSession {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(HttpSession { client })
    }

    /// Issues a GET and decodes the JSON body into `T`.
    ///
    /// A non-2xx status is reported as an error rather than decoded.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}
