//! HTTP client for the finance API that owns the transactions and balance.

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{Error, balance::BalanceSummary, transaction::TransactionRecord};

/// The path, relative to the API base URL, that lists transactions and the balance.
pub const TRANSACTIONS_PATH: &str = "transactions";

/// The JSON body returned by `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    /// Every transaction recorded by the API.
    pub transactions: Vec<TransactionRecord>,
    /// Totals over all transactions.
    pub balance: BalanceSummary,
}

/// Fetches transactions from the finance API.
#[derive(Debug, Clone)]
pub struct TransactionsClient {
    http_client: HttpClient,
    base_url: String,
}

impl TransactionsClient {
    /// How long to wait for the API before giving up.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a client for the API served at `base_url`, e.g. "http://localhost:3333".
    ///
    /// Requests that take longer than `timeout` fail with [Error::NetworkError].
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| {
                Error::NetworkError(format!("could not create HTTP client: {error}"))
            })?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// The base URL of the API, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get all transactions and the balance summary.
    ///
    /// # Errors
    /// - [Error::NetworkError] if the API could not be reached or timed out.
    /// - [Error::ServerError] if the API responded with a non-success status
    ///   or with a body that is not the expected JSON.
    pub async fn fetch_transactions(&self) -> Result<TransactionsResponse, Error> {
        let url = format!("{}/{TRANSACTIONS_PATH}", self.base_url);
        tracing::debug!("Fetching transactions from {url}");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|error| classify_request_error(&url, error))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{url} responded with {status}");
            return Err(Error::ServerError(format!("{url} responded with {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|error| classify_request_error(&url, error))?;

        let transactions: TransactionsResponse = serde_json::from_str(&body).map_err(|error| {
            tracing::warn!("Could not decode the response from {url}: {error}");
            Error::ServerError(format!("could not decode the response from {url}: {error}"))
        })?;

        tracing::debug!(
            "Fetched {} transactions from {url}",
            transactions.transactions.len()
        );

        Ok(transactions)
    }
}

fn classify_request_error(url: &str, error: reqwest::Error) -> Error {
    if error.is_status() || error.is_decode() {
        tracing::warn!("Bad response from {url}: {error}");
        Error::ServerError(format!("bad response from {url}: {error}"))
    } else if error.is_timeout() {
        tracing::warn!("Request to {url} timed out: {error}");
        Error::NetworkError(format!("request to {url} timed out"))
    } else {
        tracing::warn!("Could not reach {url}: {error}");
        Error::NetworkError(format!("could not reach {url}: {error}"))
    }
}
