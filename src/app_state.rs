//! Implements a struct that holds the state of the dashboard server.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use crate::{
    Error, api_client::TransactionsClient, dashboard::DashboardView, timezone::is_valid_timezone,
};

/// The state of the dashboard server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the finance API that owns the transactions.
    pub api_client: TransactionsClient,

    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,

    /// The data displayed on the dashboard.
    pub dashboard_view: Arc<Mutex<DashboardView>>,
}

impl AppState {
    /// Create a new [AppState] that fetches from the finance API at `api_url`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "America/Sao_Paulo".
    ///
    /// # Errors
    /// Returns an error if the timezone is not valid or the HTTP client cannot be created.
    pub fn new(
        api_url: &str,
        local_timezone: &str,
        request_timeout: Duration,
    ) -> Result<Self, Error> {
        if !is_valid_timezone(local_timezone) {
            return Err(Error::InvalidTimezone(local_timezone.to_owned()));
        }

        Ok(Self {
            api_client: TransactionsClient::new(api_url, request_timeout)?,
            local_timezone: local_timezone.to_owned(),
            dashboard_view: Arc::new(Mutex::new(DashboardView::new())),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::Error;

    use super::AppState;

    #[test]
    fn rejects_invalid_timezone() {
        let result = AppState::new(
            "http://localhost:3333",
            "Atlantis/Capital",
            Duration::from_secs(1),
        );

        assert!(matches!(result, Err(Error::InvalidTimezone(name)) if name == "Atlantis/Capital"));
    }

    #[test]
    fn starts_with_idle_dashboard() {
        let state = AppState::new(
            "http://localhost:3333",
            "America/Sao_Paulo",
            Duration::from_secs(1),
        )
        .unwrap();

        assert_eq!(state.api_client.base_url(), "http://localhost:3333");
        assert!(state.dashboard_view.lock().unwrap().transactions().is_empty());
    }
}
