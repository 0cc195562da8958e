//! GoFinances is a dashboard for a personal-finance API.
//!
//! This library fetches transactions and the account balance from the finance
//! API, formats them for display and serves them as an HTML page.

#![warn(missing_docs)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod api_client;
mod app_state;
mod balance;
mod currency;
mod dashboard;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api_client::{TransactionsClient, TransactionsResponse};
pub use app_state::AppState;
pub use balance::{BalanceSummary, BalanceView, format_balance};
pub use currency::format_currency;
pub use dashboard::{DashboardView, LoadError, LoadStatus};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::is_valid_timezone;
pub use transaction::{
    Category, DisplayTransaction, TransactionRecord, TransactionType, append_transactions,
};

use crate::internal_server_error::InternalServerError;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first,
/// tears down the dashboard view and then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`. Tearing down `dashboard_view` first
/// means a fetch that is still in flight will not write to it.
pub async fn graceful_shutdown(
    handle: Handle<SocketAddr>,
    dashboard_view: Arc<Mutex<DashboardView>>,
) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
        },
    }

    match dashboard_view.lock() {
        Ok(mut view) => view.deactivate(),
        Err(error) => tracing::error!("could not acquire dashboard lock: {error}"),
    }

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An amount of money could not be formatted, e.g. because it is NaN or infinite.
    #[error("cannot format {0} as currency")]
    InvalidAmount(f64),

    /// A date could not be formatted for display.
    #[error("could not format date: {0}")]
    InvalidDateFormat(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// The finance API could not be reached or did not respond in time.
    #[error("could not reach the finance API: {0}")]
    NetworkError(String),

    /// The finance API responded with an error status or an unexpected body.
    #[error("the finance API returned a bad response: {0}")]
    ServerError(String),

    /// Could not acquire the dashboard lock
    #[error("could not acquire the dashboard lock")]
    DashboardLockError,

    /// The task loading the dashboard data panicked or was cancelled.
    #[error("the dashboard load did not finish: {0}")]
    LoadTaskFailed(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezone(timezone) => InternalServerError {
                description: "Fuso horário inválido",
                fix: &format!(
                    "Não foi possível usar o fuso horário \"{timezone}\". Verifique as \
                    configurações do servidor e use um nome canônico, \
                    e.g. \"America/Sao_Paulo\"."
                ),
            }
            .into_response(),
            Error::DashboardLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[test]
    fn errors_render_internal_server_error_page() {
        let errors = [
            Error::DashboardLockError,
            Error::InvalidTimezone("Nowhere".to_owned()),
            Error::NetworkError("connection refused".to_owned()),
        ];

        for error in errors {
            assert_eq!(
                error.into_response().status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }
}
