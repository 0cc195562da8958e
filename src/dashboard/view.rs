//! The state of the dashboard view and the rules for loading data into it.
//!
//! The view is activated by the first request for the dashboard. Each
//! activation hands out a [LoadTicket] for exactly one fetch, and the result of
//! that fetch is only applied while the ticket is current and the view has not
//! been torn down.

use crate::{
    Error,
    api_client::TransactionsResponse,
    balance::{BalanceView, format_balance},
    transaction::{DisplayTransaction, append_transactions},
};

/// Where the view is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The view has never been activated.
    Idle,
    /// A fetch has been issued and its result has not arrived yet.
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed, the view can be activated again.
    Failed,
}

/// Why the last load failed, in terms the user can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// The finance API could not be reached or did not answer in time.
    Network,
    /// The finance API answered with an error or with data that could not be displayed.
    Server,
    /// The dashboard itself is misconfigured.
    Internal,
}

impl From<&Error> for LoadError {
    fn from(error: &Error) -> Self {
        match error {
            Error::NetworkError(_) => LoadError::Network,
            Error::ServerError(_) | Error::InvalidAmount(_) | Error::InvalidDateFormat(_) => {
                LoadError::Server
            }
            Error::InvalidTimezone(_)
            | Error::DashboardLockError
            | Error::LoadTaskFailed(_) => LoadError::Internal,
        }
    }
}

impl LoadError {
    /// A short headline for the error alert.
    pub fn title(&self) -> &'static str {
        match self {
            LoadError::Network => "Não foi possível conectar ao servidor",
            LoadError::Server => "O servidor retornou uma resposta inválida",
            LoadError::Internal => "Algo deu errado",
        }
    }

    /// What the user can do about it.
    pub fn details(&self) -> &'static str {
        match self {
            LoadError::Network => {
                "Verifique sua conexão e recarregue a página para tentar novamente."
            }
            LoadError::Server => "Tente novamente mais tarde recarregando a página.",
            LoadError::Internal => "Verifique os logs do servidor para mais detalhes.",
        }
    }
}

/// Proof that a fetch belongs to a particular activation of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// What happened to a fetch result handed to [DashboardView::apply].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The data was formatted and is now displayed.
    Applied,
    /// The fetch or the formatting failed, the previous data is still displayed.
    Failed,
    /// The ticket was stale or the view was torn down, nothing changed.
    Discarded,
}

/// Everything the dashboard displays.
#[derive(Debug, Clone)]
pub struct DashboardView {
    transactions: Vec<DisplayTransaction>,
    balance: Option<BalanceView>,
    error: Option<LoadError>,
    status: LoadStatus,
    generation: u64,
    is_torn_down: bool,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView {
    /// Create an empty view that has not been activated.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            balance: None,
            error: None,
            status: LoadStatus::Idle,
            generation: 0,
            is_torn_down: false,
        }
    }

    /// The transactions to display, in the order they were received.
    pub fn transactions(&self) -> &[DisplayTransaction] {
        &self.transactions
    }

    /// The balance to display, `None` until the first successful load.
    pub fn balance(&self) -> Option<&BalanceView> {
        self.balance.as_ref()
    }

    /// The error from the last load, if it failed.
    pub fn error(&self) -> Option<LoadError> {
        self.error
    }

    /// Where the view is in its load cycle.
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Whether the view has been torn down.
    pub fn is_torn_down(&self) -> bool {
        self.is_torn_down
    }

    /// Activate the view, returning a ticket for the one fetch this
    /// activation may issue.
    ///
    /// Returns `None` if a fetch is already in flight, the data has already
    /// been loaded, or the view has been torn down.
    pub fn activate(&mut self) -> Option<LoadTicket> {
        if self.is_torn_down {
            return None;
        }

        match self.status {
            LoadStatus::Idle | LoadStatus::Failed => {
                self.generation += 1;
                self.status = LoadStatus::Loading;
                tracing::debug!("Activated dashboard view, generation {}", self.generation);

                Some(LoadTicket {
                    generation: self.generation,
                })
            }
            LoadStatus::Loading | LoadStatus::Loaded => None,
        }
    }

    /// Tear down the view. Any fetch still in flight will be discarded.
    pub fn deactivate(&mut self) {
        tracing::debug!("Tearing down dashboard view");
        self.is_torn_down = true;
    }

    /// Apply the result of the fetch issued for `ticket`.
    ///
    /// On success the fetched transactions are appended to those already
    /// displayed and the balance is replaced. On failure the displayed data
    /// is left as is and the error is recorded.
    pub fn apply(
        &mut self,
        ticket: LoadTicket,
        result: Result<TransactionsResponse, Error>,
        local_timezone: &str,
    ) -> ApplyOutcome {
        if self.is_torn_down
            || ticket.generation != self.generation
            || self.status != LoadStatus::Loading
        {
            tracing::debug!(
                "Discarding dashboard data for generation {}, current generation is {}",
                ticket.generation,
                self.generation
            );
            return ApplyOutcome::Discarded;
        }

        let formatted = result.and_then(|response| {
            let transactions = append_transactions(
                self.transactions.clone(),
                response.transactions,
                local_timezone,
            )?;
            let balance = format_balance(&response.balance)?;

            Ok((transactions, balance))
        });

        match formatted {
            Ok((transactions, balance)) => {
                self.transactions = transactions;
                self.balance = Some(balance);
                self.error = None;
                self.status = LoadStatus::Loaded;

                ApplyOutcome::Applied
            }
            Err(error) => {
                tracing::error!("Could not load the dashboard: {error}");
                self.error = Some(LoadError::from(&error));
                self.status = LoadStatus::Failed;

                ApplyOutcome::Failed
            }
        }
    }
}
