//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for displaying the dashboard and its htmx-polled content
//! - The load that fetches from the finance API and fills in the view
//! - HTML view functions for rendering the dashboard UI

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};
use tokio::task::JoinHandle;

use crate::{
    AppState, Error,
    api_client::TransactionsClient,
    dashboard::{
        cards::balance_cards_view,
        table::transactions_table_view,
        view::{DashboardView, LoadStatus, LoadTicket},
    },
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base, error_alert, link, loading_spinner},
    navigation::NavBar,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The client for the finance API.
    pub api_client: TransactionsClient,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
    /// The data displayed by the dashboard.
    pub view: Arc<Mutex<DashboardView>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
            local_timezone: state.local_timezone.clone(),
            view: state.dashboard_view.clone(),
        }
    }
}

/// Display the dashboard, loading its data first if the view has not been activated yet.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    if let Some(ticket) = activate(&state.view)? {
        // The load runs on its own task so that it still completes if the
        // client goes away while we wait for the finance API.
        let load = tokio::spawn(load_dashboard(state.clone(), ticket));

        wait_for_load(&state, ticket, load).await?;
    }

    let view = lock_view(&state.view)?;

    Ok(dashboard_page(&view).into_response())
}

/// The dashboard content without the surrounding page.
///
/// Requests not made by htmx are redirected to the full page.
pub async fn get_dashboard_content(
    HxRequest(is_htmx_request): HxRequest,
    State(state): State<DashboardState>,
) -> Result<Response, Error> {
    if !is_htmx_request {
        return Ok(Redirect::to(endpoints::DASHBOARD_VIEW).into_response());
    }

    let view = lock_view(&state.view)?;

    Ok(dashboard_content(&view).into_response())
}

/// Fetch from the finance API and hand the result to the view.
///
/// The view decides whether the result is still wanted, see [DashboardView::apply].
pub(crate) async fn load_dashboard(state: DashboardState, ticket: LoadTicket) {
    let result = state.api_client.fetch_transactions().await;

    match lock_view(&state.view) {
        Ok(mut view) => {
            let outcome = view.apply(ticket, result, &state.local_timezone);
            tracing::info!("Dashboard load finished: {outcome:?}");
        }
        Err(error) => tracing::error!("Could not store the dashboard data: {error}"),
    }
}

/// Wait for `load` to finish, failing the activation if the task ended without
/// handing over its result.
async fn wait_for_load(
    state: &DashboardState,
    ticket: LoadTicket,
    load: JoinHandle<()>,
) -> Result<(), Error> {
    let Err(error) = load.await else {
        return Ok(());
    };

    tracing::error!("Dashboard load task failed: {error}");
    let outcome = lock_view(&state.view)?.apply(
        ticket,
        Err(Error::LoadTaskFailed(error.to_string())),
        &state.local_timezone,
    );
    tracing::info!("Dashboard load finished: {outcome:?}");

    Ok(())
}

fn activate(view: &Mutex<DashboardView>) -> Result<Option<LoadTicket>, Error> {
    Ok(lock_view(view)?.activate())
}

fn lock_view(view: &Mutex<DashboardView>) -> Result<MutexGuard<'_, DashboardView>, Error> {
    view.lock()
        .inspect_err(|error| tracing::error!("could not acquire dashboard lock: {error}"))
        .map_err(|_| Error::DashboardLockError)
}

fn dashboard_page(view: &DashboardView) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class={(PAGE_CONTAINER_STYLE) " max-w-screen-lg"}
        {
            (dashboard_content(view))
        }
    );

    base("Dashboard", &content)
}

fn dashboard_content(view: &DashboardView) -> Markup {
    html!(
        div id="dashboard-content" class="w-full"
        {
            @if view.status() == LoadStatus::Loading {
                (loading_placeholder())
            }

            @if let Some(error) = view.error() {
                (error_alert(error.title(), error.details()))
            }

            (balance_cards_view(view.balance()))
            (transactions_table_view(view.transactions()))
        }
    )
}

/// Shown while another request is waiting for the finance API.
///
/// Swaps the whole dashboard content for a fresh copy once a second until the
/// load has finished. The link is for browsers without htmx.
fn loading_placeholder() -> Markup {
    html!(
        div
            hx-get=(endpoints::DASHBOARD_CONTENT)
            hx-trigger="load delay:1s"
            hx-target="#dashboard-content"
            hx-swap="outerHTML"
            data-testid="loading"
            class="w-full mb-4 text-sm text-gray-500 dark:text-gray-400"
        {
            (loading_spinner())
            span { "Carregando..." }
            " "
            (link(endpoints::DASHBOARD_VIEW, "Atualizar"))
        }
    )
}
