//! A stand-in for the finance API, served on an ephemeral local port.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use time::macros::datetime;
use tokio::net::TcpListener;

use crate::{
    api_client::TransactionsResponse,
    balance::BalanceSummary,
    transaction::{Category, TransactionRecord, TransactionType},
};

/// Counts the requests received by a mock API.
#[derive(Debug, Clone, Default)]
pub(crate) struct RequestCounter(Arc<AtomicUsize>);

impl RequestCounter {
    pub(crate) fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

async fn count_requests(
    State(counter): State<RequestCounter>,
    request: Request,
    next: Next,
) -> Response {
    counter.0.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

/// Serve `router` on a random local port.
///
/// Returns the base URL of the server and a counter of the requests it has received.
pub(crate) async fn spawn_mock_api(router: Router) -> (String, RequestCounter) {
    let counter = RequestCounter::default();
    let router = router.layer(middleware::from_fn_with_state(
        counter.clone(),
        count_requests,
    ));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind mock API listener");
    let address = listener
        .local_addr()
        .expect("Could not get mock API address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock API server failed");
    });

    (format!("http://{address}"), counter)
}

/// A base URL that nothing is listening on.
pub(crate) async fn unused_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind listener");
    let address = listener.local_addr().expect("Could not get address");
    drop(listener);

    format!("http://{address}")
}

/// A router that answers `GET /transactions` with `response`.
pub(crate) fn transactions_api(response: TransactionsResponse) -> Router {
    Router::new().route(
        "/transactions",
        get(move || {
            let response = response.clone();
            async move { Json(response) }
        }),
    )
}

pub(crate) fn sample_response() -> TransactionsResponse {
    TransactionsResponse {
        transactions: vec![
            TransactionRecord {
                id: "0b5f1c1e-1f6a-4d5c-9a57-2b7f1e0d6a11".to_owned(),
                title: "Desenvolvimento de site".to_owned(),
                value: 5000.0,
                transaction_type: TransactionType::Income,
                category: Category {
                    title: "Vendas".to_owned(),
                },
                created_at: datetime!(2020-05-24 10:00 UTC),
            },
            TransactionRecord {
                id: "7c3d2a9b-5e8f-4b1a-8c6d-3e2f1a0b9c22".to_owned(),
                title: "Hamburguer".to_owned(),
                value: 59.9,
                transaction_type: TransactionType::Outcome,
                category: Category {
                    title: "Alimentação".to_owned(),
                },
                created_at: datetime!(2020-05-20 18:30 UTC),
            },
        ],
        balance: BalanceSummary {
            income: 5000.0,
            outcome: 59.9,
            total: 4940.1,
        },
    }
}
