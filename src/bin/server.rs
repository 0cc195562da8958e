use std::{fs::OpenOptions, net::SocketAddr, process::ExitCode, sync::Arc, time::Duration};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use gofinances::{
    AppState, TransactionsClient, build_router, graceful_shutdown, logging_middleware,
};

/// The dashboard server for the GoFinances API.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the finance API that serves `/transactions`.
    #[arg(long, default_value = "http://localhost:3333")]
    api_url: String,

    /// The port to serve the dashboard from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Canonical name of the timezone used to display dates, e.g. "America/Sao_Paulo".
    #[arg(long, default_value = "America/Sao_Paulo")]
    timezone: String,

    /// How many seconds to wait for the finance API before giving up.
    #[arg(long, default_value_t = TransactionsClient::DEFAULT_TIMEOUT.as_secs())]
    request_timeout: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    let state = match AppState::new(
        &args.api_url,
        &args.timezone,
        Duration::from_secs(args.request_timeout),
    ) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not start the server: {error}");
            return ExitCode::FAILURE;
        }
    };

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(
        handle.clone(),
        state.dashboard_view.clone(),
    ));

    let router = add_tracing_layer(
        build_router(state).layer(middleware::from_fn(logging_middleware)),
    );

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!(
        "HTTP server listening on {}, fetching from {}",
        addr,
        args.api_url
    );

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gofinances::TransactionsClient;

    use super::Args;

    #[test]
    fn defaults_match_local_development_setup() {
        let args = Args::try_parse_from(["server"]).unwrap();

        assert_eq!(args.api_url, "http://localhost:3333");
        assert_eq!(args.port, 3000);
        assert_eq!(args.timezone, "America/Sao_Paulo");
        assert_eq!(
            args.request_timeout,
            TransactionsClient::DEFAULT_TIMEOUT.as_secs()
        );
    }

    #[test]
    fn request_timeout_can_be_overridden() {
        let args = Args::try_parse_from(["server", "--request-timeout", "3"]).unwrap();

        assert_eq!(args.request_timeout, 3);
    }
}
