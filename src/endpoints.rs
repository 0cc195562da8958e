//! The endpoint URIs served by the dashboard.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page with the balance cards and the transactions table.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The dashboard content without the surrounding page, polled by htmx while loading.
pub const DASHBOARD_CONTENT: &str = "/dashboard/content";
/// The route for static files.
pub const STATIC: &str = "/static";
