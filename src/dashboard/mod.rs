//! Dashboard module
//!
//! Provides the overview page with the balance cards and the transactions table.

mod cards;
mod handlers;
mod table;
mod view;

pub use handlers::{get_dashboard_content, get_dashboard_page};
pub use view::{DashboardView, LoadError, LoadStatus};
