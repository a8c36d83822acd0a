pub mod config;
pub mod error;
pub mod observability;
pub mod portfolio;
pub mod routes;

use std::sync::Arc;

pub use crate::config::Config;
pub use routes::{AppState, router};

/// Build the application state from configuration.
///
/// Fails only on broken embedded data or an unusable mailer setup. A
/// missing email credential yields a state whose contact endpoint answers
/// 503.
pub fn create_state(config: &Config) -> anyhow::Result<AppState> {
    let notifier = portfolio_notification::ContactNotifier::from_config(&config.email)?;
    let portfolio = portfolio::Portfolio::load()?;

    Ok(AppState {
        notifier,
        portfolio: Arc::new(portfolio),
    })
}
