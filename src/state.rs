use crate::dashboard::Dashboard;
use crate::models::Quote;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Mutex<Dashboard>>,
    /// Drawn once at startup and shown for the whole session.
    pub quote: Quote,
}

impl AppState {
    pub fn new(dashboard: Dashboard, quote: Quote) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
            quote,
        }
    }
}
