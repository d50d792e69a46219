use dashboard_core::NavigationController;
use tokio::sync::Mutex;

/// One controller per process; the lock serializes navigation events.
pub(crate) struct AppState {
    pub(crate) controller: Mutex<NavigationController>,
}

impl AppState {
    pub(crate) fn new(controller: NavigationController) -> Self {
        Self {
            controller: Mutex::new(controller),
        }
    }
}
