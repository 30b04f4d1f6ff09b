use std::sync::Arc;

use services::DrillService;

pub trait UiApp: Send + Sync {
    fn drill_service(&self) -> Arc<DrillService>;

    /// Called once when the user ends the practice from the window.
    fn on_finished(&self, practiced: u32);
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    drill_service: Arc<DrillService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let drill_service = app.drill_service();
        Self {
            app: Arc::clone(app),
            drill_service,
        }
    }

    #[must_use]
    pub fn drill_service(&self) -> Arc<DrillService> {
        Arc::clone(&self.drill_service)
    }

    pub fn finish(&self, practiced: u32) {
        self.app.on_finished(practiced);
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
