use std::sync::Arc;

use services::DrillService;

/// What the composition root (`crates/app`) provides to the UI.
pub trait UiApp: Send + Sync {
    fn drill(&self) -> Arc<DrillService>;
}

#[derive(Clone)]
pub struct AppContext {
    drill: Arc<DrillService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self { drill: app.drill() }
    }

    #[must_use]
    pub fn drill(&self) -> Arc<DrillService> {
        Arc::clone(&self.drill)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
