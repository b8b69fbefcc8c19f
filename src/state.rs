//! Shared application state
//!
//! Everything a handler needs is passed in here rather than reached through
//! globals: the loaded settings, the database service and the page renderer.

use std::sync::Arc;

use crate::config::Settings;
use crate::database::{DatabasePool, DatabaseService};
use crate::handlers::render::{DevRenderer, PageRenderer};

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub db: DatabaseService,
    pub renderer: Arc<dyn PageRenderer>,
}

impl AppState {
    pub fn new(settings: Settings, pool: DatabasePool) -> Self {
        Self {
            settings,
            db: DatabaseService::new(pool),
            renderer: Arc::new(DevRenderer),
        }
    }

    /// Swap in a different page renderer
    pub fn with_renderer(mut self, renderer: Arc<dyn PageRenderer>) -> Self {
        self.renderer = renderer;
        self
    }
}
