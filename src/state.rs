use crate::models::{RawRecord, ViewMode};
use crate::view::ViewController;

/// Shared, read-only server state. Each page carries its own mode in the
/// request, so nothing here changes after startup.
#[derive(Clone)]
pub struct AppState {
    pub records: &'static [RawRecord],
    pub default_mode: ViewMode,
}

impl AppState {
    pub fn new(records: &'static [RawRecord], default_mode: ViewMode) -> Self {
        Self {
            records,
            default_mode,
        }
    }

    /// Controller for one request, switched to `requested` when given.
    pub fn controller(&self, requested: Option<ViewMode>) -> ViewController {
        let mut controller = ViewController::new(self.default_mode);
        if let Some(mode) = requested {
            controller.select(mode);
        }
        controller
    }
}
