pub mod app;
pub mod config;
pub mod dataset;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod trend;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::ServerConfig;
pub use dataset::RAW_RECORDS;
pub use errors::{AppError, GrowthError};
pub use state::AppState;
pub use view::ViewController;
