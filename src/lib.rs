pub mod app;
pub mod date;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
