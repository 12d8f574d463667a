pub mod config;
pub mod config_manager;
pub mod routes;
pub mod state;
pub mod translate;

pub use config::Config;
pub use routes::build_router;
pub use state::AppState;
