pub mod assistant;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod observability;
pub mod routes;
pub mod view;

pub use config::Config;
pub use routes::AppState;
