pub mod config;
pub mod error;
pub mod observability;
pub mod plan;

pub use config::Config;
pub use error::AppError;
