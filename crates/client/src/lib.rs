pub mod api;
pub mod config;
pub mod error;
pub mod flows;
pub mod links;
pub mod schedule;

pub use api::{AuthApi, HttpAuthApi};
pub use error::ApiError;
