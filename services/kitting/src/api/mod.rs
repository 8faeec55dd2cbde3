//! HTTP API 层

mod auth;
mod dto;
mod middleware;
mod routes;
mod state;

pub use middleware::AuthClaims;
pub use routes::app_router;
pub use state::AppState;
