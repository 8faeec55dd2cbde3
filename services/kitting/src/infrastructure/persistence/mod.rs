//! PostgreSQL 持久化

mod connection;
mod postgres;
mod rows;

pub use connection::*;
pub use postgres::*;
