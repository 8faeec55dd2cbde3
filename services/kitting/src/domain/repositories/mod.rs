//! 仓储接口

mod manifest_repository;
mod order_line_repository;
mod schedule_repository;
mod user_repository;

pub use manifest_repository::*;
pub use order_line_repository::*;
pub use schedule_repository::*;
pub use user_repository::*;
