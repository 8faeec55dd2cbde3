//! 领域实体

mod component;
mod order_line;
mod schedule;
mod user;

pub use component::*;
pub use order_line::*;
pub use schedule::*;
pub use user::*;
