//! 值对象

mod checklist;
mod password;

pub use checklist::*;
pub use password::*;
