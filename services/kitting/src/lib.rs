//! Kitting Service
//!
//! 家具厂拣配流程服务：生产日程、预拣配与核验队列、物料核对清单。

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
