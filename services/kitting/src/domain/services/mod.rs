//! 领域服务

pub mod bulk_import;
pub mod dashboard;
