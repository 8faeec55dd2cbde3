//! 物料清单仓储接口

use async_trait::async_trait;
use kitting_errors::AppResult;

use crate::domain::entities::ComponentRequirement;

/// 物料清单仓储接口
///
/// 按 SKU 从只读视图查询组件需求，应用侧不写入。
#[async_trait]
pub trait ManifestRepository: Send + Sync {
    /// 某个 SKU 的组件清单，无记录时返回空列表
    async fn find_by_sku(&self, sku: &str) -> AppResult<Vec<ComponentRequirement>>;
}
