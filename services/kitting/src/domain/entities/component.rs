//! 组件需求（物料清单行）

use serde::{Deserialize, Serialize};

/// 组件需求
///
/// 某个 SKU 的物料清单中的一行，从只读视图按 SKU 查询，应用侧不可变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRequirement {
    /// 组件名称
    pub name: String,
    /// 每件所需数量
    pub quantity_per_unit: u32,
}

impl ComponentRequirement {
    /// 订单行全部件数所需的组件总量（仅展示用，不参与完成度判定）
    pub fn required_total_pieces(&self, units: u32) -> u64 {
        self.quantity_per_unit as u64 * units as u64
    }
}
