//! 拣配核对清单状态
//!
//! N 个组件 × U 件的勾选网格。纯内存状态，由查看会话独占，
//! 每次进入页面重建，从不持久化。完成度是推导值，不存储。

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// 核对清单状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistState {
    components: usize,
    units: u32,
    checked: HashSet<(usize, u32)>,
}

impl ChecklistState {
    /// 新建空网格
    pub fn new(components: usize, units: u32) -> Self {
        Self {
            components,
            units,
            checked: HashSet::new(),
        }
    }

    pub fn components(&self) -> usize {
        self.components
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    /// 勾选 / 取消单个格子
    ///
    /// 网格外的坐标直接忽略。
    pub fn set_checked(&mut self, component: usize, unit: u32, checked: bool) {
        if component >= self.components || unit >= self.units {
            return;
        }
        if checked {
            self.checked.insert((component, unit));
        } else {
            self.checked.remove(&(component, unit));
        }
    }

    pub fn is_checked(&self, component: usize, unit: u32) -> bool {
        self.checked.contains(&(component, unit))
    }

    /// 整行勾选 / 取消：只影响第 `component` 行的 U 个格子
    pub fn set_component(&mut self, component: usize, checked: bool) {
        if component >= self.components {
            return;
        }
        for unit in 0..self.units {
            self.set_checked(component, unit, checked);
        }
    }

    /// 全部勾选 / 取消
    pub fn set_all(&mut self, checked: bool) {
        if checked {
            for component in 0..self.components {
                for unit in 0..self.units {
                    self.checked.insert((component, unit));
                }
            }
        } else {
            self.checked.clear();
        }
    }

    /// 应勾选总数 = N × U
    pub fn expected_checks(&self) -> u64 {
        self.components as u64 * self.units as u64
    }

    /// 当前已勾选数
    pub fn current_checks(&self) -> u64 {
        self.checked.len() as u64
    }

    /// 完成比例，空网格时为 0 而不是 NaN
    pub fn completion_ratio(&self) -> f64 {
        let expected = self.expected_checks();
        if expected == 0 {
            return 0.0;
        }
        self.current_checks() as f64 / expected as f64
    }

    /// 是否全部完成
    ///
    /// 空网格（N 或 U 为 0）永远不算完成。
    pub fn is_complete(&self) -> bool {
        let expected = self.expected_checks();
        expected > 0 && self.current_checks() == expected
    }

    pub fn summary(&self) -> ChecklistSummary {
        ChecklistSummary {
            expected_checks: self.expected_checks(),
            current_checks: self.current_checks(),
        }
    }
}

/// 核对清单摘要
///
/// 标记预拣配 / 核验完成的请求体携带的客户端计算结果。写入时不再
/// 对照物料清单复核，只校验摘要自身的完成条件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSummary {
    pub expected_checks: u64,
    pub current_checks: u64,
}

impl ChecklistSummary {
    pub fn is_complete(&self) -> bool {
        self.expected_checks > 0 && self.current_checks == self.expected_checks
    }
}

impl From<&ChecklistState> for ChecklistSummary {
    fn from(state: &ChecklistState) -> Self {
        state.summary()
    }
}
