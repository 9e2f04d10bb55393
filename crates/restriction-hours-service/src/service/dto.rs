//! 服务层数据传输对象

use serde::Serialize;

/// 批量删除结果
///
/// 未删除的条目（不存在、缺少组合键等）不计入 `deleted_count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteOutcome {
    pub deleted_count: usize,
    pub total_requested: usize,
}

impl BatchDeleteOutcome {
    /// 是否全部删除成功
    pub fn is_complete(&self) -> bool {
        self.deleted_count == self.total_requested
    }
}
