//! Description Queries - 书籍描述查询

use crate::domain::{BookQuery, Description};

/// 查询书籍描述
#[derive(Debug, Clone)]
pub struct FetchDescription {
    pub query: BookQuery,
}

/// 描述查询结果
///
/// 书目信息只是增强项：`Missing` 与 `Degraded` 都以空描述继续后续流程，
/// 区分二者只为日志与测试可见。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionOutcome {
    /// 命中且有描述
    Found(Description),
    /// 服务正常，但没有结果或没有描述字段
    Missing,
    /// 服务不可用或响应异常，已在本地吞掉
    Degraded { reason: String },
}

impl DescriptionOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, DescriptionOutcome::Degraded { .. })
    }

    /// 转为下游使用的描述文本，非 `Found` 时为空
    pub fn into_description(self) -> Description {
        match self {
            DescriptionOutcome::Found(description) => description,
            DescriptionOutcome::Missing | DescriptionOutcome::Degraded { .. } => {
                Description::empty()
            }
        }
    }
}
