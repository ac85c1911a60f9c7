//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 图操作错误
///
/// 所有变体都是可恢复的结果：任何一次失败调用之后图仍然可以继续使用。
#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("顶点已存在: {0}")]
    VertexAlreadyExists(String),

    #[error("边不存在: <{from},{to}>")]
    EdgeNotFound { from: String, to: String },

    #[error("边已存在: <{from},{to}>")]
    EdgeAlreadyExists { from: String, to: String },

    #[error("端点不存在: <{from},{to}>")]
    EndpointMissing { from: String, to: String },

    #[error("起点不存在: {0}")]
    SourceNotFound(String),

    #[error("终点不存在: {0}")]
    TargetNotFound(String),

    #[error("路径不存在: {from} -> {to}")]
    NoPathExists { from: String, to: String },

    #[error("存在负权边: <{from},{to}>")]
    NegativeWeight { from: String, to: String },

    #[error("路径长度溢出: <{from},{to}>")]
    WeightOverflow { from: String, to: String },

    #[error("检测到负权环: 起点 {0}")]
    NegativeCycleDetected(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn edge_not_found(from: impl ToString, to: impl ToString) -> Self {
        Error::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub(crate) fn edge_exists(from: impl ToString, to: impl ToString) -> Self {
        Error::EdgeAlreadyExists {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub(crate) fn endpoint_missing(from: impl ToString, to: impl ToString) -> Self {
        Error::EndpointMissing {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub(crate) fn weight_overflow(from: impl ToString, to: impl ToString) -> Self {
        Error::WeightOverflow {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// 是否为"顶点不存在"类错误（包括起点/终点不存在）
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::VertexNotFound(_) | Error::SourceNotFound(_) | Error::TargetNotFound(_)
        )
    }
}
