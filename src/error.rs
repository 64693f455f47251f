//! 错误类型
//!
//! 交互操作（绘图、播放控制）从不返回错误；只有保存、恢复和解码路径会失败。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WhiteboardError {
    /// 存储中取出的会话内嵌 ID 与请求的 ID 不一致
    #[error("session id mismatch: requested {requested}, stored {stored}")]
    SessionMismatch { requested: String, stored: String },

    #[error("session {0} not found")]
    SessionNotFound(String),

    #[error("invalid session id {0:?}: expected 11 ASCII alphanumeric characters")]
    InvalidSessionId(String),

    #[error("event {index} at {t_ms}ms precedes previous event at {prev_ms}ms")]
    NonMonotonic { index: usize, prev_ms: u64, t_ms: u64 },

    #[error("malformed session blob: {0}")]
    Decode(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
