//! 白板配置
//!
//! 所有字段都有默认值，JSON 中缺失的字段取默认。

use serde::{Deserialize, Serialize};

use crate::error::WhiteboardError;
use crate::time::Millis;

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 250;
pub const DEFAULT_ERASER_SIZE: u32 = 10;
pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_LINE_WIDTH: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhiteboardConfig {
    /// 回放时钟刷新间隔（毫秒）
    pub tick_interval_ms: u64,
    pub eraser_width: u32,
    pub eraser_height: u32,
    /// 初始化时写入日志的第一条描边颜色
    pub default_color: String,
    pub line_width: f64,
}

impl Default for WhiteboardConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            eraser_width: DEFAULT_ERASER_SIZE,
            eraser_height: DEFAULT_ERASER_SIZE,
            default_color: DEFAULT_COLOR.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl WhiteboardConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, WhiteboardError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn tick_interval(&self) -> Millis {
        // 间隔为 0 会让时钟定时器在同一时刻无限重排
        Millis(self.tick_interval_ms.max(1))
    }
}
