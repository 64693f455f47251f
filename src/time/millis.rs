//! 录制时间类型
//!
//! 所有事件时间戳都以“录制开始后的毫秒数”表示。

use serde::{Deserialize, Serialize};

/// 录制时间（毫秒）。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    pub fn saturating_add(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_add(rhs.0))
    }

    /// 两个时间点之差；`rhs` 更晚时返回 0。
    pub fn saturating_sub(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_sub(rhs.0))
    }
}

/// 把毫秒格式化为 `M:SS`，用于界面上的已播放/总时长显示。
pub fn format_clock(t: Millis) -> String {
    let total_secs = t.0 / 1_000;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes}:{seconds:02}")
}
