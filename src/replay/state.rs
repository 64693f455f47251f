//! 播放状态

use crate::time::Millis;

/// Stopped → Playing → Paused → Playing → … → Ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
    /// 播放到末尾（等价于停在最大时间处的暂停）
    Ended,
}

/// 播放开始（或恢复、跳转）时墙上时间与回放时间的对应关系。
/// 播放中的精确位置 = `at + (now - wall)`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackAnchor {
    pub wall: Millis,
    pub at: Millis,
}

impl PlaybackAnchor {
    pub fn position(&self, now: Millis) -> Millis {
        self.at.saturating_add(now.saturating_sub(self.wall))
    }
}
