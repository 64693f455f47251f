//! 录制时钟
//!
//! `elapsed = now - subtract`，其中 `subtract` 累计了录制开始前的纪元偏移以及
//! 每次暂停的时长。停止期间返回冻结值。

use tracing::debug;

use crate::time::Millis;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingClock {
    recording: bool,
    /// 从墙上时间中扣除的累计量
    subtract: Millis,
    /// 上次停止录制时的墙上时间
    last_stop: Millis,
    /// 最近一次计算（或冻结）的已录制时长
    elapsed: Millis,
}

impl RecordingClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用保存的三元组恢复时钟（处于停止状态）。
    pub fn restore(elapsed: Millis, subtract: Millis, last_stop: Millis) -> Self {
        Self {
            recording: false,
            subtract,
            last_stop,
            elapsed,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn subtract(&self) -> Millis {
        self.subtract
    }

    pub fn last_stop(&self) -> Millis {
        self.last_stop
    }

    /// 开始录制。已经在录制时返回 false 且不做任何修改。
    pub fn start(&mut self, now: Millis) -> bool {
        if self.recording {
            return false;
        }
        let gap = now.saturating_sub(self.last_stop);
        self.subtract = self.subtract.saturating_add(gap);
        self.recording = true;
        debug!(now = now.0, gap_ms = gap.0, subtract_ms = self.subtract.0, "开始录制");
        true
    }

    /// 停止录制并冻结已录制时长。未在录制时返回 None。
    pub fn stop(&mut self, now: Millis) -> Option<Millis> {
        if !self.recording {
            return None;
        }
        let elapsed = self.elapsed(now);
        self.recording = false;
        self.last_stop = now;
        debug!(now = now.0, elapsed_ms = elapsed.0, "停止录制");
        Some(elapsed)
    }

    /// 当前已录制时长：录制中随墙上时间单调增长，停止时保持不变。
    pub fn elapsed(&mut self, now: Millis) -> Millis {
        if self.recording {
            // 墙上时间回拨时保持不减
            self.elapsed = self.elapsed.max(now.saturating_sub(self.subtract));
        }
        self.elapsed
    }

    /// 最近一次观测到的时长，不读取时钟。
    pub fn recorded(&self) -> Millis {
        self.elapsed
    }
}
