//! 墙上时钟
//!
//! 引擎从不直接读系统时间，而是通过 `WallClock` 取当前时刻，
//! 这样测试和命令行回放可以用 `ManualClock` 精确推进时间。

use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use super::Millis;

/// 当前墙上时间来源（毫秒，绝对值）。
pub trait WallClock {
    fn now(&self) -> Millis;
}

/// 系统时间（Unix 纪元起的毫秒数）。
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> Millis {
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Millis(ms)
    }
}

/// 手动推进的时钟。克隆体共享同一个时间值，
/// 调用方保留一份用于 `advance`，另一份交给白板会话。
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Rc::new(Cell::new(start.0)),
        }
    }

    pub fn set(&self, t: Millis) {
        self.now.set(t.0);
    }

    pub fn advance(&self, delta: Millis) {
        self.now.set(self.now.get().saturating_add(delta.0));
    }
}

impl WallClock for ManualClock {
    fn now(&self) -> Millis {
        Millis(self.now.get())
    }
}
