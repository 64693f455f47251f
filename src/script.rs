//! 定时命令脚本
//!
//! 无界面环境下（命令行、测试）按时间顺序把命令喂给白板，
//! 用 `ManualClock` 模拟墙上时间。

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::command::Command;
use crate::error::WhiteboardError;
use crate::session::Whiteboard;
use crate::surface::Surface;
use crate::time::{ManualClock, Millis, WallClock};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// 墙上时间（毫秒，相对脚本开始）
    pub at_ms: u64,
    #[serde(flatten)]
    pub command: Command,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_json_str(raw: &str) -> Result<Self, WhiteboardError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn end_ms(&self) -> u64 {
        self.steps.iter().map(|s| s.at_ms).max().unwrap_or(0)
    }
}

/// 依次执行脚本步骤：推进时钟、触发到期定时器、派发命令。
///
/// 时间早于当前时钟的步骤按当前时间执行。
pub fn run_script<S: Surface>(wb: &mut Whiteboard<S, ManualClock>, script: &Script) {
    let origin = wb.clock().now();
    for step in &script.steps {
        let at = origin.saturating_add(Millis(step.at_ms));
        let now = wb.clock().now();
        if at < now {
            warn!(at_ms = step.at_ms, "脚本步骤时间倒退，按当前时间执行");
        } else {
            wb.clock().set(at);
        }
        wb.poll();
        debug!(at_ms = step.at_ms, command = ?step.command, "执行脚本步骤");
        wb.dispatch(&step.command);
    }
    wb.poll();
}

/// 把时钟推进到 `until`（绝对时间），每个刷新间隔触发一次到期定时器。
/// 返回触发的定时器总数。
pub fn advance_to<S: Surface>(wb: &mut Whiteboard<S, ManualClock>, until: Millis) -> usize {
    let mut fired = wb.poll();
    while let Some(due) = wb.scheduler().next_due() {
        if due > until {
            break;
        }
        if due > wb.clock().now() {
            wb.clock().set(due);
        }
        fired += wb.poll();
    }
    if wb.clock().now() < until {
        wb.clock().set(until);
    }
    fired + wb.poll()
}
