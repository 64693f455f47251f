//! 调度中的定时器
//!
//! 定义定时器种类以及按到期时间排序的队列元素。

use crate::time::Millis;
use std::cmp::Ordering;

/// 回放期间允许存在的两类定时器，每类最多一个。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// 执行游标处的下一个事件
    ApplyNext,
    /// 周期性刷新回放时钟（仅用于界面显示）
    ClockTick,
}

/// 队列元素：到期时间、序列号和种类。
#[derive(Debug)]
pub(crate) struct ScheduledTimer {
    pub(crate) at: Millis,
    pub(crate) seq: u64,
    pub(crate) kind: TimerKind,
}

// BinaryHeap 是 max-heap；最早到期的优先，同一时刻按调度顺序。
impl Ord for ScheduledTimer {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.at.cmp(&other.at) {
            Ordering::Equal => self.seq.cmp(&other.seq),
            ord => ord,
        }
        .reverse()
    }
}

impl PartialOrd for ScheduledTimer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScheduledTimer {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}

impl Eq for ScheduledTimer {}
