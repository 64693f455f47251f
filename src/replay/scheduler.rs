//! 定时器调度器
//!
//! 单线程协作式模型：宿主调用 `pop_due(now)` 取出到期定时器并执行。
//! 每种定时器只有一个有效槽位；重新调度会先取消旧的，
//! 已取消的队列元素在出队时被丢弃，因此过期定时器永远不会触发。

use super::scheduled_timer::{ScheduledTimer, TimerKind};
use crate::time::Millis;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    seq: u64,
    at: Millis,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_seq: u64,
    q: BinaryHeap<ScheduledTimer>,
    apply_next: Option<Slot>,
    clock_tick: Option<Slot>,
}

impl Scheduler {
    fn slot(&self, kind: TimerKind) -> Option<Slot> {
        match kind {
            TimerKind::ApplyNext => self.apply_next,
            TimerKind::ClockTick => self.clock_tick,
        }
    }

    fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<Slot> {
        match kind {
            TimerKind::ApplyNext => &mut self.apply_next,
            TimerKind::ClockTick => &mut self.clock_tick,
        }
    }

    /// 在 `at` 调度一个定时器，替换同类的未决定时器。
    #[tracing::instrument(skip(self), fields(schedule_at = at.0))]
    pub fn schedule(&mut self, kind: TimerKind, at: Millis) {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);

        if let Some(old) = self.slot_mut(kind).replace(Slot { seq, at }) {
            trace!(old_seq = old.seq, "替换未决定时器");
        }
        self.q.push(ScheduledTimer { at, seq, kind });

        debug!(seq, queue_size = self.q.len(), "定时器已加入队列");
    }

    /// 取消某类定时器。对已触发或不存在的定时器是空操作。
    pub fn cancel(&mut self, kind: TimerKind) {
        *self.slot_mut(kind) = None;
    }

    /// 取消全部定时器。
    pub fn cancel_all(&mut self) {
        self.apply_next = None;
        self.clock_tick = None;
        self.q.clear();
    }

    /// 某类定时器的到期时间（若仍有效）。
    pub fn pending(&self, kind: TimerKind) -> Option<Millis> {
        self.slot(kind).map(|s| s.at)
    }

    /// 最早的有效到期时间。
    pub fn next_due(&self) -> Option<Millis> {
        match (self.apply_next, self.clock_tick) {
            (Some(a), Some(b)) => Some(a.at.min(b.at)),
            (Some(a), None) => Some(a.at),
            (None, Some(b)) => Some(b.at),
            (None, None) => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.apply_next.is_none() && self.clock_tick.is_none()
    }

    /// 弹出一个在 `now` 或之前到期的有效定时器，返回其种类和到期时间。
    pub fn pop_due(&mut self, now: Millis) -> Option<(TimerKind, Millis)> {
        while let Some(top) = self.q.peek() {
            if top.at > now {
                return None;
            }
            let item = self.q.pop()?;
            let live = self
                .slot(item.kind)
                .is_some_and(|s| s.seq == item.seq);
            if !live {
                trace!(seq = item.seq, "丢弃已取消的定时器");
                continue;
            }
            *self.slot_mut(item.kind) = None;
            return Some((item.kind, item.at));
        }
        None
    }
}
