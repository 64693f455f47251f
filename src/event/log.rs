//! 追加式事件日志
//!
//! 不变量：按插入顺序，`t` 单调不减（允许相等）。

use tracing::trace;

use crate::error::WhiteboardError;
use crate::time::Millis;

use super::Event;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已保存的事件序列重建日志，校验时间单调性。
    pub fn from_events(events: Vec<Event>) -> Result<Self, WhiteboardError> {
        let mut log = EventLog::new();
        for ev in events {
            log.push(ev)?;
        }
        Ok(log)
    }

    /// 追加事件；若时间早于日志末尾则拒绝。
    pub fn push(&mut self, ev: Event) -> Result<usize, WhiteboardError> {
        let t = ev.t();
        if let Some(prev) = self.last_time() {
            if t < prev {
                return Err(WhiteboardError::NonMonotonic {
                    index: self.events.len(),
                    prev_ms: prev.0,
                    t_ms: t.0,
                });
            }
        }
        trace!(tag = ev.tag(), t = t.0, index = self.events.len(), "追加事件");
        self.events.push(ev);
        Ok(self.events.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Event> {
        self.events.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn last_time(&self) -> Option<Millis> {
        self.events.last().map(Event::t)
    }

    /// 第一个 `t >= at` 的事件下标；不存在时返回 `len()`。
    pub fn first_at_or_after(&self, at: Millis) -> usize {
        self.events.partition_point(|e| e.t() < at)
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
