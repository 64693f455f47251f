//! 重绘与定时回放
//!
//! 每个状态转换（play/pause/jump）都先同步取消全部未决定时器，再调度新的，
//! 保证任意时刻最多只有一个“执行下一事件”定时器和一个时钟定时器。

use tracing::{debug, info, trace};

use crate::replay::{PlaybackAnchor, PlaybackState, TimerKind};
use crate::surface::{Surface, apply_event};
use crate::time::{Millis, WallClock};

use super::Whiteboard;

impl<S: Surface, C: WallClock> Whiteboard<S, C> {
    /// 把表面重建为 `t < target` 的全部事件（`None` 表示全部事件）依次执行后的状态，
    /// 游标停在第一个未执行的事件上。
    ///
    /// 若表面已同步且游标之前的事件都早于目标时间，则从游标处继续向前执行；
    /// 否则清空表面从头重放。
    pub fn redraw_to(&mut self, target: Option<Millis>) {
        let forward = self.synced
            && match target {
                None => true,
                Some(t) => {
                    self.cursor == 0 || self.log.get(self.cursor - 1).is_some_and(|e| e.t() < t)
                }
            };
        if !forward {
            self.surface.clear();
            self.cursor = 0;
        }

        let end = match target {
            None => self.log.len(),
            Some(t) => self.log.first_at_or_after(t),
        };
        let start = self.cursor.min(end);
        for ev in &self.log.as_slice()[start..end] {
            apply_event(&mut self.surface, ev);
        }
        trace!(
            target_ms = target.map(|t| t.0),
            forward,
            from = start,
            to = end,
            "重绘完成"
        );
        self.cursor = end;
        self.synced = true;
    }

    /// 开始或继续回放。
    ///
    /// 回放时钟已在末尾时从头播放；否则先把画面补到回放时钟，再从游标处继续，
    /// 第一个事件在 `events[cursor].t - playback_clock` 之后执行。
    pub fn play(&mut self) {
        if self.recorder.is_recording() {
            debug!("录制中，忽略播放");
            return;
        }
        if self.is_playing() {
            return;
        }
        if self.log.is_empty() {
            debug!("日志为空，忽略播放");
            return;
        }
        self.scheduler.cancel_all();
        let now = self.clock.now();

        if self.at_end() {
            self.animate(now);
            return;
        }
        // 补上回放时钟之前尚未执行的事件
        self.redraw_to(Some(self.playback_clock));
        info!(
            cursor = self.cursor,
            at_ms = self.playback_clock.0,
            "继续回放"
        );
        self.start_playing(now);
    }

    /// 从头播放：清空表面，游标与回放时钟归零。
    fn animate(&mut self, now: Millis) {
        info!(events = self.log.len(), "从头回放");
        self.surface.clear();
        self.cursor = 0;
        self.synced = true;
        self.playback_clock = Millis::ZERO;
        self.start_playing(now);
    }

    fn start_playing(&mut self, now: Millis) {
        self.state = PlaybackState::Playing;
        self.anchor = Some(PlaybackAnchor {
            wall: now,
            at: self.playback_clock,
        });
        if let Some(ev) = self.log.get(self.cursor) {
            let delay = ev.t().saturating_sub(self.playback_clock);
            self.scheduler
                .schedule(TimerKind::ApplyNext, now.saturating_add(delay));
        }
        let tick = self.config.tick_interval();
        self.scheduler
            .schedule(TimerKind::ClockTick, now.saturating_add(tick));
    }

    /// 暂停：取消全部定时器，冻结回放时钟。
    pub fn pause(&mut self) {
        self.scheduler.cancel_all();
        if !self.is_playing() {
            return;
        }
        self.playback_clock = self.position();
        self.anchor = None;
        self.state = PlaybackState::Paused;
        info!(
            cursor = self.cursor,
            at_ms = self.playback_clock.0,
            "已暂停"
        );
    }

    /// 跳转到 `target`。超出录制末尾时夹到末尾并显示完整画面。
    /// 跳转前正在播放则从新位置继续播放。
    pub fn jump(&mut self, target: Millis) {
        if self.recorder.is_recording() {
            debug!("录制中，忽略跳转");
            return;
        }
        self.scheduler.cancel_all();
        let was_playing = self.is_playing();
        let now = self.clock.now();
        let end = self.recorder.recorded();

        if target >= end {
            debug!(target_ms = target.0, end_ms = end.0, "跳转位置夹到录制末尾");
            self.redraw_to(None);
            self.playback_clock = end;
        } else {
            self.redraw_to(Some(target));
            self.playback_clock = target;
        }
        self.anchor = None;

        if self.at_end() {
            self.state = PlaybackState::Ended;
        } else if was_playing {
            self.start_playing(now);
        } else {
            self.state = PlaybackState::Paused;
        }
    }

    /// 执行所有在当前墙上时间之前到期的定时器，返回触发的数量。
    ///
    /// 宿主应在每个定时器回调/每帧调用。
    pub fn poll(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some((kind, at)) = self.scheduler.pop_due(now) {
            fired += 1;
            match kind {
                TimerKind::ApplyNext => self.on_apply_next(at),
                TimerKind::ClockTick => self.on_clock_tick(at),
            }
        }
        fired
    }

    /// 执行游标处的事件，并按与下一个事件的时间差调度下一次执行。
    fn on_apply_next(&mut self, at: Millis) {
        let Some(ev) = self.log.get(self.cursor) else {
            return;
        };
        let prev_t = ev.t();
        apply_event(&mut self.surface, ev);
        trace!(index = self.cursor, t = prev_t.0, due = at.0, "回放事件");
        self.cursor += 1;

        if let Some(next) = self.log.get(self.cursor) {
            let delta = next.t().saturating_sub(prev_t);
            self.scheduler
                .schedule(TimerKind::ApplyNext, at.saturating_add(delta));
        }
    }

    /// 刷新回放时钟；到达末尾时执行剩余事件并结束播放。
    fn on_clock_tick(&mut self, at: Millis) {
        let end = self.recorder.recorded();
        let position = self
            .anchor
            .map(|a| a.position(at))
            .unwrap_or(self.playback_clock)
            .min(end);
        self.playback_clock = position;

        if position >= end {
            self.finish();
        } else {
            let tick = self.config.tick_interval();
            self.scheduler
                .schedule(TimerKind::ClockTick, at.saturating_add(tick));
        }
    }

    fn finish(&mut self) {
        self.scheduler.cancel_all();
        let len = self.log.len();
        for ev in &self.log.as_slice()[self.cursor.min(len)..] {
            apply_event(&mut self.surface, ev);
        }
        self.cursor = len;
        self.playback_clock = self.recorder.recorded();
        self.anchor = None;
        self.state = PlaybackState::Ended;
        info!(at_ms = self.playback_clock.0, "回放结束");
    }
}
