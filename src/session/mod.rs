//! 白板会话
//!
//! `Whiteboard` 是显式的会话对象：独占事件日志、回放游标、录制时钟与定时器调度器，
//! 并把绘图副作用写入宿主提供的 `Surface`。多个会话之间互不影响。
//!
//! 实现分散在几个文件中：
//! - `draw`：录制与绘图操作
//! - `playback`：重绘/跳转与定时回放
//! - `persist`：保存与恢复

mod draw;
mod persist;
mod playback;

use tracing::debug;

use crate::config::{DEFAULT_COLOR, WhiteboardConfig};
use crate::event::{Event, EventLog};
use crate::record::RecordingClock;
use crate::replay::{PlaybackAnchor, PlaybackState, Scheduler};
use crate::store::SessionId;
use crate::surface::{Surface, apply_event};
use crate::time::{Millis, WallClock};

pub struct Whiteboard<S: Surface, C: WallClock> {
    config: WhiteboardConfig,
    surface: S,
    clock: C,
    recorder: RecordingClock,
    log: EventLog,
    /// 下一个尚未执行的事件下标
    cursor: usize,
    /// 表面是否恰好等于“清空后依次执行 log[..cursor]”
    synced: bool,
    state: PlaybackState,
    playback_clock: Millis,
    anchor: Option<PlaybackAnchor>,
    scheduler: Scheduler,
    /// 当前画笔颜色（界面上选中的颜色）
    stroke_color: String,
    session_id: Option<SessionId>,
}

impl<S: Surface, C: WallClock> Whiteboard<S, C> {
    /// 绑定表面并写入初始描边颜色事件（t=0）。
    pub fn new(surface: S, clock: C, config: WhiteboardConfig) -> Self {
        let mut wb = Self {
            surface,
            clock,
            recorder: RecordingClock::new(),
            log: EventLog::new(),
            cursor: 0,
            synced: true,
            state: PlaybackState::Stopped,
            playback_clock: Millis::ZERO,
            anchor: None,
            scheduler: Scheduler::default(),
            stroke_color: String::new(),
            session_id: None,
            config,
        };
        let color = if wb.config.default_color.is_empty() {
            DEFAULT_COLOR.to_string()
        } else {
            wb.config.default_color.clone()
        };
        wb.set_color(&color);
        debug!(color = %color, "白板已初始化");
        wb
    }

    pub fn config(&self) -> &WhiteboardConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn events(&self) -> &EventLog {
        &self.log
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_recording()
    }

    pub fn stroke_color(&self) -> &str {
        &self.stroke_color
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// 已录制总时长（录制中实时增长）。
    pub fn recording_elapsed(&mut self) -> Millis {
        let now = self.clock.now();
        self.recorder.elapsed(now)
    }

    /// 最近一次刷新的回放时钟（界面显示用）。
    pub fn playback_clock(&self) -> Millis {
        self.playback_clock
    }

    /// 精确的回放位置：播放中按墙上时间推算，否则等于回放时钟。
    pub fn position(&self) -> Millis {
        match (self.state, self.anchor) {
            (PlaybackState::Playing, Some(anchor)) => {
                anchor.position(self.clock.now()).min(self.recorder.recorded())
            }
            _ => self.playback_clock,
        }
    }

    /// 回放时钟已到达录制末尾。
    pub fn at_end(&self) -> bool {
        self.playback_clock >= self.recorder.recorded()
    }

    /// 执行一个事件并追加到日志，维护游标与同步标记。
    fn apply_and_append(&mut self, ev: Event) {
        apply_event(&mut self.surface, &ev);
        let tail = self.synced && self.cursor == self.log.len();
        match self.log.push(ev) {
            Ok(_) if tail => self.cursor = self.log.len(),
            Ok(_) => self.synced = false,
            Err(e) => {
                tracing::warn!(error = %e, "事件未追加");
                self.synced = false;
            }
        }
    }
}
