//! 录制与绘图操作
//!
//! 绘图操作只在录制中生效；未录制时静默忽略，调用方无需特判。

use tracing::{debug, info};

use crate::event::{Event, Point};
use crate::replay::PlaybackState;
use crate::surface::Surface;
use crate::time::{Millis, WallClock};

use super::Whiteboard;

impl<S: Surface, C: WallClock> Whiteboard<S, C> {
    /// 开始（或继续）录制。
    ///
    /// 录制只允许追加：若正在回放或停在中途，先暂停并把画面补到日志末尾。
    /// 画笔颜色与日志中最后生效的颜色不同时，在录制起点补一条颜色事件。
    pub fn start_recording(&mut self) {
        if self.recorder.is_recording() {
            return;
        }
        if self.is_playing() {
            self.pause();
        }
        self.scheduler.cancel_all();
        if !self.synced || self.cursor < self.log.len() {
            self.redraw_to(None);
        }
        let now = self.clock.now();
        self.recorder.start(now);
        self.state = PlaybackState::Stopped;

        // 回放期间选中的颜色只改了画笔，这里补记到日志里
        let logged = self.log.iter().rev().find_map(|ev| match ev {
            Event::SetStrokeStyle { color, .. } => Some(color.as_str()),
            _ => None,
        });
        if logged != Some(self.stroke_color.as_str()) {
            let t = self.recorder.elapsed(now);
            let color = self.stroke_color.clone();
            debug!(color = %color, t = t.0, "补记画笔颜色");
            self.apply_and_append(Event::SetStrokeStyle { color, t });
        }
        info!(events = self.log.len(), "开始录制");
    }

    /// 停止录制；回放时钟停在录制末尾。
    pub fn stop_recording(&mut self) {
        let now = self.clock.now();
        if let Some(elapsed) = self.recorder.stop(now) {
            self.playback_clock = elapsed;
            info!(elapsed_ms = elapsed.0, events = self.log.len(), "停止录制");
        }
    }

    /// 录制中：以当前录制时间构造事件，立即绘制并追加。
    fn record(&mut self, make: impl FnOnce(Millis) -> Event) {
        if !self.recorder.is_recording() {
            debug!("未在录制，忽略绘图操作");
            return;
        }
        let now = self.clock.now();
        let t = self.recorder.elapsed(now);
        self.apply_and_append(make(t));
    }

    pub fn begin_draw(&mut self, x: f64, y: f64) {
        self.record(|t| Event::BeginPath {
            point: Point::new(x, y),
            t,
        });
    }

    pub fn draw_to(&mut self, x: f64, y: f64) {
        self.record(|t| Event::DrawTo {
            point: Point::new(x, y),
            t,
        });
    }

    pub fn end_draw(&mut self) {
        self.record(|t| Event::ClosePath { t });
    }

    /// 橡皮擦同样以一条新路径开始。
    pub fn begin_erase(&mut self, x: f64, y: f64) {
        self.record(|t| Event::BeginPath {
            point: Point::new(x, y),
            t,
        });
    }

    pub fn erase(&mut self, x: f64, y: f64) {
        let (width, height) = (self.config.eraser_width, self.config.eraser_height);
        self.record(|t| Event::Erase {
            point: Point::new(x, y),
            width,
            height,
            t,
        });
    }

    pub fn clear(&mut self) {
        self.record(|t| Event::Clear { t });
    }

    /// 切换画笔颜色。
    ///
    /// 与当前颜色相同则忽略。回放中只更新画笔颜色，既不写表面也不记日志；
    /// 其他情况下无论是否录制都记入日志，未录制时时间戳为冻结的录制时长，
    /// 即下一次开始录制的时刻。
    pub fn set_color(&mut self, color: &str) {
        if color == self.stroke_color {
            debug!(color, "颜色未变化，忽略");
            return;
        }
        self.stroke_color = color.to_string();
        if self.is_playing() {
            debug!(color, "回放中，仅更新画笔颜色");
            return;
        }
        let now = self.clock.now();
        let t = self.recorder.elapsed(now);
        self.apply_and_append(Event::SetStrokeStyle {
            color: color.to_string(),
            t,
        });
    }
}
