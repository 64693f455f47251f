//! 界面命令
//!
//! 界面层通过 `Command` 驱动白板，取代按名字反射调用的方式。

use serde::{Deserialize, Serialize};

use crate::session::Whiteboard;
use crate::surface::Surface;
use crate::time::{Millis, WallClock};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    BeginDraw { x: f64, y: f64 },
    DrawTo { x: f64, y: f64 },
    EndDraw,
    BeginErase { x: f64, y: f64 },
    Erase { x: f64, y: f64 },
    Clear,
    SetColor { color: String },
    StartRecording,
    StopRecording,
    Play,
    Pause,
    Jump { t_ms: u64 },
}

impl<S: Surface, C: WallClock> Whiteboard<S, C> {
    pub fn dispatch(&mut self, cmd: &Command) {
        match cmd {
            Command::BeginDraw { x, y } => self.begin_draw(*x, *y),
            Command::DrawTo { x, y } => self.draw_to(*x, *y),
            Command::EndDraw => self.end_draw(),
            Command::BeginErase { x, y } => self.begin_erase(*x, *y),
            Command::Erase { x, y } => self.erase(*x, *y),
            Command::Clear => self.clear(),
            Command::SetColor { color } => self.set_color(color),
            Command::StartRecording => self.start_recording(),
            Command::StopRecording => self.stop_recording(),
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::Jump { t_ms } => self.jump(Millis(*t_ms)),
        }
    }
}
