//! 回放模块
//!
//! 此模块包含回放所需的定时器调度器与播放状态机。
//! 会话本身（`session::Whiteboard`）驱动这些组件。

mod scheduled_timer;
mod scheduler;
mod state;

pub use scheduled_timer::TimerKind;
pub use scheduler::Scheduler;
pub use state::{PlaybackAnchor, PlaybackState};
