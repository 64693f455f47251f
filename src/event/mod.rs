//! 绘图事件模块
//!
//! 白板会话的唯一事实来源：带时间戳的绘图事件及其追加式日志。

mod log;
mod types;

pub use log::EventLog;
pub use types::{Event, Point};
