//! 时间模块
//!
//! 录制时间（毫秒）以及可替换的墙上时钟。

mod clock;
mod millis;

pub use clock::{ManualClock, SystemClock, WallClock};
pub use millis::{Millis, format_clock};
