//! 录制模块
//!
//! 录制时钟：把多段“开始/停止”的录制拼接成一条连续时间轴。

mod clock;

pub use clock::RecordingClock;
