//! 绘图表面
//!
//! 引擎只向表面写入，从不读取。任何提供路径与矩形擦除原语的 2D 画布都可以实现 `Surface`。

mod display_list;

pub use display_list::{DisplayList, DrawOp};

use crate::event::{Event, Point};

/// 绘图副作用的接收端。
pub trait Surface {
    fn begin_path(&mut self, at: Point);
    fn line_to(&mut self, to: Point);
    fn close_path(&mut self);
    fn clear_rect(&mut self, origin: Point, width: u32, height: u32);
    /// 清空整块表面（回放重建前调用）
    fn clear(&mut self);
    fn set_stroke_style(&mut self, color: &str);
}

/// 把一个事件的视觉效果作用到表面上。不触碰日志。
pub fn apply_event<S: Surface + ?Sized>(surface: &mut S, ev: &Event) {
    match ev {
        Event::BeginPath { point, .. } => surface.begin_path(*point),
        Event::DrawTo { point, .. } => surface.line_to(*point),
        Event::ClosePath { .. } => surface.close_path(),
        Event::Erase {
            point,
            width,
            height,
            ..
        } => surface.clear_rect(*point, *width, *height),
        Event::SetStrokeStyle { color, .. } => surface.set_stroke_style(color),
        Event::Clear { .. } => surface.clear(),
    }
}
