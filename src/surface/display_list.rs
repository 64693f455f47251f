//! 显示列表表面
//!
//! 不做光栅化，只记录自上次整屏清空以来的可见绘制操作。
//! 两个显示列表相等即表示两块画布的可见内容相同。

use serde::{Deserialize, Serialize};

use crate::event::Point;

use super::Surface;

/// 一条可见的绘制操作
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawOp {
    /// 一段已描边的线段
    Line {
        from: Point,
        to: Point,
        color: String,
        width: f64,
    },
    ClearRect {
        origin: Point,
        width: u32,
        height: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
    stroke_color: String,
    line_width: f64,
    current: Option<Point>,
    subpath_start: Option<Point>,
    clears: u64,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new(5.0)
    }
}

impl DisplayList {
    pub fn new(line_width: f64) -> Self {
        Self {
            ops: Vec::new(),
            stroke_color: "#000000".to_string(),
            line_width,
            current: None,
            subpath_start: None,
            clears: 0,
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn stroke_color(&self) -> &str {
        &self.stroke_color
    }

    /// 整屏清空的累计次数（用于观察回放是否走了全量重绘）
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }
}

impl Surface for DisplayList {
    fn begin_path(&mut self, at: Point) {
        self.current = Some(at);
        self.subpath_start = Some(at);
    }

    fn line_to(&mut self, to: Point) {
        // 没有当前点时 lineTo 等价于 moveTo（与 2D canvas 一致）
        if let Some(from) = self.current {
            self.ops.push(DrawOp::Line {
                from,
                to,
                color: self.stroke_color.clone(),
                width: self.line_width,
            });
        } else {
            self.subpath_start = Some(to);
        }
        self.current = Some(to);
    }

    fn close_path(&mut self) {
        self.current = self.subpath_start;
    }

    fn clear_rect(&mut self, origin: Point, width: u32, height: u32) {
        self.ops.push(DrawOp::ClearRect {
            origin,
            width,
            height,
        });
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.current = None;
        self.subpath_start = None;
        self.clears = self.clears.saturating_add(1);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.stroke_color = color.to_string();
    }
}
