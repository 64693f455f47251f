//! 事件类型
//!
//! 序列化字段沿用保存格式：`type` 单字母标签、`coord: [x, y]`、`time`。

use serde::{Deserialize, Serialize};

use crate::time::Millis;

/// 画布坐标。序列化为 `[x, y]`。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// 一个绘图事件。`t` 为录制开始后的毫秒数。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// 开始一条新路径（画笔与橡皮擦都以此开始）
    #[serde(rename = "b")]
    BeginPath {
        #[serde(rename = "coord")]
        point: Point,
        #[serde(rename = "time")]
        t: Millis,
    },
    /// 从当前路径末端连线到 `point`
    #[serde(rename = "d")]
    DrawTo {
        #[serde(rename = "coord")]
        point: Point,
        #[serde(rename = "time")]
        t: Millis,
    },
    #[serde(rename = "c")]
    ClosePath {
        #[serde(rename = "time")]
        t: Millis,
    },
    /// 擦除以 `point` 为左上角的矩形
    #[serde(rename = "e")]
    Erase {
        #[serde(rename = "coord")]
        point: Point,
        width: u32,
        height: u32,
        #[serde(rename = "time")]
        t: Millis,
    },
    #[serde(rename = "s")]
    SetStrokeStyle {
        color: String,
        #[serde(rename = "time")]
        t: Millis,
    },
    /// 清空整块画布
    #[serde(rename = "l")]
    Clear {
        #[serde(rename = "time")]
        t: Millis,
    },
}

impl Event {
    pub fn t(&self) -> Millis {
        match self {
            Event::BeginPath { t, .. }
            | Event::DrawTo { t, .. }
            | Event::ClosePath { t }
            | Event::Erase { t, .. }
            | Event::SetStrokeStyle { t, .. }
            | Event::Clear { t } => *t,
        }
    }

    /// 单字母类型标签（与保存格式一致），用于日志输出。
    pub fn tag(&self) -> &'static str {
        match self {
            Event::BeginPath { .. } => "b",
            Event::DrawTo { .. } => "d",
            Event::ClosePath { .. } => "c",
            Event::Erase { .. } => "e",
            Event::SetStrokeStyle { .. } => "s",
            Event::Clear { .. } => "l",
        }
    }
}
