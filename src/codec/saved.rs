//! 保存的会话快照

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::store::SessionId;
use crate::time::Millis;

/// 序列化字段（按顺序）：`uniqueID, recordingTime, subtractTime, lastEndTime, strokeColor, events`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSession {
    #[serde(rename = "uniqueID", default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<SessionId>,
    /// 已录制总时长，也是回放滑块的最大值
    pub recording_time: Millis,
    pub subtract_time: Millis,
    pub last_end_time: Millis,
    /// 保存时画笔颜色
    pub stroke_color: String,
    pub events: Vec<Event>,
}
