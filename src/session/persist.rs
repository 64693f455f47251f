//! 保存与恢复

use tracing::{info, warn};

use crate::codec::{self, SavedSession};
use crate::error::WhiteboardError;
use crate::event::EventLog;
use crate::record::RecordingClock;
use crate::replay::PlaybackState;
use crate::store::{SessionId, SessionStore};
use crate::surface::Surface;
use crate::time::{Millis, WallClock};

use super::Whiteboard;

impl<S: Surface, C: WallClock> Whiteboard<S, C> {
    /// 会话 ID，首次调用时生成。
    pub fn ensure_session_id(&mut self) -> SessionId {
        self.session_id
            .get_or_insert_with(SessionId::generate)
            .clone()
    }

    /// 当前会话的快照。
    pub fn snapshot(&mut self) -> SavedSession {
        let id = self.ensure_session_id();
        let now = self.clock.now();
        SavedSession {
            unique_id: Some(id),
            recording_time: self.recorder.elapsed(now),
            subtract_time: self.recorder.subtract(),
            last_end_time: self.recorder.last_stop(),
            stroke_color: self.stroke_color.clone(),
            events: self.log.as_slice().to_vec(),
        }
    }

    /// 编码为紧凑文本。
    pub fn serialize(&mut self) -> Result<String, WhiteboardError> {
        codec::encode(&self.snapshot())
    }

    /// 用保存的快照替换当前会话：日志、录制时钟、画笔颜色与会话 ID。
    /// 回放回到起点，表面被清空。
    pub fn load(&mut self, saved: SavedSession) -> Result<(), WhiteboardError> {
        let log = EventLog::from_events(saved.events)?;

        self.scheduler.cancel_all();
        self.log = log;
        self.recorder = RecordingClock::restore(
            saved.recording_time,
            saved.subtract_time,
            saved.last_end_time,
        );
        self.stroke_color = saved.stroke_color;
        self.session_id = saved.unique_id;
        self.surface.clear();
        self.cursor = 0;
        self.synced = true;
        self.playback_clock = Millis::ZERO;
        self.anchor = None;
        self.state = PlaybackState::Stopped;
        info!(
            events = self.log.len(),
            recording_ms = self.recorder.recorded().0,
            "会话已载入"
        );
        Ok(())
    }

    /// 解码文本并载入。
    pub fn deserialize(&mut self, blob: &str) -> Result<(), WhiteboardError> {
        self.load(codec::decode(blob)?)
    }

    /// 编码并写入存储，返回会话 ID。
    pub fn save<T: SessionStore + ?Sized>(
        &mut self,
        store: &mut T,
    ) -> Result<SessionId, WhiteboardError> {
        let id = self.ensure_session_id();
        let blob = self.serialize()?;
        store.put(&id, &blob)?;
        info!(id = %id, bytes = blob.len(), "会话已保存");
        Ok(id)
    }

    /// 从存储中恢复 `id` 对应的会话。内嵌 ID 与 `id` 不一致时拒绝，当前会话保持不变。
    pub fn restore<T: SessionStore + ?Sized>(
        &mut self,
        store: &T,
        id: &SessionId,
    ) -> Result<(), WhiteboardError> {
        let blob = store
            .get(id)?
            .ok_or_else(|| WhiteboardError::SessionNotFound(id.to_string()))?;
        let saved = codec::decode(&blob)?;
        if saved.unique_id.as_ref() != Some(id) {
            let stored = saved
                .unique_id
                .as_ref()
                .map(SessionId::to_string)
                .unwrap_or_default();
            warn!(requested = %id, stored = %stored, "会话 ID 不一致，拒绝恢复");
            return Err(WhiteboardError::SessionMismatch {
                requested: id.to_string(),
                stored,
            });
        }
        self.load(saved)
    }
}
