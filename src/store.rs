//! 会话存储
//!
//! 以 11 位随机 ID 为键保存编码后的会话。存储后端由宿主决定，
//! 这里提供内存实现和“每个会话一个文件”的目录实现。

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::WhiteboardError;

pub const SESSION_ID_LEN: usize = 11;

/// 会话 ID：11 个大小写混合的字母数字字符。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        let id = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_ID_LEN)
            .map(char::from)
            .collect();
        SessionId(id)
    }

    pub fn parse(raw: &str) -> Result<Self, WhiteboardError> {
        if raw.len() == SESSION_ID_LEN && raw.bytes().all(|b| b.is_ascii_alphanumeric()) {
            Ok(SessionId(raw.to_string()))
        } else {
            Err(WhiteboardError::InvalidSessionId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SessionId {
    type Error = WhiteboardError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        SessionId::parse(&raw)
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}

/// 会话存储后端
pub trait SessionStore {
    fn put(&mut self, id: &SessionId, blob: &str) -> Result<(), WhiteboardError>;
    /// 不存在时返回 Ok(None)
    fn get(&self, id: &SessionId) -> Result<Option<String>, WhiteboardError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<SessionId, String>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn put(&mut self, id: &SessionId, blob: &str) -> Result<(), WhiteboardError> {
        self.blobs.insert(id.clone(), blob.to_string());
        Ok(())
    }

    fn get(&self, id: &SessionId) -> Result<Option<String>, WhiteboardError> {
        Ok(self.blobs.get(id).cloned())
    }
}

/// 目录存储：`<root>/<id>.xboard`
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, id: &SessionId) -> PathBuf {
        self.root.join(format!("{id}.xboard"))
    }
}

impl SessionStore for DirStore {
    fn put(&mut self, id: &SessionId, blob: &str) -> Result<(), WhiteboardError> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_for(id);
        fs::write(&path, blob)?;
        debug!(path = %path.display(), bytes = blob.len(), "会话已写入");
        Ok(())
    }

    fn get(&self, id: &SessionId) -> Result<Option<String>, WhiteboardError> {
        match fs::read_to_string(self.path_for(id)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
