//! 会话编解码
//!
//! 保存格式：JSON（字段名与顺序固定）→ LZW 压缩 → varint 打包 → base64 文本。

mod lzw;
mod saved;

pub use lzw::{lzw_compress, lzw_decompress};
pub use saved::SavedSession;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::error::WhiteboardError;

/// 把保存的会话编码为紧凑文本。
pub fn encode(saved: &SavedSession) -> Result<String, WhiteboardError> {
    let json = serde_json::to_vec(saved)?;
    let codes = lzw_compress(&json);
    let mut packed = Vec::with_capacity(codes.len() * 2);
    for code in &codes {
        write_varint(&mut packed, *code);
    }
    debug!(
        json_bytes = json.len(),
        codes = codes.len(),
        packed_bytes = packed.len(),
        "会话已编码"
    );
    Ok(STANDARD.encode(packed))
}

/// `encode` 的逆过程。
pub fn decode(blob: &str) -> Result<SavedSession, WhiteboardError> {
    let packed = STANDARD
        .decode(blob.trim())
        .map_err(|e| WhiteboardError::Decode(format!("base64: {e}")))?;
    let codes = read_varints(&packed)?;
    let json = lzw_decompress(&codes)?;
    Ok(serde_json::from_slice(&json)?)
}

pub(crate) fn write_varint(out: &mut Vec<u8>, mut v: u32) {
    while v >= 0x80 {
        out.push((v as u8 & 0x7f) | 0x80);
        v >>= 7;
    }
    out.push(v as u8);
}

fn read_varints(bytes: &[u8]) -> Result<Vec<u32>, WhiteboardError> {
    let mut out = Vec::new();
    let mut cur: u32 = 0;
    let mut shift = 0u32;
    for &b in bytes {
        if shift > 28 {
            return Err(WhiteboardError::Decode("varint overflow".to_string()));
        }
        cur |= u32::from(b & 0x7f) << shift;
        if b & 0x80 == 0 {
            out.push(cur);
            cur = 0;
            shift = 0;
        } else {
            shift += 7;
        }
    }
    if shift != 0 {
        return Err(WhiteboardError::Decode("truncated varint".to_string()));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn varints_cover_multi_byte_codes() {
        let mut buf = Vec::new();
        for v in [0, 127, 128, 300, 65_535, u32::MAX] {
            write_varint(&mut buf, v);
        }
        assert_eq!(
            read_varints(&buf).expect("read"),
            vec![0, 127, 128, 300, 65_535, u32::MAX]
        );
    }

    #[test]
    fn truncated_varint_is_rejected() {
        assert!(read_varints(&[0x80]).is_err());
    }
}
