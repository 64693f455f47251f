//! 字节级 LZW
//!
//! 初始字典为 256 个单字节，新码从 256 开始递增，不设上限也不重置。

use std::collections::HashMap;

use crate::error::WhiteboardError;

pub fn lzw_compress(input: &[u8]) -> Vec<u32> {
    let mut dict: HashMap<(u32, u8), u32> = HashMap::new();
    let mut next_code: u32 = 256;
    let mut out = Vec::new();
    let mut phrase: Option<u32> = None;

    for &b in input {
        phrase = match phrase {
            None => Some(u32::from(b)),
            Some(code) => match dict.get(&(code, b)) {
                Some(&longer) => Some(longer),
                None => {
                    out.push(code);
                    dict.insert((code, b), next_code);
                    next_code += 1;
                    Some(u32::from(b))
                }
            },
        };
    }
    if let Some(code) = phrase {
        out.push(code);
    }
    out
}

pub fn lzw_decompress(codes: &[u32]) -> Result<Vec<u8>, WhiteboardError> {
    let mut table: Vec<Vec<u8>> = (0..=255u8).map(|b| vec![b]).collect();
    let mut out = Vec::new();
    let mut iter = codes.iter();

    let Some(&first) = iter.next() else {
        return Ok(out);
    };
    let mut prev = u8::try_from(first)
        .map(|b| vec![b])
        .map_err(|_| WhiteboardError::Decode(format!("lzw: bad first code {first}")))?;
    out.extend_from_slice(&prev);

    for &code in iter {
        let idx = code as usize;
        let entry = if idx < table.len() {
            table[idx].clone()
        } else if idx == table.len() {
            // cScSc 情形：编码器刚写入的短语
            let mut e = prev.clone();
            e.push(prev[0]);
            e
        } else {
            return Err(WhiteboardError::Decode(format!("lzw: unknown code {code}")));
        };
        out.extend_from_slice(&entry);

        let mut grown = prev;
        grown.push(entry[0]);
        table.push(grown);
        prev = entry;
    }
    Ok(out)
}
