use crate::memory::{block_base, BlockMap, MemoryBlock, BLOCK_SIZE};

fn ascii(b: u8) -> char {
    if (0x20..=0x7E).contains(&b) {
        b as char
    } else {
        '.'
    }
}

/// `SSSS:OOOO  B0 B1 .. B15  TEXT`
pub fn fmt_row(segment: u16, offset: u32, bytes: &[u8; BLOCK_SIZE]) -> String {
    let hex = bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ");
    let text: String = bytes.iter().copied().map(ascii).collect();
    format!("{segment:04X}:{offset:04X}  {hex}  {text}")
}

/// `line_count` rows from `base_offset`, each printing the block that holds
/// the row's offset; missing blocks print as zeros.
pub fn format_dump(map: &BlockMap, segment: u16, base_offset: u32, line_count: usize) -> Vec<String> {
    (0..line_count)
        .map(|row| {
            let offset = base_offset.wrapping_add((row * BLOCK_SIZE) as u32);
            let block = map
                .block(block_base(offset))
                .cloned()
                .unwrap_or_else(|| MemoryBlock::zeroed(offset));
            fmt_row(segment, offset, &block.bytes)
        })
        .collect()
}
