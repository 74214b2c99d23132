use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::directive::parse_edit;

pub const BLOCK_SIZE: usize = 16;
const OFFSET_MASK: u32 = BLOCK_SIZE as u32 - 1;

/// Sixteen bytes of simulated memory starting at an aligned base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBlock {
    pub base: u32,
    pub bytes: [u8; BLOCK_SIZE],
}

impl MemoryBlock {
    /// Zero-filled block containing `addr`.
    pub fn zeroed(addr: u32) -> Self {
        Self {
            base: block_base(addr),
            bytes: [0; BLOCK_SIZE],
        }
    }
}

pub fn block_base(addr: u32) -> u32 {
    addr & !OFFSET_MASK
}

/// Sparse memory image: aligned base -> block, iterated in address order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlockMap {
    blocks: BTreeMap<u32, MemoryBlock>,
}

impl BlockMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn block(&self, base: u32) -> Option<&MemoryBlock> {
        self.blocks.get(&base)
    }

    pub fn blocks(&self) -> impl Iterator<Item = &MemoryBlock> {
        self.blocks.values()
    }

    pub fn read_u8(&self, addr: u32) -> u8 {
        self.blocks
            .get(&block_base(addr))
            .map_or(0, |b| b.bytes[(addr & OFFSET_MASK) as usize])
    }

    pub fn write_u8(&mut self, addr: u32, val: u8) {
        let block = self
            .blocks
            .entry(block_base(addr))
            .or_insert_with(|| MemoryBlock::zeroed(addr));
        block.bytes[(addr & OFFSET_MASK) as usize] = val;
    }

    /// Sequential write; block and offset are recomputed per byte so runs
    /// roll over into the next block. Bytes that would land past the top of
    /// the 32-bit address space are dropped.
    pub fn write_bytes(&mut self, addr: u32, data: &[u8]) {
        let mut at = addr;
        for (i, &b) in data.iter().enumerate() {
            self.write_u8(at, b);
            let rest = data.len() - i - 1;
            if rest == 0 {
                break;
            }
            match at.checked_add(1) {
                Some(next) => at = next,
                None => {
                    debug!(addr, dropped = rest, "edit runs past end of address space");
                    break;
                }
            }
        }
        trace!(addr, len = data.len(), "bytes written");
    }
}

/// Replays every edit directive of a listing into a fresh [`BlockMap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryPatchSimulator;

impl MemoryPatchSimulator {
    pub fn new() -> Self {
        Self
    }

    pub fn simulate<S: AsRef<str>>(&self, lines: &[S]) -> BlockMap {
        let mut map = BlockMap::new();
        for (i, line) in lines.iter().enumerate() {
            match parse_edit(line.as_ref()) {
                Ok(Some(edit)) => {
                    for err in &edit.dropped {
                        debug!(line = i, %err, "byte dropped");
                    }
                    map.write_bytes(edit.address, &edit.data);
                }
                Ok(None) => {}
                Err(err) => debug!(line = i, %err, "edit directive ignored"),
            }
        }
        map
    }
}

pub fn simulate<S: AsRef<str>>(lines: &[S]) -> BlockMap {
    MemoryPatchSimulator.simulate(lines)
}
