use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub segment_tag: String, // prefix of address labels, e.g. "CS"
    pub dump_segment: u16,   // segment printed on dump rows
    pub dump_rows: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            segment_tag: "CS".to_string(),
            dump_segment: 0,
            dump_rows: 8,
        }
    }
}

/// Which columns the line-number gutter shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GutterConfig {
    pub line_numbers: bool,
    pub addresses: bool,
}

impl Default for GutterConfig {
    fn default() -> Self {
        Self {
            line_numbers: true,
            addresses: true,
        }
    }
}
