use serde::Serialize;

use asmpad::{HeuristicEstimator, LengthEstimator, Snapshot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineOut {
    pub line: usize,
    pub text: String,
    pub address: Option<String>,
    pub length: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockOut {
    pub base: String,
    pub bytes: String,
}

/// JSON view of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub segment: String,
    pub lines: Vec<LineOut>,
    pub blocks: Vec<BlockOut>,
}

pub fn build_report<S: AsRef<str>>(lines: &[S], snapshot: &Snapshot) -> Report {
    let est = HeuristicEstimator::new();
    let lines_out = lines
        .iter()
        .enumerate()
        .map(|(i, l)| LineOut {
            line: i + 1,
            text: l.as_ref().to_string(),
            address: snapshot.annotations.label(i),
            length: est.estimate_line(l.as_ref()),
        })
        .collect();
    let blocks = snapshot
        .blocks
        .blocks()
        .map(|b| BlockOut {
            base: format!("{:04X}", b.base),
            bytes: b
                .bytes
                .iter()
                .map(|x| format!("{x:02X}"))
                .collect::<Vec<_>>()
                .join(" "),
        })
        .collect();
    Report {
        segment: snapshot.annotations.segment().to_string(),
        lines: lines_out,
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asmpad::{Engine, EngineConfig};
    use pretty_assertions::assert_eq;

    #[test]
    fn report_lists_lines_and_blocks() {
        let lines = ["A 100", "MOV AL, 1", "E 200 41 42"];
        let snap = Engine::new(EngineConfig::default()).rescan(&lines);
        let r = build_report(&lines, &snap);
        assert_eq!(
            r.lines[1],
            LineOut {
                line: 2,
                text: "MOV AL, 1".into(),
                address: Some("CS:0100".into()),
                length: 2,
            }
        );
        assert_eq!(r.lines[2].address.as_deref(), Some("CS:0102"));
        assert_eq!(r.lines[2].length, 0);
        assert_eq!(r.blocks.len(), 1);
        assert_eq!(r.blocks[0].base, "0200");
        assert!(r.blocks[0].bytes.starts_with("41 42 00"));
    }
}
