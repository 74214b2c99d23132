use asmpad::tokenizer::Operand;
use asmpad::{Engine, EngineConfig, LengthEstimator};
use pretty_assertions::assert_eq;

const LISTING: &str = "\
A 100
MOV AH, 09
MOV DX, 0110
INT 21
INT 20

E 110 \"Hello$\"
A 0110
";

#[test]
fn rescan_annotates_and_patches() {
    let engine = Engine::new(EngineConfig::default());
    let snap = engine.rescan_text(LISTING);
    assert_eq!(
        snap.annotations.labels()[..6].to_vec(),
        vec![
            None,
            Some("CS:0100".to_string()),
            Some("CS:0102".to_string()),
            Some("CS:0105".to_string()),
            Some("CS:0107".to_string()),
            None,
        ]
    );
    // trailing empty line right after the last origin
    assert_eq!(snap.annotations.label(8).as_deref(), Some("CS:0110"));
    assert_eq!(&snap.blocks.block(0x110).unwrap().bytes[..6], b"Hello$");
}

#[test]
fn rescan_twice_is_identical() {
    let engine = Engine::new(EngineConfig::default());
    let a = engine.rescan_text(LISTING);
    let b = engine.rescan_text(LISTING);
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn edits_produce_fresh_snapshots() {
    let engine = Engine::new(EngineConfig::default());
    let before = engine.rescan(&["E 100 11"]);
    let after = engine.rescan(&["E 200 22"]);
    assert!(before.blocks.block(0x100).is_some());
    assert!(after.blocks.block(0x100).is_none());
}

#[test]
fn dump_uses_configured_segment_and_rows() {
    let engine = Engine::new(EngineConfig {
        segment_tag: "CS".into(),
        dump_segment: 0x0B00,
        dump_rows: 2,
    });
    let snap = engine.rescan(&["E 100 41"]);
    let rows = engine.dump(&snap, 0x100);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("0B00:0100  41 00"));
    assert!(rows[1].starts_with("0B00:0110  00"));
}

struct EveryLineFour;

impl LengthEstimator for EveryLineFour {
    fn estimate(&self, _: &str, _: Option<&Operand>, _: Option<&Operand>) -> u8 {
        4
    }
}

#[test]
fn estimator_is_pluggable() {
    let engine = Engine::with_estimator(EngineConfig::default(), EveryLineFour);
    let snap = engine.rescan(&["A 0", "FOO", "BAR", "A 10"]);
    assert_eq!(snap.annotations.offsets().to_vec(), vec![None, Some(0u16), Some(4), None]);
}
