use asmpad::{AddressTracker, HeuristicEstimator, TrackState};
use pretty_assertions::assert_eq;

fn labels(lines: &[&str]) -> Vec<Option<String>> {
    AddressTracker::new("CS").track(lines).labels()
}

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

#[test]
fn origin_then_instructions() {
    assert_eq!(
        labels(&["A 100", "MOV AX, 1234", "ADD AX, 1"]),
        vec![None, some("CS:0100"), some("CS:0103")]
    );
}

#[test]
fn lines_before_origin_are_unlabelled() {
    assert_eq!(
        labels(&["MOV AX, 1", "", "a 200", "NOP", "NOP"]),
        vec![None, None, None, some("CS:0200"), some("CS:0201")]
    );
}

#[test]
fn blank_line_after_origin_gets_label_then_stops() {
    assert_eq!(
        labels(&["A 100", "", "NOP", "NOP"]),
        vec![None, some("CS:0100"), None, None]
    );
}

#[test]
fn blank_line_while_tracking_keeps_counting() {
    assert_eq!(
        labels(&["A 100", "INT 21", "", "NOP"]),
        vec![None, some("CS:0100"), None, some("CS:0102")]
    );
}

#[test]
fn new_origin_resets_counter() {
    assert_eq!(
        labels(&["A 100", "MOV AX, 1", "A 300", "JMP 100", "INC AX"]),
        vec![None, some("CS:0100"), None, some("CS:0300"), some("CS:0302")]
    );
}

#[test]
fn unrecognized_and_edit_lines_do_not_advance() {
    assert_eq!(
        labels(&["A 100", "FOO BAR", "E 200 90", "NOP"]),
        vec![None, some("CS:0100"), some("CS:0100"), some("CS:0100")]
    );
}

#[test]
fn malformed_origin_is_a_zero_length_line() {
    assert_eq!(
        labels(&["A ZZ", "NOP", "A 100", "NOP", "A XYZ", "NOP"]),
        vec![None, None, None, some("CS:0100"), some("CS:0101"), some("CS:0101")]
    );
}

#[test]
fn offsets_wrap_at_64k() {
    assert_eq!(
        labels(&["A FFFF", "MOV AX, 1", "NOP"]),
        vec![None, some("CS:FFFF"), some("CS:0002")]
    );
}

#[test]
fn segment_tag_is_configurable() {
    let ann = AddressTracker::new("DS").track(&["A 10", "NOP"]);
    assert_eq!(ann.label(1), some("DS:0010"));
    assert_eq!(ann.labelled().collect::<Vec<_>>(), vec![(1, "DS:0010".to_string())]);
}

#[test]
fn state_machine_steps() {
    let est = HeuristicEstimator::new();
    let (s, label) = TrackState::Idle.advance("A 100", &est);
    assert_eq!((s, label), (TrackState::AwaitingFirstInstruction { next: 0x100 }, None));
    let (s, label) = s.advance("PUSH AX", &est);
    assert_eq!((s, label), (TrackState::Tracking { next: 0x101 }, Some(0x100)));
    let (s, label) = TrackState::AwaitingFirstInstruction { next: 0x100 }.advance("  ", &est);
    assert_eq!((s, label), (TrackState::Idle, Some(0x100)));
}

#[test]
fn rescans_are_identical() {
    let lines = ["A 100", "MOV AL, 1", "", "JNZ 100", "A 200", "", "x"];
    let t = AddressTracker::new("CS");
    assert_eq!(t.track(&lines), t.track(&lines));
}
