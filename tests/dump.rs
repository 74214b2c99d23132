use asmpad::dump::{fmt_row, format_dump};
use asmpad::simulate;
use pretty_assertions::assert_eq;

#[test]
fn row_layout() {
    let mut bytes = [0u8; 16];
    bytes[..5].copy_from_slice(b"Hi!\x00\x7F");
    assert_eq!(
        fmt_row(0x0B00, 0x100, &bytes),
        "0B00:0100  48 69 21 00 7F 00 00 00 00 00 00 00 00 00 00 00  Hi!............."
    );
}

#[test]
fn dump_reads_blocks_and_zero_fills_gaps() {
    let map = simulate(&["E 110 \"hello world\" ", "E 11F 41"]);
    let rows = format_dump(&map, 0, 0x100, 3);
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        "0000:0100  00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00  ................"
    );
    assert_eq!(
        rows[1],
        "0000:0110  68 65 6C 6C 6F 20 77 6F 72 6C 64 00 00 00 00 41  hello world....A"
    );
    assert!(rows[2].starts_with("0000:0120  00 00"));
}

#[test]
fn unaligned_row_shows_its_own_block() {
    let map = simulate(&["E 100 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F 10", "E 110 AA"]);
    assert_eq!(
        format_dump(&map, 0, 0x108, 2),
        vec![
            "0000:0108  01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F 10  ................".to_string(),
            "0000:0118  AA 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00  ................".to_string(),
        ]
    );
}

#[test]
fn empty_request() {
    assert!(format_dump(&simulate::<&str>(&[]), 0, 0, 0).is_empty());
}
