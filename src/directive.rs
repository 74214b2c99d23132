//! Grammar of the two DEBUG-style directives embedded in a listing:
//!
//! * origin: `A <hex>`
//! * edit: `E [<hex>:]<hex> <payload>`, payload being `"text"` or hex bytes

use crate::error::ScanError;
use crate::tokenizer::parse_hex;

pub const ORIGIN_MARKER: &str = "A";
pub const EDIT_MARKER: &str = "E";

fn split_first(text: &str) -> (&str, &str) {
    let text = text.trim();
    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    (&text[..end], text[end..].trim_start())
}

fn has_marker(line: &str, marker: &str) -> bool {
    split_first(line).0.eq_ignore_ascii_case(marker)
}

pub fn is_origin_line(line: &str) -> bool {
    has_marker(line, ORIGIN_MARKER)
}

pub fn is_edit_line(line: &str) -> bool {
    has_marker(line, EDIT_MARKER)
}

/// Lines that never go through mnemonic lookup.
pub fn is_directive_line(line: &str) -> bool {
    is_origin_line(line) || is_edit_line(line)
}

/// `Ok(None)` when the line is not an origin directive at all.
pub fn parse_origin(line: &str) -> Result<Option<u16>, ScanError> {
    if !is_origin_line(line) {
        return Ok(None);
    }
    let (addr, rest) = split_first(split_first(line).1);
    if addr.is_empty() {
        return Err(ScanError::malformed("origin without address"));
    }
    if !rest.is_empty() {
        return Err(ScanError::malformed(format!(
            "unexpected `{rest}` after origin"
        )));
    }
    let value = parse_hex(addr)
        .ok_or_else(|| ScanError::malformed(format!("origin `{addr}` is not hex")))?;
    u16::try_from(value)
        .map(Some)
        .map_err(|_| ScanError::malformed(format!("origin `{addr}` exceeds FFFF")))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDirective {
    pub segment: Option<u16>,
    pub address: u32,
    pub data: Vec<u8>,
    /// Byte tokens that were skipped.
    pub dropped: Vec<ScanError>,
}

/// `Ok(None)` when the line is not an edit directive at all.
pub fn parse_edit(line: &str) -> Result<Option<EditDirective>, ScanError> {
    if !is_edit_line(line) {
        return Ok(None);
    }
    let (target, payload) = split_first(split_first(line).1);
    if target.is_empty() {
        return Err(ScanError::malformed("edit without address"));
    }
    let (segment, address) = match target.split_once(':') {
        Some((seg, off)) => {
            let seg = parse_hex(seg)
                .and_then(|s| u16::try_from(s).ok())
                .ok_or_else(|| ScanError::malformed(format!("segment `{seg}` is not a 16-bit hex value")))?;
            (Some(seg), off)
        }
        None => (None, target),
    };
    let address = parse_hex(address)
        .ok_or_else(|| ScanError::malformed(format!("address `{address}` is not hex")))?;
    if payload.is_empty() {
        return Err(ScanError::malformed("edit without payload"));
    }

    let (data, dropped) = match quoted(payload) {
        Some(text) => (latin1_bytes(text), Vec::new()),
        None => hex_bytes(payload),
    };
    Ok(Some(EditDirective {
        segment,
        address,
        data,
        dropped,
    }))
}

fn quoted(payload: &str) -> Option<&str> {
    if payload.len() < 2 {
        return None;
    }
    payload.strip_prefix('"')?.strip_suffix('"')
}

// One byte per char; chars outside Latin-1 become '?'.
fn latin1_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

fn hex_bytes(payload: &str) -> (Vec<u8>, Vec<ScanError>) {
    let mut data = Vec::new();
    let mut dropped = Vec::new();
    for tok in payload.split_whitespace() {
        match parse_hex(tok).and_then(|v| u8::try_from(v).ok()) {
            Some(b) => data.push(b),
            None => dropped.push(ScanError::OutOfRangeByte(tok.to_string())),
        }
    }
    (data, dropped)
}
