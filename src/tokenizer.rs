use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// The sixteen real-mode general purpose register names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Register {
    Ax,
    Bx,
    Cx,
    Dx,
    Al,
    Ah,
    Bl,
    Bh,
    Cl,
    Ch,
    Dl,
    Dh,
    Sp,
    Bp,
    Si,
    Di,
}

const REGISTERS: [(&str, Register); 16] = [
    ("AX", Register::Ax),
    ("BX", Register::Bx),
    ("CX", Register::Cx),
    ("DX", Register::Dx),
    ("AL", Register::Al),
    ("AH", Register::Ah),
    ("BL", Register::Bl),
    ("BH", Register::Bh),
    ("CL", Register::Cl),
    ("CH", Register::Ch),
    ("DL", Register::Dl),
    ("DH", Register::Dh),
    ("SP", Register::Sp),
    ("BP", Register::Bp),
    ("SI", Register::Si),
    ("DI", Register::Di),
];

impl Register {
    pub fn from_name(name: &str) -> Option<Self> {
        REGISTERS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, r)| r)
    }

    pub fn name(self) -> &'static str {
        REGISTERS
            .iter()
            .find(|&&(_, r)| r == self)
            .map(|&(n, _)| n)
            .unwrap_or("??")
    }

    /// Byte registers select the imm8 encodings. Only the name decides this.
    pub fn is_byte(self) -> bool {
        use Register::*;
        matches!(self, Al | Ah | Bl | Bh | Cl | Ch | Dl | Dh)
    }

    /// Registers accepted inside `[...]`.
    pub fn is_indirect_base(self) -> bool {
        matches!(self, Register::Bx | Register::Si | Register::Di)
    }
}

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperandKinds: u8 {
const REG8 = 1 << 0;
const REG16 = 1 << 1;
const IMM = 1 << 2;
const INDIRECT = 1 << 3;
const ABSENT = 1 << 4; // operand slot left empty
const REG = Self::REG8.bits() | Self::REG16.bits();
}
}

impl OperandKinds {
    /// Kind of an optional operand slot. Unparsed tokens map to the empty set
    /// so they never intersect a pattern.
    pub fn of(op: Option<&Operand>) -> Self {
        match op {
            None => Self::ABSENT,
            Some(op) => op.kinds(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    Register(Register),
    Immediate { value: u32, token: String },
    Indirect(Register),
    Unparsed(String),
}

impl Operand {
    /// Register first, then immediate, then `[base]`; anything else is unparsed.
    pub fn classify(token: &str) -> Self {
        if let Some(r) = Register::from_name(token) {
            return Operand::Register(r);
        }
        if let Some(value) = parse_hex(token) {
            return Operand::Immediate {
                value,
                token: token.to_string(),
            };
        }
        if let Some(base) = token
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .and_then(Register::from_name)
            .filter(|r| r.is_indirect_base())
        {
            return Operand::Indirect(base);
        }
        Operand::Unparsed(token.to_string())
    }

    pub fn kinds(&self) -> OperandKinds {
        match self {
            Operand::Register(r) if r.is_byte() => OperandKinds::REG8,
            Operand::Register(_) => OperandKinds::REG16,
            Operand::Immediate { .. } => OperandKinds::IMM,
            Operand::Indirect(_) => OperandKinds::INDIRECT,
            Operand::Unparsed(_) => OperandKinds::empty(),
        }
    }

    pub fn immediate(&self) -> Option<u32> {
        match self {
            Operand::Immediate { value, .. } => Some(*value),
            _ => None,
        }
    }
}

/// Free-function form of [`Operand::classify`].
pub fn classify(token: &str) -> Operand {
    Operand::classify(token)
}

/// A whole token of hex digits that fits in 32 bits. Signs and `0x` are rejected.
pub fn parse_hex(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(token, 16).ok()
}

/// Uppercased mnemonic and up to two operand tokens of one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    pub mnemonic: Option<String>,
    pub operand1: Option<String>,
    pub operand2: Option<String>,
}

impl Tokens {
    pub fn operands(&self) -> (Option<Operand>, Option<Operand>) {
        (
            self.operand1.as_deref().map(Operand::classify),
            self.operand2.as_deref().map(Operand::classify),
        )
    }
}

/// Splits a line on runs of whitespace and commas. Tokens past the second
/// operand are ignored.
pub fn tokenize(line: &str) -> Tokens {
    let mut parts = line
        .trim()
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(str::to_ascii_uppercase);
    Tokens {
        mnemonic: parts.next(),
        operand1: parts.next(),
        operand2: parts.next(),
    }
}
