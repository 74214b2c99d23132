use serde::{Deserialize, Serialize};

use crate::tokenizer::{Operand, OperandKinds};

/// Closed set of mnemonic classes the estimator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mnemonic {
    Mov,
    Add,
    Sub,
    Cmp,
    Xor,
    And,
    Or,
    Not,
    Jmp,
    Jcc, // every conditional jump
    Mul,
    Div,
    Imul,
    Idiv,
    Inc,
    Dec,
    Push,
    Pop,
    Nop,
    Int,
    Call,
    Loop,
}

impl Mnemonic {
    pub fn from_name(name: &str) -> Option<Self> {
        lookup(name).map(|d| d.mnemonic)
    }
}

/// Filter on the magnitude of a source immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImmSize {
    Any,
    /// `<= 0xFF`
    Short,
    /// `> 0xFF`
    Long,
}

impl ImmSize {
    fn accepts(self, imm: Option<u32>) -> bool {
        match (self, imm) {
            (ImmSize::Any, _) => true,
            (ImmSize::Short, Some(v)) => v <= 0xFF,
            (ImmSize::Long, Some(v)) => v > 0xFF,
            (_, None) => false,
        }
    }
}

/// One operand shape and the byte count it costs.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub dst: OperandKinds,
    pub src: OperandKinds,
    pub imm: ImmSize,
    pub len: u8,
}

impl Pattern {
    pub fn matches(&self, dst: Option<&Operand>, src: Option<&Operand>) -> bool {
        self.dst.intersects(OperandKinds::of(dst))
            && self.src.intersects(OperandKinds::of(src))
            && self.imm.accepts(src.and_then(Operand::immediate))
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LengthRule {
    /// Same length whatever the operands are.
    Fixed(u8),
    /// First matching pattern wins; no match means the line is unrecognized.
    Patterns(&'static [Pattern]),
}

impl LengthRule {
    pub fn length(&self, dst: Option<&Operand>, src: Option<&Operand>) -> Option<u8> {
        match self {
            LengthRule::Fixed(len) => Some(*len),
            LengthRule::Patterns(pats) => pats
                .iter()
                .find(|p| p.matches(dst, src))
                .map(|p| p.len),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub name: &'static str,
    pub mnemonic: Mnemonic,
    pub rule: LengthRule,
}

const fn pat(dst: OperandKinds, src: OperandKinds, imm: ImmSize, len: u8) -> Pattern {
    Pattern { dst, src, imm, len }
}

const REG8: OperandKinds = OperandKinds::REG8;
const REG16: OperandKinds = OperandKinds::REG16;
const REG: OperandKinds = OperandKinds::REG;
const IMM: OperandKinds = OperandKinds::IMM;
const IND: OperandKinds = OperandKinds::INDIRECT;
const NONE: OperandKinds = OperandKinds::ABSENT;

pub const MOV_PATTERNS: &[Pattern] = &[
    pat(REG8, IMM, ImmSize::Any, 2),
    pat(REG16, IMM, ImmSize::Any, 3),
    pat(REG, REG, ImmSize::Any, 2),
    pat(REG, IND, ImmSize::Any, 2),
    pat(IND, REG, ImmSize::Any, 2),
];

pub const ARITH_PATTERNS: &[Pattern] = &[
    pat(REG, IMM, ImmSize::Short, 3),
    pat(REG, IMM, ImmSize::Long, 4),
    pat(REG, REG, ImmSize::Any, 2),
    pat(REG, IND, ImmSize::Any, 2),
    pat(IND, REG, ImmSize::Any, 2),
];

pub const NOT_PATTERNS: &[Pattern] = &[pat(REG.union(IND), NONE, ImmSize::Any, 2)];

const fn desc(name: &'static str, mnemonic: Mnemonic, rule: LengthRule) -> InstrDesc {
    InstrDesc {
        name,
        mnemonic,
        rule,
    }
}

const fn jcc(name: &'static str) -> InstrDesc {
    desc(name, Mnemonic::Jcc, LengthRule::Fixed(2))
}

pub const TABLE: &[InstrDesc] = &[
    desc("MOV", Mnemonic::Mov, LengthRule::Patterns(MOV_PATTERNS)),
    desc("ADD", Mnemonic::Add, LengthRule::Patterns(ARITH_PATTERNS)),
    desc("SUB", Mnemonic::Sub, LengthRule::Patterns(ARITH_PATTERNS)),
    desc("CMP", Mnemonic::Cmp, LengthRule::Patterns(ARITH_PATTERNS)),
    desc("XOR", Mnemonic::Xor, LengthRule::Patterns(ARITH_PATTERNS)),
    desc("AND", Mnemonic::And, LengthRule::Patterns(ARITH_PATTERNS)),
    desc("OR", Mnemonic::Or, LengthRule::Patterns(ARITH_PATTERNS)),
    desc("NOT", Mnemonic::Not, LengthRule::Patterns(NOT_PATTERNS)),
    desc("JMP", Mnemonic::Jmp, LengthRule::Fixed(2)),
    jcc("JA"),
    jcc("JAE"),
    jcc("JB"),
    jcc("JBE"),
    jcc("JC"),
    jcc("JCXZ"),
    jcc("JE"),
    jcc("JG"),
    jcc("JGE"),
    jcc("JL"),
    jcc("JLE"),
    jcc("JNA"),
    jcc("JNAE"),
    jcc("JNB"),
    jcc("JNBE"),
    jcc("JNC"),
    jcc("JNE"),
    jcc("JNG"),
    jcc("JNGE"),
    jcc("JNL"),
    jcc("JNLE"),
    jcc("JNO"),
    jcc("JNP"),
    jcc("JNS"),
    jcc("JNZ"),
    jcc("JO"),
    jcc("JP"),
    jcc("JPE"),
    jcc("JPO"),
    jcc("JS"),
    jcc("JZ"),
    desc("MUL", Mnemonic::Mul, LengthRule::Fixed(2)),
    desc("DIV", Mnemonic::Div, LengthRule::Fixed(2)),
    desc("IMUL", Mnemonic::Imul, LengthRule::Fixed(2)),
    desc("IDIV", Mnemonic::Idiv, LengthRule::Fixed(2)),
    desc("INC", Mnemonic::Inc, LengthRule::Fixed(1)),
    desc("DEC", Mnemonic::Dec, LengthRule::Fixed(1)),
    desc("PUSH", Mnemonic::Push, LengthRule::Fixed(1)),
    desc("POP", Mnemonic::Pop, LengthRule::Fixed(1)),
    desc("NOP", Mnemonic::Nop, LengthRule::Fixed(1)),
    desc("INT", Mnemonic::Int, LengthRule::Fixed(2)),
    desc("CALL", Mnemonic::Call, LengthRule::Fixed(2)),
    desc("LOOP", Mnemonic::Loop, LengthRule::Fixed(2)),
];

pub fn lookup(name: &str) -> Option<&'static InstrDesc> {
    TABLE.iter().find(|d| d.name.eq_ignore_ascii_case(name))
}
