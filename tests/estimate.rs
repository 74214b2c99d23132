use asmpad::{classify, estimate, HeuristicEstimator, LengthEstimator, Operand, Register};

fn reg(name: &str) -> Operand {
    Operand::Register(Register::from_name(name).unwrap())
}

fn imm(value: u32) -> Operand {
    Operand::Immediate {
        value,
        token: format!("{value:X}"),
    }
}

#[test]
fn mov_immediate_width_follows_register_name() {
    assert_eq!(estimate("MOV", Some(&reg("AL")), Some(&imm(0x10))), 2);
    assert_eq!(estimate("MOV", Some(&reg("AX")), Some(&imm(0x10))), 3);
    // the 8-bit path ignores the magnitude
    assert_eq!(estimate("MOV", Some(&reg("DH")), Some(&imm(0x1234))), 2);
}

#[test]
fn arith_short_and_long_immediates() {
    assert_eq!(estimate("ADD", Some(&reg("AX")), Some(&imm(0xFF))), 3);
    assert_eq!(estimate("ADD", Some(&reg("AX")), Some(&imm(0x100))), 4);
    for m in ["SUB", "CMP", "XOR", "AND", "OR"] {
        assert_eq!(estimate(m, Some(&reg("BL")), Some(&imm(1))), 3, "{m}");
        assert_eq!(estimate(m, Some(&reg("BX")), Some(&imm(0xFFFF))), 4, "{m}");
        assert_eq!(estimate(m, Some(&reg("BX")), Some(&reg("CX"))), 2, "{m}");
        assert_eq!(estimate(m, Some(&classify("[SI]")), Some(&reg("CX"))), 2, "{m}");
    }
}

#[test]
fn fixed_lengths() {
    assert_eq!(estimate("INC", Some(&reg("CX")), None), 1);
    for m in ["DEC", "PUSH", "POP", "NOP"] {
        assert_eq!(estimate(m, None, None), 1, "{m}");
    }
    for m in ["JMP", "JZ", "JNE", "JCXZ", "MUL", "DIV", "IMUL", "IDIV", "INT", "CALL", "LOOP"] {
        assert_eq!(estimate(m, Some(&classify("LABEL")), None), 2, "{m}");
    }
}

#[test]
fn unknown_mnemonic_is_zero() {
    assert_eq!(estimate("FOO", None, None), 0);
    assert_eq!(estimate("FOO", Some(&reg("AX")), Some(&imm(1))), 0);
    assert_eq!(estimate("RET", None, None), 0);
}

#[test]
fn unmatched_operand_patterns_are_zero() {
    assert_eq!(estimate("MOV", Some(&imm(1)), Some(&reg("AX"))), 0);
    assert_eq!(estimate("MOV", Some(&reg("AX")), None), 0);
    assert_eq!(estimate("ADD", Some(&reg("AX")), Some(&classify("[BP]"))), 0);
    assert_eq!(estimate("NOT", Some(&imm(1)), None), 0);
}

#[test]
fn whole_lines() {
    let est = HeuristicEstimator::new();
    assert_eq!(est.estimate_line("mov ax,1234"), 3);
    assert_eq!(est.estimate_line("  mov [bx], al"), 2);
    assert_eq!(est.estimate_line("not [di]"), 2);
    assert_eq!(est.estimate_line("int 21"), 2);
    assert_eq!(est.estimate_line("A 100"), 0);
    assert_eq!(est.estimate_line("E 100 90"), 0);
    assert_eq!(est.estimate_line(""), 0);
    assert_eq!(est.estimate_line("and al, 0F"), 3);
}
