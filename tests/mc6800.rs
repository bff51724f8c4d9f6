use libasm_rs::isa::mc6800::{table, Variant};
use libasm_rs::{
    AddressUnit, AsmError, Assembler, ArrayMemory, DisInsn, Disassembler, ErrorKind,
};
use pretty_assertions::assert_eq;

fn bytes(variant: Variant, line: &str, address: u32) -> Vec<u8> {
    let insn = table(variant).assemble(line, address);
    assert_eq!(insn.error(), None, "{line}");
    insn.bytes().to_vec()
}

fn error(variant: Variant, line: &str) -> AsmError {
    table(variant)
        .assemble(line, 0)
        .error()
        .unwrap_or_else(|| panic!("{line} assembled cleanly"))
}

fn dis(variant: Variant, base: u32, mem: &[u8]) -> DisInsn {
    let mut mem = ArrayMemory::new(base, mem.to_vec(), AddressUnit::Byte);
    table(variant).disassemble(&mut mem)
}

#[test]
fn addressing_modes() {
    use Variant::Mc6800 as V;
    assert_eq!(bytes(V, "LDAA #$12", 0), vec![0x86, 0x12]);
    assert_eq!(bytes(V, "LDAA $40", 0), vec![0x96, 0x40]);
    assert_eq!(bytes(V, "LDAA $1234", 0), vec![0xB6, 0x12, 0x34]);
    assert_eq!(bytes(V, "LDAA >$40", 0), vec![0xB6, 0x00, 0x40]);
    assert_eq!(bytes(V, "LDAA 5,X", 0), vec![0xA6, 0x05]);
    assert_eq!(bytes(V, "ldaa ,x", 0), vec![0xA6, 0x00]);
    assert_eq!(bytes(V, "LDX #$1234", 0), vec![0xCE, 0x12, 0x34]);
    assert_eq!(bytes(V, "JMP $40", 0), vec![0x7E, 0x00, 0x40]);
    assert_eq!(bytes(V, "ASLA", 0), vec![0x48]);
    assert_eq!(bytes(V, "LSLA", 0), vec![0x48]);
}

#[test]
fn relative_branches() {
    use Variant::Mc6800 as V;
    assert_eq!(bytes(V, "BRA $0010", 0), vec![0x20, 0x0E]);
    assert_eq!(bytes(V, "BNE 0", 0x10), vec![0x26, 0xEE]);
    assert_eq!(bytes(V, "BHS $1002", 0x1000), vec![0x24, 0x00]);
    assert_eq!(error(V, "BRA $1000"), AsmError::new(ErrorKind::OperandTooFar, 4));
}

#[test]
fn relative_branches_wrap_around_address_space() {
    use Variant::Mc6800 as V;
    assert_eq!(dis(V, 0, &[0x20, 0x80]).text(), "BRA $FF82");
    assert_eq!(bytes(V, "BRA $FF82", 0), vec![0x20, 0x80]);
    assert_eq!(dis(V, 0xFFF0, &[0x26, 0x7F]).text(), "BNE $0071");
    assert_eq!(bytes(V, "BNE $0071", 0xFFF0), vec![0x26, 0x7F]);
    assert_eq!(bytes(V, "BRA 0", 0xFFFE), vec![0x20, 0x00]);
}

#[test]
fn operand_errors() {
    use Variant::Mc6800 as V;
    assert_eq!(error(V, "STAA #1"), AsmError::new(ErrorKind::OperandNotAllowed, 5));
    assert_eq!(error(V, "LDAA #$123"), AsmError::new(ErrorKind::OverflowRange, 5));
    assert_eq!(error(V, "LDAA A"), AsmError::new(ErrorKind::UnknownOperand, 5));
    assert_eq!(error(V, "MUL"), AsmError::new(ErrorKind::UnknownInstruction, 0));
}

#[test]
fn newer_variant_pages_take_precedence() {
    assert_eq!(bytes(Variant::Mc6800, "JSR $40", 0), vec![0xBD, 0x00, 0x40]);
    assert_eq!(bytes(Variant::Mc6801, "JSR $40", 0), vec![0x9D, 0x40]);
    assert_eq!(bytes(Variant::Mc6801, "JSR $1234", 0), vec![0xBD, 0x12, 0x34]);
    assert_eq!(bytes(Variant::Mc6801, "MUL", 0), vec![0x3D]);
    assert_eq!(bytes(Variant::Mc6801, "LDD #$1234", 0), vec![0xCC, 0x12, 0x34]);
    assert_eq!(bytes(Variant::Hd6301, "LDAA #1", 0), vec![0x86, 0x01]);
}

#[test]
fn hd6301_bit_operations() {
    use Variant::Hd6301 as V;
    assert_eq!(bytes(V, "AIM #$0F,$40", 0), vec![0x71, 0x0F, 0x40]);
    assert_eq!(bytes(V, "AIM #$0F,5,X", 0), vec![0x61, 0x0F, 0x05]);
    assert_eq!(bytes(V, "XGDX", 0), vec![0x18]);
    assert_eq!(error(V, "AIM #$0F,$1234"), AsmError::new(ErrorKind::OperandNotAllowed, 9));
    assert_eq!(
        error(Variant::Mc6801, "AIM #$0F,$40"),
        AsmError::new(ErrorKind::UnknownInstruction, 0)
    );
}

#[test]
fn disassembly() {
    use Variant::Mc6800 as V;
    assert_eq!(dis(V, 0, &[0x86, 0x12]).text(), "LDAA #$12");
    assert_eq!(dis(V, 0, &[0xB6, 0x00, 0x40]).text(), "LDAA >$0040");
    assert_eq!(dis(V, 0, &[0xB6, 0x12, 0x34]).text(), "LDAA $1234");
    assert_eq!(dis(V, 0, &[0xA6, 0x05]).text(), "LDAA $05,X");
    assert_eq!(dis(V, 0, &[0x20, 0x0E]).text(), "BRA $0010");
    assert_eq!(dis(V, 0x10, &[0x26, 0xEE]).text(), "BNE $0000");
    assert_eq!(dis(V, 0, &[0x24, 0x00]).text(), "BCC $0002");
    assert_eq!(dis(V, 0, &[0x48]).text(), "ASLA");
    assert_eq!(dis(V, 0, &[0xCE, 0x12, 0x34]).text(), "LDX #$1234");
    assert_eq!(dis(Variant::Hd6301, 0, &[0x71, 0x0F, 0x40]).text(), "AIM #$0F,$40");
    assert_eq!(dis(Variant::Hd6301, 0, &[0x61, 0x0F, 0x05]).text(), "AIM #$0F,$05,X");
    assert_eq!(dis(Variant::Mc6801, 0, &[0x9D, 0x40]).text(), "JSR $40");
}

#[test]
fn unknown_opcode_consumes_one_byte() {
    let mut mem = ArrayMemory::new(0x2000, vec![0x71, 0x01], AddressUnit::Byte);
    let table = table(Variant::Mc6800);
    let first = table.disassemble(&mut mem);
    assert_eq!(first.error().map(|e| e.kind), Some(ErrorKind::UnknownInstruction));
    assert_eq!(first.length(), 1);
    let second = table.disassemble(&mut mem);
    assert_eq!(second.address(), 0x2001);
    assert_eq!(second.text(), "NOP");
}

#[test]
fn disassembly_reassembles_to_the_same_bytes() {
    let cases: &[(Variant, u32, &[u8])] = &[
        (Variant::Mc6800, 0, &[0x86, 0x12]),
        (Variant::Mc6800, 0, &[0xB6, 0x00, 0x40]),
        (Variant::Mc6800, 0, &[0xA6, 0x05]),
        (Variant::Mc6800, 0x100, &[0x20, 0xFE]),
        (Variant::Mc6800, 0, &[0x8E, 0xFF, 0x00]),
        (Variant::Mc6801, 0, &[0x9D, 0x40]),
        (Variant::Hd6301, 0, &[0x61, 0x0F, 0x05]),
    ];
    for &(variant, base, mem) in cases {
        let insn = dis(variant, base, mem);
        assert!(insn.is_ok(), "{mem:02X?}");
        assert_eq!(bytes(variant, &insn.text(), base), mem.to_vec(), "{}", insn.text());
    }
}
