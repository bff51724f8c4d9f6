use libasm_rs::isa::tms32010::{table, Variant};
use libasm_rs::{
    AsmError, Assembler, ArrayMemory, DisInsn, DisMemory, Disassembler, Endian, ErrorKind, Options,
};
use pretty_assertions::assert_eq;

fn dis_all(base: u32, words: &[u16]) -> Vec<DisInsn> {
    let table = table(Variant::Tms32010);
    let mut mem = ArrayMemory::from_words(base, words, Endian::Big);
    let mut out = Vec::new();
    while mem.has_next() {
        out.push(table.disassemble(&mut mem));
    }
    out
}

fn text(words: &[u16]) -> String {
    let insns = dis_all(0, words);
    assert_eq!(insns.len(), 1);
    assert_eq!(insns[0].error(), None, "{words:04X?}");
    insns[0].text()
}

#[test]
fn call_from_fixture() {
    let insns = dis_all(0x789, &[0xF800, 0x0FED]);
    assert_eq!(insns.len(), 1);
    assert_eq!(insns[0].address(), 0x789);
    assert_eq!(insns[0].text(), "CALL 0FEDh");
    assert_eq!(insns[0].bytes(), &[0xF8, 0x00, 0x0F, 0xED]);
    assert!(insns[0].is_ok());
}

#[test]
fn unknown_word_skips_one_word() {
    let insns = dis_all(0x100, &[0x0086, 0x7F80]);
    assert_eq!(insns.len(), 2);
    assert_eq!(
        insns[0].error(),
        Some(AsmError::new(ErrorKind::UnknownInstruction, 0))
    );
    assert_eq!(insns[0].length(), 2);
    assert_eq!(insns[1].address(), 0x101);
    assert_eq!(insns[1].text(), "NOP");
}

#[test]
fn operand_rendering() {
    assert_eq!(text(&[0x0070]), "ADD 70h");
    assert_eq!(text(&[0x0F05]), "ADD 5,15");
    assert_eq!(text(&[0x00A1]), "ADD *+,0,1");
    assert_eq!(text(&[0x0488]), "ADD *,4");
    assert_eq!(text(&[0x0098]), "ADD *-");
    assert_eq!(text(&[0x3170]), "SAR AR1,70h");
    assert_eq!(text(&[0x4270]), "IN 70h,PA2");
    assert_eq!(text(&[0x5081]), "SACL *,0,1");
    assert_eq!(text(&[0x5C70]), "SACH 70h,4");
    assert_eq!(text(&[0x71FF]), "LARK AR1,0FFh");
    assert_eq!(text(&[0x9000]), "MPYK -1000h");
    assert_eq!(text(&[0x8FFF]), "MPYK 0FFFh");
    assert_eq!(text(&[0x6888]), "MAR *");
    assert_eq!(text(&[0x6881]), "LARP 1");
    assert_eq!(text(&[0x7F9D]), "POP");
}

#[test]
fn reserved_field_values_are_unknown() {
    for word in [0x3270u16, 0x5370, 0x00C8, 0x00B8, 0x0089, 0x6E02, 0xA000] {
        let insns = dis_all(0, &[word]);
        assert_eq!(
            insns[0].error().map(|e| e.kind),
            Some(ErrorKind::UnknownInstruction),
            "{word:04X}"
        );
    }
}

#[test]
fn wide_branch_target_is_flagged_but_printed() {
    let insns = dis_all(0, &[0xF900, 0x1234]);
    assert_eq!(insns[0].text(), "B 1234h");
    assert_eq!(insns[0].error(), Some(AsmError::new(ErrorKind::OverflowRange, 0)));
}

#[test]
fn truncated_branch_reports_no_memory() {
    let insns = dis_all(0, &[0xF800]);
    assert_eq!(insns[0].error().map(|e| e.kind), Some(ErrorKind::NoMemory));
}

#[test]
fn lowercase_option() {
    let insns = dis_all(0x789, &[0xF800, 0x0FED]);
    let options = Options { lowercase: true, ..Options::default() };
    assert_eq!(insns[0].text_with(&options), "call 0fedh");
}

#[test]
fn disassembly_reassembles_to_the_same_words() {
    let table = table(Variant::Tms32010);
    let words: &[&[u16]] = &[
        &[0x0070],
        &[0x00A1],
        &[0x0488],
        &[0x3170],
        &[0x4F88],
        &[0x5081],
        &[0x71FF],
        &[0x9000],
        &[0x6881],
        &[0x7E80],
        &[0xF800, 0x0FED],
    ];
    for &w in words {
        let mut mem = ArrayMemory::from_words(0, w, Endian::Big);
        let insn = table.disassemble(&mut mem);
        assert!(insn.is_ok(), "{w:04X?}");
        let back = table.assemble(&insn.text(), 0);
        assert_eq!(back.error(), None, "{}", insn.text());
        assert_eq!(back.bytes(), insn.bytes(), "{}", insn.text());
    }
}
