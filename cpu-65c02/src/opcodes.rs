//! Static opcode metadata.
//!
//! A 256-entry table describing every opcode slot: mnemonic, addressing
//! mode, and base cycle count (no page crossing, branch not taken). The
//! trace emitter uses it to render instruction lines; tests use it to
//! check the dispatch against the documented timings.
//!
//! Unmapped slots are size-and-cycle-accurate NOPs. Columns $x3/$x7/
//! $xB/$xF are 1-byte/1-cycle; the unmapped $x2 column is 2-byte/2-cycle;
//! `$44`, `$54/$D4/$F4`, `$DC/$FC` and `$5C` keep the odd timings of the
//! real chip. `$02` is the emulator's HALT extension.

/// Addressing mode of an opcode, as needed to render its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    ZeroPageIndirect,
    IndexedIndirect,
    IndirectIndexed,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    AbsoluteIndirectX,
    Relative,
}

impl Mode {
    /// Instruction length in bytes, opcode included.
    pub const fn length(self) -> u16 {
        match self {
            Mode::Implied | Mode::Accumulator => 1,
            Mode::Immediate
            | Mode::ZeroPage
            | Mode::ZeroPageX
            | Mode::ZeroPageY
            | Mode::ZeroPageIndirect
            | Mode::IndexedIndirect
            | Mode::IndirectIndexed
            | Mode::Relative => 2,
            Mode::Absolute | Mode::AbsoluteX | Mode::AbsoluteY | Mode::Indirect
            | Mode::AbsoluteIndirectX => 3,
        }
    }
}

/// Static description of one opcode slot.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub mode: Mode,
    /// Cycles with no page crossing and the branch not taken.
    pub base_cycles: u8,
}

const fn op(mnemonic: &'static str, mode: Mode, base_cycles: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        base_cycles,
    }
}

use Mode::*;

/// One entry per opcode byte, indexed by the byte itself.
pub const OPCODES: [OpcodeInfo; 256] = [
    // $00
    op("BRK", Implied, 7),
    op("ORA", IndexedIndirect, 6),
    op("HLT", Implied, 1),
    op("NOP", Implied, 1),
    op("TSB", ZeroPage, 5),
    op("ORA", ZeroPage, 3),
    op("ASL", ZeroPage, 5),
    op("NOP", Implied, 1),
    op("PHP", Implied, 3),
    op("ORA", Immediate, 2),
    op("ASL", Accumulator, 2),
    op("NOP", Implied, 1),
    op("TSB", Absolute, 6),
    op("ORA", Absolute, 4),
    op("ASL", Absolute, 6),
    op("NOP", Implied, 1),
    // $10
    op("BPL", Relative, 2),
    op("ORA", IndirectIndexed, 5),
    op("ORA", ZeroPageIndirect, 5),
    op("NOP", Implied, 1),
    op("TRB", ZeroPage, 5),
    op("ORA", ZeroPageX, 4),
    op("ASL", ZeroPageX, 6),
    op("NOP", Implied, 1),
    op("CLC", Implied, 2),
    op("ORA", AbsoluteY, 4),
    op("INC", Accumulator, 2),
    op("NOP", Implied, 1),
    op("TRB", Absolute, 6),
    op("ORA", AbsoluteX, 4),
    op("ASL", AbsoluteX, 7),
    op("NOP", Implied, 1),
    // $20
    op("JSR", Absolute, 6),
    op("AND", IndexedIndirect, 6),
    op("NOP", Immediate, 2),
    op("NOP", Implied, 1),
    op("BIT", ZeroPage, 3),
    op("AND", ZeroPage, 3),
    op("ROL", ZeroPage, 5),
    op("NOP", Implied, 1),
    op("PLP", Implied, 4),
    op("AND", Immediate, 2),
    op("ROL", Accumulator, 2),
    op("NOP", Implied, 1),
    op("BIT", Absolute, 4),
    op("AND", Absolute, 4),
    op("ROL", Absolute, 6),
    op("NOP", Implied, 1),
    // $30
    op("BMI", Relative, 2),
    op("AND", IndirectIndexed, 5),
    op("AND", ZeroPageIndirect, 5),
    op("NOP", Implied, 1),
    op("BIT", ZeroPageX, 4),
    op("AND", ZeroPageX, 4),
    op("ROL", ZeroPageX, 6),
    op("NOP", Implied, 1),
    op("SEC", Implied, 2),
    op("AND", AbsoluteY, 4),
    op("DEC", Accumulator, 2),
    op("NOP", Implied, 1),
    op("BIT", AbsoluteX, 4),
    op("AND", AbsoluteX, 4),
    op("ROL", AbsoluteX, 7),
    op("NOP", Implied, 1),
    // $40
    op("RTI", Implied, 6),
    op("EOR", IndexedIndirect, 6),
    op("NOP", Immediate, 2),
    op("NOP", Implied, 1),
    op("NOP", ZeroPage, 3),
    op("EOR", ZeroPage, 3),
    op("LSR", ZeroPage, 5),
    op("NOP", Implied, 1),
    op("PHA", Implied, 3),
    op("EOR", Immediate, 2),
    op("LSR", Accumulator, 2),
    op("NOP", Implied, 1),
    op("JMP", Absolute, 3),
    op("EOR", Absolute, 4),
    op("LSR", Absolute, 6),
    op("NOP", Implied, 1),
    // $50
    op("BVC", Relative, 2),
    op("EOR", IndirectIndexed, 5),
    op("EOR", ZeroPageIndirect, 5),
    op("NOP", Implied, 1),
    op("NOP", ZeroPageX, 4),
    op("EOR", ZeroPageX, 4),
    op("LSR", ZeroPageX, 6),
    op("NOP", Implied, 1),
    op("CLI", Implied, 2),
    op("EOR", AbsoluteY, 4),
    op("PHY", Implied, 3),
    op("NOP", Implied, 1),
    op("NOP", Absolute, 8),
    op("EOR", AbsoluteX, 4),
    op("LSR", AbsoluteX, 7),
    op("NOP", Implied, 1),
    // $60
    op("RTS", Implied, 6),
    op("ADC", IndexedIndirect, 6),
    op("NOP", Immediate, 2),
    op("NOP", Implied, 1),
    op("STZ", ZeroPage, 3),
    op("ADC", ZeroPage, 3),
    op("ROR", ZeroPage, 5),
    op("NOP", Implied, 1),
    op("PLA", Implied, 4),
    op("ADC", Immediate, 2),
    op("ROR", Accumulator, 2),
    op("NOP", Implied, 1),
    op("JMP", Indirect, 5),
    op("ADC", Absolute, 4),
    op("ROR", Absolute, 6),
    op("NOP", Implied, 1),
    // $70
    op("BVS", Relative, 2),
    op("ADC", IndirectIndexed, 5),
    op("ADC", ZeroPageIndirect, 5),
    op("NOP", Implied, 1),
    op("STZ", ZeroPageX, 4),
    op("ADC", ZeroPageX, 4),
    op("ROR", ZeroPageX, 6),
    op("NOP", Implied, 1),
    op("SEI", Implied, 2),
    op("ADC", AbsoluteY, 4),
    op("PLY", Implied, 4),
    op("NOP", Implied, 1),
    op("JMP", AbsoluteIndirectX, 5),
    op("ADC", AbsoluteX, 4),
    op("ROR", AbsoluteX, 7),
    op("NOP", Implied, 1),
    // $80
    op("BRA", Relative, 3),
    op("STA", IndexedIndirect, 6),
    op("NOP", Immediate, 2),
    op("NOP", Implied, 1),
    op("STY", ZeroPage, 3),
    op("STA", ZeroPage, 3),
    op("STX", ZeroPage, 3),
    op("NOP", Implied, 1),
    op("DEY", Implied, 2),
    op("BIT", Immediate, 2),
    op("TXA", Implied, 2),
    op("NOP", Implied, 1),
    op("STY", Absolute, 4),
    op("STA", Absolute, 4),
    op("STX", Absolute, 4),
    op("NOP", Implied, 1),
    // $90
    op("BCC", Relative, 2),
    op("STA", IndirectIndexed, 6),
    op("STA", ZeroPageIndirect, 5),
    op("NOP", Implied, 1),
    op("STY", ZeroPageX, 4),
    op("STA", ZeroPageX, 4),
    op("STX", ZeroPageY, 4),
    op("NOP", Implied, 1),
    op("TYA", Implied, 2),
    op("STA", AbsoluteY, 5),
    op("TXS", Implied, 2),
    op("NOP", Implied, 1),
    op("STZ", Absolute, 4),
    op("STA", AbsoluteX, 5),
    op("STZ", AbsoluteX, 5),
    op("NOP", Implied, 1),
    // $A0
    op("LDY", Immediate, 2),
    op("LDA", IndexedIndirect, 6),
    op("LDX", Immediate, 2),
    op("NOP", Implied, 1),
    op("LDY", ZeroPage, 3),
    op("LDA", ZeroPage, 3),
    op("LDX", ZeroPage, 3),
    op("NOP", Implied, 1),
    op("TAY", Implied, 2),
    op("LDA", Immediate, 2),
    op("TAX", Implied, 2),
    op("NOP", Implied, 1),
    op("LDY", Absolute, 4),
    op("LDA", Absolute, 4),
    op("LDX", Absolute, 4),
    op("NOP", Implied, 1),
    // $B0
    op("BCS", Relative, 2),
    op("LDA", IndirectIndexed, 5),
    op("LDA", ZeroPageIndirect, 5),
    op("NOP", Implied, 1),
    op("LDY", ZeroPageX, 4),
    op("LDA", ZeroPageX, 4),
    op("LDX", ZeroPageY, 4),
    op("NOP", Implied, 1),
    op("CLV", Implied, 2),
    op("LDA", AbsoluteY, 4),
    op("TSX", Implied, 2),
    op("NOP", Implied, 1),
    op("LDY", AbsoluteX, 4),
    op("LDA", AbsoluteX, 4),
    op("LDX", AbsoluteY, 4),
    op("NOP", Implied, 1),
    // $C0
    op("CPY", Immediate, 2),
    op("CMP", IndexedIndirect, 6),
    op("NOP", Immediate, 2),
    op("NOP", Implied, 1),
    op("CPY", ZeroPage, 3),
    op("CMP", ZeroPage, 3),
    op("DEC", ZeroPage, 5),
    op("NOP", Implied, 1),
    op("INY", Implied, 2),
    op("CMP", Immediate, 2),
    op("DEX", Implied, 2),
    op("NOP", Implied, 1),
    op("CPY", Absolute, 4),
    op("CMP", Absolute, 4),
    op("DEC", Absolute, 6),
    op("NOP", Implied, 1),
    // $D0
    op("BNE", Relative, 2),
    op("CMP", IndirectIndexed, 5),
    op("CMP", ZeroPageIndirect, 5),
    op("NOP", Implied, 1),
    op("NOP", ZeroPageX, 4),
    op("CMP", ZeroPageX, 4),
    op("DEC", ZeroPageX, 6),
    op("NOP", Implied, 1),
    op("CLD", Implied, 2),
    op("CMP", AbsoluteY, 4),
    op("PHX", Implied, 3),
    op("NOP", Implied, 1),
    op("NOP", Absolute, 4),
    op("CMP", AbsoluteX, 4),
    op("DEC", AbsoluteX, 7),
    op("NOP", Implied, 1),
    // $E0
    op("CPX", Immediate, 2),
    op("SBC", IndexedIndirect, 6),
    op("NOP", Immediate, 2),
    op("NOP", Implied, 1),
    op("CPX", ZeroPage, 3),
    op("SBC", ZeroPage, 3),
    op("INC", ZeroPage, 5),
    op("NOP", Implied, 1),
    op("INX", Implied, 2),
    op("SBC", Immediate, 2),
    op("NOP", Implied, 2),
    op("NOP", Implied, 1),
    op("CPX", Absolute, 4),
    op("SBC", Absolute, 4),
    op("INC", Absolute, 6),
    op("NOP", Implied, 1),
    // $F0
    op("BEQ", Relative, 2),
    op("SBC", IndirectIndexed, 5),
    op("SBC", ZeroPageIndirect, 5),
    op("NOP", Implied, 1),
    op("NOP", ZeroPageX, 4),
    op("SBC", ZeroPageX, 4),
    op("INC", ZeroPageX, 6),
    op("NOP", Implied, 1),
    op("SED", Implied, 2),
    op("SBC", AbsoluteY, 4),
    op("PLX", Implied, 4),
    op("NOP", Implied, 1),
    op("NOP", Absolute, 4),
    op("SBC", AbsoluteX, 4),
    op("INC", AbsoluteX, 7),
    op("NOP", Implied, 1),
];
