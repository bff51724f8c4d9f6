//! Instruction table records.
//!
//! An [`Entry`] is one instruction variant: the base opcode with all operand
//! fields zeroed, the mnemonic, and a [`Flags`] word that packs the addressing
//! mode of every operand position together with the [`CodeFormat`] naming the
//! operand-carrying bits of the opcode.
//!
//! `Flags` layout (u16):
//!
//! ```text
//!  15  13 12  10 9      5 4      0
//! +------+------+--------+--------+
//! |  cf  | mode3|  mode2 |  mode1 |
//! +------+------+--------+--------+
//! ```

use std::fmt;
use std::marker::PhantomData;

use num_traits::{PrimInt, Unsigned};

/// Opcode unit of an architecture (`u8` or `u16`).
pub trait OpCode: PrimInt + Unsigned + fmt::Debug + fmt::UpperHex + Send + Sync + 'static {
    /// Bytes per opcode unit.
    const BYTES: usize;

    /// Truncates a [`CodeFormat`] mask to the opcode width.
    fn from_mask(mask: u16) -> Self;
}

impl OpCode for u8 {
    const BYTES: usize = 1;

    fn from_mask(mask: u16) -> Self {
        (mask & 0xFF) as u8
    }
}

impl OpCode for u16 {
    const BYTES: usize = 2;

    fn from_mask(mask: u16) -> Self {
        mask
    }
}

/// Addressing-mode tag of an architecture, storable in 5 bits.
///
/// Implementors are fieldless `#[repr(u8)]` enums whose discriminants are
/// their declaration index, so `from_bits(m as u8) == m` holds.
pub trait AddressingMode: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    const NONE: Self;
    /// Unknown bit patterns map to `NONE`.
    fn from_bits(bits: u8) -> Self;
}

/// Operand-carrying bits of an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CodeFormat {
    Cf0000 = 0,
    Cf0001 = 1,
    Cf00FF = 2,
    Cf01FF = 3,
    Cf07FF = 4,
    Cf0FFF = 5,
    Cf1FFF = 6,
}

impl CodeFormat {
    const ALL: [CodeFormat; 7] = [
        CodeFormat::Cf0000,
        CodeFormat::Cf0001,
        CodeFormat::Cf00FF,
        CodeFormat::Cf01FF,
        CodeFormat::Cf07FF,
        CodeFormat::Cf0FFF,
        CodeFormat::Cf1FFF,
    ];

    pub const fn mask(self) -> u16 {
        match self {
            CodeFormat::Cf0000 => 0x0000,
            CodeFormat::Cf0001 => 0x0001,
            CodeFormat::Cf00FF => 0x00FF,
            CodeFormat::Cf01FF => 0x01FF,
            CodeFormat::Cf07FF => 0x07FF,
            CodeFormat::Cf0FFF => 0x0FFF,
            CodeFormat::Cf1FFF => 0x1FFF,
        }
    }

    pub fn all() -> &'static [CodeFormat] {
        &Self::ALL
    }

    fn from_bits(bits: u8) -> Self {
        Self::ALL.get(bits as usize).copied().unwrap_or(CodeFormat::Cf0000)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags(u16);

impl Flags {
    const MODE1_SHIFT: u16 = 0;
    const MODE2_SHIFT: u16 = 5;
    const MODE3_SHIFT: u16 = 10;
    const CF_SHIFT: u16 = 13;
    const MODE_MASK: u16 = 0x1F;
    const MODE3_MASK: u16 = 0x07;
    const CF_MASK: u16 = 0x07;

    /// Widest tag a third operand can carry.
    pub const MAX_MODE3: u8 = Self::MODE3_MASK as u8;

    pub const fn create(cf: CodeFormat, mode1: u8, mode2: u8, mode3: u8) -> Flags {
        assert!(mode1 as u16 <= Self::MODE_MASK, "mode1 does not fit");
        assert!(mode2 as u16 <= Self::MODE_MASK, "mode2 does not fit");
        assert!(mode3 as u16 <= Self::MODE3_MASK, "mode3 does not fit");
        Flags(
            ((mode1 as u16) << Self::MODE1_SHIFT)
                | ((mode2 as u16) << Self::MODE2_SHIFT)
                | ((mode3 as u16) << Self::MODE3_SHIFT)
                | ((cf as u16) << Self::CF_SHIFT),
        )
    }

    pub fn code_format(self) -> CodeFormat {
        CodeFormat::from_bits(((self.0 >> Self::CF_SHIFT) & Self::CF_MASK) as u8)
    }

    pub fn mode1(self) -> u8 {
        ((self.0 >> Self::MODE1_SHIFT) & Self::MODE_MASK) as u8
    }

    pub fn mode2(self) -> u8 {
        ((self.0 >> Self::MODE2_SHIFT) & Self::MODE_MASK) as u8
    }

    pub fn mode3(self) -> u8 {
        ((self.0 >> Self::MODE3_SHIFT) & Self::MODE3_MASK) as u8
    }

    pub fn unpack(self) -> (CodeFormat, u8, u8, u8) {
        (self.code_format(), self.mode1(), self.mode2(), self.mode3())
    }
}

pub struct Entry<O, M> {
    opcode: O,
    flags: Flags,
    name: &'static str,
    _mode: PhantomData<M>,
}

impl<O: Copy, M> Entry<O, M> {
    pub const fn new(opcode: O, flags: Flags, name: &'static str) -> Self {
        Self {
            opcode,
            flags,
            name,
            _mode: PhantomData,
        }
    }

    pub fn opcode(&self) -> O {
        self.opcode
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<O, M: AddressingMode> Entry<O, M> {
    pub fn code_format(&self) -> CodeFormat {
        self.flags.code_format()
    }

    pub fn mode1(&self) -> M {
        M::from_bits(self.flags.mode1())
    }

    pub fn mode2(&self) -> M {
        M::from_bits(self.flags.mode2())
    }

    pub fn mode3(&self) -> M {
        M::from_bits(self.flags.mode3())
    }

    pub fn modes(&self) -> [M; 3] {
        [self.mode1(), self.mode2(), self.mode3()]
    }
}

impl<O: fmt::UpperHex, M: AddressingMode> fmt::Debug for Entry<O, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("opcode", &format_args!("{:#X}", self.opcode))
            .field("name", &self.name)
            .field("cf", &self.flags.code_format())
            .field("modes", &self.modes())
            .finish()
    }
}

/// A group of entries sharing one opcode space.
pub struct EntryPage<O: 'static, M: 'static> {
    prefix: Option<O>,
    entries: &'static [Entry<O, M>],
}

impl<O: Copy, M> EntryPage<O, M> {
    pub const fn new(entries: &'static [Entry<O, M>]) -> Self {
        Self {
            prefix: None,
            entries,
        }
    }

    /// A page whose opcodes follow the `prefix` code.
    pub const fn prefixed(prefix: O, entries: &'static [Entry<O, M>]) -> Self {
        Self {
            prefix: Some(prefix),
            entries,
        }
    }

    pub fn prefix(&self) -> Option<O> {
        self.prefix
    }

    pub fn entries(&self) -> &'static [Entry<O, M>] {
        self.entries
    }
}

/// Row builders for the constant tables.
pub const fn e0<O: Copy, M>(opcode: O, name: &'static str) -> Entry<O, M> {
    Entry::new(opcode, Flags::create(CodeFormat::Cf0000, 0, 0, 0), name)
}

pub const fn e1<O: Copy, M>(opcode: O, cf: CodeFormat, name: &'static str, m1: u8) -> Entry<O, M> {
    Entry::new(opcode, Flags::create(cf, m1, 0, 0), name)
}

pub const fn e2<O: Copy, M>(
    opcode: O,
    cf: CodeFormat,
    name: &'static str,
    m1: u8,
    m2: u8,
) -> Entry<O, M> {
    Entry::new(opcode, Flags::create(cf, m1, m2, 0), name)
}

pub const fn e3<O: Copy, M>(
    opcode: O,
    cf: CodeFormat,
    name: &'static str,
    m1: u8,
    m2: u8,
    m3: u8,
) -> Entry<O, M> {
    Entry::new(opcode, Flags::create(cf, m1, m2, m3), name)
}
