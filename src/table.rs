//! Generic table search shared by every architecture.
//!
//! An architecture describes itself through [`InsnSet`]: its opcode width, its
//! addressing modes, the ordered page list of the selected CPU variant and the
//! two predicates the search needs (`accept_mode` for assembly, `match_opcode`
//! for disassembly). [`InsnTable`] owns one such value together with a
//! name-sorted index of every page and is immutable once built.

use std::cmp::Ordering;

use tracing::trace;

use crate::entry::{AddressingMode, Entry, EntryPage, OpCode};
use crate::error::SearchError;
use crate::memory::{AddressUnit, Endian};

/// Operand positions an entry declares.
pub const MAX_OPERANDS: usize = 3;

pub trait InsnSet: Send + Sync + 'static {
    type Opcode: OpCode;
    type Mode: AddressingMode;

    const ENDIAN: Endian;
    const UNIT: AddressUnit;

    /// Canonical CPU name of the selected variant.
    fn cpu_name(&self) -> &'static str;

    /// Pages in search precedence order.
    fn pages(&self) -> &'static [&'static EntryPage<Self::Opcode, Self::Mode>];

    /// Whether an operand parsed as `supplied` may fill a `table` position.
    /// Must be total and free of side effects.
    fn accept_mode(&self, supplied: Self::Mode, table: Self::Mode) -> bool;

    /// Whether `opcode` encodes `entry`. The default clears the code-format
    /// bits and compares with the base opcode; architectures override it to
    /// reject reserved field combinations.
    fn match_opcode(&self, opcode: Self::Opcode, entry: &Entry<Self::Opcode, Self::Mode>) -> bool {
        masked_equal(opcode, entry)
    }
}

/// `opcode` with the entry's operand-carrying bits cleared equals the base
/// opcode of `entry`.
pub fn masked_equal<O: OpCode, M: AddressingMode>(opcode: O, entry: &Entry<O, M>) -> bool {
    let mask = O::from_mask(entry.code_format().mask());
    (opcode & !mask) == entry.opcode()
}

/// Result of a successful name search.
pub struct Matched<O: 'static, M: 'static> {
    pub prefix: Option<O>,
    pub entry: &'static Entry<O, M>,
}

impl<O: OpCode, M: AddressingMode> std::fmt::Debug for Matched<O, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matched")
            .field("prefix", &self.prefix)
            .field("entry", self.entry)
            .finish()
    }
}

impl<O: Copy, M> Clone for Matched<O, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: Copy, M> Copy for Matched<O, M> {}

struct IndexedPage<O: 'static, M: 'static> {
    page: &'static EntryPage<O, M>,
    /// Entry indices sorted by upper-cased name; equal names keep table order.
    index: Vec<usize>,
}

impl<O: Copy, M> IndexedPage<O, M> {
    fn new(page: &'static EntryPage<O, M>) -> Self {
        let entries = page.entries();
        let mut index: Vec<usize> = (0..entries.len()).collect();
        index.sort_by(|&a, &b| cmp_ignore_case(entries[a].name(), entries[b].name()));
        Self { page, index }
    }

    fn candidates<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'static Entry<O, M>> + 'a {
        let entries = self.page.entries();
        let start = self
            .index
            .partition_point(|&i| cmp_ignore_case(entries[i].name(), name) == Ordering::Less);
        self.index[start..]
            .iter()
            .take_while(move |&&i| entries[i].name().eq_ignore_ascii_case(name))
            .map(move |&i| &entries[i])
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_uppercase())
        .cmp(b.bytes().map(|c| c.to_ascii_uppercase()))
}

pub struct InsnTable<S: InsnSet> {
    isa: S,
    pages: Vec<IndexedPage<S::Opcode, S::Mode>>,
}

impl<S: InsnSet> InsnTable<S> {
    pub fn new(isa: S) -> Self {
        let pages = isa.pages().iter().map(|&page| IndexedPage::new(page)).collect();
        Self { isa, pages }
    }

    pub fn isa(&self) -> &S {
        &self.isa
    }

    pub fn cpu_name(&self) -> &'static str {
        self.isa.cpu_name()
    }

    /// Finds the first entry, in page precedence order, named `name` whose
    /// declared modes accept `modes`. Missing trailing positions are treated
    /// as `NONE`.
    pub fn search_name(
        &self,
        name: &str,
        modes: &[S::Mode],
    ) -> Result<Matched<S::Opcode, S::Mode>, SearchError> {
        let mut supplied = [S::Mode::NONE; MAX_OPERANDS];
        for (slot, &mode) in supplied.iter_mut().zip(modes) {
            *slot = mode;
        }
        let mut name_found = false;
        let mut best = 0usize;
        for indexed in &self.pages {
            for entry in indexed.candidates(name) {
                name_found = true;
                let table = entry.modes();
                let accepted = supplied
                    .iter()
                    .zip(table.iter())
                    .take_while(|(s, t)| self.isa.accept_mode(**s, **t))
                    .count();
                if accepted == MAX_OPERANDS && modes.len() <= MAX_OPERANDS {
                    trace!(cpu = self.cpu_name(), name, opcode = ?entry.opcode(), "name matched");
                    return Ok(Matched { prefix: indexed.page.prefix(), entry });
                }
                best = best.max(accepted);
            }
        }
        if !name_found {
            trace!(cpu = self.cpu_name(), name, "unknown mnemonic");
            return Err(SearchError::UnknownInstruction);
        }
        trace!(cpu = self.cpu_name(), name, position = best, "no mode combination accepted");
        Err(SearchError::OperandNotAllowed { position: best })
    }

    /// Finds the first entry, in page precedence order among the pages
    /// selected by `prefix`, that encodes `opcode`.
    pub fn search_opcode(
        &self,
        prefix: Option<S::Opcode>,
        opcode: S::Opcode,
    ) -> Result<&'static Entry<S::Opcode, S::Mode>, SearchError> {
        for indexed in self.pages.iter().filter(|p| p.page.prefix() == prefix) {
            if let Some(entry) = indexed
                .page
                .entries()
                .iter()
                .find(|entry| self.isa.match_opcode(opcode, entry))
            {
                trace!(cpu = self.cpu_name(), opcode = ?opcode, name = entry.name(), "opcode matched");
                return Ok(entry);
            }
        }
        Err(SearchError::UnknownInstruction)
    }

    /// Whether `code` selects a prefixed page.
    pub fn is_prefix(&self, code: S::Opcode) -> bool {
        self.pages.iter().any(|p| p.page.prefix() == Some(code))
    }

    /// Every entry reachable by opcode search, with the prefix of its page.
    pub fn entries(&self) -> impl Iterator<Item = (Option<S::Opcode>, &'static Entry<S::Opcode, S::Mode>)> + '_ {
        self.pages
            .iter()
            .flat_map(|p| p.page.entries().iter().map(move |e| (p.page.prefix(), e)))
    }
}
