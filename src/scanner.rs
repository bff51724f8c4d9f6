//! Cursor over one line of assembly source.
//!
//! Numbers are accepted in Motorola (`$1F`, `%1010`), C (`0x1F`) and Intel
//! (`1Fh` must start with a digit, so `0FEDh`; `1010b`) forms, plus plain
//! decimal, each with an optional sign.

use crate::error::{AsmError, ErrorKind};

pub struct Scanner<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Current column (byte offset).
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.line.len());
    }

    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn skip_spaces(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// True once only blanks or a `;` comment remain.
    pub fn at_end(&self) -> bool {
        let rest = self.rest().trim_start();
        rest.is_empty() || rest.starts_with(';')
    }

    /// Consumes `c` if it is next.
    pub fn expect(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Identifier starting with a letter, `_` or `.`.
    pub fn read_symbol(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        if !rest.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_' || c == '.') {
            return None;
        }
        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
            .unwrap_or(rest.len());
        self.pos += len;
        Some(&rest[..len])
    }

    /// Reads a number. `Ok(None)` leaves the cursor untouched when no number
    /// starts here.
    pub fn read_number(&mut self) -> Result<Option<i64>, AsmError> {
        let start = self.pos;
        let negative = if self.expect('-') {
            true
        } else {
            self.expect('+');
            false
        };
        let at = self.pos;
        let rest = self.rest();
        let (radix, digits, consumed) = if let Some(r) = rest.strip_prefix('$') {
            let n = hex_run(r);
            (16, &r[..n], n + 1)
        } else if let Some(r) = rest.strip_prefix('%') {
            let n = r.find(|c: char| c != '0' && c != '1').unwrap_or(r.len());
            (2, &r[..n], n + 1)
        } else if let Some(r) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            let n = hex_run(r);
            (16, &r[..n], n + 2)
        } else if rest.starts_with(|c: char| c.is_ascii_digit()) {
            let n = rest
                .find(|c: char| !c.is_ascii_alphanumeric())
                .unwrap_or(rest.len());
            let word = &rest[..n];
            match suffixed(word) {
                Some((radix, digits)) => (radix, digits, n),
                None => {
                    self.pos = start;
                    return Err(AsmError::new(ErrorKind::UnknownOperand, at));
                }
            }
        } else {
            self.pos = start;
            return Ok(None);
        };
        if digits.is_empty() {
            self.pos = start;
            return Err(AsmError::new(ErrorKind::UnknownOperand, at));
        }
        let value = i64::from_str_radix(digits, radix)
            .map_err(|_| AsmError::new(ErrorKind::OverflowRange, at))?;
        self.pos = at + consumed;
        Ok(Some(if negative { -value } else { value }))
    }
}

fn hex_run(s: &str) -> usize {
    s.find(|c: char| !c.is_ascii_hexdigit()).unwrap_or(s.len())
}

/// Radix and digits of a digit-led word: `123`, `0FEDh`, `101b`.
fn suffixed(word: &str) -> Option<(u32, &str)> {
    if word.bytes().all(|b| b.is_ascii_digit()) {
        return Some((10, word));
    }
    let (body, last) = word.split_at(word.len() - 1);
    match last {
        "h" | "H" if body.bytes().all(|b| b.is_ascii_hexdigit()) => Some((16, body)),
        "b" | "B" if body.bytes().all(|b| b == b'0' || b == b'1') => Some((2, body)),
        _ => None,
    }
}
