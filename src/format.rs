//! Number rendering for disassembler output.

/// Intel notation: `9`, `70h`, `0FEDh`. Values below ten print in decimal.
pub fn intel_hex(value: u32) -> String {
    if value < 10 {
        return value.to_string();
    }
    let digits = format!("{value:X}");
    if digits.starts_with(|c: char| c.is_ascii_alphabetic()) {
        format!("0{digits}h")
    } else {
        format!("{digits}h")
    }
}

pub fn intel_signed(value: i32) -> String {
    if value < 0 {
        format!("-{}", intel_hex(value.unsigned_abs()))
    } else {
        intel_hex(value as u32)
    }
}

/// Motorola notation with a fixed digit count: `$0F`, `$1234`.
pub fn motorola_hex(value: u32, digits: usize) -> String {
    format!("${value:0digits$X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intel_forms() {
        assert_eq!(intel_hex(0), "0");
        assert_eq!(intel_hex(9), "9");
        assert_eq!(intel_hex(10), "0Ah");
        assert_eq!(intel_hex(0x70), "70h");
        assert_eq!(intel_hex(0xFF), "0FFh");
        assert_eq!(intel_hex(0xFED), "0FEDh");
        assert_eq!(intel_signed(-0x1000), "-1000h");
        assert_eq!(intel_signed(-1), "-1");
        assert_eq!(intel_signed(0x0FFF), "0FFFh");
    }

    #[test]
    fn motorola_forms() {
        assert_eq!(motorola_hex(0x0F, 2), "$0F");
        assert_eq!(motorola_hex(0x40, 4), "$0040");
        assert_eq!(motorola_hex(0xBEEF, 4), "$BEEF");
    }
}
