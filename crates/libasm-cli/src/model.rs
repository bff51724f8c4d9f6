use anyhow::{Context, Result};
use libasm_rs::{AddressUnit, ArrayMemory, Options};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Segment {
    pub name: String,
    pub base: u32, // in address units of the target
    pub bytes: Vec<u8>,
    pub kind: &'static str, // e.g., "raw"
}

impl Segment {
    /// One past the last address, in address units.
    pub fn end(&self, unit: AddressUnit) -> u32 {
        self.base
            .wrapping_add((self.bytes.len() as u32).div_ceil(unit.bytes()))
    }
}

#[derive(Debug, Clone)]
pub struct Image {
    pub segments: Vec<Segment>,
}

impl Image {
    /// Read cursor over the first segment.
    pub fn memory(&self, unit: AddressUnit) -> Option<ArrayMemory> {
        let s = self.segments.first()?;
        Some(ArrayMemory::new(s.base, s.bytes.clone(), unit))
    }
}

pub fn load_raw_bin(path: &Path, base: u32, skip: usize, len: Option<usize>) -> Result<Image> {
    let file = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    anyhow::ensure!(skip <= file.len(), "--skip exceeds file size");
    let mut payload = &file[skip..];
    if let Some(lim) = len {
        anyhow::ensure!(lim <= payload.len(), "--len exceeds remaining file size after skip");
        payload = &payload[..lim];
    }
    let seg = Segment { name: "segment0".into(), base, bytes: payload.to_vec(), kind: "raw" };
    Ok(Image { segments: vec![seg] })
}

/// Reads [`Options`] from a JSON file; missing fields keep their defaults.
pub fn load_options(path: Option<&Path>) -> Result<Options> {
    let Some(path) = path else {
        return Ok(Options::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let options = serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(options)
}

/// Hex (`0x` prefix) or decimal.
pub fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libasm_rs::DisMemory;

    #[test]
    fn loader_maps_skip_and_len() {
        let path = std::env::temp_dir().join("_libasm_test_bin.bin");
        std::fs::write(&path, [0u8, 1, 2, 3, 4, 5]).unwrap();
        let img = load_raw_bin(&path, 0x100, 2, Some(4)).unwrap();
        assert_eq!(img.segments.len(), 1);
        let s = &img.segments[0];
        assert_eq!(s.base, 0x100);
        assert_eq!(s.bytes, vec![2, 3, 4, 5]);
        assert_eq!(s.end(AddressUnit::Byte), 0x104);
        assert_eq!(s.end(AddressUnit::Word), 0x102);
        let mut mem = img.memory(AddressUnit::Word).unwrap();
        assert_eq!(mem.read_byte(), Some(2));
        assert!(load_raw_bin(&path, 0, 7, None).is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn options_file_overrides_defaults() {
        let path = std::env::temp_dir().join("_libasm_test_options.json");
        std::fs::write(&path, r#"{ "lowercase": true }"#).unwrap();
        let options = load_options(Some(&path)).unwrap();
        assert!(options.lowercase);
        assert_eq!(options.show_bytes, Options::default().show_bytes);
        assert_eq!(load_options(None).unwrap(), Options::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_u32("0x789").unwrap(), 0x789);
        assert_eq!(parse_u32(" 42 ").unwrap(), 42);
        assert!(parse_u32("zz").is_err());
    }
}
