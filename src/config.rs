use serde::{Deserialize, Serialize};

/// Output options shared by the command-line tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub lowercase: bool,  // render mnemonics and operands in lower case
    pub show_bytes: bool, // prefix each listing line with the raw bytes
}

impl Default for Options {
    fn default() -> Self {
        Self {
            lowercase: false,
            show_bytes: true,
        }
    }
}
