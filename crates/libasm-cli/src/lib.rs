pub mod listing;
pub mod model;

pub use listing::{line, InsnOut};
pub use model::{load_options, load_raw_bin, parse_u32, Image, Segment};
