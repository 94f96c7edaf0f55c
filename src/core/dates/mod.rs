//! Last revision date detection.
//!
//! - `pattern`: finding and normalizing `M/D/YY[YY]` fragments in text
//! - `resolver`: choosing one date per document from body and footer tables

mod pattern;
mod resolver;

pub use pattern::*;
pub use resolver::*;
