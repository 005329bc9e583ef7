mod parser;
mod speaker;

pub use parser::parse;
pub use speaker::Speaker;

use serde::{Deserialize, Serialize};

/// A contiguous span of script text attributed to one speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub speaker: Speaker,
    pub text: String,
    /// Offset into the newline-join of all segment texts. Marker lines are
    /// dropped from that reconstruction, so this does not index the raw
    /// script.
    pub start_position: usize,
    pub end_position: usize,
}
