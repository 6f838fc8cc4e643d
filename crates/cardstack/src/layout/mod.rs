//! Layout calculation modules for the card grid
//!
//! This module handles the geometric side of card stack generation:
//! - Grid geometry (how many cells fit, centering offsets)
//! - Vertical centering of text within a frame
//! - Sequencing cards onto front/back page pairs

mod centering;
mod grid;
mod sequence;
mod types;

pub use centering::*;
pub use grid::*;
pub use sequence::*;
pub use types::*;
