use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackError {
    #[error("Geometry error: {0}")]
    Geometry(String),
    #[error("Card {card}: {message}")]
    Content { card: usize, message: String },
    #[error("XML error: {0}")]
    Parse(#[from] roxmltree::Error),
    #[error("Document error: {0}")]
    Document(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, StackError>;

/// Content occupying one face of a card.
///
/// A face with no content is `Empty`, never omitted: the sequencer still
/// assigns it a grid slot so the opposing face stays aligned for duplex
/// printing, and the renderer still draws its frame border when frame
/// display is on.
#[derive(Debug, Clone, PartialEq)]
pub enum FaceContent {
    Empty,
    Text(String),
    Image(PathBuf),
}

impl FaceContent {
    pub fn is_empty(&self) -> bool {
        matches!(self, FaceContent::Empty)
    }
}

/// One card: a front face and a back face.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub front: FaceContent,
    pub back: FaceContent,
}

impl Card {
    pub fn new(front: FaceContent, back: FaceContent) -> Self {
        Self { front, back }
    }

    /// A card with both faces empty (still occupies a slot on both pages).
    pub fn blank() -> Self {
        Self {
            front: FaceContent::Empty,
            back: FaceContent::Empty,
        }
    }
}

/// Which face of the card stack a physical page holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFace {
    /// Printed first in duplex
    Front,
    /// Printed second in duplex
    Back,
}

impl PageFace {
    pub fn label(self) -> &'static str {
        match self {
            PageFace::Front => "Front",
            PageFace::Back => "Back",
        }
    }
}

/// Statistics about a sequenced card stack
#[derive(Debug, Clone, PartialEq)]
pub struct StackStatistics {
    /// Number of input cards
    pub cards: usize,
    /// Grid slots on one physical page
    pub slots_per_page: usize,
    /// Number of front/back page pairs
    pub page_pairs: usize,
    /// Physical pages in the output (pairs × 2)
    pub physical_pages: usize,
    /// Unused trailing slots on the final page pair
    pub blank_slots: usize,
}
