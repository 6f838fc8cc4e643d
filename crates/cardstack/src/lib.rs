pub mod constants;
pub mod layout;
mod options;
mod render;
mod text;
mod types;
mod xml;

pub use layout::{
    Frame, GridLayout, GridPosition, PageContent, Slot, calculate_statistics, cell_frame,
    compute_grid, sequence_cards, vertical_padding,
};
pub use options::{StackOptions, Unit};
pub use render::{generate_pdf, generate_pdf_bytes};
pub use text::TextMeasure;
pub use types::*;
pub use xml::{CardDocument, PageConfig, load_from_xml, parse_document};
