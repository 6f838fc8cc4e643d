use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use cardstack::{StackOptions, Unit};

#[derive(Parser)]
#[command(
    name = "cardstack",
    about = "Generate a printable front/back card stack PDF from an XML card list",
    version
)]
struct Cli {
    /// Input XML card document
    input: PathBuf,

    /// Output PDF file
    #[arg(short, long, default_value = "output.pdf")]
    output: PathBuf,

    /// Use inches for measurements (default)
    #[arg(short = 'I', long = "use-inch", conflicts_with = "use_mm")]
    use_inch: bool,

    /// Use millimeters for measurements
    #[arg(short = 'M', long = "use-mm")]
    use_mm: bool,

    /// Page size as <width> <height>, overriding the XML pageConfig
    #[arg(short = 's', long = "page-size", num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    page_size: Option<Vec<f32>>,

    /// Card cell size as <width> <height>
    #[arg(long = "card-size", num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    card_size: Option<Vec<f32>>,

    /// Margin around each card cell
    #[arg(long)]
    margin: Option<f32>,

    /// Font: built-in name (Helvetica, Times, Courier, ...) or .ttf/.otf path
    #[arg(long)]
    font: Option<String>,

    /// Font size in points
    #[arg(long)]
    font_size: Option<f32>,

    /// Draw the border of every card frame (including empty ones)
    #[arg(long)]
    show_frames: bool,

    /// Add a centered "N (Front)" / "N (Back)" label to every page
    #[arg(long)]
    page_labels: bool,

    /// Add horizontal cut-line guides at each card row boundary
    #[arg(long)]
    cut_lines_h: bool,

    /// Add vertical cut-line guides at each card column boundary
    #[arg(long)]
    cut_lines_v: bool,

    /// Show statistics only, don't generate the PDF
    #[arg(long)]
    stats_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let document = cardstack::load_from_xml(&cli.input).await?;

    let mut options = StackOptions::default();
    if cli.use_inch {
        options.unit = Unit::Inches;
    }
    if cli.use_mm {
        options.unit = Unit::Millimeters;
        // Keep the built-in letter defaults meaningful in the new unit
        options.page_width = 215.9;
        options.page_height = 279.4;
        options.card_width = 88.9;
        options.card_height = 88.9;
        options.margin = 6.35;
    }

    // XML pageConfig overrides the defaults; CLI flags override both.
    options.apply_page_config(&document.config);

    if let Some(size) = &cli.page_size {
        options.page_width = size[0];
        options.page_height = size[1];
    }
    if let Some(size) = &cli.card_size {
        options.card_width = size[0];
        options.card_height = size[1];
    }
    if let Some(margin) = cli.margin {
        options.margin = margin;
    }
    if let Some(font) = cli.font {
        options.font = font;
    }
    if let Some(size) = cli.font_size {
        options.font_size_pt = size;
    }
    options.show_frames = cli.show_frames;
    options.page_labels = cli.page_labels;
    options.horizontal_cut_lines = cli.cut_lines_h;
    options.vertical_cut_lines = cli.cut_lines_v;

    options.validate()?;

    let grid = cardstack::compute_grid(
        options.page_width_pt(),
        options.page_height_pt(),
        options.card_width_pt(),
        options.card_height_pt(),
        options.margin_pt(),
    )?;
    let stats = cardstack::calculate_statistics(&document.cards, &grid);

    println!("Card Stack Statistics:");
    println!("  Cards: {}", stats.cards);
    println!(
        "  Grid: {} columns × {} rows ({} slots per page)",
        grid.columns, grid.rows, stats.slots_per_page
    );
    println!("  Page pairs: {}", stats.page_pairs);
    println!("  Physical pages: {}", stats.physical_pages);
    println!("  Blank slots: {}", stats.blank_slots);

    if cli.stats_only {
        return Ok(());
    }

    cardstack::generate_pdf(&document.cards, &options, &cli.output).await?;
    println!(
        "Generated {} cards → {}",
        stats.cards,
        cli.output.display()
    );

    Ok(())
}
