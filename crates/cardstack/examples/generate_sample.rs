//! Generate a small sample deck to sample_deck.pdf

use cardstack::{Card, FaceContent, StackOptions, generate_pdf_bytes};

fn main() {
    let cards: Vec<Card> = [
        ("What is the capital of France?", "Paris"),
        ("2 + 2", "4"),
        ("Largest planet in the solar system", "Jupiter"),
        ("Author of 'The Hobbit'", "J. R. R. Tolkien"),
        ("Chemical symbol for gold", "Au"),
    ]
    .iter()
    .map(|(front, back)| {
        Card::new(
            FaceContent::Text(front.to_string()),
            FaceContent::Text(back.to_string()),
        )
    })
    .collect();

    let options = StackOptions {
        show_frames: true,
        page_labels: true,
        vertical_cut_lines: true,
        horizontal_cut_lines: true,
        ..Default::default()
    };

    let bytes = generate_pdf_bytes(&cards, &options).expect("failed to generate sample deck");
    std::fs::write("sample_deck.pdf", bytes).expect("failed to write sample_deck.pdf");
    println!("Wrote sample_deck.pdf ({} cards)", cards.len());
}
