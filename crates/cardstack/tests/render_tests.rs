use cardstack::*;
use std::path::PathBuf;

fn text_card(front: &str, back: &str) -> Card {
    Card::new(
        FaceContent::Text(front.to_string()),
        FaceContent::Text(back.to_string()),
    )
}

#[test]
fn test_generate_text_deck_bytes() {
    let cards: Vec<Card> = (1..=5)
        .map(|i| text_card(&format!("question {}", i), &format!("answer {}", i)))
        .collect();
    let options = StackOptions {
        page_labels: true,
        show_frames: true,
        vertical_cut_lines: true,
        horizontal_cut_lines: true,
        ..Default::default()
    };

    let bytes = generate_pdf_bytes(&cards, &options).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_generate_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("deck.pdf");

    let cards = vec![text_card("hello", "world")];
    generate_pdf(&cards, &StackOptions::default(), &out)
        .await
        .unwrap();

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_missing_image_aborts_with_card_index() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("deck.pdf");

    let cards = vec![
        text_card("fine", "fine"),
        Card::new(
            FaceContent::Image(PathBuf::from("/nonexistent/image.png")),
            FaceContent::Empty,
        ),
    ];

    let result = generate_pdf(&cards, &StackOptions::default(), &out).await;
    match result {
        Err(StackError::Content { card, message }) => {
            assert_eq!(card, 2);
            assert!(message.contains("image"));
        }
        other => panic!("Expected Content error, got {:?}", other.err()),
    }

    // All-or-nothing: no partial output file
    assert!(!out.exists());
}

#[tokio::test]
async fn test_geometry_error_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("deck.pdf");

    let options = StackOptions {
        page_width: 2.0,
        page_height: 2.0,
        ..Default::default()
    };

    let result = generate_pdf(&[text_card("a", "b")], &options, &out).await;
    assert!(matches!(result, Err(StackError::Geometry(_))));
    assert!(!out.exists());
}

#[test]
fn test_unknown_font_is_config_error() {
    let options = StackOptions {
        font: "Comic Sans".to_string(),
        ..Default::default()
    };
    let result = generate_pdf_bytes(&[text_card("a", "b")], &options);
    assert!(matches!(result, Err(StackError::Config(_))));
}

#[test]
fn test_empty_faces_still_render() {
    // Blank cards occupy slots and render as bordered empty frames
    let cards = vec![
        Card::blank(),
        Card::new(
            FaceContent::Text("only card with text".to_string()),
            FaceContent::Empty,
        ),
    ];
    let options = StackOptions {
        show_frames: true,
        ..Default::default()
    };

    let bytes = generate_pdf_bytes(&cards, &options).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_end_to_end_from_xml() {
    let doc = parse_document(
        r#"<main>
            <pageConfig><fontSize>10</fontSize></pageConfig>
            <content>
                <card><text>alpha</text><text>beta</text></card>
                <card><text>gamma</text></card>
            </content>
        </main>"#,
    )
    .unwrap();

    let mut options = StackOptions::default();
    options.apply_page_config(&doc.config);
    assert_eq!(options.font_size_pt, 10.0);

    let bytes = generate_pdf_bytes(&doc.cards, &options).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
