use cardstack::*;

#[test]
fn test_defaults_are_letter_with_square_cards() {
    let options = StackOptions::default();
    assert_eq!(options.unit, Unit::Inches);
    assert_eq!(options.page_width, 8.5);
    assert_eq!(options.page_height, 11.0);
    assert_eq!(options.card_width, 3.5);
    assert_eq!(options.margin, 0.25);
    assert!(options.validate().is_ok());
}

#[test]
fn test_unit_conversion() {
    assert!((Unit::Inches.to_pt(1.0) - 72.0).abs() < 1e-3);
    assert!((Unit::Millimeters.to_pt(25.4) - 72.0).abs() < 1e-3);
    assert_eq!(Unit::Points.to_pt(10.0), 10.0);
}

#[test]
fn test_point_accessors_convert_from_unit() {
    let options = StackOptions {
        unit: Unit::Millimeters,
        page_width: 210.0,
        page_height: 297.0,
        ..Default::default()
    };
    assert!((options.page_width_pt() - 595.27).abs() < 0.1);
    assert!((options.page_height_pt() - 841.89).abs() < 0.1);
}

#[test]
fn test_validation_rejects_bad_geometry() {
    let mut options = StackOptions {
        page_width: 0.0,
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(StackError::Config(_))));

    options = StackOptions {
        card_height: -1.0,
        ..Default::default()
    };
    assert!(options.validate().is_err());

    options = StackOptions {
        margin: -0.1,
        ..Default::default()
    };
    match options.validate() {
        Err(StackError::Config(msg)) => assert!(msg.contains("Margin")),
        _ => panic!("Expected Config error"),
    }

    options = StackOptions {
        font_size_pt: 0.0,
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_page_config_overrides() {
    let doc = parse_document(
        "<main><pageConfig><pageWidth>4</pageWidth><fontSize>18</fontSize></pageConfig>\
         <content/></main>",
    )
    .unwrap();

    let mut options = StackOptions::default();
    options.apply_page_config(&doc.config);

    assert_eq!(options.page_width, 4.0);
    assert_eq!(options.page_height, 11.0); // untouched default
    assert_eq!(options.font_size_pt, 18.0);
    assert_eq!(options.font, "Helvetica"); // untouched default
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = StackOptions {
        unit: Unit::Millimeters,
        page_width: 210.0,
        page_height: 297.0,
        card_width: 60.0,
        card_height: 90.0,
        page_labels: true,
        vertical_cut_lines: true,
        ..Default::default()
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = StackOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}
