//! XML card document parsing
//!
//! The input document shape follows the original tag vocabulary:
//!
//! ```xml
//! <main>
//!   <pageConfig>
//!     <pageWidth>8.5</pageWidth>
//!     <pageHeight>11</pageHeight>
//!     <font>Helvetica</font>
//!     <fontSize>12</fontSize>
//!   </pageConfig>
//!   <content>
//!     <card><text>front text</text><image path="back.png"/></card>
//!     <card><text>front only</text></card>
//!     <card/>
//!   </content>
//! </main>
//! ```
//!
//! Every `pageConfig` entry is optional and overrides a built-in default.
//! A card holds 0, 1 or 2 face elements: first child is the front, second
//! the back; missing faces are explicitly empty. Structural problems are
//! fatal and report the 1-based card index. Image paths are not checked
//! here; the renderer verifies them when it places the image.

use std::path::{Path, PathBuf};

use roxmltree::Node;

use crate::types::{Card, FaceContent, Result, StackError};

// Tag vocabulary
const TAG_MAIN: &str = "main";
const TAG_PAGE_CONFIG: &str = "pageConfig";
const TAG_PAGE_WIDTH: &str = "pageWidth";
const TAG_PAGE_HEIGHT: &str = "pageHeight";
const TAG_FONT: &str = "font";
const TAG_FONT_SIZE: &str = "fontSize";
const TAG_CONTENT: &str = "content";
const TAG_CARD: &str = "card";
const TAG_TEXT: &str = "text";
const TAG_IMAGE: &str = "image";

/// Page configuration overrides from the document's pageConfig section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageConfig {
    pub page_width: Option<f32>,
    pub page_height: Option<f32>,
    pub font: Option<String>,
    pub font_size_pt: Option<f32>,
}

/// A parsed card document: configuration overrides plus ordered cards
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardDocument {
    pub config: PageConfig,
    pub cards: Vec<Card>,
}

/// Load and parse a card document from a file
pub async fn load_from_xml(path: impl AsRef<Path>) -> Result<CardDocument> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    let document =
        tokio::task::spawn_blocking(move || parse_document(&contents)).await??;

    Ok(document)
}

/// Parse a card document from XML source
pub fn parse_document(source: &str) -> Result<CardDocument> {
    let doc = roxmltree::Document::parse(source)?;
    let root = doc.root_element();

    if root.tag_name().name() != TAG_MAIN {
        return Err(StackError::Document(format!(
            "Expected <{}> root element, found <{}>",
            TAG_MAIN,
            root.tag_name().name()
        )));
    }

    let mut config = PageConfig::default();
    let mut cards = None;

    for child in root.children().filter(Node::is_element) {
        match child.tag_name().name() {
            TAG_PAGE_CONFIG => config = parse_page_config(child)?,
            TAG_CONTENT => cards = Some(parse_content(child)?),
            other => {
                return Err(StackError::Document(format!(
                    "Unexpected element <{}> under <{}>",
                    other, TAG_MAIN
                )));
            }
        }
    }

    let cards = cards.ok_or_else(|| {
        StackError::Document(format!("Missing <{}> section", TAG_CONTENT))
    })?;

    Ok(CardDocument { config, cards })
}

fn parse_page_config(node: Node) -> Result<PageConfig> {
    let mut config = PageConfig::default();

    for child in node.children().filter(Node::is_element) {
        let name = child.tag_name().name();
        let value = child.text().map(str::trim).unwrap_or_default();

        match name {
            TAG_PAGE_WIDTH => config.page_width = Some(parse_dimension(name, value)?),
            TAG_PAGE_HEIGHT => config.page_height = Some(parse_dimension(name, value)?),
            TAG_FONT_SIZE => config.font_size_pt = Some(parse_dimension(name, value)?),
            TAG_FONT => {
                if value.is_empty() {
                    return Err(StackError::Document(format!("<{}> has no content", name)));
                }
                config.font = Some(value.to_string());
            }
            other => {
                return Err(StackError::Document(format!(
                    "Unexpected element <{}> under <{}>",
                    other, TAG_PAGE_CONFIG
                )));
            }
        }
    }

    Ok(config)
}

fn parse_dimension(tag: &str, value: &str) -> Result<f32> {
    value.parse::<f32>().map_err(|_| {
        StackError::Document(format!("<{}> is not a number: {:?}", tag, value))
    })
}

fn parse_content(node: Node) -> Result<Vec<Card>> {
    let mut cards = Vec::new();

    for child in node.children().filter(Node::is_element) {
        let name = child.tag_name().name();
        if name != TAG_CARD {
            return Err(StackError::Document(format!(
                "Unexpected element <{}> under <{}>",
                name, TAG_CONTENT
            )));
        }
        let index = cards.len() + 1;
        cards.push(parse_card(child, index)?);
    }

    Ok(cards)
}

fn parse_card(node: Node, index: usize) -> Result<Card> {
    let mut faces = Vec::new();

    for child in node.children().filter(Node::is_element) {
        if faces.len() == 2 {
            return Err(StackError::Content {
                card: index,
                message: "more than two face elements".to_string(),
            });
        }
        faces.push(parse_face(child, index)?);
    }

    let mut faces = faces.into_iter();
    Ok(Card::new(
        faces.next().unwrap_or(FaceContent::Empty),
        faces.next().unwrap_or(FaceContent::Empty),
    ))
}

fn parse_face(node: Node, index: usize) -> Result<FaceContent> {
    match node.tag_name().name() {
        TAG_TEXT => {
            let text = node.text().map(str::trim).unwrap_or_default();
            if text.is_empty() {
                return Err(StackError::Content {
                    card: index,
                    message: "<text> element has no content".to_string(),
                });
            }
            Ok(FaceContent::Text(text.to_string()))
        }
        TAG_IMAGE => {
            let path = node.attribute("path").ok_or_else(|| StackError::Content {
                card: index,
                message: "<image> element is missing the path attribute".to_string(),
            })?;
            Ok(FaceContent::Image(PathBuf::from(path)))
        }
        other => Err(StackError::Content {
            card: index,
            message: format!("unknown face element <{}>", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let doc = parse_document(
            r#"<main>
                <pageConfig>
                    <pageWidth>8.5</pageWidth>
                    <pageHeight>11</pageHeight>
                    <font>Courier</font>
                    <fontSize>14</fontSize>
                </pageConfig>
                <content>
                    <card><text>front</text><image path="back.png"/></card>
                    <card><text>front only</text></card>
                    <card/>
                </content>
            </main>"#,
        )
        .unwrap();

        assert_eq!(doc.config.page_width, Some(8.5));
        assert_eq!(doc.config.page_height, Some(11.0));
        assert_eq!(doc.config.font.as_deref(), Some("Courier"));
        assert_eq!(doc.config.font_size_pt, Some(14.0));

        assert_eq!(doc.cards.len(), 3);
        assert_eq!(
            doc.cards[0].front,
            FaceContent::Text("front".to_string())
        );
        assert_eq!(
            doc.cards[0].back,
            FaceContent::Image(PathBuf::from("back.png"))
        );
        assert_eq!(doc.cards[1].back, FaceContent::Empty);
        assert_eq!(doc.cards[2].front, FaceContent::Empty);
        assert_eq!(doc.cards[2].back, FaceContent::Empty);
    }

    #[test]
    fn test_page_config_is_optional() {
        let doc = parse_document("<main><content><card/></content></main>").unwrap();
        assert_eq!(doc.config, PageConfig::default());
        assert_eq!(doc.cards.len(), 1);
    }

    #[test]
    fn test_missing_content_section() {
        let result = parse_document("<main></main>");
        match result {
            Err(StackError::Document(msg)) => assert!(msg.contains("content")),
            _ => panic!("Expected Document error"),
        }
    }

    #[test]
    fn test_wrong_root_element() {
        let result = parse_document("<deck><content/></deck>");
        assert!(matches!(result, Err(StackError::Document(_))));
    }

    #[test]
    fn test_malformed_xml_is_parse_error() {
        let result = parse_document("<main><content>");
        assert!(matches!(result, Err(StackError::Parse(_))));
    }

    #[test]
    fn test_image_missing_path_reports_card_index() {
        let result = parse_document(
            "<main><content><card/><card><image/></card></content></main>",
        );
        match result {
            Err(StackError::Content { card, message }) => {
                assert_eq!(card, 2);
                assert!(message.contains("path"));
            }
            _ => panic!("Expected Content error"),
        }
    }

    #[test]
    fn test_empty_text_reports_card_index() {
        let result =
            parse_document("<main><content><card><text></text></card></content></main>");
        match result {
            Err(StackError::Content { card, .. }) => assert_eq!(card, 1),
            _ => panic!("Expected Content error"),
        }
    }

    #[test]
    fn test_three_faces_rejected() {
        let result = parse_document(
            "<main><content><card>\
                <text>a</text><text>b</text><text>c</text>\
            </card></content></main>",
        );
        match result {
            Err(StackError::Content { card, message }) => {
                assert_eq!(card, 1);
                assert!(message.contains("two face"));
            }
            _ => panic!("Expected Content error"),
        }
    }

    #[test]
    fn test_bad_dimension_value() {
        let result = parse_document(
            "<main><pageConfig><pageWidth>wide</pageWidth></pageConfig>\
             <content/></main>",
        );
        match result {
            Err(StackError::Document(msg)) => assert!(msg.contains("pageWidth")),
            _ => panic!("Expected Document error"),
        }
    }
}
