//! Card sequencing: assigning cards to front/back page pairs
//!
//! Walks the ordered card list and fills a front page and a back page in
//! lockstep, so a card's two faces always share the same slot position on
//! two adjacent physical pages. Pure; runs to completion before any
//! rendering begins.

use crate::types::{Card, PageFace, StackStatistics};

use super::{GridLayout, PageContent, Slot};

/// Assign cards to page pairs in input order.
///
/// Returns physical pages alternating `[front0, back0, front1, back1, …]`.
/// Every page carries exactly `rows × columns` slots; trailing slots on the
/// final pair are explicit padding so blank frames still render. An empty
/// card list yields no pages.
pub fn sequence_cards(cards: &[Card], layout: &GridLayout) -> Vec<PageContent> {
    let slots_per_page = layout.slots_per_page();
    let mut pages = Vec::new();

    for (pair_index, chunk) in cards.chunks(slots_per_page).enumerate() {
        let mut front = PageContent {
            face: PageFace::Front,
            pair: pair_index,
            slots: Vec::with_capacity(slots_per_page),
        };
        let mut back = PageContent {
            face: PageFace::Back,
            pair: pair_index,
            slots: Vec::with_capacity(slots_per_page),
        };

        for (offset, card) in chunk.iter().enumerate() {
            let card_number = pair_index * slots_per_page + offset + 1;
            front.slots.push(Slot {
                content: card.front.clone(),
                card: Some(card_number),
            });
            back.slots.push(Slot {
                content: card.back.clone(),
                card: Some(card_number),
            });
        }

        while front.slots.len() < slots_per_page {
            front.slots.push(Slot::padding());
            back.slots.push(Slot::padding());
        }

        pages.push(front);
        pages.push(back);
    }

    pages
}

/// Calculate statistics for a card stack before rendering it
pub fn calculate_statistics(cards: &[Card], layout: &GridLayout) -> StackStatistics {
    let slots_per_page = layout.slots_per_page();
    let page_pairs = cards.len().div_ceil(slots_per_page);
    let blank_slots = page_pairs * slots_per_page - cards.len();

    StackStatistics {
        cards: cards.len(),
        slots_per_page,
        page_pairs,
        physical_pages: page_pairs * 2,
        blank_slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_grid;
    use crate::types::FaceContent;

    fn two_by_two() -> GridLayout {
        // 4 slots per page
        compute_grid(612.0, 792.0, 252.0, 252.0, 18.0).unwrap()
    }

    fn text_front(s: &str) -> Card {
        Card::new(FaceContent::Text(s.to_string()), FaceContent::Empty)
    }

    #[test]
    fn test_five_front_only_cards_make_two_pairs() {
        let layout = two_by_two();
        let cards: Vec<Card> = (1..=5).map(|i| text_front(&format!("card {}", i))).collect();

        let pages = sequence_cards(&cards, &layout);
        assert_eq!(pages.len(), 4); // 2 page pairs = 4 physical pages

        // Pair 0 front: four texts
        assert_eq!(pages[0].face, PageFace::Front);
        assert_eq!(pages[0].pair, 0);
        assert_eq!(pages[0].slots.len(), 4);
        assert!(pages[0].slots.iter().all(|s| !s.content.is_empty()));

        // Pair 0 back: four explicit empties, same card numbers
        assert_eq!(pages[1].face, PageFace::Back);
        assert!(pages[1].slots.iter().all(|s| s.content.is_empty()));
        assert_eq!(pages[1].slots[2].card, Some(3));

        // Pair 1 front: card 5 at slot 0, then padding
        assert_eq!(pages[2].pair, 1);
        assert_eq!(
            pages[2].slots[0].content,
            FaceContent::Text("card 5".to_string())
        );
        assert_eq!(pages[2].slots[0].card, Some(5));
        assert!(pages[2].slots[1..].iter().all(|s| s.card.is_none()));

        // Pair 1 back: fully empty but fully enumerated
        assert_eq!(pages[3].slots.len(), 4);
        assert!(pages[3].slots.iter().all(|s| s.content.is_empty()));
    }

    #[test]
    fn test_faces_share_slot_positions() {
        let layout = two_by_two();
        let cards = vec![
            Card::new(
                FaceContent::Text("Q1".to_string()),
                FaceContent::Text("A1".to_string()),
            ),
            Card::blank(),
            Card::new(
                FaceContent::Text("Q3".to_string()),
                FaceContent::Text("A3".to_string()),
            ),
        ];

        let pages = sequence_cards(&cards, &layout);
        assert_eq!(pages.len(), 2);

        let front = &pages[0];
        let back = &pages[1];
        assert_eq!(front.slots[0].content, FaceContent::Text("Q1".to_string()));
        assert_eq!(back.slots[0].content, FaceContent::Text("A1".to_string()));

        // The blank card still occupies slot 1 on both pages
        assert_eq!(front.slots[1].content, FaceContent::Empty);
        assert_eq!(back.slots[1].content, FaceContent::Empty);
        assert_eq!(front.slots[1].card, Some(2));

        assert_eq!(front.slots[2].content, FaceContent::Text("Q3".to_string()));
        assert_eq!(back.slots[2].content, FaceContent::Text("A3".to_string()));
    }

    #[test]
    fn test_order_preserved_across_pairs() {
        let layout = two_by_two();
        let cards: Vec<Card> = (1..=10).map(|i| text_front(&format!("{}", i))).collect();

        let pages = sequence_cards(&cards, &layout);
        assert_eq!(pages.len(), 6);

        // Card N lands on pair floor((N−1)/4) at slot (N−1) % 4
        for n in 1..=10usize {
            let pair = (n - 1) / 4;
            let slot = (n - 1) % 4;
            let page = &pages[pair * 2];
            assert_eq!(page.slots[slot].content, FaceContent::Text(format!("{}", n)));
            assert_eq!(page.slots[slot].card, Some(n));
        }
    }

    #[test]
    fn test_empty_input_yields_no_pages() {
        let layout = two_by_two();
        assert!(sequence_cards(&[], &layout).is_empty());
    }

    #[test]
    fn test_statistics() {
        let layout = two_by_two();
        let cards: Vec<Card> = (1..=5).map(|i| text_front(&format!("{}", i))).collect();

        let stats = calculate_statistics(&cards, &layout);
        assert_eq!(stats.cards, 5);
        assert_eq!(stats.slots_per_page, 4);
        assert_eq!(stats.page_pairs, 2);
        assert_eq!(stats.physical_pages, 4);
        assert_eq!(stats.blank_slots, 3);
    }

    #[test]
    fn test_statistics_exact_fit() {
        let layout = two_by_two();
        let cards: Vec<Card> = (1..=8).map(|i| text_front(&format!("{}", i))).collect();

        let stats = calculate_statistics(&cards, &layout);
        assert_eq!(stats.page_pairs, 2);
        assert_eq!(stats.blank_slots, 0);
    }
}
