//! Deck integration tests.

use std::collections::HashMap;
use std::collections::HashSet;

use holdem_dealer::{
    CARD_LINES, CLEAR_SCREEN, Card, DECK_SIZE, DealError, Deck, RED, Rank, Suit, render_area,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn initial_deal_shape() {
    let deck = Deck::new(1);

    assert_eq!(deck.hand().len(), 2);
    assert_eq!(deck.community().len(), 3);
    assert_eq!(deck.cards_remaining(), DECK_SIZE - 5);
    assert!(!deck.is_exhausted());
}

#[test]
fn deal_returns_the_card_appended_to_community() {
    let mut deck = Deck::new(9);

    let dealt = deck.deal_community().unwrap();
    assert_eq!(deck.community().len(), 4);
    assert_eq!(deck.community().last(), Some(&dealt));
}

#[test]
fn card_counts_are_conserved_after_every_deal() {
    let mut deck = Deck::new(3);
    let mut successful = 0;

    while deck.deal_community().is_ok() {
        successful += 1;
        assert_eq!(
            deck.cards_remaining() + deck.hand().len() + deck.community().len(),
            DECK_SIZE
        );
    }

    // 5 cards at construction, 47 more deals empty the deck.
    assert_eq!(successful, DECK_SIZE - 5);
    assert_eq!(deck.cards_remaining(), 0);
    assert!(deck.is_exhausted());
}

#[test]
fn no_card_is_dealt_twice_within_a_session() {
    let mut deck = Deck::new(4);
    while deck.deal_community().is_ok() {}

    let mut seen: HashSet<Card> = HashSet::new();
    for &card in deck.hand().iter().chain(deck.community()) {
        assert!(seen.insert(card), "duplicate card {card:?}");
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn exhaustion_is_reported_and_leaves_state_untouched() {
    let mut deck = Deck::new(5);
    for _ in 0..DECK_SIZE - 5 {
        deck.deal_community().unwrap();
    }
    assert!(deck.is_exhausted());

    // Repeated calls on an exhausted deck stay safe no-ops.
    for _ in 0..3 {
        assert_eq!(deck.deal_community().unwrap_err(), DealError::Exhausted);
        assert_eq!(deck.hand().len(), 2);
        assert_eq!(deck.community().len(), 50);
        assert_eq!(deck.cards_remaining(), 0);
    }
}

#[test]
fn same_seed_replays_the_same_session() {
    let mut first = Deck::new(7);
    let mut second = Deck::new(7);

    assert_eq!(first.hand(), second.hand());
    for _ in 0..10 {
        assert_eq!(first.deal_community().ok(), second.deal_community().ok());
    }
    assert_eq!(first.community(), second.community());
}

#[test]
fn ace_of_hearts_renders_highlighted() {
    let lines = card(Suit::Hearts, Rank::Ace).render();

    assert_eq!(lines.len(), CARD_LINES);
    assert_eq!(lines[0], "+-------");
    assert_eq!(lines[1], "| A     ");
    assert!(lines[2].starts_with("|  "));
    assert!(lines[2].contains(RED));
    assert!(lines[2].contains('\u{2764}'));
    assert_eq!(lines[3], "+-------");
}

#[test]
fn ace_of_spades_renders_in_default_color() {
    let lines = card(Suit::Spades, Rank::Ace).render();

    assert_eq!(lines[1], "| A     ");
    assert_eq!(lines[2], "|  \u{2660}    ");
    assert!(!lines[2].contains(RED));
}

#[test]
fn ten_is_the_only_two_column_label_and_keeps_the_width() {
    assert_eq!(card(Suit::Clubs, Rank::Ten).rank_line(), "| 10    ");
    assert_eq!(card(Suit::Clubs, Rank::Two).rank_line(), "| 2     ");
    assert_eq!(card(Suit::Clubs, Rank::Queen).rank_line(), "| Q     ");
}

#[test]
fn render_area_on_empty_pool_produces_no_lines() {
    assert!(render_area(&[]).is_empty());
}

#[test]
fn render_area_joins_card_fragments_with_single_spaces() {
    let pool = [
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::King),
    ];
    let lines = render_area(&pool);

    assert_eq!(lines.len(), CARD_LINES);
    assert_eq!(lines[0], "+------- +------- +-------");
    assert_eq!(lines[1], "| 2      | 10     | K     ");
    for (row, line) in lines.iter().enumerate() {
        let fragments: Vec<String> = pool.iter().map(|c| c.render()[row].clone()).collect();
        assert_eq!(*line, fragments.join(" "));
    }
}

#[test]
fn render_table_clears_and_labels_both_pools() {
    let deck = Deck::new(11);
    let table = deck.render_table();

    let body = table.strip_prefix(CLEAR_SCREEN).unwrap();
    let lines: Vec<&str> = body.lines().collect();

    // Label + 4 art lines per pool: 2 hand cards, 3 community cards.
    assert_eq!(lines.len(), 2 + 2 * CARD_LINES);
    assert_eq!(lines[0], "Hand Cards:");
    assert_eq!(lines[1 + CARD_LINES], "Community Cards:");
    assert_eq!(lines[1], render_area(deck.hand())[0]);
    assert_eq!(lines[2 + CARD_LINES], render_area(deck.community())[0]);
}

#[test]
fn first_draw_is_statistically_uniform() {
    const TRIALS: u64 = 52 * 200;

    let mut counts: HashMap<Card, u64> = HashMap::new();
    for seed in 0..TRIALS {
        let deck = Deck::new(seed);
        *counts.entry(deck.hand()[0]).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), DECK_SIZE);

    let expected = (TRIALS / DECK_SIZE as u64) as f64;
    let chi_square: f64 = counts
        .values()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    // Chi-square critical value for 51 degrees of freedom at p = 1e-4 is
    // about 95; anything under 110 is comfortably uniform.
    assert!(chi_square < 110.0, "chi-square {chi_square} too high");
}
