//! Deck state and dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// Hole cards dealt to the hand pool at construction.
const HOLE_CARDS: usize = 2;
/// Flop cards dealt to the community pool at construction.
const FLOP_CARDS: usize = 3;

/// A 52-card deck that deals without replacement into two pools.
///
/// The deck owns a fixed arena of all 52 cards, built suit-major and
/// rank-ascending and never reordered. Liveness is tracked by a separate
/// pool of undealt indices; drawing picks a uniformly random position in
/// that pool and swap-removes it, so a card can never be dealt twice.
///
/// One `Deck` belongs to one session. Construction deals the two hole
/// cards and the flop immediately; afterwards the only mutation is
/// [`deal_community`](Self::deal_community), one card per call, until the
/// deck is exhausted.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Fixed arena of all 52 cards. Indices are stable identifiers.
    cards: [Card; DECK_SIZE],
    /// Indices of cards not yet dealt. Order is irrelevant.
    available: Vec<u8>,
    /// Cards dealt to the private hand pool, in deal order.
    hand: Vec<Card>,
    /// Cards dealt to the shared community pool, in deal order.
    community: Vec<Card>,
    /// Session random number generator, seeded once at construction.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a new deck with the given seed and deals the opening cards
    /// (two to the hand pool, three to the community pool).
    ///
    /// Pass a fixed seed for a reproducible session, or derive one from a
    /// high-entropy source for live play.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_dealer::Deck;
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.hand().len(), 2);
    /// assert_eq!(deck.community().len(), 3);
    /// assert_eq!(deck.cards_remaining(), 47);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Self::full_deck(),
            available: (0..DECK_SIZE as u8).collect(),
            hand: Vec::with_capacity(HOLE_CARDS),
            community: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };

        for _ in 0..HOLE_CARDS {
            // A fresh 52-card pool cannot run dry on the opening deal.
            if let Some(card) = deck.draw() {
                deck.hand.push(card);
            }
        }
        for _ in 0..FLOP_CARDS {
            if let Some(card) = deck.draw() {
                deck.community.push(card);
            }
        }

        deck
    }

    /// Builds the fixed card arena, suit-major then rank-ascending.
    fn full_deck() -> [Card; DECK_SIZE] {
        let mut cards = [Card::new(Suit::Hearts, Rank::Two); DECK_SIZE];
        let mut next = 0;
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards[next] = Card::new(suit, rank);
                next += 1;
            }
        }
        cards
    }

    /// Draws one card uniformly at random from the undealt indices.
    ///
    /// Swap-removes the chosen index, so removal is O(1) and the drawn
    /// card can never come up again this session.
    fn draw(&mut self) -> Option<Card> {
        if self.available.is_empty() {
            return None;
        }
        let position = self.rng.random_range(0..self.available.len());
        let index = self.available.swap_remove(position);
        Some(self.cards[index as usize])
    }

    /// Deals one card to the community pool.
    ///
    /// Returns the dealt card. When the deck is exhausted this is a no-op
    /// that leaves both pools untouched and may be called again safely.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Exhausted`] if no undealt cards remain.
    pub fn deal_community(&mut self) -> Result<Card, DealError> {
        let card = self.draw().ok_or(DealError::Exhausted)?;
        self.community.push(card);
        Ok(card)
    }

    /// Returns the cards in the private hand pool, in deal order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the cards in the shared community pool, in deal order.
    #[must_use]
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.available.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.available.is_empty()
    }
}
