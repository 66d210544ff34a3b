//! Fixed-width text art for cards and pools.
//!
//! Everything here is a pure string producer: the engine never writes to a
//! terminal itself. A driver prints [`Deck::render_table`] after
//! construction and after each successful deal.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::deck::Deck;

/// ANSI escape for the highlighted (red) suit color.
pub const RED: &str = "\u{1b}[31m";
/// ANSI escape restoring the default terminal color.
pub const RESET: &str = "\u{1b}[0m";
/// ANSI escape that clears the viewport and homes the cursor.
pub const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Number of text lines in one card face.
pub const CARD_LINES: usize = 4;

impl Suit {
    /// Returns the suit glyph.
    const fn glyph(self) -> &'static str {
        match self {
            Self::Hearts => "\u{2764}",
            Self::Diamonds => "\u{2666}",
            Self::Clubs => "\u{2663}",
            Self::Spades => "\u{2660}",
        }
    }

    /// Returns whether the suit renders in the highlighted color.
    const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

impl Rank {
    /// Returns the rank label. `"10"` is the only two-character label.
    const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl Card {
    /// Returns the top border line of the card face.
    #[must_use]
    pub fn top_line(&self) -> String {
        String::from("+-------")
    }

    /// Returns the rank line, the label right-padded to six columns inside
    /// the border.
    #[must_use]
    pub fn rank_line(&self) -> String {
        format!("| {:<6}", self.rank.label())
    }

    /// Returns the suit line. Hearts and diamonds draw their glyph in the
    /// highlighted color, clubs and spades in the default color.
    #[must_use]
    pub fn suit_line(&self) -> String {
        let glyph = self.suit.glyph();
        if self.suit.is_red() {
            format!("|  {RED}{glyph}{RESET}    ")
        } else {
            format!("|  {glyph}    ")
        }
    }

    /// Returns the bottom border line of the card face.
    #[must_use]
    pub fn bottom_line(&self) -> String {
        String::from("+-------")
    }

    /// Renders the card as its [`CARD_LINES`] text-art lines.
    #[must_use]
    pub fn render(&self) -> [String; CARD_LINES] {
        [
            self.top_line(),
            self.rank_line(),
            self.suit_line(),
            self.bottom_line(),
        ]
    }
}

/// Renders a pool of cards side by side.
///
/// Produces [`CARD_LINES`] lines, each the corresponding line of every
/// card's face joined by a single space, in pool order. An empty pool
/// renders zero lines.
#[must_use]
pub fn render_area(cards: &[Card]) -> Vec<String> {
    if cards.is_empty() {
        return Vec::new();
    }

    let faces: Vec<[String; CARD_LINES]> = cards.iter().map(Card::render).collect();

    (0..CARD_LINES)
        .map(|row| {
            faces
                .iter()
                .map(|face| face[row].as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

impl Deck {
    /// Renders the full table view: a screen-clear directive, the labeled
    /// hand pool, then the labeled community pool.
    #[must_use]
    pub fn render_table(&self) -> String {
        let mut out = String::from(CLEAR_SCREEN);
        out.push_str("Hand Cards:\n");
        for line in render_area(self.hand()) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str("Community Cards:\n");
        for line in render_area(self.community()) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
