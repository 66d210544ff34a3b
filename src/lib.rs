//! A hold'em card dealing engine with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that owns the 52-card universe,
//! deals without replacement into a private hand pool and a shared
//! community pool, and renders both pools as fixed-width text art.
//!
//! # Example
//!
//! ```
//! use holdem_dealer::Deck;
//!
//! let mut deck = Deck::new(42);
//! let turn = deck.deal_community()?;
//! assert_eq!(deck.community().len(), 4);
//! assert_eq!(deck.community().last(), Some(&turn));
//! # Ok::<(), holdem_dealer::DealError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod render;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::DealError;
pub use render::{CARD_LINES, CLEAR_SCREEN, RED, RESET, render_area};
