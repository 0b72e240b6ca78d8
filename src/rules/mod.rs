//! Game rules that sit above the board: what a player may do right now
//! and who has won.
//!
//! Both are pure reads of a [`Board`](crate::board::Board). The
//! [`Game`](crate::game::Game) loop asks for [`legal_actions`] at every
//! decision point and for [`check_victory`] whenever the stack drains.

pub mod actions;
pub mod victory;

pub use actions::{legal_actions, PlayerAction};
pub use victory::{check_victory, souls_needed, GameResult};
