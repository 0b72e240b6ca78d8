//! Winning.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::cards::ids;
use crate::core::{GameConfig, PlayerId};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Nobody won before the turn limit.
    Draw,
    /// Several players crossed the line on the same check.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

/// Souls `player` needs to win: the configured target, plus one for each
/// Curse of Loss they carry.
#[must_use]
pub fn souls_needed(player: &Player, config: &GameConfig) -> u8 {
    let cursed = player
        .curses
        .iter()
        .filter(|c| c.info.id == ids::CURSE_OF_LOSS)
        .count();
    config
        .souls_to_win
        .saturating_add(u8::try_from(cursed).unwrap_or(u8::MAX))
}

/// Everyone with enough souls, or `None` if the game goes on.
#[must_use]
pub fn check_victory(board: &Board) -> Option<GameResult> {
    let mut winners: Vec<PlayerId> = board
        .players
        .iter()
        .filter(|(_, p)| p.soul_count() >= souls_needed(p, &board.config))
        .map(|(id, _)| id)
        .collect();
    match winners.len() {
        0 => None,
        1 => winners.pop().map(GameResult::Winner),
        _ => Some(GameResult::Winners(winners)),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{CardId, MonsterCard};
    use crate::catalog::StarterCatalog;

    fn board() -> Board {
        Board::new(GameConfig::new(3).with_seed(2), Arc::new(StarterCatalog::new())).unwrap()
    }

    fn soul(id: u16) -> MonsterCard {
        MonsterCard::boss(CardId(id), "Boss", 3, 4, 1)
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId(1));
        assert!(!result.is_winner(PlayerId(0)));
        assert!(result.is_winner(PlayerId(1)));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId(0)));

        let shared = GameResult::Winners(vec![PlayerId(0), PlayerId(2)]);
        assert!(shared.is_winner(PlayerId(0)));
        assert!(!shared.is_winner(PlayerId(1)));
        assert!(shared.is_winner(PlayerId(2)));
    }

    #[test]
    fn test_no_winner_at_start() {
        assert_eq!(check_victory(&board()), None);
    }

    #[test]
    fn test_two_soul_monsters_count_double() {
        let mut b = board();
        let p = PlayerId(2);
        b.players[p].souls.push(MonsterCard::boss(ids::MOM, "Mom!", 6, 4, 2).into());
        b.players[p].souls.push(MonsterCard::boss(ids::SATAN, "Satan!", 6, 5, 2).into());
        assert_eq!(check_victory(&b), Some(GameResult::Winner(p)));
    }

    #[test]
    fn test_curse_of_loss_raises_the_bar() {
        let mut b = board();
        let p = PlayerId(0);
        b.players[p].curses.push(MonsterCard::curse(ids::CURSE_OF_LOSS, "Curse of Loss"));
        assert_eq!(souls_needed(&b.players[p], &b.config), 5);
        for id in 700..704 {
            b.players[p].souls.push(soul(id).into());
        }
        assert_eq!(check_victory(&b), None);
        b.players[p].souls.push(soul(704).into());
        assert_eq!(check_victory(&b), Some(GameResult::Winner(p)));
    }

    #[test]
    fn test_simultaneous_winners() {
        let mut b = board();
        for p in [PlayerId(0), PlayerId(1)] {
            for id in 0..4 {
                b.players[p].souls.push(soul(800 + id).into());
            }
        }
        assert_eq!(
            check_victory(&b),
            Some(GameResult::Winners(vec![PlayerId(0), PlayerId(1)]))
        );
    }
}
