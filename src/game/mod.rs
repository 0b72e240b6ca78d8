//! Running a whole game.
//!
//! [`Game`] owns a [`Board`] and the [`ChoiceProvider`] that answers for
//! every player, and sequences everything the board itself does not:
//! offering actions, opening reaction windows, draining the stack and
//! rotating turns.
//!
//! ## Turn Structure
//!
//! 1. StartOfTurn is pushed and the stack drains.
//! 2. The active player picks actions until they end their turn, their
//!    turn is forced to end, or the runaway guard trips.
//! 3. EndTurn is pushed and the stack drains.
//! 4. The turn passes on and the field is checked for a winner.
//!
//! Whenever an event is waiting on the stack, every player in turn order
//! after the one who pushed it may respond with their character or items
//! before it resolves. The window closes once a full round passes.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use four_souls::catalog::StarterCatalog;
//! use four_souls::core::{GameConfig, RandomChoices};
//! use four_souls::game::Game;
//!
//! let config = GameConfig::new(2).with_seed(9).with_max_turns(20);
//! let mut game = Game::new(config, Arc::new(StarterCatalog::new()), Box::new(RandomChoices::new(9))).unwrap();
//! let result = game.run().unwrap();
//! assert!(game.is_terminal());
//! # let _ = result;
//! ```

use std::sync::Arc;

use log::{debug, info, warn};

use crate::activation::{activate_character, activate_item, play_loot};
use crate::board::Board;
use crate::cards::ids;
use crate::catalog::CardCatalog;
use crate::core::{pick_index, ChoiceProvider, GameConfig, PlayerId};
use crate::effects::Resolver;
use crate::error::{EngineResult, GameError};
use crate::rules::{legal_actions, GameResult, PlayerAction};
use crate::stack::{Event, EventKind, NodeId};

/// A game in progress.
pub struct Game {
    board: Board,
    input: Box<dyn ChoiceProvider>,
    result: Option<GameResult>,
}

impl Game {
    /// Deal a new game.
    pub fn new(
        config: GameConfig,
        catalog: Arc<dyn CardCatalog>,
        input: Box<dyn ChoiceProvider>,
    ) -> EngineResult<Self> {
        Ok(Self {
            board: Board::new(config, catalog)?,
            input,
            result: None,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<PlayerAction> {
        legal_actions(&self.board, player)
    }

    /// Carry out one action for `player`. Returns the pushed event, if any.
    ///
    /// Nothing changes when an error comes back. `EndTurn` and `DoNothing`
    /// push nothing: ending the turn is up to the turn loop.
    pub fn perform(&mut self, player: PlayerId, action: PlayerAction) -> EngineResult<Option<NodeId>> {
        if self.board.players[player].is_dead() && action != PlayerAction::DoNothing {
            return Err(GameError::NoActionsRemaining {
                player,
                action: "actions while dead",
            });
        }
        if !action.is_reactive() && action != PlayerAction::EndTurn {
            self.check_main_phase(player)?;
        }
        let input = &mut *self.input;
        let board = &mut self.board;

        match action {
            PlayerAction::PlayLoot { index } => play_loot(board, input, player, index, true),
            PlayerAction::Purchase => {
                let price = board.price_for(player);
                let stocked = board.treasure.cards_in_shop() > 0 || !board.treasure.pile.is_empty();
                let owner = &mut board.players[player];
                if owner.in_battle() {
                    return Err(GameError::InBattle { player });
                }
                if owner.purchases == 0 {
                    return Err(GameError::NoActionsRemaining {
                        player,
                        action: "purchases",
                    });
                }
                if !stocked {
                    return Err(GameError::NoLegalTarget("nothing is for sale".into()));
                }
                if owner.cents < price {
                    return Err(GameError::InsufficientCents {
                        player,
                        needed: price,
                        available: owner.cents,
                    });
                }
                owner.purchases -= 1;
                Ok(Some(board.stack.push(Event::new(player, EventKind::IntentionToPurchase))))
            }
            PlayerAction::Attack { monster } => {
                if let Some(card) = monster.filter(|&m| board.monsters.find_active(m).is_none()) {
                    return Err(GameError::CardNotFound { card });
                }
                if monster.is_none() && board.monsters.pile.is_empty() {
                    return Err(GameError::EmptyDeck);
                }
                let owner = &mut board.players[player];
                if owner.in_battle() {
                    return Err(GameError::InBattle { player });
                }
                if owner.attacks == 0 {
                    return Err(GameError::NoActionsRemaining {
                        player,
                        action: "attacks",
                    });
                }
                owner.attacks -= 1;
                Ok(Some(
                    board
                        .stack
                        .push(Event::new(player, EventKind::IntentionToAttack { monster })),
                ))
            }
            PlayerAction::ContinueAttack => board.declare_attack(player).map(Some),
            PlayerAction::ActivateCharacter => activate_character(board, input, player).map(Some),
            PlayerAction::ActivateItem { card } => activate_item(board, input, player, card).map(Some),
            PlayerAction::EndTurn | PlayerAction::DoNothing => Ok(None),
        }
    }

    fn check_main_phase(&self, player: PlayerId) -> EngineResult<()> {
        if !self.board.stack.is_empty() {
            return Err(GameError::StackBusy);
        }
        if !self.board.is_active(player) {
            return Err(GameError::NoActionsRemaining {
                player,
                action: "turn actions",
            });
        }
        Ok(())
    }

    /// Let everyone respond to the event on top of the stack.
    ///
    /// Seats are asked in turn order starting after `initiator` and ending
    /// with them, until a full round passes. Trinity Shield keeps everyone
    /// but its owner out of the windows its owner opens.
    pub fn reaction_window(&mut self, initiator: PlayerId) -> EngineResult<()> {
        let count = self.board.player_count();
        let shielded = self.board.players[initiator].has_passive(ids::TRINITY_SHIELD);
        let seats = if shielded { 1 } else { count };
        let limit = self.board.config.max_actions_per_turn;

        let mut seat = initiator;
        let mut passes = 0;
        let mut offers = 0;
        while passes < seats && !self.board.stack.is_empty() {
            if offers >= limit {
                warn!("reaction window opened by {initiator} hit the {limit} action guard");
                break;
            }
            offers += 1;
            if !shielded {
                seat = seat.next(count);
            }

            let actions: Vec<PlayerAction> = self
                .legal_actions(seat)
                .into_iter()
                .filter(|a| a.is_reactive())
                .collect();
            let action = pick_index(&mut *self.input, seat, "respond", actions.len())
                .map_or(PlayerAction::DoNothing, |i| actions[i]);
            if action == PlayerAction::DoNothing {
                passes += 1;
                continue;
            }

            match self.perform(seat, action) {
                Ok(_) => {
                    debug!("{seat} responded with {action:?}");
                    passes = 0;
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    debug!("{seat}'s response {action:?} was rejected: {e}");
                    passes += 1;
                }
            }
        }
        Ok(())
    }

    /// Resolve until the stack is empty, opening a reaction window before
    /// each event.
    pub fn resolve_stack(&mut self) -> EngineResult<()> {
        while let Some(top) = self.board.stack.peek() {
            let initiator = top.event.player;
            self.reaction_window(initiator)?;
            Resolver::new(&mut self.board, &mut *self.input).resolve_next()?;
        }
        Ok(())
    }

    /// Play the active player's whole turn.
    ///
    /// Returns the result once someone has won.
    pub fn play_turn(&mut self) -> EngineResult<Option<GameResult>> {
        if let Some(result) = &self.result {
            return Ok(Some(result.clone()));
        }
        let player = self.board.active;
        self.board.start_turn(player);
        self.resolve_stack()?;
        if let Some(result) = self.settle()? {
            return Ok(Some(result));
        }

        let limit = self.board.config.max_actions_per_turn;
        let mut taken = 0;
        while !self.board.players[player].force_end {
            if taken >= limit {
                warn!("{player} hit the {limit} action guard, ending their turn");
                break;
            }
            taken += 1;

            let actions = self.legal_actions(player);
            let Some(index) = pick_index(&mut *self.input, player, "action", actions.len()) else {
                break;
            };
            let action = actions[index];
            if action == PlayerAction::EndTurn {
                break;
            }
            match self.perform(player, action) {
                Ok(_) => {}
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => debug!("{player}'s {action:?} was rejected: {e}"),
            }
            self.resolve_stack()?;
            if let Some(result) = self.settle()? {
                return Ok(Some(result));
            }
        }

        self.board.push_end_turn();
        self.resolve_stack()?;
        let next = self.board.end_turn();
        debug!("{next} is up");
        self.settle()
    }

    /// Play turns until someone wins or `max_turns` runs out.
    pub fn run(&mut self) -> EngineResult<GameResult> {
        loop {
            if let Some(result) = &self.result {
                return Ok(result.clone());
            }
            if self.board.turn as usize > self.board.config.max_turns {
                info!("no winner after {} turns", self.board.config.max_turns);
                self.result = Some(GameResult::Draw);
                continue;
            }
            self.play_turn()?;
        }
    }

    /// Check the field, resolving anything the monster refill pushed,
    /// until the stack stays empty.
    fn settle(&mut self) -> EngineResult<Option<GameResult>> {
        let limit = self.board.config.max_actions_per_turn;
        for _ in 0..limit {
            let result = self.check_the_field()?;
            if result.is_some() || self.board.stack.is_empty() {
                return Ok(result);
            }
            self.resolve_stack()?;
        }
        warn!("the field did not settle after {limit} checks");
        Ok(None)
    }

    fn check_the_field(&mut self) -> EngineResult<Option<GameResult>> {
        let result = self.board.check_the_field(&mut *self.input)?;
        if result.is_some() {
            self.result.clone_from(&result);
        }
        Ok(result)
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}
