//! Dealing a new game.

use std::sync::Arc;

use log::{debug, info, warn};
use rustc_hash::FxHashMap;

use super::{Board, Player};
use crate::cards::{CardBase, MonsterCard};
use crate::catalog::CardCatalog;
use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap};
use crate::error::{EngineResult, GameError};
use crate::stack::EventStack;
use crate::zones::{Deck, LootArea, MonsterArea, TreasureArea};

impl Board {
    /// Build, shuffle and deal a new game.
    ///
    /// Each player gets a distinct random character with its starting item,
    /// a starting hand and starting cents. The monster slots and shop are
    /// filled and a random player goes first.
    pub fn new(config: GameConfig, catalog: Arc<dyn CardCatalog>) -> EngineResult<Self> {
        config.validate()?;
        let mut rng = GameRng::new(config.seed);
        let dice = rng.for_context("dice");

        let mut loot = Deck::from_cards(catalog.loot_cards(&config));
        let mut monsters = Deck::from_cards(catalog.monster_cards(&config));
        let mut treasure = Deck::from_cards(catalog.treasure_cards(&config));
        loot.shuffle(&mut rng);
        monsters.shuffle(&mut rng);
        treasure.shuffle(&mut rng);

        let mut characters = catalog.characters();
        if characters.len() < config.player_count {
            return Err(GameError::InvalidConfig(format!(
                "{} characters for {} players",
                characters.len(),
                config.player_count
            )));
        }
        rng.shuffle(&mut characters);
        characters.truncate(config.player_count);

        let players = characters
            .into_iter()
            .enumerate()
            .map(|(seat, character)| {
                Player::new(PlayerId(seat as u8), character, config.starting_cents)
            })
            .collect();

        let mut board = Board {
            loot: LootArea::new(loot),
            monsters: MonsterArea::new(monsters, config.monster_slots),
            treasure: TreasureArea::new(treasure, config.shop_slots),
            players: PlayerMap::from_vec(players),
            stack: EventStack::new(),
            active: PlayerId(0),
            turn: 1,
            config,
            dice_guesses: FxHashMap::default(),
            unwound: false,
            rng,
            dice,
            catalog,
        };

        board.deal_starting_items()?;
        board.deal_hands()?;
        board.fill_monster_slots_at_setup()?;
        board.refill_shop();

        let last = board.player_count() - 1;
        board.active = PlayerId(board.rng.gen_range_usize(0..=last) as u8);
        info!(
            "new game: {} players, {} goes first",
            board.player_count(),
            board.active
        );
        Ok(board)
    }

    fn deal_starting_items(&mut self) -> EngineResult<()> {
        let catalog = Arc::clone(&self.catalog);
        for player in self.players.player_ids().collect::<Vec<_>>() {
            let name = self.players[player].character.name().to_string();
            match catalog.starting_item(&name) {
                Some(item) => {
                    debug!("{player} plays {name} with {}", item.name());
                    self.add_card_to_board(player, item.into())?;
                }
                None => warn!("{name} has no starting item"),
            }
        }
        Ok(())
    }

    fn deal_hands(&mut self) -> EngineResult<()> {
        for player in self.players.player_ids().collect::<Vec<_>>() {
            self.loot(player, self.config.starting_hand)?;
        }
        Ok(())
    }

    /// Fill every slot with a fightable monster. Curses and bonus cards
    /// drawn here go to the bottom of the deck.
    fn fill_monster_slots_at_setup(&mut self) -> EngineResult<()> {
        for slot in 0..self.monsters.slots.len() {
            let mut attempts = self.monsters.pile.len();
            while attempts > 0 {
                attempts -= 1;
                let card: MonsterCard = match self.monsters.pile.draw(&mut self.rng) {
                    Ok(card) => card,
                    Err(GameError::EmptyDeck) => return Ok(()),
                    Err(e) => return Err(e),
                };
                if card.is_fightable() {
                    debug!("slot {slot}: {}", card.name());
                    self.monsters.slots[slot].push(card);
                    break;
                }
                self.monsters.pile.deck.prepend(card);
            }
        }
        Ok(())
    }
}
