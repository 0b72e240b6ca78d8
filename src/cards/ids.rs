//! Printed numbers of cards the rules refer to by name.
//!
//! Most cards are anonymous to the engine: their behaviour comes entirely
//! from the catalog. The cards listed here are the ones whose presence
//! changes a generic rule (damage, dice, death, purchasing, victory), plus
//! the starter catalog's cards.

use super::CardId;

// Loot
pub const A_PENNY: CardId = CardId(1);
pub const TWO_CENTS: CardId = CardId(2);
pub const THREE_CENTS: CardId = CardId(3);
pub const FOUR_CENTS: CardId = CardId(4);
pub const A_NICKEL: CardId = CardId(5);
pub const A_DIME: CardId = CardId(6);
pub const BOMB: CardId = CardId(8);
pub const BUTTER_BEAN: CardId = CardId(9);
pub const DICE_SHARD: CardId = CardId(11);
pub const GOLD_BOMB: CardId = CardId(13);
pub const LIL_BATTERY: CardId = CardId(14);
pub const PILLS_BLUE: CardId = CardId(16);
pub const SOUL_HEART: CardId = CardId(19);
pub const CREDIT_CARD: CardId = CardId(22);

// Trinkets
pub const BROKEN_ANKH: CardId = CardId(41);
pub const COUNTERFEIT_PENNY: CardId = CardId(43);
pub const CURVED_HORN: CardId = CardId(44);
pub const GUPPYS_HAIRBALL: CardId = CardId(46);
pub const SWALLOWED_PENNY: CardId = CardId(48);

// Tarot
pub const THE_EMPRESS: CardId = CardId(63);
pub const TEMPERANCE: CardId = CardId(76);

// Monsters
pub const BIG_SPIDER: CardId = CardId(90);
pub const HORF: CardId = CardId(100);
pub const KEEPER_HEAD: CardId = CardId(101);
pub const LEAPER: CardId = CardId(102);
pub const STONEY: CardId = CardId(112);
pub const DEATHS_HEAD: CardId = CardId(117);
pub const GAPER: CardId = CardId(118);
pub const CLOTTY: CardId = CardId(500);
pub const FATTY: CardId = CardId(505);
pub const POOTER: CardId = CardId(509);

// Bosses
pub const CARRION_QUEEN: CardId = CardId(160);
pub const FAMINE: CardId = CardId(169);
pub const LARRY_JR: CardId = CardId(174);
pub const PIN: CardId = CardId(180);
pub const RAGMAN: CardId = CardId(182);
pub const THE_HAUNT: CardId = CardId(187);
pub const WRATH: CardId = CardId(189);
pub const GURDY: CardId = CardId(516);
pub const MONSTRO: CardId = CardId(518);

// Mega bosses
pub const MOM: CardId = CardId(200);
pub const SATAN: CardId = CardId(201);
pub const THE_LAMB: CardId = CardId(202);
pub const ISAAC_MONSTER: CardId = CardId(203);
pub const MOMS_HEART: CardId = CardId(204);
pub const HUSH: CardId = CardId(521);

// Bonus cards
pub const CHEST: CardId = CardId(211);
pub const TROLL_BOMBS: CardId = CardId(218);
pub const SECRET_ROOM: CardId = CardId(220);

// Curses
pub const CURSE_OF_LOSS: CardId = CardId(242);
pub const CURSE_OF_PAIN: CardId = CardId(243);

// Starting items
pub const THE_D6: CardId = CardId(250);
pub const YUM_HEART: CardId = CardId(251);
pub const SLEIGHT_OF_HAND: CardId = CardId(252);
pub const BOOK_OF_BELIAL: CardId = CardId(253);
pub const FOREVER_ALONE: CardId = CardId(254);
pub const BLOOD_LUST: CardId = CardId(256);
pub const THE_BONE: CardId = CardId(259);
pub const HOLY_MANTLE: CardId = CardId(261);

// Active and paid items
pub const BLANK_CARD: CardId = CardId(272);
pub const BOOK_OF_SIN: CardId = CardId(273);
pub const CRYSTAL_BALL: CardId = CardId(280);
pub const GUPPYS_PAW: CardId = CardId(290);
pub const SACK_OF_PENNIES: CardId = CardId(308);
pub const TECH_X: CardId = CardId(348);

// Passive items
pub const BABY_HAUNT: CardId = CardId(360);
pub const BUMBO: CardId = CardId(366);
pub const CHAMPION_BELT: CardId = CardId(368);
pub const DADDY_HAUNT: CardId = CardId(375);
pub const THE_DEAD_CAT: CardId = CardId(379);
pub const DRY_BABY: CardId = CardId(381);
pub const EMPTY_VESSEL: CardId = CardId(383);
pub const GUPPYS_COLLAR: CardId = CardId(389);
pub const MEAT: CardId = CardId(393);
pub const THE_MIDAS_TOUCH: CardId = CardId(394);
pub const POLYDACTYLY: CardId = CardId(401);
pub const SHADOW: CardId = CardId(405);
pub const STEAMY_SALE: CardId = CardId(409);
pub const SYNTHOIL: CardId = CardId(411);
pub const TRINITY_SHIELD: CardId = CardId(414);
pub const ONE_UP: CardId = CardId(423);
pub const MAMA_HAUNT: CardId = CardId(434);

// Characters
pub const BLUE_BABY: CardId = CardId(600);
pub const CAIN: CardId = CardId(601);
pub const ISAAC: CardId = CardId(604);
pub const JUDAS: CardId = CardId(605);
pub const MAGGY: CardId = CardId(608);
pub const SAMSON: CardId = CardId(609);
pub const THE_FORGOTTEN: CardId = CardId(610);
pub const THE_LOST: CardId = CardId(614);

/// Monsters worth two souls.
pub const TWO_SOUL_MONSTERS: [CardId; 6] = [MOM, SATAN, THE_LAMB, HUSH, ISAAC_MONSTER, MOMS_HEART];

/// Items never asked to react during a trigger scan.
///
/// Their effects are preventative and are wired directly into the damage
/// and death pipelines.
pub const REACTION_DENYLIST: [CardId; 5] =
    [BROKEN_ANKH, GUPPYS_HAIRBALL, THE_DEAD_CAT, GUPPYS_COLLAR, ONE_UP];

/// Items handed to another player before their owner pays death penalties.
pub const HAUNTS: [CardId; 3] = [BABY_HAUNT, DADDY_HAUNT, MAMA_HAUNT];

/// Monsters killed alongside any monster that dies.
pub const LINKED_KILLS: [CardId; 2] = [STONEY, DEATHS_HEAD];

/// Passives whose one-shot bonus is re-armed at the start of each of their
/// owner's turns.
pub const TURN_BONUSES: [CardId; 3] = [CURVED_HORN, CHAMPION_BELT, POLYDACTYLY];
