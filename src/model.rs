//! Core game state for Manor Quests.
//! One reducer-owned `GameState` replaces the page-level globals the game
//! grew up with; every handler goes through `GameAction`.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::scene::SceneNode;

pub const BASE_HEALTH: u32 = 100;
pub const BASE_SPIRIT: u32 = 10;
pub const BASE_ATTACK: u32 = 10;
pub const BASE_RESILIENCE: u32 = 1;
pub const BASE_AIR: u32 = 1;
pub const BASE_SPEED: f64 = 0.04;

pub const KNIFE_ATTACK_BONUS: u32 = 5;

/// How long an unlocked item stays visible before it tucks itself away.
pub const ITEM_REVEAL_MS: i32 = 19_500;
/// The backpack stays open a little longer than the items inside it.
pub const BACKPACK_REVEAL_MS: i32 = 25_500;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub health: u32,
    pub spirit: u32,
    pub attack: u32,
    pub resilience: u32,
    pub air: u32,
    pub speed: f64,
}

impl PlayerStats {
    pub fn baseline() -> Self {
        Self {
            health: BASE_HEALTH,
            spirit: BASE_SPIRIT,
            attack: BASE_ATTACK,
            resilience: BASE_RESILIENCE,
            air: BASE_AIR,
            speed: BASE_SPEED,
        }
    }
}

/// Quest completion flags, persisted to localStorage between sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestStatus {
    pub found_candle: bool,
    pub lit_candles: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub potions: u32,
    pub knives: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Candle,
    Knife,
    Potion,
}

/// Visibility of one timed overlay. `seq` bumps on every show so the owning
/// effect restarts the hide timer even when `shown` was already true.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    pub shown: bool,
    pub seq: u64,
}

impl Reveal {
    pub fn show(&mut self) {
        self.shown = true;
        self.seq += 1;
    }

    pub fn hide(&mut self) {
        self.shown = false;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveals {
    pub backpack: Reveal,
    pub candle: Reveal,
    pub knife: Reveal,
    pub potion: Reveal,
}

impl Reveals {
    fn item_mut(&mut self, kind: ItemKind) -> &mut Reveal {
        match kind {
            ItemKind::Candle => &mut self.candle,
            ItemKind::Knife => &mut self.knife,
            ItemKind::Potion => &mut self.potion,
        }
    }
}

/// A passcode the textarea understands. Matching is case-insensitive and
/// ignores surrounding whitespace; anything else stays `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Passcode {
    Candle,
    Knife,
    Potion,
    Candlelight,
    EditorShow,
    EditorHide,
}

impl Passcode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "candle" => Some(Self::Candle),
            "knife" => Some(Self::Knife),
            "potion" => Some(Self::Potion),
            "candlelight" | "candle light" | "light the candle" | "light candle" => {
                Some(Self::Candlelight)
            }
            "//settings" => Some(Self::EditorShow),
            "//hide" => Some(Self::EditorHide),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameState {
    pub stats: PlayerStats,
    pub quests: QuestStatus,
    pub inventory: Inventory,
    /// The study's candle arrangement; candlelight sets every mesh to full
    /// opacity.
    pub candles: SceneNode,
    #[serde(skip)]
    pub reveals: Reveals,
    #[serde(skip)]
    pub editor_open: bool,
    /// Whether the drink-potion button is on screen. Updated only by
    /// `RefreshHud`, and only for counts of exactly 0 or 1.
    #[serde(skip)]
    pub potion_button: bool,
    #[serde(skip)]
    pub knife_button: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            stats: PlayerStats::baseline(),
            quests: QuestStatus::default(),
            inventory: Inventory::default(),
            candles: SceneNode::study_candles(),
            reveals: Reveals::default(),
            editor_open: false,
            potion_button: false,
            knife_button: false,
        }
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    /// Raw textarea contents; unrecognized input leaves the state untouched.
    SubmitPasscode(String),
    /// Item reveal window elapsed, or the player closed the backpack entry.
    HideItem(ItemKind),
    HideBackpack,
    CloseEditor,
    /// Rewrites the six stats from baseline and re-evaluates the 0/1 button
    /// gating.
    RefreshHud,
    UsePotion,
    EquipKnife,
    /// Persisted quest flags loaded on mount.
    LoadQuests(QuestStatus),
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            SubmitPasscode(raw) => {
                let Some(code) = Passcode::parse(&raw) else {
                    return self;
                };
                new.reveals.backpack.show();
                match code {
                    Passcode::Candle => {
                        new.quests.found_candle = true;
                        new.reveals.candle.show();
                    }
                    Passcode::Knife => {
                        new.inventory.knives = 1;
                        new.reveals.knife.show();
                    }
                    Passcode::Potion => {
                        new.inventory.potions = new.inventory.potions.saturating_add(1);
                        new.reveals.potion.show();
                    }
                    Passcode::Candlelight => {
                        new.quests.lit_candles = true;
                        new.candles.for_each_mesh_mut(|m| m.opacity = 1.0);
                    }
                    Passcode::EditorShow => {
                        new.editor_open = true;
                    }
                    Passcode::EditorHide => {
                        new.editor_open = false;
                    }
                }
            }
            HideItem(kind) => {
                new.reveals.item_mut(kind).hide();
            }
            HideBackpack => {
                new.reveals.backpack.hide();
            }
            CloseEditor => {
                new.editor_open = false;
            }
            RefreshHud => {
                new.stats = PlayerStats::baseline();
                // Counts other than 0 or 1 keep the last visibility.
                if new.inventory.potions == 1 {
                    new.potion_button = true;
                }
                if new.inventory.knives == 1 {
                    new.knife_button = true;
                }
                if new.inventory.potions == 0 {
                    new.potion_button = false;
                }
                if new.inventory.knives == 0 {
                    new.knife_button = false;
                }
            }
            UsePotion => {
                if new.inventory.potions > 0 {
                    new.inventory.potions -= 1;
                    new.stats.health = BASE_HEALTH;
                } else {
                    return self;
                }
            }
            EquipKnife => {
                if new.inventory.knives > 0 {
                    new.stats.attack = BASE_ATTACK + KNIFE_ATTACK_BONUS;
                } else {
                    return self;
                }
            }
            LoadQuests(q) => {
                new.quests = q;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(state: Rc<GameState>, code: &str) -> Rc<GameState> {
        state.reduce(GameAction::SubmitPasscode(code.to_string()))
    }

    // -------------------------------------------------------------------------
    // Passcode parsing
    // -------------------------------------------------------------------------

    #[test]
    fn parse_recognizes_item_codes() {
        assert_eq!(Passcode::parse("candle"), Some(Passcode::Candle));
        assert_eq!(Passcode::parse("knife"), Some(Passcode::Knife));
        assert_eq!(Passcode::parse("potion"), Some(Passcode::Potion));
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(Passcode::parse("CANDLE"), Some(Passcode::Candle));
        assert_eq!(Passcode::parse("  Knife "), Some(Passcode::Knife));
        assert_eq!(Passcode::parse("Light The Candle"), Some(Passcode::Candlelight));
    }

    #[test]
    fn parse_accepts_every_candlelight_phrasing() {
        for phrase in ["candlelight", "candle light", "light the candle", "light candle"] {
            assert_eq!(Passcode::parse(phrase), Some(Passcode::Candlelight), "{phrase}");
        }
    }

    #[test]
    fn parse_recognizes_editor_codes() {
        assert_eq!(Passcode::parse("//settings"), Some(Passcode::EditorShow));
        assert_eq!(Passcode::parse("//hide"), Some(Passcode::EditorHide));
    }

    #[test]
    fn parse_rejects_unknown_input() {
        for raw in ["", "lantern", "candles", "// settings", "candle!"] {
            assert_eq!(Passcode::parse(raw), None, "{raw:?}");
        }
    }

    // -------------------------------------------------------------------------
    // Passcode reducer
    // -------------------------------------------------------------------------

    #[test]
    fn candle_code_completes_quest_and_reveals_candle() {
        let state = submit(Rc::new(GameState::new()), "candle");
        assert!(state.quests.found_candle);
        assert!(state.reveals.candle.shown);
        assert!(state.reveals.backpack.shown);
        assert!(!state.quests.lit_candles);
    }

    #[test]
    fn mixed_case_candle_behaves_like_lowercase() {
        let upper = submit(Rc::new(GameState::new()), "CANDLE");
        let lower = submit(Rc::new(GameState::new()), "candle");
        assert_eq!(*upper, *lower);
    }

    #[test]
    fn candlelight_lights_every_mesh() {
        for phrase in ["candlelight", "candle light", "light the candle", "light candle"] {
            let state = submit(Rc::new(GameState::new()), phrase);
            assert!(state.quests.lit_candles, "{phrase}");
            let opacities = state.candles.mesh_opacities();
            assert!(!opacities.is_empty());
            assert!(opacities.iter().all(|(_, o)| *o == 1.0), "{phrase}: {opacities:?}");
        }
    }

    #[test]
    fn candlelight_has_no_timed_reveal() {
        let state = submit(Rc::new(GameState::new()), "candlelight");
        assert!(!state.reveals.candle.shown);
        assert!(!state.reveals.knife.shown);
        assert!(!state.reveals.potion.shown);
    }

    #[test]
    fn knife_and_potion_codes_stock_the_inventory() {
        let state = submit(Rc::new(GameState::new()), "knife");
        assert_eq!(state.inventory.knives, 1);
        assert!(state.reveals.knife.shown);

        let state = submit(state, "potion");
        let state = submit(state, "potion");
        assert_eq!(state.inventory.potions, 2);
        assert!(state.reveals.potion.shown);
    }

    #[test]
    fn unrecognized_code_changes_nothing() {
        let initial = Rc::new(GameState::new());
        let state = submit(initial.clone(), "open sesame");
        assert!(Rc::ptr_eq(&initial, &state));
    }

    #[test]
    fn editor_codes_toggle_the_overlay() {
        let state = submit(Rc::new(GameState::new()), "//settings");
        assert!(state.editor_open);
        let state = submit(state, "//hide");
        assert!(!state.editor_open);
    }

    #[test]
    fn resubmitting_a_code_restarts_the_reveal_window() {
        let state = submit(Rc::new(GameState::new()), "candle");
        let first_seq = state.reveals.candle.seq;
        let state = submit(state, "candle");
        assert!(state.reveals.candle.shown);
        assert!(state.reveals.candle.seq > first_seq);
    }

    // -------------------------------------------------------------------------
    // Reveal lifecycle
    // -------------------------------------------------------------------------

    #[test]
    fn hide_actions_close_the_reveals() {
        let state = submit(Rc::new(GameState::new()), "candle");
        let state = state.reduce(GameAction::HideItem(ItemKind::Candle));
        assert!(!state.reveals.candle.shown);
        assert!(state.reveals.backpack.shown);
        let state = state.reduce(GameAction::HideBackpack);
        assert!(!state.reveals.backpack.shown);
        // Quest completion survives the hide.
        assert!(state.quests.found_candle);
    }

    // -------------------------------------------------------------------------
    // HUD refresh
    // -------------------------------------------------------------------------

    #[test]
    fn refresh_overwrites_stats_with_baseline() {
        let mut drifted = GameState::new();
        drifted.stats.health = 3;
        drifted.stats.spirit = 0;
        drifted.stats.attack = 99;
        drifted.stats.speed = 1.5;
        let state = Rc::new(drifted).reduce(GameAction::RefreshHud);
        assert_eq!(state.stats, PlayerStats::baseline());
    }

    #[test]
    fn button_visibility_follows_zero_and_one_exactly() {
        let mut gs = GameState::new();
        gs.inventory.potions = 1;
        gs.inventory.knives = 1;
        let state = Rc::new(gs).reduce(GameAction::RefreshHud);
        assert!(state.potion_button);
        assert!(state.knife_button);

        let mut gs = (*state).clone();
        gs.inventory.potions = 0;
        let state = Rc::new(gs).reduce(GameAction::RefreshHud);
        assert!(!state.potion_button);
        assert!(state.knife_button);
    }

    #[test]
    fn counts_above_one_keep_previous_visibility() {
        let mut gs = GameState::new();
        gs.inventory.potions = 2;
        let state = Rc::new(gs).reduce(GameAction::RefreshHud);
        assert!(!state.potion_button);

        let mut gs = GameState::new();
        gs.inventory.potions = 2;
        gs.potion_button = true;
        let state = Rc::new(gs).reduce(GameAction::RefreshHud);
        assert!(state.potion_button);
    }

    // -------------------------------------------------------------------------
    // Inventory actions
    // -------------------------------------------------------------------------

    #[test]
    fn drinking_a_potion_spends_it_and_restores_health() {
        let mut gs = GameState::new();
        gs.inventory.potions = 1;
        gs.stats.health = 12;
        let state = Rc::new(gs).reduce(GameAction::UsePotion);
        assert_eq!(state.inventory.potions, 0);
        assert_eq!(state.stats.health, BASE_HEALTH);
    }

    #[test]
    fn drinking_with_an_empty_pack_is_a_no_op() {
        let initial = Rc::new(GameState::new());
        let state = initial.clone().reduce(GameAction::UsePotion);
        assert!(Rc::ptr_eq(&initial, &state));
    }

    #[test]
    fn equipping_the_knife_raises_attack() {
        let mut gs = GameState::new();
        gs.inventory.knives = 1;
        let state = Rc::new(gs).reduce(GameAction::EquipKnife);
        assert_eq!(state.stats.attack, BASE_ATTACK + KNIFE_ATTACK_BONUS);
        // The bonus is transient: the next refresh writes baseline back.
        let state = state.reduce(GameAction::RefreshHud);
        assert_eq!(state.stats.attack, BASE_ATTACK);
    }

    // -------------------------------------------------------------------------
    // Persistence round trip
    // -------------------------------------------------------------------------

    #[test]
    fn quest_status_survives_json() {
        let quests = QuestStatus {
            found_candle: true,
            lit_candles: false,
        };
        let raw = serde_json::to_string(&quests).unwrap();
        let back: QuestStatus = serde_json::from_str(&raw).unwrap();
        assert_eq!(quests, back);

        let state = Rc::new(GameState::new()).reduce(GameAction::LoadQuests(back));
        assert!(state.quests.found_candle);
        assert!(!state.quests.lit_candles);
    }
}
