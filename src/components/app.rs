use yew::prelude::*;

use super::{
    backpack_panel::BackpackPanel, candle_scene::CandleScene, editor_panel::EditorPanel,
    hud_panel::HudPanel, messages_panel::MessagesPanel, passcode_panel::PasscodePanel,
    quest_log::QuestLog,
};
use crate::model::{
    BACKPACK_REVEAL_MS, GameAction, GameState, ITEM_REVEAL_MS, ItemKind, QuestStatus,
};
use crate::state::RevealTimers;
use crate::util::clog;

const QUEST_STORAGE_KEY: &str = "mq_quest_status";

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(GameState::new);
    let messages_open = use_state(|| false);
    let timers = use_mut_ref(RevealTimers::default);
    let last_quests = use_mut_ref(QuestStatus::default);

    // Load persisted quest flags
    {
        let game = game.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(QUEST_STORAGE_KEY) {
                        if let Ok(quests) = serde_json::from_str(&raw) {
                            game.dispatch(GameAction::LoadQuests(quests));
                        }
                    }
                }
            }
            || ()
        });
    }
    // Persist quest flag changes
    {
        use_effect_with(game.quests, move |quests: &QuestStatus| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(raw) = serde_json::to_string(quests) {
                        let _ = store.set_item(QUEST_STORAGE_KEY, &raw);
                    }
                }
            }
            || ()
        });
    }
    // Log quest completions
    {
        let last_quests = last_quests.clone();
        use_effect_with(game.quests, move |quests: &QuestStatus| {
            let mut prev = last_quests.borrow_mut();
            if !prev.found_candle && quests.found_candle {
                clog("quest complete: found the candle");
            }
            if !prev.lit_candles && quests.lit_candles {
                clog("quest complete: lit the candles");
            }
            *prev = *quests;
            || ()
        });
    }
    // Refresh the HUD whenever the inventory moves
    {
        let game = game.clone();
        let counts = (game.inventory.potions, game.inventory.knives);
        use_effect_with(counts, move |_| {
            game.dispatch(GameAction::RefreshHud);
            || ()
        });
    }

    // Effect: candle reveal window
    {
        let game = game.clone();
        let timers = timers.clone();
        let reveal = game.reveals.candle;
        use_effect_with((reveal.shown, reveal.seq), move |(shown, _)| {
            let mut t = timers.borrow_mut();
            if *shown {
                let game = game.clone();
                RevealTimers::schedule(&mut t.candle, ITEM_REVEAL_MS, move || {
                    game.dispatch(GameAction::HideItem(ItemKind::Candle));
                });
            } else {
                RevealTimers::cancel(&mut t.candle);
            }
            || ()
        });
    }
    // Effect: knife reveal window
    {
        let game = game.clone();
        let timers = timers.clone();
        let reveal = game.reveals.knife;
        use_effect_with((reveal.shown, reveal.seq), move |(shown, _)| {
            let mut t = timers.borrow_mut();
            if *shown {
                let game = game.clone();
                RevealTimers::schedule(&mut t.knife, ITEM_REVEAL_MS, move || {
                    game.dispatch(GameAction::HideItem(ItemKind::Knife));
                });
            } else {
                RevealTimers::cancel(&mut t.knife);
            }
            || ()
        });
    }
    // Effect: potion reveal window
    {
        let game = game.clone();
        let timers = timers.clone();
        let reveal = game.reveals.potion;
        use_effect_with((reveal.shown, reveal.seq), move |(shown, _)| {
            let mut t = timers.borrow_mut();
            if *shown {
                let game = game.clone();
                RevealTimers::schedule(&mut t.potion, ITEM_REVEAL_MS, move || {
                    game.dispatch(GameAction::HideItem(ItemKind::Potion));
                });
            } else {
                RevealTimers::cancel(&mut t.potion);
            }
            || ()
        });
    }
    // Effect: backpack reveal window
    {
        let game = game.clone();
        let timers = timers.clone();
        let reveal = game.reveals.backpack;
        use_effect_with((reveal.shown, reveal.seq), move |(shown, _)| {
            let mut t = timers.borrow_mut();
            if *shown {
                let game = game.clone();
                RevealTimers::schedule(&mut t.backpack, BACKPACK_REVEAL_MS, move || {
                    game.dispatch(GameAction::HideBackpack);
                });
            } else {
                RevealTimers::cancel(&mut t.backpack);
            }
            || ()
        });
    }
    // Drop every pending timer on unmount
    {
        let timers = timers.clone();
        use_effect_with((), move |_| move || timers.borrow_mut().cancel_all());
    }

    let submit_passcode = {
        let game = game.clone();
        Callback::from(move |code: String| game.dispatch(GameAction::SubmitPasscode(code)))
    };
    let use_potion = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::UsePotion))
    };
    let equip_knife = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::EquipKnife))
    };
    let close_backpack = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::HideBackpack))
    };
    let close_editor = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::CloseEditor))
    };
    let open_messages = {
        let messages_open = messages_open.clone();
        Callback::from(move |_| messages_open.set(true))
    };
    let close_messages = {
        let messages_open = messages_open.clone();
        Callback::from(move |_| messages_open.set(false))
    };

    let editor_dump = if game.editor_open {
        serde_json::to_string_pretty(&*game).unwrap_or_default()
    } else {
        String::new()
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
            <div style="position:absolute; top:12px; left:50%; transform:translateX(-50%); display:flex; flex-direction:column; align-items:center; gap:6px;">
                <div style="font-size:20px; font-weight:600;">{"Manor Quests"}</div>
                <button class="messages-btn" onclick={open_messages} style="padding:4px 10px; font-size:12px;">{"Messages"}</button>
            </div>
            <HudPanel
                stats={game.stats}
                potions={game.inventory.potions}
                show_potion_button={game.potion_button}
                show_knife_button={game.knife_button}
                on_use_potion={use_potion}
                on_equip_knife={equip_knife}
            />
            <QuestLog quests={game.quests} />
            <CandleScene meshes={game.candles.mesh_opacities()} lit={game.quests.lit_candles} />
            <PasscodePanel on_submit={submit_passcode} />
            <BackpackPanel
                open={game.reveals.backpack.shown}
                candle_shown={game.reveals.candle.shown}
                knife_shown={game.reveals.knife.shown}
                potion_shown={game.reveals.potion.shown}
                potions={game.inventory.potions}
                on_close={close_backpack}
            />
            <EditorPanel open={game.editor_open} dump={editor_dump} on_close={close_editor} />
            <MessagesPanel active={*messages_open} on_close={close_messages} />
        </div>
    }
}
