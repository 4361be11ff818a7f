pub mod app;
pub mod backpack_panel;
pub mod candle_scene;
pub mod editor_panel;
pub mod hud_panel;
pub mod messages_panel;
pub mod passcode_panel;
pub mod quest_log;
