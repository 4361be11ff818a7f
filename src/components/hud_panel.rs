use crate::model::PlayerStats;
use crate::util::format_speed;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudPanelProps {
    pub stats: PlayerStats,
    pub potions: u32,
    pub show_potion_button: bool,
    pub show_knife_button: bool,
    pub on_use_potion: Callback<()>,
    pub on_equip_knife: Callback<()>,
}

#[function_component]
pub fn HudPanel(props: &HudPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:60px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let row = |icon: &str, label: &str, value: String, color: &str| {
        html! {<div style={row_style}>
            <span style={format!("{} color:{};", icon_style, color)}>{icon}</span>
            <span style={format!("{} color:{};", label_style, color)}>{label}</span>
            <span style={format!("{} color:{};", value_style, color)}>{value}</span>
        </div>}
    };
    let potion_cb = {
        let cb = props.on_use_potion.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let knife_cb = {
        let cb = props.on_equip_knife.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:220px; display:flex; flex-direction:column; gap:8px; font-size:14px;">
        { row("❤", "Health", props.stats.health.to_string(), "#f85149") }
        { row("✨", "Spirit", props.stats.spirit.to_string(), "#a371f7") }
        { row("⚔", "Attack", props.stats.attack.to_string(), "#d29922") }
        { row("🛡", "Resilience", props.stats.resilience.to_string(), "#58a6ff") }
        { row("🫧", "Air", props.stats.air.to_string(), "#39c5cf") }
        { row("👣", "Speed", format_speed(props.stats.speed), "#8b949e") }
        { row("🧪", "Potions", props.potions.to_string(), "#2ea043") }
        { if props.show_potion_button {
            html!{ <button onclick={potion_cb}>{"Drink Potion"}</button> }
        } else { html!{} } }
        { if props.show_knife_button {
            html!{ <button onclick={knife_cb}>{"Ready the Knife"}</button> }
        } else { html!{} } }
    </div>}
}
