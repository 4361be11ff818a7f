use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MessagesPanelProps {
    pub active: bool,
    pub on_close: Callback<()>,
}

/// The messages overlay slides in when the `active` class is set and holds
/// the notes found around the manor.
#[function_component]
pub fn MessagesPanel(props: &MessagesPanelProps) -> Html {
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let class = classes!("messages-section", props.active.then_some("active"));
    let style = if props.active {
        "position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:40;"
    } else {
        "display:none;"
    };
    html! {<div {class} {style}>
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; max-width:440px; display:flex; flex-direction:column; gap:12px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Messages"}</h3>
                <button class="messages-close" onclick={close_cb} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:8px; font-size:13px; line-height:1.4;">
                <div style="background:#1c2128; border:1px solid #30363d; border-radius:6px; padding:6px 8px;">
                    {"A note under the door: \"The study keeps its secrets in the dark.\""}
                </div>
                <div style="background:#1c2128; border:1px solid #30363d; border-radius:6px; padding:6px 8px;">
                    {"Scratched into the banister: \"Speak what you seek and the pack will open.\""}
                </div>
                <div style="background:#1c2128; border:1px solid #30363d; border-radius:6px; padding:6px 8px;">
                    {"A burnt page: \"...light the candle, and read the rest by its glow.\""}
                </div>
            </div>
        </div>
    </div>}
}
