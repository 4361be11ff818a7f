use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BackpackPanelProps {
    pub open: bool,
    pub candle_shown: bool,
    pub knife_shown: bool,
    pub potion_shown: bool,
    pub potions: u32,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn BackpackPanel(props: &BackpackPanelProps) -> Html {
    if !props.open {
        return html! {};
    }
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let empty = !props.candle_shown && !props.knife_shown && !props.potion_shown;
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.92); border:1px solid #30363d; border-radius:10px; padding:10px 14px; min-width:190px; display:flex; flex-direction:column; gap:6px; font-size:13px;">
        <div style="display:flex; justify-content:space-between; align-items:center;">
            <span style="font-weight:600;">{"Backpack"}</span>
            <button onclick={close_cb} style="padding:2px 8px; font-size:11px;">{"Close"}</button>
        </div>
        { if props.candle_shown {
            html!{ <div style="display:flex; align-items:center; gap:8px;"><span>{"🕯"}</span><span>{"A stubby candle"}</span></div> }
        } else { html!{} } }
        { if props.knife_shown {
            html!{ <div style="display:flex; align-items:center; gap:8px;"><span>{"🔪"}</span><span>{"A kitchen knife"}</span></div> }
        } else { html!{} } }
        { if props.potion_shown {
            html!{ <div style="display:flex; align-items:center; gap:8px;">
                <span>{"🧪"}</span>
                <span>{"Murky potion"}</span>
                <span style="margin-left:auto; font-variant-numeric:tabular-nums; color:#2ea043;">{ format!("x{}", props.potions) }</span>
            </div> }
        } else { html!{} } }
        { if empty {
            html!{ <div style="font-size:11px; opacity:0.6;">{"Nothing catches the light."}</div> }
        } else { html!{} } }
    </div>}
}
