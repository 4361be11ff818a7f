use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct EditorPanelProps {
    pub open: bool,
    /// Pretty-printed game state, recomputed while the panel is open.
    pub dump: String,
    pub on_close: Callback<()>,
}

/// Dev overlay behind the `//settings` passcode; `//hide` (or Close) puts it
/// away again.
#[function_component]
pub fn EditorPanel(props: &EditorPanelProps) -> Html {
    if !props.open {
        return html! {};
    }
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:360px; max-width:560px; max-height:70vh; display:flex; flex-direction:column; gap:10px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:16px;">{"Game State"}</h3>
                <button onclick={close_cb} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <pre style="margin:0; overflow:auto; background:#0e1116; border:1px solid #30363d; border-radius:6px; padding:8px; font-size:11px; line-height:1.35;">{ props.dump.clone() }</pre>
            <div style="font-size:11px; opacity:0.6;">{"Type //hide in the passcode box to dismiss."}</div>
        </div>
    </div>}
}
