use web_sys::{HtmlTextAreaElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PasscodePanelProps {
    pub on_submit: Callback<String>,
}

#[function_component]
pub fn PasscodePanel(props: &PasscodePanelProps) -> Html {
    let input_ref = use_node_ref();

    let submit = {
        let input_ref = input_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(area) = input_ref.cast::<HtmlTextAreaElement>() {
                let code = area.value();
                area.set_value("");
                on_submit.emit(code);
            }
        })
    };
    let keydown = {
        let input_ref = input_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            // Enter submits; Shift+Enter keeps the newline.
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                if let Some(area) = input_ref.cast::<HtmlTextAreaElement>() {
                    let code = area.value();
                    area.set_value("");
                    on_submit.emit(code);
                }
            }
        })
    };

    html! {<div style="position:absolute; left:50%; bottom:28px; transform:translateX(-50%); background:rgba(22,27,34,0.92); border:1px solid #30363d; border-radius:10px; padding:10px 14px; display:flex; flex-direction:column; gap:6px; min-width:260px;">
        <div style="font-size:13px; opacity:0.8;">{"Whisper a passcode"}</div>
        <textarea
            ref={input_ref}
            rows="2"
            placeholder="the manor is listening..."
            onkeydown={keydown}
            style="resize:none; background:#0e1116; color:#c9d1d9; border:1px solid #30363d; border-radius:6px; padding:6px 8px; font-size:13px;"
        />
        <button onclick={submit}>{"Unlock"}</button>
    </div>}
}
