use crate::model::QuestStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct QuestRowProps {
    pub label: &'static str,
    pub detail: &'static str,
    pub done: bool,
}

#[function_component(QuestRow)]
pub fn quest_row(props: &QuestRowProps) -> Html {
    let label_style = if props.done {
        "text-decoration:line-through; opacity:0.65;"
    } else {
        ""
    };
    html! {<div style="display:flex; flex-direction:column; gap:2px; margin:3px 0;">
        <span style={label_style}>{ props.label }</span>
        { if props.done {
            html!{ <span style="font-size:11px; color:#8b949e;">{ props.detail }</span> }
        } else { html!{} } }
    </div>}
}

#[derive(Properties, PartialEq, Clone)]
pub struct QuestLogProps {
    pub quests: QuestStatus,
}

#[function_component]
pub fn QuestLog(props: &QuestLogProps) -> Html {
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; min-width:200px; font-size:13px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Quests"}</div>
        <QuestRow
            label="Find the candle"
            detail="The candle is in your pack. Find a way to light it."
            done={props.quests.found_candle}
        />
        <QuestRow
            label="Light the candles"
            detail="The study glows. Search the shelves by candlelight."
            done={props.quests.lit_candles}
        />
    </div>}
}
