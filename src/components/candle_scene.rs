use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CandleSceneProps {
    /// (node name, mesh opacity) in scene traversal order.
    pub meshes: Vec<(String, f64)>,
    pub lit: bool,
}

#[function_component]
pub fn CandleScene(props: &CandleSceneProps) -> Html {
    let caption = if props.lit {
        "The study, by candlelight"
    } else {
        "The study sits in darkness"
    };
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; display:flex; flex-direction:column; gap:6px; align-items:center;">
        <div style="display:flex; gap:10px; font-size:22px;">
            { for props.meshes.iter().map(|(name, opacity)| html!{
                <span key={name.clone()} title={name.clone()} style={format!("opacity:{};", opacity)}>{"🕯"}</span>
            }) }
        </div>
        <div style="font-size:11px; opacity:0.7;">{ caption }</div>
    </div>}
}
