use super::section_classes;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameAreaProps {
    pub visible: bool,
    pub on_tap: Callback<()>,
}

#[function_component]
pub fn GameArea(props: &GameAreaProps) -> Html {
    let tap_cb = {
        let cb = props.on_tap.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section id="gameArea" class={section_classes(props.visible)}>
            <div id="arbuz" onclick={tap_cb}
                style="font-size:160px; cursor:pointer; user-select:none; text-align:center;">{"🍉"}</div>
        </section>
    }
}
