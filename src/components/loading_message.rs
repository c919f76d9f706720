use super::section_classes;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadingMessageProps {
    pub show: bool,
}

#[function_component]
pub fn LoadingMessage(props: &LoadingMessageProps) -> Html {
    html! {
        <div id="loadingMessage" class={section_classes(props.show)} style="padding:24px; text-align:center;">
            {"Loading..."}
        </div>
    }
}
