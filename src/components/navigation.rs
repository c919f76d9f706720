use crate::state::Section;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavigationProps {
    pub current: Section,
    pub on_navigate: Callback<Section>,
}

// One listener on the bar; the clicked button names its section in `data-section`.
#[function_component]
pub fn Navigation(props: &NavigationProps) -> Html {
    let onclick = {
        let cb = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = e.target_dyn_into::<Element>() else {
                return;
            };
            if target.tag_name() != "BUTTON" {
                return;
            }
            if let Some(section) = target
                .get_attribute("data-section")
                .and_then(|id| Section::from_element_id(&id))
            {
                cb.emit(section);
            }
        })
    };
    html! {
        <nav id="navigation" {onclick} style="display:flex; gap:8px; padding:8px;">
            { for Section::ALL.iter().map(|s| {
                let weight = if *s == props.current { "font-weight:700;" } else { "" };
                html! { <button data-section={s.element_id()} style={weight}>{ s.label() }</button> }
            }) }
        </nav>
    }
}
