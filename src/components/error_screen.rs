use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorScreenProps {
    pub message: String,
}

/// Terminal state; rendered in place of the whole page.
#[function_component]
pub fn ErrorScreen(props: &ErrorScreenProps) -> Html {
    html! {
        <div class="error" style="margin:24px; padding:16px 20px; border:2px solid #f85149; border-radius:12px; color:#f85149;">
            { props.message.clone() }
        </div>
    }
}
