use super::section_classes;
use crate::model::LeaderboardEntry;
use crate::util::leaderboard_line;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderboardViewProps {
    pub visible: bool,
    pub entries: Vec<LeaderboardEntry>,
}

// Rank is the position in server order; the client never sorts.
#[function_component(LeaderboardView)]
pub fn leaderboard_view(props: &LeaderboardViewProps) -> Html {
    html! {
        <section id="leaderboard" class={section_classes(props.visible)}>
            <h2>{"Leaderboard"}</h2>
            <ul id="leaderboardList">
                { for props.entries.iter().enumerate().map(|(i, e)| html! {
                    <li>{ leaderboard_line(i, &e.name, e.taps) }</li>
                }) }
            </ul>
        </section>
    }
}
