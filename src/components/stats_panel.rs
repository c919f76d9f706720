use crate::util::{format_rate, format_taps};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub taps: f64,
    pub taps_per_second: f64,
}

// Counter bar above the sections; ids are what the page stylesheet targets.
#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let counter = "display:flex; align-items:baseline; gap:6px;";
    let caption = "font-size:12px; opacity:0.7; text-transform:uppercase;";
    let figure = "font-size:22px; font-weight:700; font-variant-numeric:tabular-nums;";
    html! {
        <div style="display:flex; justify-content:space-around; padding:8px 12px; border-bottom:1px solid #30363d;">
            <div style={counter}>
                <span id="tapCount" style={figure}>{ format_taps(props.taps) }</span>
                <span style={caption}>{"taps"}</span>
            </div>
            <div style={counter}>
                <span id="tapsPerSecond" style={figure}>{ format_rate(props.taps_per_second) }</span>
                <span style={caption}>{"per second"}</span>
            </div>
        </div>
    }
}
