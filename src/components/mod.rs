pub mod app;
pub mod error_screen;
pub mod game_area;
pub mod leaderboard_view;
pub mod loading_message;
pub mod navigation;
pub mod shop_view;
pub mod stats_panel;
pub mod tasks_view;

pub use app::App;

use yew::{Classes, classes};

/// Hidden sections stay mounted and carry the `hidden` class.
pub fn section_classes(visible: bool) -> Classes {
    classes!("section", (!visible).then_some("hidden"))
}
