use super::{
    error_screen::ErrorScreen, game_area::GameArea, leaderboard_view::LeaderboardView,
    loading_message::LoadingMessage, navigation::Navigation, shop_view::ShopView,
    stats_panel::StatsPanel, tasks_view::TasksView,
};
use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::model::{TaskId, UpgradeId};
use crate::state::{flow, Fetch, GameAction, GameState, Phase, Section, SessionId};
use crate::util::{alert, cerr, clog};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub const MISSING_USER_ID: &str = "User ID not found in URL";
pub const NOT_ENOUGH_TAPS: &str = "Not enough taps to buy this upgrade!";

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| ClientConfig::default());
    let client = {
        let config = config.clone();
        use_memo((), move |_| {
            SessionId::from_window().map(|id| ApiClient::new(&config, id))
        })
    };
    let game = use_reducer(GameState::default);

    // Startup: resolve session, then load the player document once
    {
        let game = game.clone();
        let client = (*client).clone();
        use_effect_with((), move |_| {
            match client {
                None => game.dispatch(GameAction::Fail(MISSING_USER_ID.to_string())),
                Some(client) => {
                    clog(&format!("User ID: {}", client.user_id()));
                    game.dispatch(GameAction::BeginLoading);
                    spawn_local(async move {
                        game.dispatch(flow::user_data_loaded(client.fetch_user_data().await));
                    });
                }
            }
            || ()
        });
    }

    // Passive income ticker, alive only while Ready
    {
        let game = game.clone();
        let tick_ms = config.tick_interval_ms;
        use_effect_with(game.is_ready(), move |ready| {
            let mut ticker = None;
            if *ready {
                if let Some(window) = web_sys::window() {
                    let tick = Closure::wrap(Box::new(move || {
                        game.dispatch(GameAction::Tick);
                    }) as Box<dyn FnMut()>);
                    match window.set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        tick_ms,
                    ) {
                        Ok(id) => ticker = Some((window, id, tick)),
                        Err(err) => cerr(&format!("failed to start ticker: {:?}", err)),
                    }
                }
            }
            move || {
                if let Some((window, id, tick)) = ticker {
                    window.clear_interval_with_handle(id);
                    drop(tick);
                }
            }
        });
    }

    // Push the mirror after each local mutation; failures are only logged
    {
        let client = (*client).clone();
        let player = game.player.clone();
        use_effect_with(game.revision, move |revision| {
            if flow::push_due(*revision) {
                if let Some(client) = client {
                    spawn_local(async move {
                        if let Err(err) = client.push_user_data(&player).await {
                            cerr(&format!("Failed to update user data: {}", err));
                        }
                    });
                }
            }
            || ()
        });
    }

    // A purchase refused by the reducer still gets the blocking notice
    use_effect_with(game.purchase_refusals, |refusals| {
        if *refusals > 0 {
            alert(NOT_ENOUGH_TAPS);
        }
        || ()
    });

    let on_tap = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::Tap))
    };

    let on_navigate = {
        let game = game.clone();
        let client = client.clone();
        Callback::from(move |section: Section| {
            let (action, fetch) = flow::navigate(section);
            game.dispatch(action);
            let (Some(fetch), Some(client)) = (fetch, (*client).clone()) else {
                return;
            };
            let game = game.clone();
            spawn_local(async move {
                let loaded = match fetch {
                    Fetch::Tasks => flow::tasks_loaded(client.fetch_daily_tasks().await),
                    Fetch::Leaderboard => flow::leaderboard_loaded(client.fetch_leaderboard().await),
                };
                if let Some(action) = loaded {
                    game.dispatch(action);
                }
            });
        })
    };

    let purchase = {
        let game = game.clone();
        Callback::from(move |id: UpgradeId| {
            if !game.player.can_afford(id) {
                clog(&format!("purchase refused: {} needs {} taps", id.key(), id.def().cost));
                alert(NOT_ENOUGH_TAPS);
                return;
            }
            game.dispatch(GameAction::Buy(id));
        })
    };

    let complete = {
        let game = game.clone();
        let client = client.clone();
        Callback::from(move |task_id: TaskId| {
            let Some(client) = (*client).clone() else {
                return;
            };
            let game = game.clone();
            spawn_local(async move {
                let result = client.complete_daily_task(&task_id).await;
                let Some(credit) = flow::task_completed(&task_id, result) else {
                    return;
                };
                game.dispatch(credit);
                if let Some(action) = flow::tasks_loaded(client.fetch_daily_tasks().await) {
                    game.dispatch(action);
                }
            });
        })
    };

    if let Phase::Error(message) = &game.phase {
        return html! { <ErrorScreen message={message.clone()} /> };
    }

    let ready = game.is_ready();
    html! {
        <div id="root">
            <LoadingMessage show={!ready} />
            if ready {
                <>
                    <Navigation current={game.section} on_navigate={on_navigate} />
                    <StatsPanel taps={game.player.taps} taps_per_second={game.player.taps_per_second()} />
                </>
            }
            <GameArea visible={game.is_visible(Section::Game)} on_tap={on_tap} />
            <ShopView visible={game.is_visible(Section::Shop)} player={game.player.clone()} purchase={purchase} />
            <TasksView visible={game.is_visible(Section::DailyTasks)} tasks={game.player.daily_tasks.clone()} complete={complete} />
            <LeaderboardView visible={game.is_visible(Section::Leaderboard)} entries={game.leaderboard.clone()} />
        </div>
    }
}
