use super::section::Section;
use crate::model::{LeaderboardEntry, PlayerState, Task, UpgradeId};
use crate::util::clog;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    /// Terminal; the message replaces the page.
    Error(String),
}

/// Everything the client holds for one page session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    pub player: PlayerState,
    pub section: Section,
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Bumped on every local mutation of `player`; each bump schedules a push.
    pub revision: u64,
    /// Bumped when the reducer turns down a purchase; each bump raises the notice.
    pub purchase_refusals: u64,
}

impl GameState {
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.is_ready() && self.section == section
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug, PartialEq)]
pub enum GameAction {
    BeginLoading,
    Loaded(PlayerState),
    Fail(String),
    Tap,
    Tick, // once per tick interval
    Buy(UpgradeId),
    CreditReward(f64),
    SetTasks(Vec<Task>),
    SetLeaderboard(Vec<LeaderboardEntry>),
    Navigate(Section),
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        if matches!(self.phase, Phase::Error(_)) {
            return self;
        }
        let ready = self.is_ready();
        let mut new = (*self).clone();
        match action {
            BeginLoading => {
                if new.phase != Phase::Uninitialized {
                    return self;
                }
                new.phase = Phase::Loading;
            }
            Loaded(player) => {
                if new.phase != Phase::Loading {
                    return self;
                }
                new.player = player;
                new.section = Section::Game;
                new.phase = Phase::Ready;
            }
            Fail(message) => {
                new.phase = Phase::Error(message);
            }
            Tap if ready => {
                new.player.tap();
                new.revision += 1;
            }
            Tick if ready => {
                new.player.tick();
                new.revision += 1;
            }
            Buy(id) if ready => {
                match new.player.buy(id) {
                    Ok(()) => new.revision += 1,
                    Err(err) => {
                        clog(&format!("purchase refused: {}", err));
                        new.purchase_refusals += 1;
                    }
                }
            }
            CreditReward(reward) if ready => {
                new.player.credit(reward);
                new.revision += 1;
            }
            SetTasks(tasks) if ready => {
                new.player.daily_tasks = tasks;
            }
            SetLeaderboard(entries) if ready => {
                new.leaderboard = entries;
            }
            Navigate(section) if ready => {
                new.section = section;
            }
            _ => return self,
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskId;

    fn ready_with(taps: f64, ups: &[(&str, u32)]) -> Rc<GameState> {
        let player = PlayerState {
            taps,
            upgrades: ups.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            daily_tasks: Vec::new(),
        };
        Rc::new(GameState::default())
            .reduce(GameAction::BeginLoading)
            .reduce(GameAction::Loaded(player))
    }

    #[test]
    fn startup_walks_loading_to_ready() {
        let s = Rc::new(GameState::default());
        assert_eq!(s.phase, Phase::Uninitialized);
        let s = s.reduce(GameAction::BeginLoading);
        assert_eq!(s.phase, Phase::Loading);
        assert!(!s.is_visible(Section::Game));
        let s = s.reduce(GameAction::Loaded(PlayerState {
            taps: 5.0,
            ..Default::default()
        }));
        assert!(s.is_ready());
        assert_eq!(s.player.taps, 5.0);
        assert_eq!(s.revision, 0);
        assert!(s.is_visible(Section::Game));
    }

    #[test]
    fn loaded_is_ignored_unless_loading() {
        let s = Rc::new(GameState::default()).reduce(GameAction::Loaded(PlayerState::default()));
        assert_eq!(s.phase, Phase::Uninitialized);
    }

    #[test]
    fn error_is_terminal() {
        let s = Rc::new(GameState::default())
            .reduce(GameAction::BeginLoading)
            .reduce(GameAction::Fail("Failed to initialize game: boom".into()));
        let s = s
            .reduce(GameAction::Loaded(PlayerState::default()))
            .reduce(GameAction::Tap)
            .reduce(GameAction::Fail("other".into()));
        assert_eq!(s.phase, Phase::Error("Failed to initialize game: boom".into()));
        assert_eq!(s.player.taps, 0.0);
    }

    #[test]
    fn input_before_ready_is_ignored() {
        let s = Rc::new(GameState::default())
            .reduce(GameAction::BeginLoading)
            .reduce(GameAction::Tap)
            .reduce(GameAction::Tick)
            .reduce(GameAction::Navigate(Section::Shop));
        assert_eq!(s.player.taps, 0.0);
        assert_eq!(s.revision, 0);
        assert_eq!(s.section, Section::Game);
    }

    #[test]
    fn tap_and_tick_mutate_and_bump_revision() {
        let s = ready_with(0.0, &[("upgrade1", 2), ("upgrade3", 1)]);
        let s = s.reduce(GameAction::Tap);
        assert_eq!(s.player.taps, 1.0);
        assert_eq!(s.revision, 1);
        let s = s.reduce(GameAction::Tick);
        assert!((s.player.taps - 6.2).abs() < 1e-9);
        assert_eq!(s.revision, 2);
    }

    #[test]
    fn buy_applies_or_leaves_state_untouched() {
        let poor = ready_with(450.0, &[]);
        let after = poor.clone().reduce(GameAction::Buy(UpgradeId::DoubleTap));
        assert_eq!(after.player, poor.player);
        assert_eq!(after.revision, 0);
        assert_eq!(after.purchase_refusals, 1);

        let rich = ready_with(600.0, &[]).reduce(GameAction::Buy(UpgradeId::DoubleTap));
        assert_eq!(rich.player.taps, 100.0);
        assert_eq!(rich.player.owned(UpgradeId::DoubleTap), 1);
        assert_eq!(rich.player.taps_per_second(), 1.0);
        assert_eq!(rich.revision, 1);
        assert_eq!(rich.purchase_refusals, 0);
    }

    #[test]
    fn purchase_that_became_unaffordable_raises_notice() {
        // both buys were allowed against the same rendered state
        let s = ready_with(600.0, &[])
            .reduce(GameAction::Buy(UpgradeId::DoubleTap))
            .reduce(GameAction::Buy(UpgradeId::DoubleTap));
        assert_eq!(s.player.taps, 100.0);
        assert_eq!(s.player.owned(UpgradeId::DoubleTap), 1);
        assert_eq!(s.revision, 1);
        assert_eq!(s.purchase_refusals, 1);
    }

    #[test]
    fn reward_is_a_pushed_mutation_but_task_refresh_is_not() {
        let s = ready_with(10.0, &[]).reduce(GameAction::CreditReward(25.0));
        assert_eq!(s.player.taps, 35.0);
        assert_eq!(s.revision, 1);
        let s = s.reduce(GameAction::SetTasks(vec![Task {
            id: TaskId::Number(1),
            description: "Tap".into(),
            progress: 1.0,
            target: 1.0,
            completed: true,
        }]));
        assert_eq!(s.player.daily_tasks.len(), 1);
        assert_eq!(s.revision, 1);
    }

    #[test]
    fn navigation_shows_exactly_one_section() {
        let mut s = ready_with(0.0, &[]);
        for target in Section::ALL {
            s = s.reduce(GameAction::Navigate(target));
            let visible: Vec<Section> = Section::ALL.into_iter().filter(|x| s.is_visible(*x)).collect();
            assert_eq!(visible, vec![target]);
        }
    }

    #[test]
    fn leaderboard_is_replaced_wholesale() {
        let entry = |name: &str, taps: f64| LeaderboardEntry {
            name: name.into(),
            taps,
        };
        let s = ready_with(0.0, &[])
            .reduce(GameAction::SetLeaderboard(vec![entry("a", 3.0), entry("b", 1.0)]))
            .reduce(GameAction::SetLeaderboard(vec![entry("c", 9.0)]));
        assert_eq!(s.leaderboard, vec![entry("c", 9.0)]);
    }
}
