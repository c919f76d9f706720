//! What to dispatch around each server call. The root component performs the
//! requests; these functions decide which request a navigation needs and which
//! actions each reply turns into.

use super::{GameAction, Section, SectionLoad};
use crate::api::{ApiError, CompleteTaskResponse};
use crate::model::{LeaderboardEntry, PlayerState, Task, TaskId};
use crate::util::{cerr, clog};

pub const INIT_FAILED_PREFIX: &str = "Failed to initialize game: ";

/// A section request; at most one per navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fetch {
    Tasks,
    Leaderboard,
}

pub fn navigate(section: Section) -> (GameAction, Option<Fetch>) {
    let fetch = match section.on_enter() {
        Some(SectionLoad::Tasks) => Some(Fetch::Tasks),
        Some(SectionLoad::Leaderboard) => Some(Fetch::Leaderboard),
        // shop rows are a projection of the catalog and the mirror
        Some(SectionLoad::Catalog) | None => None,
    };
    (GameAction::Navigate(section), fetch)
}

pub fn user_data_loaded(result: Result<PlayerState, ApiError>) -> GameAction {
    match result {
        Ok(player) => {
            for key in player.unknown_upgrades() {
                cerr(&format!("unknown upgrade id from server: {}", key));
            }
            clog(&format!(
                "loaded user data: {} taps, {} upgrades, {} tasks",
                player.taps,
                player.upgrades.len(),
                player.daily_tasks.len()
            ));
            GameAction::Loaded(player)
        }
        Err(err) => {
            cerr(&format!("Error loading user data: {}", err));
            GameAction::Fail(format!("{}{}", INIT_FAILED_PREFIX, err))
        }
    }
}

pub fn tasks_loaded(result: Result<Vec<Task>, ApiError>) -> Option<GameAction> {
    match result {
        Ok(tasks) => Some(GameAction::SetTasks(tasks)),
        Err(err) => {
            cerr(&format!("Failed to load daily tasks: {}", err));
            None
        }
    }
}

pub fn leaderboard_loaded(result: Result<Vec<LeaderboardEntry>, ApiError>) -> Option<GameAction> {
    match result {
        Ok(entries) => Some(GameAction::SetLeaderboard(entries)),
        Err(err) => {
            cerr(&format!("Failed to load leaderboard: {}", err));
            None
        }
    }
}

/// `Some` credits the reward, after which the caller refetches the task list.
/// `None` abandons the completion with no retry.
pub fn task_completed(task_id: &TaskId, result: Result<CompleteTaskResponse, ApiError>) -> Option<GameAction> {
    match result {
        Ok(outcome) if outcome.success => Some(GameAction::CreditReward(outcome.reward)),
        Ok(_) => {
            clog(&format!("task {} not completed by server", task_id));
            None
        }
        Err(err) => {
            cerr(&format!("Failed to complete task {}: {}", task_id, err));
            None
        }
    }
}

/// Revision 0 is the freshly loaded document, which is never pushed back.
pub fn push_due(revision: u64) -> bool {
    revision > 0
}
