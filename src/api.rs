//! HTTP client for the game server.
//! Every call is a single request with no retry; callers decide whether a
//! failure is fatal (startup) or only logged (in-game sync).

use crate::config::ClientConfig;
use crate::model::{LeaderboardEntry, PlayerState, Task, TaskId};
use crate::state::SessionId;
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub const GET_USER_DATA: &str = "/get_user_data";
pub const UPDATE_USER_DATA: &str = "/update_user_data";
pub const GET_DAILY_TASKS: &str = "/get_daily_tasks";
pub const COMPLETE_DAILY_TASK: &str = "/complete_daily_task";
pub const LEADERBOARD: &str = "/leaderboard";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] gloo_net::Error),
    #[error("HTTP error! status: {status}, message: {message}")]
    Status { status: u16, message: String },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateUserData<'a> {
    user_id: &'a str,
    taps: f64,
    upgrades: &'a BTreeMap<String, u32>,
    daily_tasks: &'a [Task],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompleteTaskRequest<'a> {
    user_id: &'a str,
    task_id: &'a TaskId,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CompleteTaskResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub reward: f64,
}

#[derive(Deserialize)]
struct TasksResponse {
    #[serde(default)]
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
struct LeaderboardResponse {
    #[serde(default)]
    leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base: String,
    user_id: SessionId,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, user_id: SessionId) -> Self {
        Self {
            base: config.api_base.trim_end_matches('/').to_string(),
            user_id,
        }
    }

    pub fn user_id(&self) -> &SessionId {
        &self.user_id
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn user_url(&self, path: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("userId", self.user_id.as_str())
            .finish();
        format!("{}{}?{}", self.base, path, query)
    }

    pub async fn fetch_user_data(&self) -> Result<PlayerState, ApiError> {
        let resp = Request::get(&self.user_url(GET_USER_DATA)).send().await?;
        Ok(ensure_ok(resp).await?.json().await?)
    }

    /// Pushes the whole mirror; the server keeps whichever push lands last.
    pub async fn push_user_data(&self, player: &PlayerState) -> Result<(), ApiError> {
        let body = UpdateUserData {
            user_id: self.user_id.as_str(),
            taps: player.taps,
            upgrades: &player.upgrades,
            daily_tasks: &player.daily_tasks,
        };
        let resp = Request::post(&self.url(UPDATE_USER_DATA))
            .json(&body)?
            .send()
            .await?;
        ensure_ok(resp).await?;
        Ok(())
    }

    pub async fn fetch_daily_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let resp = Request::get(&self.user_url(GET_DAILY_TASKS)).send().await?;
        let body: TasksResponse = ensure_ok(resp).await?.json().await?;
        Ok(body.tasks)
    }

    pub async fn complete_daily_task(&self, task_id: &TaskId) -> Result<CompleteTaskResponse, ApiError> {
        let body = CompleteTaskRequest {
            user_id: self.user_id.as_str(),
            task_id,
        };
        let resp = Request::post(&self.url(COMPLETE_DAILY_TASK))
            .json(&body)?
            .send()
            .await?;
        Ok(ensure_ok(resp).await?.json().await?)
    }

    pub async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let resp = Request::get(&self.url(LEADERBOARD)).send().await?;
        let body: LeaderboardResponse = ensure_ok(resp).await?.json().await?;
        Ok(body.leaderboard)
    }
}

async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str, user: &str) -> ApiClient {
        let config = ClientConfig {
            api_base: base.to_string(),
            ..ClientConfig::default()
        };
        ApiClient::new(&config, SessionId::from_query(&format!("?userId={}", user)).unwrap())
    }

    #[test]
    fn same_origin_urls() {
        let c = client("", "42");
        assert_eq!(c.user_url(GET_USER_DATA), "/get_user_data?userId=42");
        assert_eq!(c.user_url(GET_DAILY_TASKS), "/get_daily_tasks?userId=42");
        assert_eq!(c.url(LEADERBOARD), "/leaderboard");
    }

    #[test]
    fn base_is_prefixed_without_double_slash() {
        let c = client("https://game.example/", "7");
        assert_eq!(c.url(UPDATE_USER_DATA), "https://game.example/update_user_data");
    }

    #[test]
    fn user_id_is_query_encoded() {
        let c = client("", "a%20b%26c");
        assert_eq!(c.user_url(GET_USER_DATA), "/get_user_data?userId=a+b%26c");
    }

    #[test]
    fn update_body_carries_full_mirror() {
        let mut player = PlayerState {
            taps: 12.5,
            ..Default::default()
        };
        player.upgrades.insert("upgrade1".into(), 2);
        player.daily_tasks.push(Task {
            id: TaskId::Number(3),
            description: "Tap".into(),
            progress: 1.0,
            target: 5.0,
            completed: false,
        });
        let body = UpdateUserData {
            user_id: "42",
            taps: player.taps,
            upgrades: &player.upgrades,
            daily_tasks: &player.daily_tasks,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userId": "42",
                "taps": 12.5,
                "upgrades": { "upgrade1": 2 },
                "dailyTasks": [
                    { "id": 3, "description": "Tap", "progress": 1.0, "target": 5.0, "completed": false }
                ]
            })
        );
    }

    #[test]
    fn complete_request_shape() {
        let id = TaskId::Text("daily-1".into());
        let json = serde_json::to_value(CompleteTaskRequest {
            user_id: "42",
            task_id: &id,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "userId": "42", "taskId": "daily-1" }));
    }

    #[test]
    fn responses_decode_with_defaults() {
        let r: CompleteTaskResponse = serde_json::from_str(r#"{"success":true,"reward":50}"#).unwrap();
        assert_eq!(r, CompleteTaskResponse { success: true, reward: 50.0 });
        let r: CompleteTaskResponse = serde_json::from_str("{}").unwrap();
        assert!(!r.success);

        let t: TasksResponse = serde_json::from_str(
            r#"{"tasks":[{"id":1,"description":"Tap 10","progress":10,"target":10,"completed":false}]}"#,
        )
        .unwrap();
        assert!(t.tasks[0].can_complete());

        let l: LeaderboardResponse =
            serde_json::from_str(r#"{"leaderboard":[{"name":"bob","taps":99.7}]}"#).unwrap();
        assert_eq!(l.leaderboard[0].name, "bob");
    }

    #[test]
    fn status_error_message() {
        let err = ApiError::Status {
            status: 404,
            message: "User not found".into(),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 404, message: User not found");
    }
}
