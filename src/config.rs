/// Client settings fixed at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every endpoint; empty means same origin as the page.
    pub api_base: String,
    pub tick_interval_ms: i32,
}

pub const DEFAULT_TICK_INTERVAL_MS: i32 = 1000;

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("ARBUZ_API_BASE").unwrap_or("").to_string(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}
