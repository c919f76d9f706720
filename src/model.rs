//! Core data models for the Arbuz tapper client.
//! The player document mirrors what the server stores; the upgrade catalog is
//! compiled in and never read from server data.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UpgradeId {
    FasterTapping,
    DoubleTap,
    AutoTapper,
}

impl UpgradeId {
    pub const ALL: [UpgradeId; 3] = [
        UpgradeId::FasterTapping,
        UpgradeId::DoubleTap,
        UpgradeId::AutoTapper,
    ];

    /// Key used for this upgrade in the server's `upgrades` map.
    pub fn key(self) -> &'static str {
        match self {
            UpgradeId::FasterTapping => "upgrade1",
            UpgradeId::DoubleTap => "upgrade2",
            UpgradeId::AutoTapper => "upgrade3",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    pub fn def(self) -> &'static UpgradeDef {
        &UPGRADE_DEFS[self as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpgradeDef {
    pub id: UpgradeId,
    pub name: &'static str,
    /// Taps added per second for each owned copy.
    pub effect: f64,
    pub cost: f64,
}

// Indexed by `UpgradeId as usize`.
pub const UPGRADE_DEFS: [UpgradeDef; 3] = [
    UpgradeDef {
        id: UpgradeId::FasterTapping,
        name: "Faster Tapping",
        effect: 0.1,
        cost: 100.0,
    },
    UpgradeDef {
        id: UpgradeId::DoubleTap,
        name: "Double Tap",
        effect: 1.0,
        cost: 500.0,
    },
    UpgradeDef {
        id: UpgradeId::AutoTapper,
        name: "Auto Tapper",
        effect: 5.0,
        cost: 1000.0,
    },
];

/// Server-assigned task identifier, echoed back verbatim on completion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub progress: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

impl Task {
    /// Completion is only offered once the target is met and the reward unclaimed.
    pub fn can_complete(&self) -> bool {
        !self.completed && self.progress >= self.target
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub taps: f64,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum PurchaseError {
    #[error("not enough taps: {name} costs {cost}, have {available}")]
    InsufficientTaps {
        name: &'static str,
        cost: f64,
        available: f64,
    },
}

/// In-memory mirror of the player's server document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    #[serde(default, deserialize_with = "null_as_default")]
    pub taps: f64,
    /// Keyed by server upgrade key; ids outside the catalog are kept so they survive a push.
    #[serde(default, deserialize_with = "null_as_default")]
    pub upgrades: BTreeMap<String, u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub daily_tasks: Vec<Task>,
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

impl PlayerState {
    pub fn owned(&self, id: UpgradeId) -> u32 {
        self.upgrades.get(id.key()).copied().unwrap_or(0)
    }

    /// Passive income derived from owned upgrades. Unknown keys contribute nothing.
    pub fn taps_per_second(&self) -> f64 {
        self.upgrades
            .iter()
            .filter_map(|(key, count)| UpgradeId::from_key(key).map(|id| id.def().effect * *count as f64))
            .sum()
    }

    pub fn unknown_upgrades(&self) -> Vec<&str> {
        self.upgrades
            .keys()
            .filter(|key| UpgradeId::from_key(key).is_none())
            .map(String::as_str)
            .collect()
    }

    pub fn tap(&mut self) {
        self.taps += 1.0;
    }

    pub fn tick(&mut self) {
        self.taps += self.taps_per_second();
    }

    pub fn credit(&mut self, reward: f64) {
        self.taps += reward;
    }

    pub fn can_afford(&self, id: UpgradeId) -> bool {
        self.taps >= id.def().cost
    }

    pub fn buy(&mut self, id: UpgradeId) -> Result<(), PurchaseError> {
        let def = id.def();
        if !self.can_afford(id) {
            return Err(PurchaseError::InsufficientTaps {
                name: def.name,
                cost: def.cost,
                available: self.taps,
            });
        }
        self.taps -= def.cost;
        *self.upgrades.entry(id.key().to_string()).or_insert(0) += 1;
        Ok(())
    }
}
