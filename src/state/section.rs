// Navigable page sections
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Game,
    Shop,
    DailyTasks,
    Leaderboard,
}

/// What has to be (re)loaded when a section is entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionLoad {
    /// Rebuilt from the compiled-in catalog, no request.
    Catalog,
    Tasks,
    Leaderboard,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Game,
        Section::Shop,
        Section::DailyTasks,
        Section::Leaderboard,
    ];

    /// DOM id of the section container; also the `data-section` value of its nav button.
    pub fn element_id(self) -> &'static str {
        match self {
            Section::Game => "gameArea",
            Section::Shop => "shop",
            Section::DailyTasks => "dailyTasks",
            Section::Leaderboard => "leaderboard",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.element_id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Game => "Game",
            Section::Shop => "Shop",
            Section::DailyTasks => "Daily Tasks",
            Section::Leaderboard => "Leaderboard",
        }
    }

    pub fn on_enter(self) -> Option<SectionLoad> {
        match self {
            Section::Game => None,
            Section::Shop => Some(SectionLoad::Catalog),
            Section::DailyTasks => Some(SectionLoad::Tasks),
            Section::Leaderboard => Some(SectionLoad::Leaderboard),
        }
    }
}
