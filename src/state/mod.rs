pub mod flow;
pub mod game;
pub mod section;
pub mod session;

pub use flow::Fetch;
pub use game::{GameAction, GameState, Phase};
pub use section::{Section, SectionLoad};
pub use session::SessionId;
