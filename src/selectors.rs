//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// League / tournament header on a match page.
pub const LEAGUE: &str = ".tournamentHeader__country";
pub const HOME_TEAM: &str = ".duelParticipant__home";
pub const AWAY_TEAM: &str = ".duelParticipant__away";
pub const START_TIME: &str = ".duelParticipant__startTime";
pub const STATUS: &str = ".detailScore__status";
/// Multi-line score block, e.g. `2\n-\n1`.
pub const SCORE: &str = ".detailScore__wrapper";

/// Attribute holding the prefixed match id on listing entries.
pub const MATCH_ID_ATTR: &str = "id";

/// Selector for anchor elements with hrefs.
pub static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid link selector"));
