//! Run configuration

use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const BASE_URL: &str = "https://www.flashscorekz.com/";
pub const MENU_SELECTOR: &str = ".menuTop__item";
pub const SCHEDULED_MATCH_SELECTOR: &str = ".event__match.event__match--withRowLink.event__match--scheduled.event__match--last.event__match--twoLine";
pub const STATS_ROW_SELECTOR: &str = "._row_ciop9_8";
pub const STATS_ANCHOR: &str = "/match-summary/match-statistics/0";
pub const MATCH_ID_PREFIX_LEN: usize = 4;
pub const DEFAULT_SPORT: &str = "ТЕННИС";
pub const OUTPUT_PATH: &str = "output_data.xlsx";

/// Statistic labels kept from a match page by default.
pub const DEFAULT_STAT_LABELS: [&str; 4] = [
    "Эйсы",
    "Двойные ошибки",
    "Выиграно на подаче",
    "Выиграно очков у сетки",
];

/// Which statistic rows end up in a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "labels", rename_all = "snake_case")]
pub enum StatFilter {
    /// Every row on the page, in page order.
    All,
    /// Only these labels, in this order; absent ones get the placeholder pair.
    AllowList(Vec<String>),
}

impl Default for StatFilter {
    fn default() -> Self {
        StatFilter::AllowList(DEFAULT_STAT_LABELS.iter().map(|s| s.to_string()).collect())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub sport: String,
    pub menu_selector: String,
    pub match_selector: String,
    pub match_id_prefix_len: usize,
    pub stats_anchor: String,
    pub stats_row_selector: String,
    pub stat_filter: StatFilter,
    pub output: PathBuf,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.into(),
            sport: DEFAULT_SPORT.into(),
            menu_selector: MENU_SELECTOR.into(),
            match_selector: SCHEDULED_MATCH_SELECTOR.into(),
            match_id_prefix_len: MATCH_ID_PREFIX_LEN,
            stats_anchor: STATS_ANCHOR.into(),
            stats_row_selector: STATS_ROW_SELECTOR.into(),
            stat_filter: StatFilter::default(),
            output: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl ScrapeConfig {
    /// Read a JSON override file; fields it leaves out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|e| {
            ScrapeError::Config(format!("cannot open {}: {e}", path.display()))
        })?;
        let cfg: ScrapeConfig = serde_json::from_reader(file)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)
            .map_err(|_| ScrapeError::InvalidUrl(self.base_url.clone()))?;
        Sport::from_display_name(&self.sport)?;
        for (name, sel) in [
            ("menu_selector", &self.menu_selector),
            ("match_selector", &self.match_selector),
            ("stats_row_selector", &self.stats_row_selector),
        ] {
            if sel.trim().is_empty() {
                return Err(ScrapeError::Config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = ScrapeConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.output, PathBuf::from("output_data.xlsx"));
        assert_eq!(cfg.match_id_prefix_len, 4);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: ScrapeConfig =
            serde_json::from_str(r#"{"sport": "ХОККЕЙ", "stat_filter": {"mode": "all"}}"#)
                .unwrap();
        assert_eq!(cfg.sport, "ХОККЕЙ");
        assert_eq!(cfg.stat_filter, StatFilter::All);
        assert_eq!(cfg.base_url, BASE_URL);
    }

    #[test]
    fn allow_list_round_trips_through_json() {
        let cfg: ScrapeConfig = serde_json::from_str(
            r#"{"stat_filter": {"mode": "allow_list", "labels": ["Эйсы"]}}"#,
        )
        .unwrap();
        assert_eq!(cfg.stat_filter, StatFilter::AllowList(vec!["Эйсы".into()]));
    }

    #[test]
    fn unknown_sport_is_rejected() {
        let cfg = ScrapeConfig {
            sport: "КРИКЕТ".into(),
            ..ScrapeConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ScrapeError::UnknownSport(_))));
    }
}
