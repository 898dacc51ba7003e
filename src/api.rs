use crate::browsers::{ChromeBrowser, SnapshotBrowser};
use crate::config::ScrapeConfig;
use crate::engine::{Browser, Engine};
use crate::services::ActivityLogger;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/* ------------ public facade ------------ */

/// Where pages come from for a run.
#[derive(Debug, Clone)]
pub enum BrowserKind {
    Chrome { headless: bool },
    Snapshot { dir: PathBuf },
}

impl Default for BrowserKind {
    fn default() -> Self {
        BrowserKind::Chrome { headless: false }
    }
}

/// Run the whole pipeline with any browser.
///
/// The activity log is best effort: a logger that cannot be opened is skipped.
pub fn scrape_with<B: Browser>(browser: &mut B, config: ScrapeConfig) -> Result<RunSummary> {
    config.validate()?;
    let mut engine = Engine::new(browser, config);
    if let Ok(logger) = ActivityLogger::new() {
        engine = engine.with_logger(logger);
    }
    engine.run()
}

pub fn scrape(kind: &BrowserKind, config: ScrapeConfig) -> Result<RunSummary> {
    match kind {
        BrowserKind::Snapshot { dir } => {
            let mut browser = SnapshotBrowser::from_dir(dir)?;
            scrape_with(&mut browser, config)
        }
        BrowserKind::Chrome { headless } => {
            let mut browser = ChromeBrowser::launch(*headless)?;
            let result = scrape_with(&mut browser, config);
            // The run's own error wins over a failed shutdown.
            let closed = browser.close();
            let summary = result?;
            closed?;
            Ok(summary)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportInfo {
    pub name: String,
    pub menu_index: usize,
}

pub fn sports() -> Vec<SportInfo> {
    Sport::ALL
        .iter()
        .map(|s| SportInfo {
            name: s.display_name().to_string(),
            menu_index: s.menu_index(),
        })
        .collect()
}

pub fn read_logs(subject: Option<&str>, errors_only: bool) -> Result<Vec<String>> {
    ActivityLogger::new()?.read_logs(subject, errors_only)
}
